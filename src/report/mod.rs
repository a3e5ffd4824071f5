pub mod json;
pub mod md;
pub mod text;

use crate::error::ScamlensError;
use crate::scan::BatchEntry;
use crate::types::analysis::AnalysisResult;

pub const NO_INDICATORS_NOTE: &str = "no scam indicators detected; appears legitimate";

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String, ScamlensError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(ScamlensError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
        OutputFormat::Text => Ok(text::to_text(result)),
    }
}

pub fn render_batch(
    entries: &[BatchEntry],
    format: OutputFormat,
) -> Result<String, ScamlensError> {
    match format {
        OutputFormat::Json => json::batch_to_json(entries).map_err(ScamlensError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(entries)),
        OutputFormat::Text => Ok(text::batch_to_text(entries)),
    }
}
