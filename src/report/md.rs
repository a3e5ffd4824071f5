use super::NO_INDICATORS_NOTE;
use crate::scan::BatchEntry;
use crate::types::analysis::AnalysisResult;

pub fn to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("# Job Posting Risk Report\n\n");
    output.push_str(&format!("Risk score: {}/100\n", result.risk_score));
    output.push_str(&format!("Risk level: {}\n\n", result.risk_level));

    output.push_str("## Reasons\n\n");
    if result.reasons.is_empty() {
        output.push_str(&format!("- {NO_INDICATORS_NOTE}\n"));
    } else {
        for reason in &result.reasons {
            output.push_str(&format!("- {reason}\n"));
        }
    }

    output
}

pub fn batch_to_markdown(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Batch Risk Report\n\n");
    for entry in entries {
        output.push_str(&format!(
            "## {}\n\nRisk score: {}/100\nRisk level: {}\n\n",
            entry.path.display(),
            entry.result.risk_score,
            entry.result.risk_level
        ));
        if entry.result.reasons.is_empty() {
            output.push_str(&format!("- {NO_INDICATORS_NOTE}\n\n"));
        } else {
            for reason in &entry.result.reasons {
                output.push_str(&format!("- {reason}\n"));
            }
            output.push('\n');
        }
    }
    output
}
