use crate::analyze;
use crate::error::Result;
use crate::types::analysis::AnalysisResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One analyzed posting in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Lists `*.txt` files under `root`, sorted for stable output.
pub fn list_postings(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("txt"))
        .collect();
    files.sort();
    files
}

pub fn analyze_postings(root: &Path) -> Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();
    for path in list_postings(root) {
        let text = std::fs::read_to_string(&path)?;
        entries.push(BatchEntry {
            result: analyze::analyze(&text),
            path,
        });
    }
    Ok(entries)
}
