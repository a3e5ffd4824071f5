use crate::scan::BatchEntry;
use crate::types::analysis::AnalysisResult;

pub fn to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn batch_to_json(entries: &[BatchEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::RiskLevel;

    #[test]
    fn json_result_carries_wire_contract_fields() {
        let result = AnalysisResult {
            risk_score: 42,
            risk_level: RiskLevel::Medium,
            reasons: vec!["Mentions upfront payment".to_string()],
        };

        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"risk_score\": 42"));
        assert!(rendered.contains("\"risk_level\": \"medium\""));
        assert!(rendered.contains("Mentions upfront payment"));
    }

    #[test]
    fn batch_json_flattens_result_beside_path() {
        let entries = vec![BatchEntry {
            path: std::path::PathBuf::from("postings/a.txt"),
            result: AnalysisResult {
                risk_score: 0,
                risk_level: RiskLevel::Low,
                reasons: Vec::new(),
            },
        }];

        let rendered = batch_to_json(&entries).expect("json should serialize");
        assert!(rendered.contains("postings/a.txt"));
        assert!(rendered.contains("\"risk_level\": \"low\""));
    }
}
