use super::NO_INDICATORS_NOTE;
use crate::scan::BatchEntry;
use crate::types::analysis::AnalysisResult;

pub fn to_text(result: &AnalysisResult) -> String {
    let mut output = format!(
        "risk level: {} (score {}/100)\n",
        result.risk_level, result.risk_score
    );
    if result.reasons.is_empty() {
        output.push_str(NO_INDICATORS_NOTE);
        output.push('\n');
    } else {
        output.push_str("reasons:\n");
        for reason in &result.reasons {
            output.push_str(&format!("  - {reason}\n"));
        }
    }
    output
}

pub fn batch_to_text(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}: {} (score {}/100)\n",
            entry.path.display(),
            entry.result.risk_level,
            entry.result.risk_score
        ));
        for reason in &entry.result.reasons {
            output.push_str(&format!("  - {reason}\n"));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::RiskLevel;

    #[test]
    fn text_report_lists_reasons() {
        let result = AnalysisResult {
            risk_score: 10,
            risk_level: RiskLevel::Low,
            reasons: vec!["Direct contact instructions provided (call/WhatsApp/Telegram)"
                .to_string()],
        };

        let rendered = to_text(&result);
        assert!(rendered.starts_with("risk level: low (score 10/100)"));
        assert!(rendered.contains("  - Direct contact instructions"));
    }

    #[test]
    fn text_report_notes_clean_postings() {
        let result = AnalysisResult {
            risk_score: 0,
            risk_level: RiskLevel::Low,
            reasons: Vec::new(),
        };

        assert!(to_text(&result).contains(NO_INDICATORS_NOTE));
    }
}
