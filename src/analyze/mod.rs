pub mod contextual;
pub mod indicators;
pub mod reasons;

use crate::types::analysis::{AnalysisResult, RiskLevel, Score};
use indicators::INDICATORS;
use reasons::ReasonSet;

pub const MAX_SCORE: Score = 100;

const HIGH_SCORE: Score = 65;
const HIGH_REASONS: usize = 4;
const MEDIUM_SCORE: Score = 30;
const MEDIUM_REASONS: usize = 2;

/// Analyzes one posting against the fixed rule tables. Pure and total over
/// any string: the empty string yields the zero-indicator baseline. Input
/// validation (emptiness, minimum length) belongs to the callers.
pub fn analyze(text: &str) -> AnalysisResult {
    let lowered = text.to_lowercase();
    let mut reasons = ReasonSet::new();

    let mut score = indicators::keyword_pass(&lowered, &INDICATORS, &mut reasons);
    score += contextual::contextual_pass(text, &lowered, &mut reasons);

    let score = score.min(MAX_SCORE);
    let risk_level = risk_level(score, reasons.len());

    AnalysisResult {
        risk_score: score,
        risk_level,
        reasons: reasons.into_vec(),
    }
}

fn risk_level(score: Score, distinct_reasons: usize) -> RiskLevel {
    if score >= HIGH_SCORE || distinct_reasons >= HIGH_REASONS {
        RiskLevel::High
    } else if score >= MEDIUM_SCORE || distinct_reasons >= MEDIUM_REASONS {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
