use serde::Serialize;

pub type Score = u32;

/// Discrete risk bucket derived from the final score and reason count.
/// Ordering matters: batch runs report the highest level seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analyzing a single posting. Serializes to the wire contract
/// consumed by the HTTP and report layers: `risk_score`, `risk_level`,
/// `reasons` (an empty array, never null, when nothing fired).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub risk_score: Score,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
}
