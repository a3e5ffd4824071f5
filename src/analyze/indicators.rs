use super::reasons::ReasonSet;
use crate::types::analysis::Score;

/// One keyword indicator: a flat substring matched against the lowercased
/// posting, and the reason recorded when it occurs.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorRule {
    pub keyword: &'static str,
    pub reason: &'static str,
}

const fn rule(keyword: &'static str, reason: &'static str) -> IndicatorRule {
    IndicatorRule { keyword, reason }
}

/// The fixed indicator table. Order is part of the contract: the weight of
/// each rule is derived from its position (see `keyword_pass`), so entries
/// must not be reordered without accepting a small score shift.
pub const INDICATORS: [IndicatorRule; 16] = [
    rule("wire transfer", "Requests payment or wire transfer"),
    rule("transfer money", "Requests payment or money transfer"),
    rule("pay to", "Mentions paying to start work"),
    rule("upfront", "Mentions upfront payment"),
    rule("western union", "Mentions Western Union"),
    rule("western-union", "Mentions Western Union"),
    rule("bank account", "Asks for bank account details"),
    rule("personal information", "Requests excessive personal information"),
    rule("no interview", "No interview or immediate hire"),
    rule("guaranteed", "Promises guaranteed money or position"),
    rule("work from home and pay", "Work from home with payment requirement"),
    rule("pay to apply", "Charges a fee to apply or be considered"),
    rule("job placement fee", "Charges for placement or training"),
    rule("earn $", "Offers unrealistic earnings"),
    rule("earn upto", "Offers unrealistic earnings"),
    rule("confidential", "Requests confidential details before interview"),
];

/// Runs the table-driven substring pass over an already-lowercased posting.
/// Each hit records its reason and contributes `8 + (index % 4)` points.
/// The index term varies the weight slightly by table position; it is a
/// cosmetic artifact kept for output stability, not a severity ranking.
pub fn keyword_pass(lowered: &str, table: &[IndicatorRule], reasons: &mut ReasonSet) -> Score {
    let mut score = 0;
    for (idx, rule) in table.iter().enumerate() {
        if lowered.contains(rule.keyword) {
            reasons.insert(rule.reason);
            score += 8 + (idx as Score % 4);
        }
    }
    score
}
