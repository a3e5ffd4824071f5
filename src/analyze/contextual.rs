use super::reasons::ReasonSet;
use crate::types::analysis::Score;
use once_cell::sync::Lazy;
use regex::Regex;

pub const CONTACT_REASON: &str =
    "Direct contact instructions provided (call/WhatsApp/Telegram)";
pub const INSTANT_HIRE_REASON: &str = "Promises instant hire or no-experience requirement";
pub const VAGUE_COMPANY_REASON: &str = "Vague or undisclosed company information";

static CONTACT_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(contact|call|whatsapp|telegram|sms)\b").unwrap());

static INSTANT_HIRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)no experience required|start immediately|instant hire").unwrap());

// Lazy co-occurrence across any characters, newlines included. The match can
// span unrelated clauses; that looseness is part of the classification
// contract and must not be tightened.
static VAGUE_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)work from home.*?(no company|not disclosed|undisclosed|confidential)")
        .unwrap()
});

/// Runs the three contextual heuristics. `original` keeps the caller's case
/// for the case-insensitive instant-hire pattern; `lowered` feeds the other
/// two, matching the keyword pass.
pub fn contextual_pass(original: &str, lowered: &str, reasons: &mut ReasonSet) -> Score {
    let mut score = 0;

    let contact_count = CONTACT_WORDS.find_iter(lowered).count() as Score;
    if contact_count > 0 {
        reasons.insert(CONTACT_REASON);
        score += (contact_count * 3).min(10);
    }

    if INSTANT_HIRE.is_match(original) {
        reasons.insert(INSTANT_HIRE_REASON);
        score += 10;
    }

    if VAGUE_COMPANY.is_match(lowered) {
        reasons.insert(VAGUE_COMPANY_REASON);
        score += 8;
    }

    score
}
