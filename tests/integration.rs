// Engine-level properties exercised through the binary, since the crate
// ships as a binary only. JSON output is the engine's wire contract.

use assert_cmd::Command;
use serde_json::Value;

fn scamlens() -> Command {
    Command::cargo_bin("scamlens").expect("binary should exist")
}

fn analyze_json(text: &str) -> Value {
    let output = scamlens()
        .args(["analyze", "--text", text, "--format", "json"])
        .output()
        .expect("command should run");
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

fn assert_contract(result: &Value) {
    let score = result["risk_score"].as_u64().expect("score should be an integer");
    assert!(score <= 100);
    let level = result["risk_level"].as_str().expect("level should be a string");
    assert!(matches!(level, "low" | "medium" | "high"));
    assert!(result["reasons"].is_array(), "reasons must be an array, never null");
}

#[test]
fn every_result_respects_score_and_level_bounds() {
    for text in [
        "short",
        "An ordinary engineering role with a normal process.",
        "wire transfer",
        "Guaranteed income, wire transfer upfront, no interview, earn $9000.",
        "Contact us on WhatsApp or call or telegram for this sms-based role",
        "Work from home!\nCompany: not disclosed",
    ] {
        let result = analyze_json(text);
        assert_contract(&result);
    }
}

#[test]
fn legitimate_posting_reports_no_reasons() {
    let result = analyze_json(
        "This is a legitimate software engineering position requiring 5 years of React experience.",
    );
    assert_eq!(result["risk_level"], "low");
    assert_eq!(result["risk_score"], 0);
    assert!(result["reasons"].as_array().expect("reasons array").is_empty());
}

#[test]
fn heavy_scam_posting_is_high_by_reason_count() {
    let result = analyze_json(
        "Earn $5000/week! No interview, guaranteed position, wire transfer upfront required.",
    );
    assert_eq!(result["risk_level"], "high");

    let reasons: Vec<&str> = result["reasons"]
        .as_array()
        .expect("reasons array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(reasons.len() >= 4);
    for expected in [
        "Offers unrealistic earnings",
        "No interview or immediate hire",
        "Promises guaranteed money or position",
        "Requests payment or wire transfer",
        "Mentions upfront payment",
    ] {
        assert!(reasons.contains(&expected), "missing reason: {expected}");
    }
}

#[test]
fn single_first_rule_hit_scores_eight_and_stays_low() {
    let result = analyze_json("wire transfer");
    assert_eq!(result["risk_score"], 8);
    assert_eq!(result["risk_level"], "low");
    assert_eq!(result["reasons"].as_array().expect("reasons array").len(), 1);
}

#[test]
fn contact_word_contribution_caps_at_ten() {
    let result = analyze_json("Contact us on WhatsApp or call or telegram for this sms-based role");
    assert_eq!(result["risk_score"], 10);
    let reasons = result["reasons"].as_array().expect("reasons array");
    assert!(reasons
        .iter()
        .filter_map(Value::as_str)
        .any(|reason| reason.starts_with("Direct contact instructions provided")));
}

#[test]
fn duplicate_reason_sources_collapse_to_one_entry() {
    let result = analyze_json("send via western union or western-union today");
    let reasons: Vec<&str> = result["reasons"]
        .as_array()
        .expect("reasons array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    let mut deduped = reasons.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), reasons.len());
    assert_eq!(
        reasons
            .iter()
            .filter(|reason| **reason == "Mentions Western Union")
            .count(),
        1
    );
}

#[test]
fn analysis_is_idempotent() {
    let text = "Guaranteed income, wire transfer upfront, no interview.";
    let first = scamlens()
        .args(["analyze", "--text", text, "--format", "json"])
        .output()
        .expect("command should run");
    let second = scamlens()
        .args(["analyze", "--text", text, "--format", "json"])
        .output()
        .expect("command should run");
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
