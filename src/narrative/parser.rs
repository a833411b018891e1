//! Parsing of structured service responses.
//!
//! Generation services frequently wrap the requested JSON in a markdown
//! code fence despite being told not to. The grammar accepted here: an
//! optional fence labeled `json`, or a generic fence, or no fence at all,
//! with prose tolerated around the fenced block and unclosed fences taken
//! to the end of the text. Every decode or validation failure maps to a
//! `NarrativeError` the generator treats as its fallback trigger.

use serde::de::DeserializeOwned;

use super::NarrativeError;
use crate::models::{DifferentialEntry, RiskAssessment};

/// Strip an optional surrounding markdown code fence.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();

    if let Some(start) = text.find("```json") {
        let content_start = start + 7;
        return match text[content_start..].find("```") {
            Some(end) => text[content_start..content_start + end].trim(),
            None => text[content_start..].trim(),
        };
    }

    if let Some(start) = text.find("```") {
        let content_start = start + 3;
        return match text[content_start..].find("```") {
            Some(end) => text[content_start..content_start + end].trim(),
            None => text[content_start..].trim(),
        };
    }

    text
}

/// Parse a differential-diagnosis response into ranked entries.
///
/// The top level must decode as a JSON array; individual entries are
/// repaired leniently (undecodable ones are skipped), but an empty
/// surviving list is a failure, since there is nothing to rank.
pub fn parse_differential(text: &str) -> Result<Vec<DifferentialEntry>, NarrativeError> {
    let payload = strip_code_fence(text);

    let values: Vec<serde_json::Value> = serde_json::from_str(payload)
        .map_err(|e| NarrativeError::JsonParsing(e.to_string()))?;

    let entries: Vec<DifferentialEntry> = parse_array_lenient(&values);

    if entries.is_empty() {
        return Err(NarrativeError::Validation(
            "no valid differential entries in response".to_string(),
        ));
    }

    Ok(entries)
}

/// Parse a risk-assessment response.
///
/// Unknown urgency levels are rejected by enum decoding; the severity
/// score must sit in the documented 1-10 band.
pub fn parse_risk(text: &str) -> Result<RiskAssessment, NarrativeError> {
    let payload = strip_code_fence(text);

    let risk: RiskAssessment = serde_json::from_str(payload)
        .map_err(|e| NarrativeError::JsonParsing(e.to_string()))?;

    if !(1..=10).contains(&risk.severity_score) {
        return Err(NarrativeError::Validation(format!(
            "severity_score {} outside 1-10",
            risk.severity_score
        )));
    }

    Ok(risk)
}

/// Decode an array leniently, skipping items that fail to deserialize.
fn parse_array_lenient<T: DeserializeOwned>(items: &[serde_json::Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyLevel;

    const DIFFERENTIAL_JSON: &str = r#"[
        {"diagnosis": "Glioblastoma", "likelihood": 70, "reasoning": "Infiltrative pattern", "key_feature": "Irregular borders"},
        {"diagnosis": "Metastasis", "likelihood": 30, "reasoning": "History dependent", "key_feature": "Multiple lesions"}
    ]"#;

    #[test]
    fn strips_labeled_fence() {
        let wrapped = format!("```json\n{DIFFERENTIAL_JSON}\n```");
        assert_eq!(strip_code_fence(&wrapped), DIFFERENTIAL_JSON.trim());
    }

    #[test]
    fn strips_generic_fence() {
        let wrapped = format!("```\n{DIFFERENTIAL_JSON}\n```");
        assert_eq!(strip_code_fence(&wrapped), DIFFERENTIAL_JSON.trim());
    }

    #[test]
    fn passes_through_unfenced_text() {
        assert_eq!(strip_code_fence(DIFFERENTIAL_JSON), DIFFERENTIAL_JSON.trim());
    }

    #[test]
    fn tolerates_prose_around_fence() {
        let wrapped =
            format!("Here is the differential you asked for:\n\n```json\n{DIFFERENTIAL_JSON}\n```\n\nLet me know if you need more detail.");
        let entries = parse_differential(&wrapped).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn unclosed_fence_takes_remainder() {
        let wrapped = format!("```json\n{DIFFERENTIAL_JSON}");
        let entries = parse_differential(&wrapped).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].diagnosis, "Glioblastoma");
    }

    #[test]
    fn differential_parses_entries_in_order() {
        let entries = parse_differential(DIFFERENTIAL_JSON).unwrap();
        assert_eq!(entries[0].diagnosis, "Glioblastoma");
        assert_eq!(entries[0].likelihood, 70);
        assert_eq!(entries[1].key_feature, "Multiple lesions");
    }

    #[test]
    fn differential_rejects_object_payload() {
        let err = parse_differential(r#"{"diagnosis": "Glioblastoma"}"#).unwrap_err();
        assert!(matches!(err, NarrativeError::JsonParsing(_)));
    }

    #[test]
    fn differential_rejects_malformed_json() {
        let err = parse_differential("```json\n[{not json}]\n```").unwrap_err();
        assert!(matches!(err, NarrativeError::JsonParsing(_)));
    }

    #[test]
    fn differential_repairs_partial_entries() {
        let mixed = r#"[
            {"diagnosis": "Glioblastoma", "likelihood": 80, "reasoning": "r", "key_feature": "k"},
            {"unexpected": true},
            {"diagnosis": "Abscess", "likelihood": 20, "reasoning": "r", "key_feature": "k"}
        ]"#;
        let entries = parse_differential(mixed).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].diagnosis, "Abscess");
    }

    #[test]
    fn differential_rejects_when_nothing_survives_repair() {
        let err = parse_differential(r#"[{"unexpected": true}]"#).unwrap_err();
        assert!(matches!(err, NarrativeError::Validation(_)));
    }

    #[test]
    fn risk_parses_fenced_object() {
        let wrapped = r#"```json
{"severity_score": 8, "urgency_level": "urgent", "timeline": "24-48 hours", "reasoning": "High grade suspected"}
```"#;
        let risk = parse_risk(wrapped).unwrap();
        assert_eq!(risk.severity_score, 8);
        assert_eq!(risk.urgency_level, UrgencyLevel::Urgent);
    }

    #[test]
    fn risk_rejects_out_of_band_severity() {
        for severity in [0, 11] {
            let raw = format!(
                r#"{{"severity_score": {severity}, "urgency_level": "routine", "timeline": "t", "reasoning": "r"}}"#
            );
            let err = parse_risk(&raw).unwrap_err();
            assert!(matches!(err, NarrativeError::Validation(_)), "severity {severity}");
        }
    }

    #[test]
    fn risk_rejects_unknown_urgency() {
        let raw = r#"{"severity_score": 5, "urgency_level": "immediate", "timeline": "t", "reasoning": "r"}"#;
        let err = parse_risk(raw).unwrap_err();
        assert!(matches!(err, NarrativeError::JsonParsing(_)));
    }

    #[test]
    fn risk_rejects_array_payload() {
        let err = parse_risk("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, NarrativeError::JsonParsing(_)));
    }
}
