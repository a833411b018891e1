use serde::{Deserialize, Serialize};

use super::enums::UrgencyLevel;

/// Structured risk assessment for a scan finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Severity on a 1-10 scale.
    pub severity_score: u8,
    pub urgency_level: UrgencyLevel,
    /// Actionable timeframe, e.g. "Consult neurosurgeon within 24-48 hours".
    pub timeline: String,
    pub reasoning: String,
}

impl RiskAssessment {
    pub fn new(
        severity_score: u8,
        urgency_level: UrgencyLevel,
        timeline: &str,
        reasoning: &str,
    ) -> Self {
        Self {
            severity_score,
            urgency_level,
            timeline: timeline.to_string(),
            reasoning: reasoning.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_shape() {
        let json = r#"{
            "severity_score": 8,
            "urgency_level": "urgent",
            "timeline": "Consult neurosurgeon within 24-48 hours",
            "reasoning": "High-grade tumor suspected"
        }"#;
        let risk: RiskAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(risk.severity_score, 8);
        assert_eq!(risk.urgency_level, UrgencyLevel::Urgent);
    }

    #[test]
    fn serializes_urgency_lowercase() {
        let risk = RiskAssessment::new(2, UrgencyLevel::Routine, "Routine follow-up", "Normal");
        let json = serde_json::to_string(&risk).unwrap();
        assert!(json.contains("\"routine\""));
    }
}
