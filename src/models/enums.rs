use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a stored or externally-supplied string does not name a
/// known enum variant.
#[derive(Error, Debug)]
#[error("invalid {field} value: {value}")]
pub struct InvalidEnumValue {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnumValue {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Prediction {
    Tumor => "tumor",
    NoTumor => "no_tumor",
});

impl Prediction {
    /// Human phrasing of the detection outcome, as rendered into prompts
    /// and narrative headers.
    pub fn detection_label(&self) -> &'static str {
        match self {
            Self::Tumor => "Tumor detected",
            Self::NoTumor => "No tumor detected",
        }
    }
}

str_enum!(TumorType {
    Glioma => "Glioma",
    Meningioma => "Meningioma",
    PituitaryAdenoma => "Pituitary Adenoma",
});

str_enum!(UrgencyLevel {
    Routine => "routine",
    Urgent => "urgent",
    Emergency => "emergency",
});

/// How strongly the upstream attention mechanism focused on a region.
///
/// Bucketed once from the raw score; both the external prompt framing and
/// the template fallback read the same bucket, so the two paths can never
/// disagree on the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionLevel {
    High,
    Moderate,
    Low,
}

impl AttentionLevel {
    /// Bucket a normalized attention score.
    pub fn from_score(score: f32) -> Self {
        if score > 0.5 {
            Self::High
        } else if score > 0.2 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }

    /// Verb phrase describing the model's focus, used when framing the
    /// region-explanation prompt.
    pub fn focus_phrase(&self) -> &'static str {
        match self {
            Self::High => "focused heavily on",
            Self::Moderate => "showed moderate interest in",
            Self::Low => "showed minimal focus on",
        }
    }
}

impl std::fmt::Display for AttentionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn prediction_round_trips_snake_case() {
        let json = serde_json::to_string(&Prediction::NoTumor).unwrap();
        assert_eq!(json, "\"no_tumor\"");
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Prediction::NoTumor);
    }

    #[test]
    fn prediction_detection_labels() {
        assert_eq!(Prediction::Tumor.detection_label(), "Tumor detected");
        assert_eq!(Prediction::NoTumor.detection_label(), "No tumor detected");
    }

    #[test]
    fn tumor_type_display_uses_clinical_names() {
        assert_eq!(TumorType::Glioma.to_string(), "Glioma");
        assert_eq!(TumorType::PituitaryAdenoma.to_string(), "Pituitary Adenoma");
    }

    #[test]
    fn tumor_type_from_str() {
        assert_eq!(
            TumorType::from_str("Pituitary Adenoma").unwrap(),
            TumorType::PituitaryAdenoma
        );
        assert!(TumorType::from_str("Astrocytoma").is_err());
    }

    #[test]
    fn urgency_level_serializes_lowercase() {
        let json = serde_json::to_string(&UrgencyLevel::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");
    }

    #[test]
    fn urgency_level_rejects_unknown_value() {
        let result: Result<UrgencyLevel, _> = serde_json::from_str("\"immediate\"");
        assert!(result.is_err());
    }

    #[test]
    fn attention_bucketing_thresholds() {
        assert_eq!(AttentionLevel::from_score(0.6), AttentionLevel::High);
        assert_eq!(AttentionLevel::from_score(0.3), AttentionLevel::Moderate);
        assert_eq!(AttentionLevel::from_score(0.1), AttentionLevel::Low);
        // Boundaries are exclusive
        assert_eq!(AttentionLevel::from_score(0.5), AttentionLevel::Moderate);
        assert_eq!(AttentionLevel::from_score(0.2), AttentionLevel::Low);
    }

    #[test]
    fn attention_focus_phrases_track_level() {
        assert_eq!(AttentionLevel::High.focus_phrase(), "focused heavily on");
        assert_eq!(AttentionLevel::Low.focus_phrase(), "showed minimal focus on");
    }

    #[test]
    fn invalid_enum_error_names_field_and_value() {
        let err = Prediction::from_str("maybe").unwrap_err();
        assert_eq!(err.to_string(), "invalid Prediction value: maybe");
    }
}
