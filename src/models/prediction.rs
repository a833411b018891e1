use serde::{Deserialize, Serialize};

use super::enums::{Prediction, TumorType};

/// Detection result produced by the upstream imaging model.
///
/// Read-only input to the narrative generator; carries no identity and is
/// never persisted here. `tumor_type` and `type_confidence` are present
/// only when the subtype classifier ran on a positive detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
    #[serde(default)]
    pub tumor_type: Option<TumorType>,
    /// Subtype classification confidence in [0, 1].
    #[serde(default)]
    pub type_confidence: Option<f32>,
}

impl PredictionResult {
    /// Result with no subtype classification attached.
    pub fn new(prediction: Prediction, confidence: f32) -> Self {
        Self {
            prediction,
            confidence,
            tumor_type: None,
            type_confidence: None,
        }
    }

    /// Attach a subtype classification.
    pub fn with_tumor_type(mut self, tumor_type: TumorType, type_confidence: f32) -> Self {
        self.tumor_type = Some(tumor_type);
        self.type_confidence = Some(type_confidence);
        self
    }

    /// Detection confidence as a percentage, e.g. 87.3 for 0.873.
    pub fn confidence_pct(&self) -> f32 {
        self.confidence * 100.0
    }
}
