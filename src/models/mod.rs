pub mod differential;
pub mod enums;
pub mod prediction;
pub mod risk;

pub use differential::DifferentialEntry;
pub use enums::{AttentionLevel, InvalidEnumValue, Prediction, TumorType, UrgencyLevel};
pub use prediction::PredictionResult;
pub use risk::RiskAssessment;
