//! Neuroscribe: clinician-readable narratives for brain-MRI
//! tumor-detection results.
//!
//! The core is the [`narrative::NarrativeGenerator`]: given a structured
//! prediction it produces a full analysis narrative, a per-region
//! attention explanation, a ranked differential-diagnosis list, or a
//! structured risk assessment. An external language-model backend is
//! attempted when configured; every operation carries a deterministic
//! template fallback, so callers always receive a well-formed result and
//! never an error.
//!
//! Two trivial collaborators ship alongside: [`anatomy`] maps normalized
//! scan coordinates to named brain regions, and [`classifier`] assigns a
//! heuristic tumor subtype with an injectable random source.

pub mod anatomy;
pub mod classifier;
pub mod config;
pub mod models;
pub mod narrative;

pub use anatomy::{identify_region, BrainRegion};
pub use classifier::{Classification, TumorClassifier};
pub use config::NarrativeConfig;
pub use models::{
    AttentionLevel, DifferentialEntry, Prediction, PredictionResult, RiskAssessment, TumorType,
    UrgencyLevel,
};
pub use narrative::{
    BackendStatus, GenerationMode, MockGenerator, NarrativeError, NarrativeGenerator,
    StatusLevel, TextGenerator,
};
