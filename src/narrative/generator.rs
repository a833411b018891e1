//! The narrative generation core.
//!
//! One generator instance, owned by the caller, resolves its generation
//! mode exactly once at construction: external when the config is enabled
//! and credentialed AND the client constructs, template otherwise. The
//! four operations are infallible: every external failure is logged and
//! answered from the deterministic fallback instead.

use serde::Serialize;

use super::gemini::{GeminiClient, TextGenerator};
use super::parser::{parse_differential, parse_risk};
use super::prompt::{
    build_analysis_prompt, build_differential_prompt, build_region_prompt, build_risk_prompt,
};
use super::templates::{analysis_narrative, differential_table, region_explanation, risk_table};
use crate::anatomy::BrainRegion;
use crate::config::NarrativeConfig;
use crate::models::{
    AttentionLevel, DifferentialEntry, Prediction, PredictionResult, RiskAssessment, TumorType,
};

/// Which generation path this process uses, fixed for the generator's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// External service attempted first, template as fallback.
    External,
    /// Template path only.
    Template,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Template => "template",
        }
    }
}

/// Narrative generator with construction-time mode resolution.
pub struct NarrativeGenerator {
    backend: Option<Box<dyn TextGenerator>>,
}

impl NarrativeGenerator {
    /// Resolve the generation mode from configuration.
    ///
    /// A construction failure of the external client downgrades to
    /// template mode for the lifetime of this generator; initialization
    /// is never retried per call.
    pub fn from_config(config: &NarrativeConfig) -> Self {
        if !config.external_configured() {
            tracing::info!("External narratives disabled - using templates");
            return Self::template_only();
        }

        match GeminiClient::new(config) {
            Ok(client) => {
                tracing::info!(model = %config.model, "External narrative generation initialized");
                Self {
                    backend: Some(Box::new(client)),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "External client construction failed - using templates");
                Self::template_only()
            }
        }
    }

    /// Generator that only ever uses the template path.
    pub fn template_only() -> Self {
        Self { backend: None }
    }

    /// Generator with an injected backend (tests, alternative services).
    pub fn with_backend(backend: Box<dyn TextGenerator>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn mode(&self) -> GenerationMode {
        if self.backend.is_some() {
            GenerationMode::External
        } else {
            GenerationMode::Template
        }
    }

    /// Comprehensive analysis narrative for a detection result.
    pub fn generate_analysis(&self, result: &PredictionResult) -> String {
        if let Some(backend) = &self.backend {
            match backend.generate(&build_analysis_prompt(result)) {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(error = %e, "Analysis generation failed - falling back to template");
                }
            }
        }

        analysis_narrative(result)
    }

    /// Explanation of why the model attended to one anatomical region.
    ///
    /// The attention bucket is computed once here and shared by the prompt
    /// framing and the template, so both paths describe the same level.
    pub fn explain_region(
        &self,
        region: &BrainRegion,
        attention_score: f32,
        prediction: Prediction,
        confidence: f32,
    ) -> String {
        let attention_level = AttentionLevel::from_score(attention_score);

        if let Some(backend) = &self.backend {
            let prompt = build_region_prompt(
                region,
                attention_level,
                attention_score,
                prediction,
                confidence,
            );
            match backend.generate(&prompt) {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(
                        region = region.name,
                        error = %e,
                        "Region explanation failed - falling back to template"
                    );
                }
            }
        }

        region_explanation(region, attention_level, prediction, confidence)
    }

    /// Ranked differential-diagnosis list.
    pub fn generate_differential(
        &self,
        prediction: Prediction,
        confidence: f32,
        tumor_type: Option<TumorType>,
    ) -> Vec<DifferentialEntry> {
        if let Some(backend) = &self.backend {
            let prompt = build_differential_prompt(prediction, confidence, tumor_type);
            match backend
                .generate(&prompt)
                .and_then(|text| parse_differential(&text))
            {
                Ok(entries) => {
                    tracing::debug!(count = entries.len(), "Differential diagnosis generated");
                    return entries;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Differential generation failed - falling back to table");
                }
            }
        }

        differential_table(prediction, tumor_type)
    }

    /// Structured risk assessment.
    pub fn generate_risk_assessment(
        &self,
        prediction: Prediction,
        confidence: f32,
        tumor_type: Option<TumorType>,
    ) -> RiskAssessment {
        if let Some(backend) = &self.backend {
            let prompt = build_risk_prompt(prediction, confidence, tumor_type);
            match backend
                .generate(&prompt)
                .and_then(|text| parse_risk(&text))
            {
                Ok(risk) => {
                    tracing::debug!(
                        severity = risk.severity_score,
                        urgency = risk.urgency_level.as_str(),
                        "Risk assessment generated"
                    );
                    return risk;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Risk assessment failed - falling back to table");
                }
            }
        }

        risk_table(prediction, tumor_type)
    }
}
