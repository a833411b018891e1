//! Proactive check of external-service availability.
//!
//! Lets a caller show whether AI narratives are functional before the
//! first generation request is made. Read-only observation: the
//! generation operations themselves never consult this; their own
//! fallback handles a backend that dies after a healthy probe.

use serde::Serialize;

use super::gemini::{GeminiClient, TextGenerator};
use crate::config::NarrativeConfig;

/// Granular backend status for callers' status indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    /// External path switched off or not credentialed.
    Disabled,
    /// Service cannot be reached or refuses the credential.
    Unreachable,
    /// Service answers, generation not yet verified.
    Reachable,
    /// A live test generation succeeded.
    Verified,
}

/// Backend availability report.
#[derive(Debug, Clone, Serialize)]
pub struct BackendStatus {
    pub level: StatusLevel,
    /// The configured model, when the service confirms it exists.
    pub model: Option<String>,
    /// Human-readable status summary.
    pub summary: String,
}

/// Probe the configured backend.
///
/// With `verify` set, a successful probe also runs a one-line test
/// generation to prove the model can actually produce text.
pub fn probe(config: &NarrativeConfig, verify: bool) -> BackendStatus {
    if !config.external_configured() {
        return BackendStatus {
            level: StatusLevel::Disabled,
            model: None,
            summary: "External narratives disabled - using templates".to_string(),
        };
    }

    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            return BackendStatus {
                level: StatusLevel::Unreachable,
                model: None,
                summary: format!("Client construction failed: {e}"),
            };
        }
    };

    probe_backend(&client, &config.model, verify)
}

/// Probe an arbitrary backend for a given model.
pub fn probe_backend(
    backend: &dyn TextGenerator,
    model: &str,
    verify: bool,
) -> BackendStatus {
    let models = match backend.list_models() {
        Ok(models) => models,
        Err(e) => {
            tracing::debug!(error = %e, "Backend probe: service unreachable");
            return BackendStatus {
                level: StatusLevel::Unreachable,
                model: None,
                summary: format!("Generation service unreachable: {e}"),
            };
        }
    };

    let model_known = models.iter().any(|m| m.starts_with(model));
    if !model_known {
        return BackendStatus {
            level: StatusLevel::Reachable,
            model: None,
            summary: format!(
                "Service reachable - model {model} not offered ({} models listed)",
                models.len()
            ),
        };
    }

    if !verify {
        return BackendStatus {
            level: StatusLevel::Reachable,
            model: Some(model.to_string()),
            summary: format!("Service reachable - model {model} available"),
        };
    }

    match backend.generate("Reply with the single word: ready") {
        Ok(_) => {
            tracing::info!(model = %model, "Backend probe: test generation succeeded");
            BackendStatus {
                level: StatusLevel::Verified,
                model: Some(model.to_string()),
                summary: format!("AI narratives ready - {model}"),
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Backend probe: test generation failed");
            BackendStatus {
                level: StatusLevel::Reachable,
                model: Some(model.to_string()),
                summary: format!("Model {model} listed but test generation failed: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::gemini::MockGenerator;

    #[test]
    fn disabled_config_reports_disabled_without_io() {
        let status = probe(&NarrativeConfig::disabled(), true);
        assert_eq!(status.level, StatusLevel::Disabled);
        assert!(status.model.is_none());
        assert!(status.summary.contains("templates"));
    }

    #[test]
    fn unreachable_backend_reports_unreachable() {
        let backend = MockGenerator::failing("connection refused");
        let status = probe_backend(&backend, "gemini-pro", false);
        assert_eq!(status.level, StatusLevel::Unreachable);
    }

    #[test]
    fn missing_model_reports_reachable_without_model() {
        let backend = MockGenerator::new("ready").with_models(vec!["gemini-1.5-flash".into()]);
        let status = probe_backend(&backend, "gemini-pro", false);
        assert_eq!(status.level, StatusLevel::Reachable);
        assert!(status.model.is_none());
        assert!(status.summary.contains("not offered"));
    }

    #[test]
    fn available_model_without_verify_is_reachable() {
        let backend = MockGenerator::new("ready");
        let status = probe_backend(&backend, "gemini-pro", false);
        assert_eq!(status.level, StatusLevel::Reachable);
        assert_eq!(status.model.as_deref(), Some("gemini-pro"));
    }

    #[test]
    fn verify_pass_reports_verified() {
        let backend = MockGenerator::new("ready");
        let status = probe_backend(&backend, "gemini-pro", true);
        assert_eq!(status.level, StatusLevel::Verified);
        assert!(status.summary.contains("AI narratives ready"));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&StatusLevel::Unreachable).unwrap();
        assert_eq!(json, "\"unreachable\"");
    }
}
