use serde::{Deserialize, Serialize};

use super::NarrativeError;
use crate::config::NarrativeConfig;

/// Known-good Gemini models in order of preference.
pub const GEMINI_MODELS: &[&str] = &[
    "gemini-pro",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
    "gemini-1.0-pro",
];

/// Opaque text-generation capability.
///
/// The generator core only ever sees this trait: a fully-formed prompt in,
/// raw text or a failure out. `list_models`/`is_model_available` exist for
/// the diagnostic probe; the generation operations never call them.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;

    fn list_models(&self) -> Result<Vec<String>, NarrativeError>;

    fn is_model_available(&self, model: &str) -> Result<bool, NarrativeError>;
}

/// HTTP client for the Gemini `generateContent` REST API.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Build a client from resolved configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed; the
    /// credential is held but never logged.
    pub fn new(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NarrativeError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Find the first preferred model the service actually offers.
    pub fn find_best_model(&self) -> Result<String, NarrativeError> {
        let available = self.list_models()?;
        for preferred in GEMINI_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(NarrativeError::NoModelAvailable)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> NarrativeError {
        if e.is_connect() {
            NarrativeError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            NarrativeError::Timeout(self.timeout_secs)
        } else {
            NarrativeError::HttpClient(e.to_string())
        }
    }
}

/// Request body for POST /models/{model}:generateContent
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response body from POST /models/{model}:generateContent
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Response body from GET /models
#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrativeError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| NarrativeError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(NarrativeError::EmptyCompletion);
        }

        Ok(text)
    }

    fn list_models(&self) -> Result<Vec<String>, NarrativeError> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrativeError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ListModelsResponse = response
            .json()
            .map_err(|e| NarrativeError::MalformedResponse(e.to_string()))?;

        // Only models that can actually serve generateContent count.
        Ok(parsed
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }

    fn is_model_available(&self, model: &str) -> Result<bool, NarrativeError> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m.starts_with(model)))
    }
}

/// Mock generator for testing; returns a configurable response or failure.
pub struct MockGenerator {
    response: Result<String, String>,
    available_models: Vec<String>,
}

impl MockGenerator {
    /// Mock that always succeeds with the given text.
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            available_models: vec!["gemini-pro".to_string()],
        }
    }

    /// Mock that always fails with a service error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            available_models: vec![],
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.available_models = models;
        self
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, NarrativeError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(NarrativeError::Service {
                status: 503,
                body: message.clone(),
            }),
        }
    }

    fn list_models(&self) -> Result<Vec<String>, NarrativeError> {
        if self.available_models.is_empty() && self.response.is_err() {
            return Err(NarrativeError::Connection("mock".to_string()));
        }
        Ok(self.available_models.clone())
    }

    fn is_model_available(&self, model: &str) -> Result<bool, NarrativeError> {
        Ok(self
            .list_models()?
            .iter()
            .any(|m| m.starts_with(model)))
    }
}
