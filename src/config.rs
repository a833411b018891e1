use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Neuroscribe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,neuroscribe=debug".to_string()
}

/// External-generation settings, resolved once from the environment at
/// startup and fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// API credential; empty means absent.
    pub api_key: String,
    /// Model identifier passed to the generation endpoint.
    pub model: String,
    /// REST endpoint root; overridable for proxies and test stubs.
    pub base_url: String,
    /// Master switch for the external path.
    pub enabled: bool,
    /// HTTP request timeout.
    pub timeout_secs: u64,
}

impl NarrativeConfig {
    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY`: credential, empty/unset = absent
    /// `GEMINI_MODEL`: model id, default "gemini-pro"
    /// `USE_AI_NARRATIVES`: "true"/"1" enables the external path
    /// `GEMINI_BASE_URL`: endpoint override
    /// `GEMINI_TIMEOUT_SECS`: request timeout override
    pub fn from_env() -> Self {
        let enabled = env::var("USE_AI_NARRATIVES")
            .map(|v| {
                let v = v.trim().to_lowercase();
                v == "true" || v == "1"
            })
            .unwrap_or(false);

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            enabled,
            timeout_secs,
        }
    }

    /// Disabled configuration: the generator will never leave template mode.
    pub fn disabled() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            enabled: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Whether the external path is both switched on and credentialed.
    ///
    /// This is the whole mode-resolution input; the generator additionally
    /// requires the HTTP client to construct successfully.
    pub fn external_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}
