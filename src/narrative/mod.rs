pub mod diagnostic;
pub mod gemini;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod templates;

pub use diagnostic::*;
pub use gemini::*;
pub use generator::*;
pub use parser::*;
pub use prompt::*;
pub use templates::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Cannot reach generation service at {0}")]
    Connection(String),

    #[error("Generation service returned error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("No compatible generation model available")]
    NoModelAvailable,

    #[error("Empty completion from generation service")]
    EmptyCompletion,

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response validation failed: {0}")]
    Validation(String),

    #[error("Client construction failed: {0}")]
    ClientConstruction(String),
}
