//! Natural language to Muze chart code
//!
//! A prototype service: the user's request goes to an OpenAI-compatible
//! chat completion API (Azure or the standard endpoint) together with a
//! system prompt full of Muze examples. The code in the reply is extracted
//! and adapted so it runs in the preview iframe.

mod config;
mod prompts;
mod service;
mod transform;

pub use config::*;
pub use prompts::*;
pub use service::*;
pub use transform::*;

use thiserror::Error;

/// Errors from the chart code service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Required settings are missing
    #[error("{0}")]
    NotConfigured(String),

    /// The request did not reach the API
    #[error("Request failed: {0}")]
    Network(String),

    /// The API answered with an error status
    #[error("{provider} API error: {status} {body}")]
    Provider {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The API answer could not be decoded
    #[error("Failed to parse response: {0}")]
    Serialisation(String),

    #[error("Request timed out")]
    Timeout,
}

/// Result type alias for chart code generation
pub type LlmResult<T> = Result<T, LlmError>;

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if e.is_decode() {
            LlmError::Serialisation(e.to_string())
        } else {
            LlmError::Network(e.to_string())
        }
    }
}
