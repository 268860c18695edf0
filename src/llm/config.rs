//! LLM service configuration from the environment

use super::{LlmError, LlmResult};
use std::time::Duration;

pub const DEFAULT_AZURE_API_VERSION: &str = "2024-08-01-preview";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Key value shipped in example env files
const PLACEHOLDER_API_KEY: &str = "YOUR_OPENAI_API_KEY";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiType {
    Azure,
    OpenAi,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub api_type: ApiType,
    /// Azure resource endpoint
    pub endpoint: Option<String>,
    pub deployment_id: Option<String>,
    pub api_version: String,
    /// Standard API base URL
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_type: ApiType::OpenAi,
            endpoint: None,
            deployment_id: None,
            api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(60),
        }
    }
}

impl LlmConfig {
    /// Read `OPENAI_*` variables (the `VITE_OPENAI_*` spelling is also
    /// accepted)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .or_else(|| lookup(&format!("VITE_{}", name)))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        let api_type = match get("OPENAI_API_TYPE").as_deref() {
            Some(t) if t.eq_ignore_ascii_case("azure") => ApiType::Azure,
            _ => ApiType::OpenAi,
        };

        Self {
            api_key: get("OPENAI_API_KEY"),
            api_type,
            endpoint: get("OPENAI_ENDPOINT"),
            deployment_id: get("OPENAI_DEPLOYMENT_ID"),
            api_version: get("OPENAI_API_VERSION").unwrap_or(defaults.api_version),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    /// Check that everything the selected API needs is present
    pub fn validate(&self) -> LlmResult<()> {
        match self.api_key.as_deref() {
            None | Some(PLACEHOLDER_API_KEY) => {
                return Err(LlmError::NotConfigured(
                    "OpenAI API key is not configured. Please set OPENAI_API_KEY.".to_string(),
                ));
            }
            Some(_) => {}
        }

        if self.api_type == ApiType::Azure {
            if self.endpoint.is_none() {
                return Err(LlmError::NotConfigured(
                    "Azure OpenAI endpoint is not configured. Please set OPENAI_ENDPOINT.".to_string(),
                ));
            }
            if self.deployment_id.is_none() {
                return Err(LlmError::NotConfigured(
                    "Azure OpenAI deployment ID is not configured. Please set OPENAI_DEPLOYMENT_ID."
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Chat completions URL for the selected API
    pub fn completions_url(&self) -> String {
        match self.api_type {
            ApiType::Azure => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.endpoint.as_deref().unwrap_or_default().trim_end_matches('/'),
                urlencoding::encode(self.deployment_id.as_deref().unwrap_or_default()),
                urlencoding::encode(&self.api_version)
            ),
            ApiType::OpenAi => format!("{}/chat/completions", self.base_url.trim_end_matches('/')),
        }
    }
}
