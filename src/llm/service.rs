//! Chat completion client for chart code generation

use super::{ApiType, LlmConfig, LlmError, LlmResult, PromptCatalog};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde_json::{Value, json};

static CODE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:javascript|js)?\s*(.*?)```").expect("valid code block regex")
});

/// Pull the code out of a model reply.
///
/// Replies that already look like code are returned unchanged. Otherwise the
/// first fenced block is used, and the raw reply when there is none.
pub fn extract_code_from_response(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with("const") || trimmed.starts_with("// Get") {
        return response.to_string();
    }

    match CODE_BLOCK_RE
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
    {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => response.to_string(),
    }
}

/// Chart shown when generation fails, with the reason on top
pub fn fallback_chart_code(error: &str) -> String {
    let reason = error.lines().collect::<Vec<_>>().join(" ");
    format!(
        r##"// Chart code generation failed: {reason}
// Showing a sample bar chart instead.
const {{ muze }} = viz;
const DataModel = muze.DataModel;

const data = [
  {{ Category: "A", Value: 30 }},
  {{ Category: "B", Value: 70 }},
  {{ Category: "C", Value: 50 }},
];

const schema = [
  {{ name: "Category", type: "dimension" }},
  {{ name: "Value", type: "measure" }},
];

const dm = new DataModel(data, schema);

muze
  .canvas()
  .rows(["Category"])
  .columns(["Value"])
  .layers([{{ mark: "bar" }}])
  .data(dm)
  .mount("#chart");
"##
    )
}

/// Generates Muze chart code from natural language requests
pub struct ChartCodeService {
    client: Client,
    config: LlmConfig,
    prompts: PromptCatalog,
}

impl ChartCodeService {
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            prompts: PromptCatalog::default(),
        })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn prompts(&self) -> &PromptCatalog {
        &self.prompts
    }

    pub fn prompts_mut(&mut self) -> &mut PromptCatalog {
        &mut self.prompts
    }

    fn provider_name(&self) -> &'static str {
        match self.config.api_type {
            ApiType::Azure => "Azure OpenAI",
            ApiType::OpenAi => "OpenAI",
        }
    }

    fn build_payload(&self, query: &str) -> Value {
        let mut payload = json!({
            "messages": [
                { "role": "system", "content": self.prompts.current_prompt() },
                { "role": "user", "content": query }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });
        if self.config.api_type == ApiType::OpenAi {
            payload["model"] = json!(self.config.model);
        }
        payload
    }

    /// Ask the model for chart code matching `query`
    pub async fn generate_chart_code(&self, query: &str) -> LlmResult<String> {
        self.config.validate()?;

        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let url = self.config.completions_url();
        tracing::debug!("Requesting chart code from {}", url);

        let request = self.client.post(&url).json(&self.build_payload(query));
        let request = match self.config.api_type {
            ApiType::Azure => request.header("api-key", api_key),
            ApiType::OpenAi => request.bearer_auth(api_key),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("{} API error: {}", self.provider_name(), body);
            return Err(LlmError::Provider {
                provider: self.provider_name(),
                status: status.as_u16(),
                body,
            });
        }

        let response_data: Value = response
            .json()
            .await
            .map_err(|e| LlmError::Serialisation(e.to_string()))?;

        let content = response_data["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();

        Ok(extract_code_from_response(content))
    }

    /// Like `generate_chart_code`, but failures become a sample chart that
    /// explains what went wrong
    pub async fn generate_chart_code_or_fallback(&self, query: &str) -> String {
        match self.generate_chart_code(query).await {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("Failed to generate chart code: {}", e);
                fallback_chart_code(&e.to_string())
            }
        }
    }
}
