//! OpenRouter provider implementation using the Responses API.
//!
//! OpenRouter embeds the SSE event type inside the JSON payload instead of
//! sending `event:` lines; `sse::OutputCollector` handles both.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::responses::{Reasoning, ResponsesRequest, build_request};
use crate::inference::sse::read_output_text;
use crate::inference::{CompletionProvider, CompletionRequest, Effort, ProviderError};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Maps our Effort enum to a Reasoning config for the Responses API.
fn effort_to_reasoning(effort: Effort) -> Reasoning {
    let effort = match effort {
        Effort::Auto => {
            return Reasoning {
                effort: None,
                enabled: Some(true),
            };
        }
        Effort::High => "high",
        Effort::Medium => "medium",
        Effort::Low => "low",
        Effort::None => "none",
    };
    Reasoning {
        effort: Some(effort),
        enabled: None,
    }
}

/// OpenRouter API provider using Responses API
pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// Creates a new OpenRouter provider.
    ///
    /// # Arguments
    /// * `api_key` - OpenRouter API key
    /// * `base_url` - Optional custom base URL (defaults to OpenRouter's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Sends a request to the Responses endpoint and returns the response.
    async fn send_request(
        &self,
        request: &ResponsesRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        if let Ok(json) = serde_json::to_string(request) {
            debug!("Raw OpenRouter Request: {}", json);
        }

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("OpenRouter response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("OpenRouter API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let responses_request = build_request(&request, Some(effort_to_reasoning(request.effort)));

        info!(
            "OpenRouter Responses API request: model={}, effort={:?}, structured={}",
            request.model,
            request.effort,
            request.output_schema.is_some(),
        );

        let response = self.send_request(&responses_request).await?;
        read_output_text(response, self.name()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effort_to_reasoning_returns_correct_values() {
        assert_eq!(effort_to_reasoning(Effort::High).effort, Some("high"));
        assert_eq!(effort_to_reasoning(Effort::Medium).effort, Some("medium"));
        assert_eq!(effort_to_reasoning(Effort::Low).effort, Some("low"));
        assert_eq!(effort_to_reasoning(Effort::None).effort, Some("none"));
        assert_eq!(effort_to_reasoning(Effort::Auto).effort, None);

        // Auto uses enabled flag, explicit efforts don't
        assert_eq!(effort_to_reasoning(Effort::Auto).enabled, Some(true));
        assert_eq!(effort_to_reasoning(Effort::High).enabled, None);
    }

    #[test]
    fn test_default_base_url() {
        let provider = OpenRouterProvider::new("key".to_string(), None);
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.name(), "openrouter");
    }
}
