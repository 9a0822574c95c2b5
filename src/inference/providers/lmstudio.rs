//! LM Studio provider implementation using the Responses API.
//!
//! LM Studio v0.3.29+ supports the /v1/responses endpoint with:
//! - Reasoning support with effort parameter
//! - Structured output via `text.format`
//! - Streaming with SSE events (typed `event:` lines)

use async_trait::async_trait;
use log::{debug, info, warn};

use super::responses::{Reasoning, build_request};
use crate::inference::sse::read_output_text;
use crate::inference::{CompletionProvider, CompletionRequest, Effort, ProviderError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// Maps our Effort enum to a Reasoning config.
/// Returns None for Auto and None (omit reasoning entirely).
fn effort_to_reasoning(effort: Effort) -> Option<Reasoning> {
    let effort = match effort {
        Effort::High => "high",
        Effort::Medium => "medium",
        Effort::Low => "low",
        Effort::Auto | Effort::None => return None,
    };
    Some(Reasoning {
        effort: Some(effort),
        enabled: None,
    })
}

/// LM Studio API provider using Responses API (local inference server)
pub struct LmStudioProvider {
    base_url: String,
    client: reqwest::Client,
}

impl LmStudioProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for LmStudioProvider {
    fn name(&self) -> &str {
        "lmstudio"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let responses_request = build_request(&request, effort_to_reasoning(request.effort));

        info!(
            "LM Studio Responses API request: model={}, effort={:?}, structured={}",
            request.model,
            request.effort,
            request.output_schema.is_some(),
        );

        // No auth for local LM Studio
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .json(&responses_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("LM Studio response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("LM Studio API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        read_output_text(response, self.name()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effort_mapping_omits_auto_and_none() {
        assert!(effort_to_reasoning(Effort::Auto).is_none());
        assert!(effort_to_reasoning(Effort::None).is_none());
        let high = effort_to_reasoning(Effort::High).unwrap();
        assert_eq!(high.effort, Some("high"));
        assert_eq!(high.enabled, None);
    }
}
