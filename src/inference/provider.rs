use std::fmt;

use async_trait::async_trait;

use super::types::Effort;

/// Errors that can occur during provider operations.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error, either as an HTTP status or inside the stream.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// JSON schema the model output must follow.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

/// Everything a provider needs to fulfill a completion request.
pub struct CompletionRequest<'a> {
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
    pub model: &'a str,
    pub effort: Effort,
    pub max_output_tokens: Option<u32>,
    pub output_schema: Option<&'a OutputSchema>,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Runs one completion and returns the full output text.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError>;
}
