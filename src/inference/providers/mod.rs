pub mod lmstudio;
pub mod openrouter;
mod responses;

use std::sync::Arc;

pub use lmstudio::LmStudioProvider;
pub use openrouter::OpenRouterProvider;

use crate::core::config::ResolvedConfig;
use crate::inference::{CompletionProvider, ProviderError};

/// Build a provider from a resolved config's provider name and credentials.
pub fn build_provider(
    config: &ResolvedConfig,
) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
    match config.provider.as_str() {
        "lmstudio" => Ok(Arc::new(LmStudioProvider::new(
            config.lmstudio_base_url.clone(),
        ))),
        "openrouter" => {
            let api_key = config.openrouter_api_key.clone().ok_or_else(|| {
                ProviderError::Config(
                    "OpenRouter API key must be set (config file, OPENROUTER_API_KEY env var, or --provider lmstudio)"
                        .to_string(),
                )
            })?;
            Ok(Arc::new(OpenRouterProvider::new(
                api_key,
                Some(config.openrouter_base_url.clone()),
            )))
        }
        other => Err(ProviderError::Config(format!("unknown provider '{other}'"))),
    }
}
