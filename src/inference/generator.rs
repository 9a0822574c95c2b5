//! # Plan Generator
//!
//! The generation call as the rest of the app sees it: a validated
//! `PlanRequest` goes in, a `MealPlanResult` comes out. Everything between
//! (prompting, structured output, JSON extraction) lives here.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::form::PlanRequest;
use crate::core::prompt::build_user_prompt;
use crate::inference::{
    CompletionProvider, CompletionRequest, Effort, MealPlanResult, OutputSchema, ProviderError,
};

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a meal plan for a validated request.
    async fn generate(&self, request: &PlanRequest) -> Result<MealPlanResult, ProviderError>;
}

/// Settings that shape every prompt, taken from the resolved config.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub model: String,
    pub effort: Effort,
    pub max_output_tokens: u32,
    pub system_prompt: String,
    pub region: String,
}

/// `PlanGenerator` backed by an LLM `CompletionProvider`.
pub struct LlmPlanGenerator {
    provider: Arc<dyn CompletionProvider>,
    settings: GeneratorSettings,
    schema: OutputSchema,
}

impl LlmPlanGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: GeneratorSettings) -> Self {
        Self {
            provider,
            settings,
            schema: plan_schema(),
        }
    }
}

#[async_trait]
impl PlanGenerator for LlmPlanGenerator {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn generate(&self, request: &PlanRequest) -> Result<MealPlanResult, ProviderError> {
        let user_prompt = build_user_prompt(request, &self.settings.region);
        debug!("User prompt: {}", user_prompt);

        let completion = CompletionRequest {
            system_prompt: &self.settings.system_prompt,
            user_prompt: &user_prompt,
            model: &self.settings.model,
            effort: self.settings.effort,
            max_output_tokens: Some(self.settings.max_output_tokens),
            output_schema: Some(&self.schema),
        };

        let text = self.provider.complete(completion).await?;
        info!("{} returned {} bytes", self.provider.name(), text.len());
        parse_plan(&text)
    }
}

/// JSON schema for `MealPlanResult`, as sent in `text.format`.
pub fn plan_schema() -> OutputSchema {
    let root = schemars::schema_for!(MealPlanResult);
    let mut schema = serde_json::to_value(root).unwrap_or_default();
    // Providers reject the meta-schema keys inside `text.format.schema`
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }
    OutputSchema {
        name: "meal_plan".to_string(),
        schema,
    }
}

/// Deserialize the model output, tolerating code fences or prose around it.
pub fn parse_plan(text: &str) -> Result<MealPlanResult, ProviderError> {
    let json = extract_json_object(text).ok_or_else(|| {
        warn!("Model output contained no JSON object");
        ProviderError::Parse("model output contained no JSON object".to_string())
    })?;
    serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Slice from the first `{` to the last `}`.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
