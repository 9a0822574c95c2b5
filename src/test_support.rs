//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::currency::Currency;
use crate::core::form::{FormValues, PlanRequest};
use crate::core::state::App;
use crate::inference::{
    CompletionProvider, CompletionRequest, MealPlanResult, PlanGenerator, ProviderError,
};

/// What a `StubProvider` was asked for, copied out of the borrowed request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub had_schema: bool,
    pub max_output_tokens: Option<u32>,
}

/// Provider that replies with canned text or a network error.
pub struct StubProvider {
    reply: Result<String, String>,
    last: Mutex<Option<Seen>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            last: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            last: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<Seen> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        *self.last.lock().unwrap() = Some(Seen {
            model: request.model.to_string(),
            system_prompt: request.system_prompt.to_string(),
            user_prompt: request.user_prompt.to_string(),
            had_schema: request.output_schema.is_some(),
            max_output_tokens: request.max_output_tokens,
        });
        self.reply.clone().map_err(ProviderError::Network)
    }
}

/// Generator that counts calls and returns a fixed outcome.
pub struct StubGenerator {
    reply: Result<MealPlanResult, String>,
    calls: AtomicUsize,
    last: Mutex<Option<PlanRequest>>,
}

impl StubGenerator {
    pub fn succeeding(result: MealPlanResult) -> Self {
        Self {
            reply: Ok(result),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<PlanRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &PlanRequest) -> Result<MealPlanResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        self.reply.clone().map_err(|message| ProviderError::Api {
            status: 500,
            message,
        })
    }
}

/// A form that passes validation, body metrics left empty.
pub fn valid_form() -> FormValues {
    FormValues {
        dietary_preferences: "Vegetarian".to_string(),
        goals: "Weight loss".to_string(),
        restrictions: "Peanuts".to_string(),
        budget: "150000".to_string(),
        ..Default::default()
    }
}

pub fn sample_result() -> MealPlanResult {
    MealPlanResult {
        meal_plan: "## Week 1\n### Monday\n**Breakfast**\n- Oatmeal with banana".to_string(),
        shopping_list: "Grains:\n- Oats 1 kg\n- Rice 2 kg".to_string(),
        cost_estimate: "$ 120,000 COP".to_string(),
    }
}

/// Creates a test App in the Idle state.
pub fn test_app() -> App {
    App::new("test-model".to_string(), "stub".to_string(), Currency::Cop)
}
