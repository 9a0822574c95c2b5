pub mod generator;
pub mod provider;
pub mod providers;
mod sse;
pub mod types;

pub use generator::{GeneratorSettings, LlmPlanGenerator, PlanGenerator};
pub use provider::{CompletionProvider, CompletionRequest, OutputSchema, ProviderError};
pub use providers::{LmStudioProvider, OpenRouterProvider, build_provider};
pub use types::{Effort, MealPlanResult};
