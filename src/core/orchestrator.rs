//! # Request Orchestrator
//!
//! One submission, start to finish: validate the form, call the generator
//! exactly once, and fold whatever happens into a `PlanOutcome`.
//!
//! Failures are reduced to two fixed user-facing messages. The underlying
//! error is logged but never reaches the view state.

use std::fmt;

use log::{error, info, warn};

use crate::core::currency::Currency;
use crate::core::form::{FormValues, ValidationError, validate};
use crate::inference::{MealPlanResult, PlanGenerator, ProviderError};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please check the form fields.";
pub const GENERATION_FAILED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Debug)]
pub enum PlanFailure {
    Validation(ValidationError),
    Generation(ProviderError),
}

impl PlanFailure {
    /// The only text the user ever sees for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            PlanFailure::Validation(_) => INVALID_INPUT_MESSAGE,
            PlanFailure::Generation(_) => GENERATION_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFailure::Validation(e) => write!(f, "validation failed: {e}"),
            PlanFailure::Generation(e) => write!(f, "generation failed: {e}"),
        }
    }
}

impl std::error::Error for PlanFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanFailure::Validation(e) => Some(e),
            PlanFailure::Generation(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum PlanOutcome {
    Ready(MealPlanResult),
    Failed(PlanFailure),
}

/// Validate `values` and, if they pass, run one generation.
pub async fn submit(
    generator: &dyn PlanGenerator,
    values: &FormValues,
    currency: Currency,
) -> PlanOutcome {
    let request = match validate(values, currency) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected form input: {}", e);
            return PlanOutcome::Failed(PlanFailure::Validation(e));
        }
    };

    info!("Requesting meal plan from {}", generator.name());
    match generator.generate(&request).await {
        Ok(result) => {
            info!(
                "Meal plan received: {} plan bytes, {} list bytes",
                result.meal_plan.len(),
                result.shopping_list.len()
            );
            PlanOutcome::Ready(result)
        }
        Err(e) => {
            error!("Meal plan generation failed: {}", e);
            PlanOutcome::Failed(PlanFailure::Generation(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubGenerator, sample_result, valid_form};

    #[tokio::test]
    async fn test_valid_input_calls_generator_once() {
        let generator = StubGenerator::succeeding(sample_result());
        let outcome = submit(&generator, &valid_form(), Currency::Cop).await;

        assert!(matches!(outcome, PlanOutcome::Ready(ref r) if *r == sample_result()));
        assert_eq!(generator.calls(), 1);
        let seen = generator.last_request().unwrap();
        assert_eq!(seen.dietary_preferences, "Vegetarian");
        assert_eq!(seen.currency, Currency::Cop);
    }

    #[tokio::test]
    async fn test_negative_budget_never_calls_generator() {
        let generator = StubGenerator::succeeding(sample_result());
        let mut form = valid_form();
        form.budget = "-5".to_string();

        let outcome = submit(&generator, &form, Currency::Cop).await;

        match outcome {
            PlanOutcome::Failed(failure) => {
                assert!(matches!(failure, PlanFailure::Validation(_)));
                assert_eq!(failure.user_message(), INVALID_INPUT_MESSAGE);
            }
            PlanOutcome::Ready(_) => panic!("expected validation failure"),
        }
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generator_error_maps_to_generic_message() {
        let generator = StubGenerator::failing("quota exceeded for key sk-secret");
        let outcome = submit(&generator, &valid_form(), Currency::Cop).await;

        match outcome {
            PlanOutcome::Failed(failure) => {
                assert_eq!(failure.user_message(), GENERATION_FAILED_MESSAGE);
                assert!(!failure.user_message().contains("sk-secret"));
                // The detail is still available for logging
                assert!(failure.to_string().contains("quota exceeded"));
            }
            PlanOutcome::Ready(_) => panic!("expected generation failure"),
        }
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_failure_source_is_preserved() {
        use std::error::Error;
        let failure = PlanFailure::Generation(ProviderError::Network("timeout".to_string()));
        assert_eq!(
            failure.source().map(|s| s.to_string()),
            Some("network error: timeout".to_string())
        );
    }
}
