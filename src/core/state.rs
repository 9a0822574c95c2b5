//! # Application State
//!
//! Core business state for NutriPlan. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: ViewState               // idle / loading / plan / error
//! ├── status_message: String        // status bar text
//! ├── model_name: String            // current model
//! ├── provider_name: String         // openrouter / lmstudio
//! ├── currency: Currency            // budget + cost formatting
//! ├── default_budget: f64           // prefilled in the form
//! └── submissions: u32              // requests started this run
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::currency::Currency;
use crate::inference::MealPlanResult;

/// What the result pane currently shows. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(MealPlanResult),
    Failure(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Success(_) => "success",
            ViewState::Failure(_) => "failure",
        }
    }
}

pub struct App {
    pub view: ViewState,
    pub status_message: String,
    pub model_name: String,
    pub provider_name: String,
    pub currency: Currency,
    pub default_budget: f64,
    pub submissions: u32,
}

impl App {
    pub fn new(model_name: String, provider_name: String, currency: Currency) -> Self {
        Self {
            view: ViewState::Idle,
            status_message: String::from("Fill in your preferences and press Enter"),
            model_name,
            provider_name,
            currency,
            default_budget: crate::core::config::DEFAULT_BUDGET,
            submissions: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(
            config.model_name.clone(),
            config.provider.clone(),
            config.currency,
        );
        app.default_budget = config.default_budget;
        app
    }
}
