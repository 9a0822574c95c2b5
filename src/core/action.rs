//! # Actions
//!
//! Everything that can happen in NutriPlan becomes an `Action`.
//! User presses Enter on the form? That's `Action::Submit(values)`.
//! The generator answers? That's `Action::PlanFinished(outcome)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect`. No I/O here: the TUI executes effects.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! View-state transitions:
//!
//! ```text
//!   Idle ──Submit──▶ Loading ──PlanFinished(Ready)──▶ Success
//!     ▲                │  ▲                             │
//!     │                │  └──────────Submit─────────────┤
//!     │                └────PlanFinished(Failed)──▶ Failure
//!     └──────────────Reset──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::core::form::FormValues;
use crate::core::orchestrator::PlanOutcome;
use crate::core::state::{App, ViewState};

#[derive(Debug)]
pub enum Action {
    /// User submitted the form.
    Submit(FormValues),
    /// The spawned submission resolved.
    PlanFinished(PlanOutcome),
    /// Clear the result or error and go back to Idle.
    Reset,
    Quit,
}

/// Side effect requested by `update`, executed by the adapter.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Run `orchestrator::submit` with these values in the background.
    SpawnRequest(FormValues),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(values) => {
            if app.view.is_loading() {
                warn!("Submission ignored: a plan is already being generated");
                app.status_message = "Still working on the current plan...".to_string();
                return Effect::None;
            }
            app.view = ViewState::Loading;
            app.submissions += 1;
            app.status_message = "Generating plan...".to_string();
            info!("Submission #{} started", app.submissions);
            Effect::SpawnRequest(values)
        }
        Action::PlanFinished(outcome) => {
            if !app.view.is_loading() {
                warn!(
                    "Ignoring finished plan while {} (no request in flight)",
                    app.view.label()
                );
                return Effect::None;
            }
            match outcome {
                PlanOutcome::Ready(result) => {
                    app.view = ViewState::Success(result);
                    app.status_message = "Plan ready".to_string();
                }
                PlanOutcome::Failed(failure) => {
                    app.view = ViewState::Failure(failure.user_message().to_string());
                    app.status_message = "Generation failed".to_string();
                }
            }
            Effect::None
        }
        Action::Reset => {
            if app.view.is_loading() {
                warn!("Reset ignored while loading");
                return Effect::None;
            }
            app.view = ViewState::Idle;
            app.status_message = "Ready for a new plan".to_string();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
