//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, model and status message
//! - `StatusPanel`: idle hint, loading spinner, or error box
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `PlanForm` / `PlanFormState`: the eight preference fields
//! - `PlanView` / `PlanViewState`: tabbed, scrollable meal plan + cost
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App` themselves:
//!
//! ```rust,ignore
//! PlanView::new(&mut tui.plan_view, result, app.currency).render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── status_panel.rs
//! ├── plan_view.rs
//! └── plan_form/       (form + single-line text field)
//! ```

pub mod plan_form;
pub mod plan_view;
mod status_panel;
mod title_bar;

pub use plan_form::{FormEvent, PlanForm, PlanFormState};
pub use plan_view::{PlanView, PlanViewState};
pub use status_panel::StatusPanel;
pub use title_bar::TitleBar;
