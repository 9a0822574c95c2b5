//! # Core Application Logic
//!
//! This module contains NutriPlan's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │                             │
//!                    │  • form (validate input)    │
//!                    │  • orchestrator (1 request) │
//!                    │  • state + action (reducer) │
//!                    │  • display (text → lines)   │
//!                    │  • currency (cost format)   │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!          ┌────────────┐                      ┌────────────┐
//!          │    TUI     │                      │ inference  │
//!          │  Adapter   │                      │ (LLM call) │
//!          │ (ratatui)  │                      │            │
//!          └────────────┘                      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `ViewState` of the result pane
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`orchestrator`]: Validate, generate once, map failures to messages
//! - [`display`]: Plan text to `DisplayLine`s

pub mod action;
pub mod config;
pub mod currency;
pub mod display;
pub mod form;
pub mod orchestrator;
pub mod prompt;
pub mod state;
