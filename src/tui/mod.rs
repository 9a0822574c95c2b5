//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or when a
//!   background task reports back.
//!
//! ## Effects
//!
//! `Effect::SpawnRequest` starts one tokio task running
//! `orchestrator::submit`. Its outcome comes back as `Action::PlanFinished`
//! over an mpsc channel, so only this loop ever touches `App`.

mod component;
mod components;
mod event;
pub mod render;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::currency::Currency;
use crate::core::form::FormValues;
use crate::core::orchestrator;
use crate::core::state::{App, ViewState};
use crate::inference::PlanGenerator;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, PlanFormState, PlanViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: PlanFormState,
    /// Reset whenever a new plan arrives
    pub plan_view: PlanViewState,
}

impl TuiState {
    pub fn new(default_budget: f64) -> Self {
        Self {
            form: PlanFormState::new(default_budget),
            plan_view: PlanViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event::map_event
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(mut app: App, generator: Arc<dyn PlanGenerator>) -> std::io::Result<()> {
    let mut tui = TuiState::new(app.default_budget);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = app.view.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = dispatch_event(&app, &mut tui, &event) {
                should_quit |= apply(&mut app, &mut tui, action, &generator, &tx);
            }
        }

        // Outcomes from background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply(&mut app, &mut tui, action, &generator, &tx);
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("NutriPlan shutting down");
    result
}

/// Route one terminal event. Returns an action when the core must see it.
fn dispatch_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Reset => Some(Action::Reset),
        TuiEvent::SwitchTab
        | TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            if matches!(app.view, ViewState::Success(_)) {
                tui.plan_view.handle_event(event);
            }
            None
        }
        _ => match tui.form.handle_event(event) {
            Some(FormEvent::Submit(values)) => Some(Action::Submit(values)),
            Some(FormEvent::Edited) | None => None,
        },
    }
}

/// Run `update` and execute the effect. Returns true when the app should quit.
fn apply(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    generator: &Arc<dyn PlanGenerator>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let was_loading = app.view.is_loading();
    let effect = update(app, action);

    // Fresh plan: start on the first tab, scrolled to the top
    if was_loading && matches!(app.view, ViewState::Success(_)) {
        tui.plan_view = PlanViewState::new();
    }

    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnRequest(values) => {
            spawn_request(generator.clone(), values, app.currency, tx.clone());
            false
        }
    }
}

fn spawn_request(
    generator: Arc<dyn PlanGenerator>,
    values: FormValues,
    currency: Currency,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning plan request via {}", generator.name());
    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = orchestrator::submit(generator.as_ref(), &values, currency).await;
        info!(
            "Plan request finished in {}ms",
            started.elapsed().as_millis()
        );
        if tx.send(Action::PlanFinished(outcome)).is_err() {
            warn!("Failed to send plan outcome: receiver dropped");
        }
    });
}
