use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{App, ViewState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{PlanForm, PlanFormState, PlanView, StatusPanel, TitleBar};

/// Below this width the form stacks above the result pane.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Enter", "generate"),
    ("Ctrl+T", "switch tab"),
    ("PgUp/PgDn", "scroll"),
    ("Ctrl+N", "new plan"),
    ("Esc", "quit"),
];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(
        app.model_name.clone(),
        app.provider_name.clone(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let (form_area, result_area) = split_main(main_area);
    PlanForm::new(&tui.form, app.view.is_loading()).render(frame, form_area);
    draw_result(frame, result_area, app, tui, spinner_frame);

    frame.render_widget(footer_line(chrono::Local::now().year()), footer_area);
}

/// Form on the left when wide, on top when narrow.
fn split_main(area: Rect) -> (Rect, Rect) {
    use Constraint::{Length, Min, Percentage};
    if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let [form, result] = Layout::horizontal([Percentage(40), Min(0)]).areas(area);
        (form, result)
    } else {
        let [form, result] =
            Layout::vertical([Length(PlanFormState::height()), Min(0)]).areas(area);
        (form, result)
    }
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match &app.view {
        ViewState::Idle => StatusPanel::Idle.render(frame, area),
        ViewState::Loading => StatusPanel::Loading { spinner_frame }.render(frame, area),
        ViewState::Failure(message) => StatusPanel::Failure {
            message: message.as_str(),
        }
        .render(frame, area),
        ViewState::Success(result) => {
            PlanView::new(&mut tui.plan_view, result, app.currency).render(frame, area)
        }
    }
}

fn footer_line(year: i32) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }
    spans.push(Span::styled(format!("   © {year} NutriPlan"), text_style));
    Line::from(spans)
}
