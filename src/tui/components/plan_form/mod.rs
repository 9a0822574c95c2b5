//! # PlanForm Component
//!
//! The preferences form: eight labelled single-line fields and a submit hint.
//!
//! ## State Management
//!
//! Field buffers and focus are persistent state (`PlanFormState`, kept in
//! `TuiState`). Whether a request is in flight is a prop from `App`. The form
//! does not validate; it hands raw `FormValues` to the core on Enter.

mod text_field;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::form::{Field, FormValues};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_field::TextField;

/// Rows per field: label + value.
const FIELD_ROWS: u16 = 2;
/// Borders plus the submit hint row.
const CHROME_ROWS: u16 = 3;
const VALUE_PREFIX: &str = "› ";

/// High-level events emitted by the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit(FormValues),
    Edited,
}

pub struct PlanFormState {
    fields: Vec<TextField>,
    /// Index into `Field::ALL`
    focus: usize,
}

impl PlanFormState {
    /// Empty form with the budget prefilled.
    pub fn new(default_budget: f64) -> Self {
        let initial = FormValues::with_budget(default_budget);
        Self {
            fields: Field::ALL
                .iter()
                .map(|&f| TextField::new(initial.get(f)))
                .collect(),
            focus: 0,
        }
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    /// Snapshot of the current buffers.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for (field, input) in Field::ALL.iter().zip(&self.fields) {
            *values.get_mut(*field) = input.text().to_string();
        }
        values
    }

    /// Rows needed to show every field without clipping.
    pub fn height() -> u16 {
        Field::ALL.len() as u16 * FIELD_ROWS + CHROME_ROWS
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    fn current(&mut self) -> &mut TextField {
        &mut self.fields[self.focus]
    }
}

impl EventHandler for PlanFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(FormEvent::Submit(self.values())),
            TuiEvent::NextField => {
                self.focus_next();
                None
            }
            TuiEvent::PrevField => {
                self.focus_prev();
                None
            }
            TuiEvent::InputChar(c) => {
                self.current().insert_char(*c);
                Some(FormEvent::Edited)
            }
            TuiEvent::Paste(text) => {
                self.current().insert_str(text);
                Some(FormEvent::Edited)
            }
            TuiEvent::Backspace => self.current().backspace().then_some(FormEvent::Edited),
            TuiEvent::Delete => self.current().delete().then_some(FormEvent::Edited),
            TuiEvent::CursorLeft => {
                self.current().move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.current().move_right();
                None
            }
            TuiEvent::Home => {
                self.current().move_home();
                None
            }
            TuiEvent::End => {
                self.current().move_end();
                None
            }
            _ => None,
        }
    }
}

/// Transient view over `PlanFormState`, created each frame.
pub struct PlanForm<'a> {
    pub state: &'a PlanFormState,
    pub is_loading: bool,
}

impl<'a> PlanForm<'a> {
    pub fn new(state: &'a PlanFormState, is_loading: bool) -> Self {
        Self { state, is_loading }
    }

    fn label_line(field: Field, focused: bool) -> Line<'static> {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(field.label(), style)];
        if field.is_optional() {
            spans.push(Span::styled(
                " (optional)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl<'a> Component for PlanForm<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Your Preferences ")
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(FIELD_ROWS); Field::ALL.len()];
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        let value_width = inner.width.saturating_sub(VALUE_PREFIX.len() as u16);

        for (i, (field, input)) in Field::ALL.iter().zip(&self.state.fields).enumerate() {
            let row = rows[i];
            let focused = i == self.state.focus;
            let marker_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let (visible, cursor_col) = input.visible(value_width.saturating_sub(1));
            let value = if input.text().is_empty() {
                Span::styled(
                    field.placeholder(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::raw(visible.to_string())
            };

            let lines = vec![
                Self::label_line(*field, focused),
                Line::from(vec![Span::styled(VALUE_PREFIX, marker_style), value]),
            ];
            frame.render_widget(Paragraph::new(lines), row);

            if focused && !self.is_loading && row.height >= FIELD_ROWS {
                let x = row.x + VALUE_PREFIX.len() as u16 + cursor_col;
                if x < row.x + row.width {
                    frame.set_cursor_position((x, row.y + 1));
                }
            }
        }

        let hint = if self.is_loading {
            Span::styled("Generating...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "[Enter] Generate Meal Plan",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };
        if let Some(hint_row) = rows.last() {
            frame.render_widget(Paragraph::new(Line::from(hint)), *hint_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(form: &mut PlanFormState, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn render_to_string(form: &PlanFormState, is_loading: bool) -> String {
        let backend = TestBackend::new(60, PlanFormState::height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PlanForm::new(form, is_loading).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_budget_is_prefilled() {
        let form = PlanFormState::new(150000.0);
        let values = form.values();
        assert_eq!(values.budget, "150000");
        assert!(values.dietary_preferences.is_empty());
        assert_eq!(form.focused(), Field::ALL[0]);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = PlanFormState::new(150000.0);
        type_text(&mut form, "Vegan");
        form.handle_event(&TuiEvent::NextField);
        type_text(&mut form, "Eat better");

        let values = form.values();
        assert_eq!(values.get(Field::ALL[0]), "Vegan");
        assert_eq!(values.get(Field::ALL[1]), "Eat better");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = PlanFormState::new(1.0);
        form.handle_event(&TuiEvent::PrevField);
        assert_eq!(form.focused(), Field::ALL[Field::ALL.len() - 1]);
        form.handle_event(&TuiEvent::NextField);
        assert_eq!(form.focused(), Field::ALL[0]);
    }

    #[test]
    fn test_submit_emits_current_values() {
        let mut form = PlanFormState::new(150000.0);
        type_text(&mut form, "Vegetarian");
        match form.handle_event(&TuiEvent::Submit) {
            Some(FormEvent::Submit(values)) => {
                assert_eq!(values.get(Field::ALL[0]), "Vegetarian");
                assert_eq!(values.budget, "150000");
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_backspace_on_empty_field_emits_nothing() {
        let mut form = PlanFormState::new(1.0);
        assert_eq!(form.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_render_shows_labels_placeholders_and_hint() {
        let form = PlanFormState::new(150000.0);
        let text = render_to_string(&form, false);
        assert!(text.contains("Your Preferences"));
        assert!(text.contains(Field::ALL[0].label()));
        assert!(text.contains(Field::ALL[0].placeholder()));
        assert!(text.contains("150000"));
        assert!(text.contains("(optional)"));
        assert!(text.contains("Generate Meal Plan"));
    }

    #[test]
    fn test_render_while_loading_shows_generating() {
        let form = PlanFormState::new(150000.0);
        let text = render_to_string(&form, true);
        assert!(text.contains("Generating..."));
        assert!(!text.contains("Generate Meal Plan"));
    }
}
