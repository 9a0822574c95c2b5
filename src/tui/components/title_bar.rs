//! # TitleBar Component
//!
//! Single-line header: app name, active model and provider, status message.
//!
//! Stateless. All props come from `App`:
//!
//! 1. **Status message**: `"NutriPlan (model: x via openrouter) | Plan ready"`
//! 2. **Default**: `"NutriPlan (model: x via openrouter)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub model_name: String,
    pub provider_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(model_name: String, provider_name: String, status_message: String) -> Self {
        Self {
            model_name,
            provider_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "NutriPlan",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " (model: {} via {})",
                self.model_name, self.provider_name
            )),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "google/gemini-2.0-flash-001".to_string(),
            "openrouter".to_string(),
            "Plan ready".to_string(),
        );
        let text = render_to_string(&mut title_bar);
        assert!(text.contains("NutriPlan"));
        assert!(text.contains("google/gemini-2.0-flash-001 via openrouter"));
        assert!(text.contains("| Plan ready"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("local".to_string(), "lmstudio".to_string(), String::new());
        let text = render_to_string(&mut title_bar);
        assert!(text.contains("(model: local via lmstudio)"));
        assert!(!text.contains('|'));
    }
}
