//! Result-pane content for the states that have no plan to show:
//! a hint while idle, a spinner while loading, a red box on failure.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const LOADING_TEXT: &str = "Creating your personalized plan...";

pub enum StatusPanel<'a> {
    Idle,
    Loading { spinner_frame: usize },
    Failure { message: &'a str },
}

impl StatusPanel<'_> {
    fn centered(area: Rect, height: u16) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        row
    }
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            StatusPanel::Idle => {
                let hint = Paragraph::new(vec![
                    Line::from(Span::styled(
                        "No plan yet",
                        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Fill in the form and press Enter",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .alignment(Alignment::Center);
                frame.render_widget(hint, Self::centered(area, 2));
            }
            StatusPanel::Loading { spinner_frame } => {
                let glyph = SPINNER[*spinner_frame % SPINNER.len()];
                let line = Line::from(vec![
                    Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
                    Span::styled(LOADING_TEXT, Style::default().fg(Color::Yellow)),
                ]);
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center),
                    Self::centered(area, 1),
                );
            }
            StatusPanel::Failure { message } => {
                let red = Style::default().fg(Color::Red);
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Error ")
                    .border_style(red)
                    .title_style(red.add_modifier(Modifier::BOLD));
                let paragraph = Paragraph::new(*message)
                    .style(red)
                    .block(block)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, Self::centered(area, 5));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Rendered text plus the number of red cells.
    fn render(mut panel: StatusPanel<'_>) -> (String, usize) {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect();
        let red = buffer.content().iter().filter(|c| c.fg == Color::Red).count();
        (text, red)
    }

    #[test]
    fn test_loading_shows_spinner_text() {
        let (text, _) = render(StatusPanel::Loading { spinner_frame: 3 });
        assert!(text.contains(LOADING_TEXT));
        assert!(text.contains(SPINNER[3]));
    }

    #[test]
    fn test_failure_is_a_red_box() {
        let message = "An unexpected error occurred. Please try again later.";
        let (text, red_cells) = render(StatusPanel::Failure { message });
        assert!(text.contains("Error"));
        assert!(text.contains("An unexpected error occurred."));
        assert!(red_cells > 0);
    }

    #[test]
    fn test_idle_hint() {
        let (text, _) = render(StatusPanel::Idle);
        assert!(text.contains("No plan yet"));
    }
}
