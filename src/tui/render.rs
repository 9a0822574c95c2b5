//! `DisplayLine` → ratatui `Text` renderer.
//!
//! One styled line per display line, in order. Headings get their weight
//! from the level; bullets get a glyph. Nothing is merged or reordered.
//! The only extra rows are blank spacers above headings.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::core::display::{self, DisplayLine, HeadingLevel};

const BULLET: &str = "  • ";

/// Parse `content` and render it. Empty content renders as empty `Text`.
pub fn render(content: &str, accent: Color) -> Text<'static> {
    render_lines(&display::parse(content), accent)
}

/// Render each `DisplayLine` as exactly one styled `Line`.
///
/// Every heading except the first is preceded by an empty `Line` as a top
/// margin, so the output can be longer than `lines`. Dropping the empty
/// rows gives back one line per element, in input order.
pub fn render_lines(lines: &[DisplayLine], accent: Color) -> Text<'static> {
    let mut text = Text::default();
    for (i, line) in lines.iter().enumerate() {
        // Spacer rows carry no content of their own
        if i > 0 && matches!(line, DisplayLine::Heading { .. }) {
            text.lines.push(Line::default());
        }
        text.lines.push(render_line(line, accent));
    }
    text
}

fn render_line(line: &DisplayLine, accent: Color) -> Line<'static> {
    match line {
        DisplayLine::Heading { level, text } => {
            Line::from(Span::styled(text.clone(), heading_style(*level, accent)))
        }
        DisplayLine::BulletItem(text) => Line::from(vec![
            Span::styled(BULLET, Style::default().fg(accent)),
            Span::raw(text.clone()),
        ]),
        DisplayLine::Paragraph(text) => Line::from(Span::raw(text.clone())),
    }
}

fn heading_style(level: HeadingLevel, accent: Color) -> Style {
    let base = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H2 => base.add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H3 => base,
        HeadingLevel::H4 => base.add_modifier(Modifier::ITALIC),
    }
}
