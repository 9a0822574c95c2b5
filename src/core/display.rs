//! # Response Parser
//!
//! Turns the free-form text a model returns for the meal plan and the
//! shopping list into a flat sequence of [`DisplayLine`] values.
//!
//! Classification is line-based and checked in a fixed priority order
//! against the trimmed line:
//!
//! ```text
//! "### Day 1"        → Heading(H3, "Day 1")
//! "## Week 1"        → Heading(H2, "Week 1")
//! "**Breakfast**"    → Heading(H4, "Breakfast")
//! "Dairy:"           → Heading(H4, "Dairy:")
//! "- 2 Onions"       → BulletItem("2 Onions")
//! "anything else"    → Paragraph("anything else")
//! ```
//!
//! Blank lines are dropped. Anything unrecognized falls back to a paragraph,
//! so parsing never fails on unexpected model output.

/// Heading depth. Only the three levels the classifier can produce exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

/// One classified, renderable unit derived from a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    Heading { level: HeadingLevel, text: String },
    BulletItem(String),
    Paragraph(String),
}

impl DisplayLine {
    /// The text shown to the user, with any matched marker already stripped.
    pub fn text(&self) -> &str {
        match self {
            DisplayLine::Heading { text, .. } => text,
            DisplayLine::BulletItem(text) => text,
            DisplayLine::Paragraph(text) => text,
        }
    }

    fn heading(level: HeadingLevel, text: &str) -> Self {
        DisplayLine::Heading {
            level,
            text: text.to_string(),
        }
    }
}

const BOLD_MARKER: &str = "**";

/// Parse a block of text into display lines, one per non-blank line.
pub fn parse(content: &str) -> Vec<DisplayLine> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify)
        .collect()
}

/// Classify a single, already trimmed, non-blank line.
pub fn classify(line: &str) -> DisplayLine {
    if let Some(rest) = line.strip_prefix("### ") {
        return DisplayLine::heading(HeadingLevel::H3, rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return DisplayLine::heading(HeadingLevel::H2, rest);
    }
    if line.len() >= 2 * BOLD_MARKER.len()
        && line.starts_with(BOLD_MARKER)
        && line.ends_with(BOLD_MARKER)
    {
        let inner = &line[BOLD_MARKER.len()..line.len() - BOLD_MARKER.len()];
        return DisplayLine::heading(HeadingLevel::H4, inner);
    }
    if line.ends_with(':') {
        return DisplayLine::heading(HeadingLevel::H4, line);
    }
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return DisplayLine::BulletItem(rest.to_string());
    }
    DisplayLine::Paragraph(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(level: HeadingLevel, text: &str) -> DisplayLine {
        DisplayLine::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn bullet(text: &str) -> DisplayLine {
        DisplayLine::BulletItem(text.to_string())
    }

    fn para(text: &str) -> DisplayLine {
        DisplayLine::Paragraph(text.to_string())
    }

    /// Generates one test per single-line classification case.
    macro_rules! test_classify {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(classify($input), $expected);
                }
            )+
        };
    }

    test_classify! {
        test_classify_h3: "### Day 1" => h(HeadingLevel::H3, "Day 1"),
        test_classify_h2: "## Week 1" => h(HeadingLevel::H2, "Week 1"),
        test_classify_bold_heading: "**Breakfast**" => h(HeadingLevel::H4, "Breakfast"),
        test_classify_bold_wins_over_colon: "**Dairy:**" => h(HeadingLevel::H4, "Dairy:"),
        test_classify_colon_heading_keeps_colon: "Fruits and Vegetables:" => h(HeadingLevel::H4, "Fruits and Vegetables:"),
        test_classify_dash_bullet: "- 2 Onions" => bullet("2 Onions"),
        test_classify_star_bullet: "* 1 dozen Eggs" => bullet("1 dozen Eggs"),
        test_classify_plain_paragraph: "Total: $10" => para("Total: $10"),
        test_classify_hashes_without_space: "###Day" => para("###Day"),
        test_classify_h4_markdown_is_paragraph: "#### Snack" => para("#### Snack"),
        test_classify_bare_bold_marker_too_short: "***" => para("***"),
        test_classify_empty_bold_is_heading: "****" => h(HeadingLevel::H4, ""),
        test_classify_dash_without_space: "-2 Onions" => para("-2 Onions"),
        test_classify_bullet_ending_in_colon_is_heading: "- Lunch:" => h(HeadingLevel::H4, "- Lunch:"),
        test_classify_unicode_text: "## Menú semanal" => h(HeadingLevel::H2, "Menú semanal"),
    }

    #[test]
    fn test_parse_heading_bullet_paragraph() {
        let lines = parse("## Week 1\n- 2 Onions\nTotal: $10");
        assert_eq!(
            lines,
            vec![
                h(HeadingLevel::H2, "Week 1"),
                bullet("2 Onions"),
                para("Total: $10"),
            ]
        );
    }

    #[test]
    fn test_parse_category_then_item() {
        let lines = parse("Dairy:\n- 1 gallon Milk");
        assert_eq!(
            lines,
            vec![h(HeadingLevel::H4, "Dairy:"), bullet("1 gallon Milk")]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_drops_blank_and_whitespace_lines() {
        let lines = parse("\n   \n## Plan\n\t\n\n- Rice\n  \n");
        assert_eq!(lines, vec![h(HeadingLevel::H2, "Plan"), bullet("Rice")]);
        assert!(lines.iter().all(|l| !l.text().is_empty()));
    }

    #[test]
    fn test_parse_trims_indentation_and_crlf() {
        let lines = parse("  ### Monday  \r\n    - Arepa con queso\r\n");
        assert_eq!(
            lines,
            vec![h(HeadingLevel::H3, "Monday"), bullet("Arepa con queso")]
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "## Week 1\n**Monday**\nBreakfast:\n- Eggs\n* Coffee\nEnjoy!";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_parse_one_line_per_non_blank_input_line() {
        let text = "a\n\nb\n- c\n\n\n### d";
        let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(parse(text).len(), non_blank);
    }

    #[test]
    fn test_heading_depths() {
        assert_eq!(HeadingLevel::H2.depth(), 2);
        assert_eq!(HeadingLevel::H3.depth(), 3);
        assert_eq!(HeadingLevel::H4.depth(), 4);
    }
}
