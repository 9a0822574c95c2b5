//! Single-line editable text with a byte-offset cursor.
//!
//! The cursor always sits on a char boundary. Horizontal scrolling is done
//! in display columns (via `unicode-width`) so wide characters don't push the
//! cursor off screen.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    buffer: String,
    /// Byte offset into `buffer` (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Paste without line breaks; the field is single-line.
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &flat);
        self.cursor += flat.len();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let next = self.next_boundary();
        self.buffer.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    /// The slice that fits in `width` columns with the cursor visible, and
    /// the cursor's column within that slice.
    pub fn visible(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }

        // Drop leading chars until the cursor column fits
        let mut start = 0;
        let mut cursor_col = self.buffer[..self.cursor].width();
        let mut chars = self.buffer.char_indices();
        while cursor_col >= width {
            match chars.next() {
                Some((i, c)) => {
                    start = i + c.len_utf8();
                    cursor_col -= c.width().unwrap_or(0);
                }
                None => break,
            }
        }

        // Then cut the tail at the width limit
        let mut end = start;
        let mut used = 0;
        for (i, c) in self.buffer[start..].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + i + c.len_utf8();
        }

        (&self.buffer[start..end], cursor_col as u16)
    }
}
