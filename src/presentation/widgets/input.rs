//! Single-line form field widget.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What kind of credential field this is.
///
/// The kind drives input filtering and on-screen masking: email fields
/// silently drop whitespace (the backend rejects emails containing it
/// anyway), secret fields render as bullets and stay out of debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Plain,
    Email,
    Secret,
}

/// One field of a login or registration form.
#[derive(Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    kind: FieldKind,
    placeholder: String,
    label: String,
}

impl TextInput {
    fn with_kind(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            kind,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Creates a plain text field.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Plain)
    }

    /// Creates an email field; whitespace input is ignored.
    #[must_use]
    pub fn email(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Email)
    }

    /// Creates a masked secret field.
    #[must_use]
    pub fn secret(label: impl Into<String>) -> Self {
        Self::with_kind(label, FieldKind::Secret)
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts a character at the cursor.
    ///
    /// Control characters are dropped for every kind; email fields also
    /// drop whitespace.
    pub fn input_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.kind == FieldKind::Email && c.is_whitespace() {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((offset, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(offset);
            self.cursor = offset;
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((offset, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = offset;
        }
    }

    /// Moves cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.kind == FieldKind::Secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TextInput");
        s.field("label", &self.label);
        if self.kind == FieldKind::Secret {
            s.field("value", &"<redacted>");
        } else {
            s.field("value", &self.value);
        }
        s.finish()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.display_text()).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + self.cursor_column() as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}
