//! Fixed-length activation code input widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-box-per-digit code entry, in the style of web activation forms.
#[derive(Debug, Clone)]
pub struct CodeInput {
    digits: String,
    length: usize,
}

impl CodeInput {
    /// Creates an input for codes of the given length.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            digits: String::with_capacity(length),
            length,
        }
    }

    /// Returns the expected code length.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the digits entered so far.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Returns whether all digits have been entered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.len() == self.length
    }

    /// Accepts one character; non-digits and overflow are ignored.
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.digits.len() < self.length {
            self.digits.push(c);
        }
    }

    /// Removes the last entered digit.
    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Clears all digits.
    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

impl Widget for &CodeInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        #[allow(clippy::cast_possible_truncation)]
        let constraints =
            vec![Constraint::Length(5); self.length]
                .into_iter()
                .chain([Constraint::Fill(1)]);
        let cells = Layout::horizontal(constraints).split(area);

        for (i, cell) in cells.iter().take(self.length).enumerate() {
            let filled = i < self.digits.len();
            let active = i == self.digits.len();

            let border_style = if active {
                Style::default().fg(Color::Cyan)
            } else if filled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(*cell);
            block.render(*cell, buf);

            let digit = self
                .digits
                .chars()
                .nth(i)
                .map_or_else(String::new, |c| c.to_string());
            Paragraph::new(digit)
                .style(Style::default().fg(Color::White))
                .centered()
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_up_to_length() {
        let mut input = CodeInput::new(6);
        for c in "1234567".chars() {
            input.input_char(c);
        }

        assert_eq!(input.value(), "123456");
        assert!(input.is_complete());
    }

    #[test]
    fn test_rejects_non_digits() {
        let mut input = CodeInput::new(6);
        input.input_char('a');
        input.input_char('1');
        input.input_char('-');

        assert_eq!(input.value(), "1");
        assert!(!input.is_complete());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut input = CodeInput::new(6);
        input.input_char('1');
        input.input_char('2');

        input.backspace();
        assert_eq!(input.value(), "1");

        input.clear();
        assert!(input.value().is_empty());
    }
}
