//! Account activation screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::ActivationOutcome;
use crate::presentation::widgets::CodeInput;

const CODE_LENGTH: usize = 6;

/// Account activation screen UI.
///
/// Completing the code entry triggers exactly one confirmation attempt;
/// afterwards the screen only offers the way back to login.
pub struct ActivateScreen {
    code_input: CodeInput,
    message: String,
    is_okay: bool,
    submitted: bool,
    submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivateAction {
    None,
    /// Code entry completed, confirm it.
    Submit(String),
    /// Navigate back to the login screen.
    RedirectToLogin,
}

impl ActivateScreen {
    /// Creates new activation screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            code_input: CodeInput::new(CODE_LENGTH),
            message: String::new(),
            is_okay: true,
            submitted: false,
            submitting: false,
        }
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the last attempt succeeded.
    #[must_use]
    pub const fn is_okay(&self) -> bool {
        self.is_okay
    }

    /// Returns whether an attempt has completed.
    #[must_use]
    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    /// Marks the confirmation call as in flight.
    pub fn set_submitting(&mut self) {
        self.submitting = true;
    }

    /// Applies the outcome of the confirmation call.
    pub fn apply_outcome(&mut self, outcome: &ActivationOutcome) {
        self.message = outcome.message.to_string();
        self.is_okay = outcome.is_okay;
        self.submitted = true;
        self.submitting = false;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ActivateAction {
        if self.submitting {
            return ActivateAction::None;
        }

        if self.submitted {
            // One attempt per code entry; the only remaining action leads
            // back to login.
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => ActivateAction::RedirectToLogin,
                _ => ActivateAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => return ActivateAction::RedirectToLogin,
            KeyCode::Char(c) => {
                self.code_input.input_char(c);
                if self.code_input.is_complete() {
                    return ActivateAction::Submit(self.code_input.value().to_string());
                }
            }
            KeyCode::Backspace => self.code_input.backspace(),
            _ => {}
        }

        ActivateAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(54),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Activate Account ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let areas = inner_layout.areas::<5>(inner);

        Paragraph::new("Type the 6-digit code that was mailed to you")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.code_input).render(areas[2], buf);

        if self.submitting {
            Paragraph::new(Line::from(Span::styled(
                "Confirming...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(areas[3], buf);
        } else if self.submitted {
            let color = if self.is_okay { Color::Green } else { Color::Red };
            let lines: Vec<Line> = self
                .message
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(color))))
                .chain([Line::from(Span::styled(
                    "Enter: Go to login",
                    Style::default().fg(Color::DarkGray),
                ))])
                .collect();
            Paragraph::new(lines).render(areas[4], buf);
        } else {
            Paragraph::new(Line::from(Span::styled(
                "Esc: Back to login",
                Style::default().fg(Color::DarkGray),
            )))
            .render(areas[3], buf);
        }
    }
}

impl Default for ActivateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ActivateScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
