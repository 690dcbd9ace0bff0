//! Registration screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::Registration;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterState {
    Input,
    Submitting,
    Error,
    Success,
}

/// Registration screen UI.
pub struct RegisterScreen {
    inputs: [TextInput; 4],
    focus: usize,
    state: RegisterState,
    error_messages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAction {
    None,
    Submit,
    BackToLogin,
    /// Registration accepted, move on to code entry.
    ProceedToActivation,
}

impl RegisterScreen {
    /// Creates new registration screen.
    #[must_use]
    pub fn new() -> Self {
        let mut firstname = TextInput::new("First name");
        firstname.set_focused(true);

        Self {
            inputs: [
                firstname,
                TextInput::new("Last name"),
                TextInput::email("Email").placeholder("you@example.org"),
                TextInput::secret("Password"),
            ],
            focus: 0,
            state: RegisterState::Input,
            error_messages: Vec::new(),
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> RegisterState {
        self.state
    }

    /// Returns the entered registration data, if every field is filled.
    #[must_use]
    pub fn registration(&self) -> Option<Registration> {
        if self.inputs.iter().any(|input| input.value().is_empty()) {
            return None;
        }
        Some(Registration::new(
            self.inputs[0].value(),
            self.inputs[1].value(),
            self.inputs[2].value(),
            self.inputs[3].value(),
        ))
    }

    /// Returns current error messages.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Sets submitting state.
    pub fn set_submitting(&mut self) {
        self.state = RegisterState::Submitting;
        self.error_messages.clear();
    }

    /// Sets success state.
    pub fn set_success(&mut self) {
        self.state = RegisterState::Success;
        self.error_messages.clear();
    }

    /// Sets error state with the backend's messages.
    pub fn set_errors(&mut self, messages: Vec<String>) {
        self.state = RegisterState::Error;
        self.error_messages = messages;
    }

    /// Resets to input state.
    pub fn reset(&mut self) {
        self.state = RegisterState::Input;
        self.error_messages.clear();
    }

    fn switch_focus(&mut self, forward: bool) {
        self.inputs[self.focus].set_focused(false);
        self.focus = if forward {
            (self.focus + 1) % self.inputs.len()
        } else {
            (self.focus + self.inputs.len() - 1) % self.inputs.len()
        };
        self.inputs[self.focus].set_focused(true);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> RegisterAction {
        match self.state {
            RegisterState::Submitting => return RegisterAction::None,
            RegisterState::Success => {
                // Any key moves on to the activation code entry.
                return RegisterAction::ProceedToActivation;
            }
            RegisterState::Error => {
                self.reset();
                return RegisterAction::None;
            }
            RegisterState::Input => {}
        }

        match key.code {
            KeyCode::Enter => {
                if self.registration().is_some() {
                    return RegisterAction::Submit;
                }
            }
            KeyCode::Esc => return RegisterAction::BackToLogin,
            KeyCode::Tab | KeyCode::Down => self.switch_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.switch_focus(false),
            KeyCode::Char(c) => self.inputs[self.focus].input_char(c),
            KeyCode::Backspace => self.inputs[self.focus].backspace(),
            KeyCode::Delete => self.inputs[self.focus].delete(),
            KeyCode::Left => self.inputs[self.focus].move_left(),
            KeyCode::Right => self.inputs[self.focus].move_right(),
            KeyCode::Home => self.inputs[self.focus].move_start(),
            KeyCode::End => self.inputs[self.focus].move_end(),
            _ => {}
        }

        RegisterAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(20),
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
            .title(" Create Account ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let areas = inner_layout.areas::<6>(inner);

        for (input, cell) in self.inputs.iter().zip(areas.iter()) {
            input.render(*cell, buf);
        }

        let hints = Line::from(vec![
            Span::styled("Enter: Register", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Back to login", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[4], buf);

        let status: Vec<Line> = match self.state {
            RegisterState::Input => Vec::new(),
            RegisterState::Submitting => vec![Line::from(Span::styled(
                "Registering...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))],
            RegisterState::Error => self
                .error_messages
                .iter()
                .map(|msg| Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red))))
                .collect(),
            RegisterState::Success => vec![Line::from(Span::styled(
                "Registration accepted. Check your mail for the activation code.",
                Style::default().fg(Color::Green),
            ))],
        };
        Paragraph::new(status).render(areas[5], buf);
    }
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &RegisterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
