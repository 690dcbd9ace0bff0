//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::Credentials;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Submitting,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Login screen UI.
pub struct LoginScreen {
    email_input: TextInput,
    password_input: TextInput,
    focus: Field,
    state: LoginState,
    error_messages: Vec<String>,
    persist_token: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    SwitchToRegister,
    SwitchToActivate,
    DeleteToken,
    Quit,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut email_input = TextInput::email("Email").placeholder("you@example.org");
        email_input.set_focused(true);
        let password_input = TextInput::secret("Password");

        Self {
            email_input,
            password_input,
            focus: Field::Email,
            state: LoginState::Input,
            error_messages: Vec::new(),
            persist_token: true,
        }
    }

    /// Sets the initial persistence preference, from configuration.
    #[must_use]
    pub const fn with_persistence(mut self, persist_token: bool) -> Self {
        self.persist_token = persist_token;
        self
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Returns the entered credentials, if both fields are filled.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        let email = self.email_input.value();
        let password = self.password_input.value();
        if email.is_empty() || password.is_empty() {
            None
        } else {
            Some(Credentials::new(email, password))
        }
    }

    /// Returns persistence preference.
    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.persist_token
    }

    /// Returns current error messages.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Sets submitting state.
    pub fn set_submitting(&mut self) {
        self.state = LoginState::Submitting;
        self.error_messages.clear();
    }

    /// Sets success state.
    pub fn set_success(&mut self) {
        self.state = LoginState::Success;
        self.error_messages.clear();
    }

    /// Sets error state with the backend's messages.
    pub fn set_errors(&mut self, messages: Vec<String>) {
        self.state = LoginState::Error;
        self.error_messages = messages;
    }

    /// Resets to input state.
    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.error_messages.clear();
        self.password_input.clear();
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
        self.email_input.set_focused(self.focus == Field::Email);
        self.password_input
            .set_focused(self.focus == Field::Password);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Email => &mut self.email_input,
            Field::Password => &mut self.password_input,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Submitting {
            return LoginAction::None;
        }

        if self.state == LoginState::Error {
            self.reset();
            return LoginAction::None;
        }

        match key.code {
            KeyCode::Enter => {
                if self.credentials().is_some() {
                    return LoginAction::Submit;
                }
            }
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => self.switch_focus(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return LoginAction::SwitchToRegister;
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return LoginAction::SwitchToActivate;
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.persist_token = !self.persist_token;
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::ALT) => {
                return LoginAction::DeleteToken;
            }
            KeyCode::Char(c) => self.focused_input().input_char(c),
            KeyCode::Backspace => self.focused_input().backspace(),
            KeyCode::Delete => self.focused_input().delete(),
            KeyCode::Left => self.focused_input().move_left(),
            KeyCode::Right => self.focused_input().move_right(),
            KeyCode::Home => self.focused_input().move_start(),
            KeyCode::End => self.focused_input().move_end(),
            _ => {}
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
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
            .title(" Bookbound Login ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let areas = inner_layout.areas::<6>(inner);

        Paragraph::new("Sign in to your account")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.email_input).render(areas[1], buf);
        (&self.password_input).render(areas[2], buf);

        let checkbox = if self.persist_token { "[x]" } else { "[ ]" };
        Paragraph::new(Line::from(vec![
            Span::styled(checkbox, Style::default().fg(Color::Yellow)),
            Span::raw(" Remember me (Ctrl+T to toggle)"),
        ]))
        .render(areas[3], buf);

        let hints = Line::from(vec![
            Span::styled("Enter: Login", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Ctrl+R: Register", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Ctrl+A: Activate", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[4], buf);

        let status: Vec<Line> = match self.state {
            LoginState::Input => Vec::new(),
            LoginState::Submitting => vec![Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))],
            LoginState::Error => self
                .error_messages
                .iter()
                .map(|msg| Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red))))
                .collect(),
            LoginState::Success => vec![Line::from(Span::styled(
                "Login successful!",
                Style::default().fg(Color::Green),
            ))],
        };
        Paragraph::new(status).render(areas[5], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
