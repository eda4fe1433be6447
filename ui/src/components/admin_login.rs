use crate::components::common::{AdminActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::config::limits::{MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH};
use crate::error::AppResult;
use crate::theme::ThemeManager;
use crate::validation::{EmailValidator, PasswordValidator, Validator};
use catalog::locale::keys;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Color, Modifier, Style};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_SUBMIT: &str = "Submit";
const CMD_RESULT_CANCEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Sign-in form for the admin dashboard.
///
/// The form only checks that the input is well formed. Whether the pair is
/// accepted is decided by the model's `AdminAuthenticator`; a rejected
/// attempt remounts the form with the error message and the email kept.
pub struct AdminLogin {
    theme: ThemeManager,
    email: String,
    password: String,
    focus: Field,
    error_message: Option<String>,
}

impl AdminLogin {
    pub fn new(theme: ThemeManager) -> Self {
        Self {
            theme,
            email: String::new(),
            password: String::new(),
            focus: Field::Email,
            error_message: None,
        }
    }

    /// Form shown again after a rejected attempt.
    pub fn with_error(
        theme: ThemeManager,
        email: impl Into<String>,
        error_message: String,
    ) -> Self {
        Self {
            email: email.into(),
            focus: Field::Password,
            error_message: Some(error_message),
            ..Self::new(theme)
        }
    }

    fn validate(&self) -> Result<(), String> {
        EmailValidator
            .validate(&self.email)
            .and_then(|_| PasswordValidator.validate(&self.password))
            .map_err(|e| e.user_message())
    }

    fn push_char(&mut self, c: char) {
        let (field, limit) = match self.focus {
            Field::Email => (&mut self.email, MAX_EMAIL_LENGTH),
            Field::Password => (&mut self.password, MAX_PASSWORD_LENGTH),
        };
        if field.chars().count() < limit {
            field.push(c);
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            Field::Email => self.email.pop(),
            Field::Password => self.password.pop(),
        };
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
    }

    fn bordered(&self, title: &str, color: Color) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(title.to_string())
            .title_style(Style::default().fg(self.theme.text_primary()))
    }

    fn field_color(&self, field: Field) -> Color {
        if self.focus == field {
            self.theme.title_accent()
        } else {
            self.theme.primary_accent()
        }
    }

    fn field_text(&self, field: Field) -> String {
        let (value, placeholder) = match field {
            Field::Email => (self.email.clone(), "<email>"),
            Field::Password => ("*".repeat(self.password.chars().count().min(30)), "<password>"),
        };
        let cursor = if self.focus == field { "_" } else { "" };
        if value.is_empty() && cursor.is_empty() {
            placeholder.to_string()
        } else {
            format!("{value}{cursor}")
        }
    }
}

impl ComponentState for AdminLogin {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting AdminLogin component");
        Ok(())
    }
}

impl MockComponent for AdminLogin {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                                // Title
                Constraint::Length(3),                                                // Email
                Constraint::Length(3),                                                // Password
                Constraint::Length(if self.error_message.is_some() { 3 } else { 0 }), // Error
                Constraint::Min(0),                                                   // Actions
            ])
            .split(area);

        let title = Paragraph::new(format!(
            "🔐 {} · {}",
            self.theme.t(keys::ADMIN),
            self.theme.t(keys::LOGIN)
        ))
        .block(self.bordered("", self.theme.primary_accent()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(self.theme.title_accent())
                .bg(self.theme.surface_raised())
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(title, chunks[0]);

        for (field, label, chunk) in [
            (Field::Email, "Email", chunks[1]),
            (Field::Password, "Password", chunks[2]),
        ] {
            let widget = Paragraph::new(self.field_text(field))
                .block(self.bordered(label, self.field_color(field)))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(self.theme.text_primary())
                        .bg(self.theme.surface_raised()),
                );
            frame.render_widget(widget, chunk);
        }

        if let Some(ref error) = self.error_message {
            let error_field = Paragraph::new(error.clone())
                .block(self.bordered("Error", self.theme.status_error()))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(self.theme.status_error())
                        .bg(self.theme.surface_raised()),
                );
            frame.render_widget(error_field, chunks[3]);
        }

        let actions_text = [
            ("[Tab]".to_string(), true),
            (" switch field ".to_string(), false),
            ("[Enter]".to_string(), true),
            (format!(" {} ", self.theme.t(keys::LOGIN)), false),
            ("[Esc]".to_string(), true),
            (" cancel".to_string(), false),
        ];

        let mut spans: Vec<Span> = Vec::new();
        for (i, (text, highlight)) in actions_text.into_iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(
                    " │ ",
                    Style::default().fg(self.theme.text_muted()),
                ));
            }

            let color = if highlight {
                self.theme.shortcut_key()
            } else {
                self.theme.shortcut_description()
            };
            spans.push(Span::styled(text, Style::default().fg(color)));
        }

        let actions_chunk_index = if self.error_message.is_some() { 4 } else { 3 };
        let actions = Paragraph::new(Text::from(Line::from(spans)))
            .block(self.bordered("Actions", self.theme.primary_accent()))
            .style(Style::default().bg(self.theme.surface_raised()))
            .alignment(Alignment::Center);
        frame.render_widget(actions, chunks[actions_chunk_index]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Content => Some(AttrValue::String(self.email.clone())),
            _ => None,
        }
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::String(self.email.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Submit => match self.validate() {
                Ok(()) => CmdResult::Custom(CMD_RESULT_SUBMIT, self.state()),
                Err(message) => {
                    self.error_message = Some(message);
                    CmdResult::Changed(State::None)
                }
            },
            Cmd::Cancel => CmdResult::Custom(CMD_RESULT_CANCEL, State::None),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for AdminLogin {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => self.perform(Cmd::Cancel),
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self.perform(Cmd::Submit),
            Event::Keyboard(KeyEvent {
                code: Key::Tab | Key::BackTab | Key::Up | Key::Down,
                ..
            }) => {
                self.toggle_focus();
                CmdResult::Changed(State::None)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Backspace,
                ..
            }) => {
                self.pop_char();
                CmdResult::Changed(State::None)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            }) => {
                self.push_char(c);
                CmdResult::Changed(State::None)
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_SUBMIT, _) => {
                Some(Msg::AdminActivity(AdminActivityMsg::SubmitCredentials {
                    email: self.email.trim().to_string(),
                    password: std::mem::take(&mut self.password),
                }))
            }
            CmdResult::Custom(CMD_RESULT_CANCEL, _) => {
                Some(Msg::AdminActivity(AdminActivityMsg::LoginCancelled))
            }
            CmdResult::None => None,
            _ => Some(Msg::ForceRedraw),
        }
    }
}
