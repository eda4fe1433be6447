use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppError;
use crate::theme::ThemeManager;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    command::{Cmd, CmdResult},
    event::{Key, KeyEvent},
    ratatui::{
        Frame,
        layout::{Alignment, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Text},
        widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Error,
    Warning,
}

impl PopupKind {
    fn title(self) -> &'static str {
        match self {
            PopupKind::Error => " ❌ Error ",
            PopupKind::Warning => " ⚠️ Warning ",
        }
    }

    fn color(self, theme: &ThemeManager) -> Color {
        match self {
            PopupKind::Error => theme.status_error(),
            PopupKind::Warning => theme.status_warning(),
        }
    }
}

/// Dismissable message box for errors and warnings.
pub struct ErrorPopup {
    theme: ThemeManager,
    kind: PopupKind,
    message: String,
    is_mounted: bool,
}

impl ErrorPopup {
    pub fn new(error: &AppError, theme: ThemeManager) -> Self {
        // ErrorReporter already formats the message for display
        Self::with_kind(error.to_string(), PopupKind::Error, theme)
    }

    pub fn warning(message: impl Into<String>, theme: ThemeManager) -> Self {
        Self::with_kind(message.into(), PopupKind::Warning, theme)
    }

    fn with_kind(message: String, kind: PopupKind, theme: ThemeManager) -> Self {
        Self {
            theme,
            kind,
            message,
            is_mounted: false,
        }
    }

    pub fn kind(&self) -> PopupKind {
        self.kind
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let color = self.kind.color(&self.theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(self.theme.surface_raised()))
            .title(self.kind.title())
            .title_alignment(Alignment::Center);

        let mut lines = vec![Line::from("")];
        lines.extend(self.message.lines().map(|line| Line::from(line.to_string())));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting ErrorPopup ({:?})", self.kind);

        if self.is_mounted {
            log::warn!("ErrorPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        Ok(())
    }
}

impl Drop for ErrorPopup {
    fn drop(&mut self) {
        log::debug!("Dropping ErrorPopup component");
        self.is_mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SelectionContext;
    use tuirealm::event::KeyModifiers;

    #[test]
    fn test_enter_and_escape_close() {
        let theme = ThemeManager::new(SelectionContext::builtin().unwrap());
        let mut popup = ErrorPopup::new(&AppError::Config("bad".into()), theme);

        for code in [Key::Enter, Key::Esc] {
            assert_eq!(
                popup.on(Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))),
                Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
            );
        }
        assert_eq!(
            popup.on(Event::Keyboard(KeyEvent::new(
                Key::Char('x'),
                KeyModifiers::NONE
            ))),
            None
        );
    }

    #[test]
    fn test_warning_uses_warning_style() {
        let theme = ThemeManager::new(SelectionContext::builtin().unwrap());
        let popup = ErrorPopup::warning("Unknown theme 'nordic'", theme.clone());

        assert_eq!(popup.kind(), PopupKind::Warning);
        assert_eq!(PopupKind::Warning.color(&theme), theme.status_warning());
    }
}
