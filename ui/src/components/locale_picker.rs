use crate::components::base_popup::PopupBuilder;
use crate::components::common::{LocaleActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use catalog::LocaleCode;
use catalog::locale::keys;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_LOCALE_SELECTED: &str = "LocaleSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

/// Language picker: flag, native name and translation coverage per locale.
pub struct LocalePicker {
    theme: ThemeManager,
    locales: Vec<LocaleCode>,
    selected: usize,
    up_key: char,
    down_key: char,
}

impl LocalePicker {
    pub fn new(theme: ThemeManager, up_key: char, down_key: char) -> Self {
        Self {
            theme,
            locales: Vec::new(),
            selected: 0,
            up_key,
            down_key,
        }
    }

    pub fn load_locales(&mut self) {
        let selection = self.theme.selection();
        let active = selection.active_locale();

        self.locales = selection.list_locales().map(|meta| meta.code).collect();
        self.selected = self
            .locales
            .iter()
            .position(|code| *code == active)
            .unwrap_or_default();
    }

    fn current_locale(&self) -> Option<LocaleCode> {
        self.locales.get(self.selected).copied()
    }

    fn list_item(&self, code: LocaleCode) -> ListItem<'static> {
        let locales = self.theme.selection().locales();
        let coverage = locales.coverage(code);
        let coverage_color = if coverage.is_complete() {
            self.theme.status_success()
        } else {
            self.theme.status_warning()
        };

        let mut spans = vec![
            Span::styled(
                format!("{:<14}", locales.meta(code).label()),
                Style::default().fg(self.theme.text_primary()),
            ),
            Span::styled(
                format!("{:>4}%", coverage.percent()),
                Style::default().fg(coverage_color),
            ),
        ];
        if code == self.theme.locale() {
            spans.push(Span::styled(
                "  ✓",
                Style::default().fg(self.theme.status_success()),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl MockComponent for LocalePicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .locales
            .iter()
            .map(|code| self.list_item(*code))
            .collect();

        let title = format!("  🌐 {}  ", self.theme.t(keys::LANGUAGE));
        let popup_block =
            PopupBuilder::new("Language Picker", &self.theme).create_block_with_title(title);

        let list = List::new(items)
            .block(popup_block)
            .highlight_style(
                Style::default()
                    .fg(self.theme.selection_fg())
                    .bg(self.theme.selection_bg())
                    .add_modifier(TextModifiers::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);

        if area.height > 2 {
            let instruction_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 2,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            let instructions = format!(
                "↑/↓/{}/{}: Navigate, Enter: Apply, Esc: Close",
                self.up_key, self.down_key
            );
            let instruction_widget = Paragraph::new(instructions)
                .style(Style::default().fg(self.theme.text_muted()))
                .alignment(Alignment::Center);
            frame.render_widget(instruction_widget, instruction_area);
        }
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        match self.current_locale() {
            Some(code) => State::One(StateValue::String(code.as_str().to_string())),
            None => State::None,
        }
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(Direction::Down) => {
                if self.selected + 1 < self.locales.len() {
                    self.selected += 1;
                }
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Cmd::Move(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Cmd::Submit => match self.current_locale() {
                Some(_) => CmdResult::Custom(CMD_RESULT_LOCALE_SELECTED, self.state()),
                None => CmdResult::None,
            },
            Cmd::Cancel => CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for LocalePicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Down, .. }) => {
                self.perform(Cmd::Move(Direction::Down))
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.perform(Cmd::Move(Direction::Up))
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self.perform(Cmd::Submit),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => self.perform(Cmd::Cancel),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if c == self.up_key {
                    self.perform(Cmd::Move(Direction::Up))
                } else if c == self.down_key {
                    self.perform(Cmd::Move(Direction::Down))
                } else {
                    CmdResult::None
                }
            }
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_LOCALE_SELECTED, _) => self
                .current_locale()
                .map(|code| Msg::LocaleActivity(LocaleActivityMsg::LocaleSelected(code))),
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::LocaleActivity(LocaleActivityMsg::PickerClosed))
            }
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for LocalePicker {
    fn mount(&mut self) -> AppResult<()> {
        self.load_locales();
        if self.locales.is_empty() {
            return Err(AppError::State("No languages available".to_string()));
        }
        log::debug!("LocalePicker mounted with {} locales", self.locales.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SelectionContext;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_selects_highlighted_locale() {
        let selection = SelectionContext::builtin().unwrap();
        selection.select_locale(LocaleCode::Hi);
        let mut picker = LocalePicker::new(ThemeManager::new(selection), 'k', 'j');
        picker.mount().unwrap();

        assert_eq!(picker.current_locale(), Some(LocaleCode::Hi));

        picker.on(key(Key::Down));
        assert_eq!(
            picker.on(key(Key::Enter)),
            Some(Msg::LocaleActivity(LocaleActivityMsg::LocaleSelected(
                LocaleCode::Zh
            )))
        );
    }

    #[test]
    fn test_lists_every_locale_once() {
        let selection = SelectionContext::builtin().unwrap();
        let mut picker = LocalePicker::new(ThemeManager::new(selection), 'k', 'j');
        picker.mount().unwrap();

        assert_eq!(picker.locales, LocaleCode::ALL.to_vec());
    }

    #[test]
    fn test_escape_closes() {
        let selection = SelectionContext::builtin().unwrap();
        let mut picker = LocalePicker::new(ThemeManager::new(selection), 'k', 'j');
        picker.mount().unwrap();

        assert_eq!(
            picker.on(key(Key::Esc)),
            Some(Msg::LocaleActivity(LocaleActivityMsg::PickerClosed))
        );
    }
}
