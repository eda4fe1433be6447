use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, ThemeActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use catalog::ThemeId;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Style, TextModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_THEME_SELECTED: &str = "ThemeSelected";
const CMD_RESULT_CLOSE_PICKER: &str = "ClosePicker";

/// Interactive picker listing every theme bundle in declaration order.
///
/// Each row shows a swatch in the bundle's own primary color next to its
/// display name and motifs. The cursor starts on the active theme.
///
/// # Navigation
///
/// - **Arrow Keys** and the configured up/down keys - Move between themes
/// - **Enter** - Apply the highlighted theme
/// - **Escape** - Close the picker
///
/// # Examples
///
/// ```no_run
/// use catalog::SelectionContext;
/// use ui::components::theme_picker::ThemePicker;
/// use ui::components::state::ComponentState;
/// use ui::theme::ThemeManager;
///
/// let theme = ThemeManager::new(SelectionContext::builtin()?);
/// let mut picker = ThemePicker::new(theme, 'k', 'j');
/// picker.mount()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ThemePicker {
    theme: ThemeManager,
    themes: Vec<ThemeId>,
    selected: usize,
    up_key: char,
    down_key: char,
}

impl ThemePicker {
    pub fn new(theme: ThemeManager, up_key: char, down_key: char) -> Self {
        Self {
            theme,
            themes: Vec::new(),
            selected: 0,
            up_key,
            down_key,
        }
    }

    pub fn load_themes(&mut self) {
        let selection = self.theme.selection();
        let active = selection.snapshot().theme;

        self.themes = selection.list_bundles().map(|(id, _)| id).collect();
        self.selected = self
            .themes
            .iter()
            .position(|id| *id == active)
            .unwrap_or_default();
    }

    fn current_theme(&self) -> Option<ThemeId> {
        self.themes.get(self.selected).copied()
    }

    fn list_item(&self, id: ThemeId) -> ListItem<'static> {
        let bundle = self.theme.selection().themes().get(id);
        let palette = self.theme.palette_for(id);
        let active = id == self.theme.selection().snapshot().theme;

        let motifs: Vec<&str> = bundle.motifs().collect();
        let mut spans = vec![
            Span::styled("██ ", Style::default().fg(palette.primary_accent)),
            Span::styled(
                bundle.display_name.clone(),
                Style::default().fg(self.theme.text_primary()),
            ),
        ];
        if !motifs.is_empty() {
            spans.push(Span::styled(
                format!("  {}", motifs.join(", ")),
                Style::default().fg(self.theme.text_muted()),
            ));
        }
        if active {
            spans.push(Span::styled(
                "  ✓",
                Style::default().fg(self.theme.status_success()),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl MockComponent for ThemePicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self.themes.iter().map(|id| self.list_item(*id)).collect();

        let title = format!("  🎨 {}  ", self.theme.t(catalog::locale::keys::THEME));
        let popup_block =
            PopupBuilder::new("Theme Picker", &self.theme).create_block_with_title(title);

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

        // Instructions on the bottom border row
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
        match self.current_theme() {
            Some(id) => State::One(StateValue::String(id.as_str().to_string())),
            None => State::None,
        }
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(Direction::Down) => {
                if self.selected + 1 < self.themes.len() {
                    self.selected += 1;
                }
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Cmd::Move(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
                CmdResult::Changed(State::One(StateValue::Usize(self.selected)))
            }
            Cmd::Submit => match self.current_theme() {
                Some(_) => CmdResult::Custom(CMD_RESULT_THEME_SELECTED, self.state()),
                None => CmdResult::None,
            },
            Cmd::Cancel => CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, State::None),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for ThemePicker {
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
            CmdResult::Custom(CMD_RESULT_THEME_SELECTED, _) => self
                .current_theme()
                .map(|id| Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(id))),
            CmdResult::Custom(CMD_RESULT_CLOSE_PICKER, _) => {
                Some(Msg::ThemeActivity(ThemeActivityMsg::PickerClosed))
            }
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for ThemePicker {
    fn mount(&mut self) -> AppResult<()> {
        self.load_themes();
        if self.themes.is_empty() {
            return Err(AppError::State("No themes available".to_string()));
        }
        log::debug!("ThemePicker mounted with {} themes", self.themes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SelectionContext;

    fn picker(selection: &SelectionContext) -> ThemePicker {
        let mut picker = ThemePicker::new(ThemeManager::new(selection.clone()), 'k', 'j');
        picker.mount().unwrap();
        picker
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_lists_bundles_in_declaration_order() {
        let selection = SelectionContext::builtin().unwrap();
        let picker = picker(&selection);

        assert_eq!(picker.themes, ThemeId::ALL.to_vec());
    }

    #[test]
    fn test_cursor_starts_on_active_theme() {
        let selection = SelectionContext::builtin().unwrap();
        selection.select_bundle(ThemeId::African);

        let picker = picker(&selection);
        assert_eq!(picker.current_theme(), Some(ThemeId::African));
    }

    #[test]
    fn test_enter_selects_highlighted_theme() {
        let selection = SelectionContext::builtin().unwrap();
        let mut picker = picker(&selection);

        picker.on(key(Key::Down));
        picker.on(key(Key::Char('j')));
        assert_eq!(
            picker.on(key(Key::Enter)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(
                ThemeId::African
            )))
        );
        // The picker only reports the choice; the model applies it
        assert_eq!(selection.snapshot().theme, ThemeId::Indian);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let selection = SelectionContext::builtin().unwrap();
        let mut picker = picker(&selection);

        picker.on(key(Key::Up));
        assert_eq!(picker.current_theme(), Some(ThemeId::Indian));
        for _ in 0..10 {
            picker.on(key(Key::Down));
        }
        assert_eq!(picker.current_theme(), Some(ThemeId::Island));
    }

    #[test]
    fn test_escape_closes() {
        let selection = SelectionContext::builtin().unwrap();
        let mut picker = picker(&selection);

        assert_eq!(
            picker.on(key(Key::Esc)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::PickerClosed))
        );
    }
}
