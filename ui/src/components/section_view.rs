use crate::components::common::{Msg, SectionActivityMsg};
use crate::components::sections::{ATTR_SECTION, Section, SectionRenderer};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use tuirealm::command::{Cmd, CmdResult, Direction as CmdDirection};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_NEXT_SECTION: &str = "NextSection";
const CMD_RESULT_PREV_SECTION: &str = "PrevSection";

const PAGE_SCROLL: u16 = 10;

/// Scrollable content pane for the selected [`Section`].
///
/// # Navigation
///
/// - **↑/↓** and the configured up/down keys scroll one line
/// - **PgUp/PgDn** scroll a page, **Home** jumps to the top
/// - **Tab/Shift+Tab** move to the next or previous section
pub struct SectionView {
    theme: ThemeManager,
    section: Section,
    scroll: u16,
    up_key: char,
    down_key: char,
}

impl SectionView {
    pub fn new(theme: ThemeManager, section: Section, up_key: char, down_key: char) -> Self {
        Self {
            theme,
            section,
            scroll: 0,
            up_key,
            down_key,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    fn show(&mut self, section: Section) {
        if section != self.section {
            self.section = section;
            self.scroll = 0;
        }
    }
}

impl MockComponent for SectionView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let text = SectionRenderer::new(&self.theme).render(self.section);

        // Keep at least one line visible after the content shrinks
        let max_scroll = u16::try_from(text.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(max_scroll);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary_accent()))
            .style(Style::default().bg(self.theme.surface()));

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        frame.render_widget(paragraph, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Custom(ATTR_SECTION) => {
                Some(AttrValue::Number(self.section.index() as isize))
            }
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Custom(ATTR_SECTION), AttrValue::Number(index)) = (attr, value) {
            if let Some(section) = usize::try_from(index).ok().and_then(Section::from_index) {
                self.show(section);
            }
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.section.index()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Scroll(CmdDirection::Down) => {
                self.scroll = self.scroll.saturating_add(1);
                CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
            }
            Cmd::Scroll(CmdDirection::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
                CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
            }
            Cmd::Move(CmdDirection::Down) => {
                self.scroll = self.scroll.saturating_add(PAGE_SCROLL);
                CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
            }
            Cmd::Move(CmdDirection::Up) => {
                self.scroll = self.scroll.saturating_sub(PAGE_SCROLL);
                CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
            }
            Cmd::GoTo(_) => {
                self.scroll = 0;
                CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
            }
            Cmd::Change => CmdResult::Custom(CMD_RESULT_NEXT_SECTION, self.state()),
            Cmd::Cancel => CmdResult::Custom(CMD_RESULT_PREV_SECTION, self.state()),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for SectionView {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Down, .. }) => {
                self.perform(Cmd::Scroll(CmdDirection::Down))
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.perform(Cmd::Scroll(CmdDirection::Up))
            }
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => self.perform(Cmd::Move(CmdDirection::Down)),
            Event::Keyboard(KeyEvent {
                code: Key::PageUp, ..
            }) => self.perform(Cmd::Move(CmdDirection::Up)),
            Event::Keyboard(KeyEvent { code: Key::Home, .. }) => {
                self.perform(Cmd::GoTo(tuirealm::command::Position::Begin))
            }
            Event::Keyboard(KeyEvent { code: Key::Tab, .. }) => self.perform(Cmd::Change),
            Event::Keyboard(KeyEvent {
                code: Key::BackTab,
                ..
            }) => self.perform(Cmd::Cancel),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if c == self.down_key {
                    self.perform(Cmd::Scroll(CmdDirection::Down))
                } else if c == self.up_key {
                    self.perform(Cmd::Scroll(CmdDirection::Up))
                } else {
                    CmdResult::None
                }
            }
            _ => return None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_NEXT_SECTION, _) => {
                Some(Msg::SectionActivity(SectionActivityMsg::Next))
            }
            CmdResult::Custom(CMD_RESULT_PREV_SECTION, _) => {
                Some(Msg::SectionActivity(SectionActivityMsg::Previous))
            }
            CmdResult::None => None,
            _ => Some(Msg::ForceRedraw),
        }
    }
}

impl ComponentState for SectionView {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting SectionView on section {:?}", self.section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::SelectionContext;

    fn view() -> SectionView {
        let selection = SelectionContext::builtin().unwrap();
        SectionView::new(ThemeManager::new(selection), Section::Home, 'k', 'j')
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_tab_requests_next_section() {
        let mut view = view();
        assert_eq!(
            view.on(key(Key::Tab)),
            Some(Msg::SectionActivity(SectionActivityMsg::Next))
        );
        assert_eq!(
            view.on(key(Key::BackTab)),
            Some(Msg::SectionActivity(SectionActivityMsg::Previous))
        );
    }

    #[test]
    fn test_configured_keys_scroll() {
        let mut view = view();

        assert_eq!(view.on(key(Key::Char('j'))), Some(Msg::ForceRedraw));
        assert_eq!(view.scroll, 1);
        view.on(key(Key::Char('k')));
        view.on(key(Key::Char('k')));
        assert_eq!(view.scroll, 0);
        assert_eq!(view.on(key(Key::Char('z'))), None);
    }

    #[test]
    fn test_switching_section_resets_scroll() {
        let mut view = view();
        view.on(key(Key::PageDown));
        assert_eq!(view.scroll, PAGE_SCROLL);

        view.attr(
            Attribute::Custom(ATTR_SECTION),
            AttrValue::Number(Section::Registry.index() as isize),
        );
        assert_eq!(view.section(), Section::Registry);
        assert_eq!(view.scroll, 0);
    }
}
