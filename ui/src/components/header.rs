use crate::components::common::Msg;
use crate::components::sections::{ATTR_SECTION, Section};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State};

pub const SITE_NAME: &str = "Unity Threads";

/// Top bar: site name, the active theme and language, and one tab per section.
pub struct Header {
    theme: ThemeManager,
    section: Section,
}

impl Header {
    pub fn new(theme: ThemeManager, section: Section) -> Self {
        Self { theme, section }
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("✦ ", Style::default().fg(self.theme.primary_accent())),
            Span::styled(
                SITE_NAME,
                Style::default()
                    .fg(self.theme.title_accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ✦", Style::default().fg(self.theme.primary_accent())),
        ])
    }

    fn selection_line(&self) -> Line<'static> {
        let selection = self.theme.selection();
        let locale = selection.locales().meta(self.theme.locale()).label();

        Line::from(vec![
            Span::styled("🎨 ", Style::default().fg(self.theme.primary_accent())),
            Span::styled(
                self.theme.bundle().display_name.clone(),
                Style::default().fg(self.theme.text_primary()),
            ),
            Span::styled("  │  ", Style::default().fg(self.theme.text_muted())),
            Span::styled(locale, Style::default().fg(self.theme.text_primary())),
        ])
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " · ",
                    Style::default().fg(self.theme.text_muted()),
                ));
            }

            // The welcome heading is a full sentence, so home gets its icon only
            let label = match section {
                Section::Home => section.icon().to_string(),
                _ => self.theme.t(section.nav_key()).to_string(),
            };

            let style = if section == self.section {
                Style::default()
                    .fg(self.theme.selection_fg())
                    .bg(self.theme.selection_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.header_accent())
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Line::from(spans)
    }
}

impl MockComponent for Header {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary_accent()))
            .style(Style::default().bg(self.theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        frame.render_widget(
            Paragraph::new(self.title_line()).alignment(Alignment::Left),
            top[0],
        );
        frame.render_widget(
            Paragraph::new(self.selection_line()).alignment(Alignment::Right),
            top[1],
        );
        frame.render_widget(
            Paragraph::new(self.tabs_line()).alignment(Alignment::Center),
            rows[1],
        );
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
                self.section = section;
            }
        }
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for Header {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for Header {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting Header on section {:?}", self.section);
        Ok(())
    }
}
