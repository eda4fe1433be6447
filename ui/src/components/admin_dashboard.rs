use crate::components::base_popup::PopupBuilder;
use crate::components::common::{AdminActivityMsg, Msg};
use crate::components::sections::content::{DASHBOARD_STATS, RECENT_ACTIVITY};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::services::AdminSession;
use crate::theme::ThemeManager;
use catalog::locale::keys;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_SIGN_OUT: &str = "SignOut";
const CMD_RESULT_CLOSE: &str = "Close";

/// Overview for a signed-in admin: guest numbers, recent activity, and the
/// state of the theme and language catalogs.
pub struct AdminDashboard {
    theme: ThemeManager,
    session: AdminSession,
    sign_out_key: char,
}

impl AdminDashboard {
    pub fn new(theme: ThemeManager, session: AdminSession, sign_out_key: char) -> Self {
        Self {
            theme,
            session,
            sign_out_key,
        }
    }

    fn heading(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(self.theme.header_accent())
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn stat_lines(&self) -> Vec<Line<'static>> {
        let stats = [
            ("Total RSVPs", DASHBOARD_STATS.total_rsvps),
            ("Confirmed guests", DASHBOARD_STATS.confirmed_guests),
            ("Guestbook messages", DASHBOARD_STATS.messages),
            ("Registry items", DASHBOARD_STATS.registry_items),
        ];
        stats
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {label:<20}"),
                        Style::default().fg(self.theme.text_muted()),
                    ),
                    Span::styled(
                        value.to_string(),
                        Style::default()
                            .fg(self.theme.primary_accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    }

    fn activity_lines(&self) -> Vec<Line<'static>> {
        RECENT_ACTIVITY
            .iter()
            .map(|activity| {
                Line::from(vec![
                    Span::styled(
                        format!("  • {}", activity.description),
                        Style::default().fg(self.theme.text_primary()),
                    ),
                    Span::styled(
                        format!("  ({})", activity.when),
                        Style::default().fg(self.theme.text_muted()),
                    ),
                ])
            })
            .collect()
    }

    fn theme_lines(&self) -> Vec<Line<'static>> {
        let selection = self.theme.selection();
        let active = selection.active_bundle().id;
        selection
            .list_bundles()
            .map(|(id, bundle)| {
                let marker = if id == active { " ✓" } else { "" };
                Line::from(vec![
                    Span::styled(
                        "  ██ ",
                        Style::default().fg(self.theme.palette_for(id).primary_accent),
                    ),
                    Span::styled(
                        format!("{}{marker}", bundle.display_name),
                        Style::default().fg(self.theme.text_primary()),
                    ),
                ])
            })
            .collect()
    }

    /// One line per language with its translation coverage.
    fn locale_lines(&self) -> Vec<Line<'static>> {
        let selection = self.theme.selection();
        selection
            .list_locales()
            .map(|meta| {
                let coverage = selection.locales().coverage(meta.code);
                let (color, detail) = if coverage.is_complete() {
                    (self.theme.status_success(), "complete".to_string())
                } else {
                    (
                        self.theme.status_warning(),
                        format!("{} missing", coverage.missing.len()),
                    )
                };
                Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", meta.label()),
                        Style::default().fg(self.theme.text_primary()),
                    ),
                    Span::styled(
                        format!("{:>3}%  {detail}", coverage.percent()),
                        Style::default().fg(color),
                    ),
                ])
            })
            .collect()
    }

    fn session_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!(
                "Signed in as {} since {}",
                self.session.email,
                self.session.signed_in_at.format("%H:%M")
            ),
            Style::default().fg(self.theme.status_info()),
        ))
    }

    fn instructions(&self) -> String {
        format!(
            "[{}] {}  •  [Esc] Close",
            self.sign_out_key,
            self.theme.t(keys::LOGOUT)
        )
    }
}

impl ComponentState for AdminDashboard {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting AdminDashboard for {}", self.session.email);
        Ok(())
    }
}

impl MockComponent for AdminDashboard {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!("📊 {}", self.theme.t(keys::DASHBOARD));
        let mut popup = PopupBuilder::new(title, &self.theme)
            .add_line(self.session_line().spans)
            .add_empty_line()
            .add_line(self.heading("Overview").spans);
        for line in self.stat_lines() {
            popup = popup.add_line(line.spans);
        }
        popup = popup.add_empty_line().add_line(self.heading("Recent activity").spans);
        for line in self.activity_lines() {
            popup = popup.add_line(line.spans);
        }
        popup = popup
            .add_empty_line()
            .add_line(self.heading(self.theme.t(keys::THEME)).spans);
        for line in self.theme_lines() {
            popup = popup.add_line(line.spans);
        }
        popup = popup
            .add_empty_line()
            .add_line(self.heading(self.theme.t(keys::LANGUAGE)).spans);
        for line in self.locale_lines() {
            popup = popup.add_line(line.spans);
        }

        popup
            .with_instructions(self.instructions())
            .render(frame, area);
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::String(self.session.email.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Submit => CmdResult::Custom(CMD_RESULT_SIGN_OUT, self.state()),
            Cmd::Cancel => CmdResult::Custom(CMD_RESULT_CLOSE, State::None),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for AdminDashboard {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => self.perform(Cmd::Cancel),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.sign_out_key => self.perform(Cmd::Submit),
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_SIGN_OUT, _) => {
                Some(Msg::AdminActivity(AdminActivityMsg::SignOut))
            }
            CmdResult::Custom(CMD_RESULT_CLOSE, _) => {
                Some(Msg::AdminActivity(AdminActivityMsg::DashboardClosed))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LocaleCode, SelectionContext, ThemeId};

    fn dashboard() -> (SelectionContext, AdminDashboard) {
        let selection = SelectionContext::builtin().unwrap();
        let dashboard = AdminDashboard::new(
            ThemeManager::new(selection.clone()),
            AdminSession::new("host@unitythreads.example"),
            'o',
        );
        (selection, dashboard)
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_sign_out_key() {
        let (_, mut dashboard) = dashboard();
        let ev = Event::Keyboard(KeyEvent::new(Key::Char('o'), KeyModifiers::NONE));
        assert_eq!(
            dashboard.on(ev),
            Some(Msg::AdminActivity(AdminActivityMsg::SignOut))
        );

        let other = Event::Keyboard(KeyEvent::new(Key::Char('x'), KeyModifiers::NONE));
        assert_eq!(dashboard.on(other), None);
    }

    #[test]
    fn test_escape_closes() {
        let (_, mut dashboard) = dashboard();
        let ev = Event::Keyboard(KeyEvent::new(Key::Esc, KeyModifiers::NONE));
        assert_eq!(
            dashboard.on(ev),
            Some(Msg::AdminActivity(AdminActivityMsg::DashboardClosed))
        );
    }

    #[test]
    fn test_theme_list_marks_active_bundle() {
        let (selection, dashboard) = dashboard();
        selection.select_bundle(ThemeId::Asian);

        let lines: Vec<String> = dashboard.theme_lines().iter().map(text_of).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("East Asian Minimal ✓"));
        assert!(!lines[0].contains('✓'));
    }

    #[test]
    fn test_locale_coverage_reports_gaps() {
        let (selection, dashboard) = dashboard();
        let hindi_missing = selection.locales().coverage(LocaleCode::Hi).missing.len();

        let lines: Vec<String> = dashboard.locale_lines().iter().map(text_of).collect();
        assert!(lines[0].contains("100%  complete"));
        assert!(lines[1].contains(&format!("{hindi_missing} missing")));
    }
}
