use crate::components::common::ComponentId;
use crate::config::KeyBindingsConfig;
use crate::theme::ThemeManager;
use catalog::locale::keys;
use tuirealm::Frame;
use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;

/// Help bar that shows keyboard shortcuts based on the current active component
pub struct HelpBar<'a> {
    theme: &'a ThemeManager,
    bindings: &'a KeyBindingsConfig,
}

impl<'a> HelpBar<'a> {
    pub fn new(theme: &'a ThemeManager, bindings: &'a KeyBindingsConfig) -> Self {
        Self { theme, bindings }
    }

    /// Shortcuts that appear in every context, labelled in the active language
    fn global_shortcuts(&self) -> Vec<(String, bool)> {
        let b = self.bindings;
        vec![
            (format!("[{}]", b.theme()), true),
            (format!(" {} ", self.theme.t(keys::THEME)), false),
            (format!("[{}]", b.language()), true),
            (format!(" {} ", self.theme.t(keys::LANGUAGE)), false),
            (format!("[{}]", b.admin()), true),
            (format!(" {} ", self.theme.t(keys::ADMIN)), false),
            (format!("[{}]", b.help()), true),
            (format!(" {} ", self.theme.t(keys::HELP)), false),
            (format!("[{}]", b.quit()), true),
            (format!(" {}", self.theme.t(keys::QUIT)), false),
        ]
    }

    /// Shortcuts specific to the focused component
    fn context_shortcuts(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        let b = self.bindings;
        match active_component {
            ComponentId::SectionView => vec![
                (format!("[Tab/{}]", b.next_section()), true),
                (" Next ".to_string(), false),
                (format!("[S-Tab/{}]", b.prev_section()), true),
                (" Prev ".to_string(), false),
                (format!("[↑↓/{}{}]", b.up(), b.down()), true),
                (" Scroll ".to_string(), false),
            ],
            ComponentId::ThemePicker | ComponentId::LocalePicker => vec![
                (format!("[↑↓/{}{}]", b.up(), b.down()), true),
                (" Move ".to_string(), false),
                ("[Enter]".to_string(), true),
                (" Apply ".to_string(), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            ComponentId::AdminLogin => vec![
                ("[Tab]".to_string(), true),
                (" Switch field ".to_string(), false),
                ("[Enter]".to_string(), true),
                (format!(" {} ", self.theme.t(keys::LOGIN)), false),
                ("[Esc]".to_string(), true),
                (" Cancel ".to_string(), false),
            ],
            ComponentId::AdminDashboard => vec![
                (format!("[{}]", b.sign_out()), true),
                (format!(" {} ", self.theme.t(keys::LOGOUT)), false),
                ("[Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            ComponentId::ErrorPopup => vec![
                ("[Enter/Esc]".to_string(), true),
                (" Close ".to_string(), false),
            ],
            _ => vec![],
        }
    }

    /// Combine context-specific and global shortcuts
    fn help_text(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        let mut shortcuts = self.context_shortcuts(active_component);
        // Typing in the sign-in form disables the global keys
        if *active_component != ComponentId::AdminLogin {
            shortcuts.extend(self.global_shortcuts());
        }
        shortcuts
    }

    pub fn view_with_active(&self, frame: &mut Frame, area: Rect, active_component: &ComponentId) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in self.help_text(active_component).into_iter().enumerate() {
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

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(Style::default().bg(self.theme.surface_raised()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LocaleCode, SelectionContext};

    #[test]
    fn test_global_labels_are_translated() {
        let selection = SelectionContext::builtin().unwrap();
        let theme = ThemeManager::new(selection.clone());
        let bindings = KeyBindingsConfig::default();
        let bar = HelpBar::new(&theme, &bindings);

        selection.select_locale(LocaleCode::Hi);
        let text: String = bar
            .help_text(&ComponentId::SectionView)
            .into_iter()
            .map(|(text, _)| text)
            .collect();

        assert!(text.contains("[t] थीम"));
        assert!(text.contains("[l] भाषा"));
        // No Hindi entry for "quit", so the English text is used
        assert!(text.contains("[q] Quit"));
    }

    #[test]
    fn test_login_form_hides_global_shortcuts() {
        let theme = ThemeManager::new(SelectionContext::builtin().unwrap());
        let bindings = KeyBindingsConfig::default();
        let bar = HelpBar::new(&theme, &bindings);

        let shortcuts = bar.help_text(&ComponentId::AdminLogin);
        assert!(shortcuts.iter().all(|(text, _)| text != "[q]"));
        assert_eq!(shortcuts.len(), 6);
    }
}
