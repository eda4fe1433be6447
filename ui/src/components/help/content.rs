use crate::config::KeyBindingsConfig;
use crate::theme::ThemeManager;
use catalog::locale::keys;

/// Represents a single keyboard shortcut with its description
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub keys: Vec<String>,
    pub description: String,
}

impl Shortcut {
    pub fn new(keys: Vec<String>, description: &str) -> Self {
        Self {
            keys,
            description: description.to_string(),
        }
    }
}

/// Represents a section of help content
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub icon: String,
    pub shortcuts: Vec<Shortcut>,
}

impl HelpSection {
    pub fn new(title: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            shortcuts: Vec::new(),
        }
    }

    pub fn add_single_key(mut self, key: String, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(vec![key], description));
        self
    }

    pub fn add_multiple_keys(mut self, keys: Vec<String>, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(keys, description));
        self
    }
}

/// Contains all help content organized by sections
#[derive(Debug, Clone)]
pub struct HelpContent {
    pub header_message: String,
    pub warning_message: Option<String>,
    pub sections: Vec<HelpSection>,
}

impl HelpContent {
    /// Generate help content from the key bindings.
    ///
    /// Labels that have a catalog key (theme, language, help, quit and the
    /// admin entries) are shown in the active language.
    pub fn from_config(
        bindings: &KeyBindingsConfig,
        theme: &ThemeManager,
        admin_enabled: bool,
    ) -> Self {
        let arrow_keys = || {
            vec![
                "[↑] [↓]".to_string(),
                format!("[{}] [{}]", bindings.up(), bindings.down()),
            ]
        };

        let sections = vec![
            HelpSection::new("GLOBAL", "🌐")
                .add_single_key(format!("[{}]", bindings.quit()), theme.t(keys::QUIT))
                .add_single_key(format!("[{}]", bindings.help()), theme.t(keys::HELP))
                .add_single_key(format!("[{}]", bindings.theme()), theme.t(keys::THEME))
                .add_single_key(format!("[{}]", bindings.language()), theme.t(keys::LANGUAGE))
                .add_single_key("[Ctrl+c]".to_string(), "Quit immediately"),
            HelpSection::new("SECTIONS", "🧭")
                .add_multiple_keys(
                    vec!["[Tab]".to_string(), format!("[{}]", bindings.next_section())],
                    "Next section",
                )
                .add_multiple_keys(
                    vec!["[Shift+Tab]".to_string(), format!("[{}]", bindings.prev_section())],
                    "Previous section",
                )
                .add_multiple_keys(arrow_keys(), "Scroll up/down")
                .add_single_key("[PgUp] [PgDn]".to_string(), "Scroll page up/down")
                .add_single_key("[Home]".to_string(), "Back to top"),
            HelpSection::new("PICKERS", "🎨")
                .add_multiple_keys(arrow_keys(), "Move selection")
                .add_single_key("[Enter]".to_string(), "Apply")
                .add_single_key("[Esc]".to_string(), "Close"),
            HelpSection::new(theme.t(keys::ADMIN), "🔐")
                .add_single_key(format!("[{}]", bindings.admin()), theme.t(keys::LOGIN))
                .add_single_key("[Tab]".to_string(), "Switch field")
                .add_single_key(format!("[{}]", bindings.sign_out()), theme.t(keys::LOGOUT))
                .add_single_key("[Esc]".to_string(), "Close"),
        ];

        let warning_message = (!admin_enabled).then(|| {
            "⚠️  Admin sign-in is disabled until [admin] email and password are configured"
                .to_string()
        });

        Self {
            header_message: format!(
                "Press [Esc] or [{}] to close this help screen",
                bindings.help()
            ),
            warning_message,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{LocaleCode, SelectionContext};

    #[test]
    fn test_content_follows_key_bindings_and_locale() {
        let selection = SelectionContext::builtin().unwrap();
        let theme = ThemeManager::new(selection.clone());
        selection.select_locale(LocaleCode::Hi);

        let content = HelpContent::from_config(&KeyBindingsConfig::default(), &theme, true);
        let global = &content.sections[0];

        assert_eq!(global.shortcuts[0].keys, vec!["[q]".to_string()]);
        assert_eq!(global.shortcuts[2].description, "थीम");
        assert!(content.warning_message.is_none());
    }

    #[test]
    fn test_warns_when_admin_disabled() {
        let theme = ThemeManager::new(SelectionContext::builtin().unwrap());
        let content = HelpContent::from_config(&KeyBindingsConfig::default(), &theme, false);

        assert!(content.warning_message.unwrap().contains("[admin]"));
    }
}
