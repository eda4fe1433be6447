use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_help: Option<char>,
    key_theme: Option<char>,
    key_language: Option<char>,
    key_admin: Option<char>,

    // Section navigation
    key_next_section: Option<char>,
    key_prev_section: Option<char>,

    // List navigation inside pickers and sections
    key_down: Option<char>,
    key_up: Option<char>,

    // Admin dashboard
    key_sign_out: Option<char>,
}

impl KeyBindingsConfig {
    // Global keys
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn help(&self) -> char {
        self.key_help.unwrap_or('h')
    }

    pub fn theme(&self) -> char {
        self.key_theme.unwrap_or('t')
    }

    pub fn language(&self) -> char {
        self.key_language.unwrap_or('l')
    }

    pub fn admin(&self) -> char {
        self.key_admin.unwrap_or('a')
    }

    // Section navigation
    pub fn next_section(&self) -> char {
        self.key_next_section.unwrap_or('n')
    }

    pub fn prev_section(&self) -> char {
        self.key_prev_section.unwrap_or('p')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    pub fn sign_out(&self) -> char {
        self.key_sign_out.unwrap_or('x')
    }

    /// Keys handled by the global key watcher, named by their config field.
    pub fn global_bindings(&self) -> [(&'static str, char); 7] {
        [
            ("key_quit", self.quit()),
            ("key_help", self.help()),
            ("key_theme", self.theme()),
            ("key_language", self.language()),
            ("key_admin", self.admin()),
            ("key_next_section", self.next_section()),
            ("key_prev_section", self.prev_section()),
        ]
    }

    /// Pairs of global bindings that share a key.
    pub fn conflicts(&self) -> Vec<(char, &'static str, &'static str)> {
        let mut bindings = self.global_bindings().to_vec();
        // Scrolling keys reach the section pane only when no global key claims them.
        bindings.push(("key_down", self.down()));
        bindings.push(("key_up", self.up()));

        let mut conflicts = Vec::new();
        for (i, (first_name, first_key)) in bindings.iter().enumerate() {
            for (second_name, second_key) in &bindings[i + 1..] {
                if first_key == second_key {
                    conflicts.push((*first_key, *first_name, *second_name));
                }
            }
        }
        conflicts
    }
}
