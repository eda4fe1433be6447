use catalog::{LocaleCode, SelectionContext, ThemeId};
use serde::Deserialize;
use thiserror::Error;

/// Initial theme and language, from `[selection]` or the command line.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    theme: Option<String>,
    locale: Option<String>,
}

/// A configured selection value that names nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionWarning {
    #[error("Unknown theme '{requested}', using '{fallback}'")]
    UnknownTheme { requested: String, fallback: ThemeId },
    #[error("Unknown language '{requested}', using '{fallback}'")]
    UnknownLocale {
        requested: String,
        fallback: LocaleCode,
    },
}

impl SelectionConfig {
    pub fn new(theme: Option<String>, locale: Option<String>) -> Self {
        Self { theme, locale }
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Command-line values take precedence over the file.
    pub fn with_overrides(&self, theme: Option<&str>, locale: Option<&str>) -> Self {
        Self {
            theme: theme.map(str::to_string).or_else(|| self.theme.clone()),
            locale: locale.map(str::to_string).or_else(|| self.locale.clone()),
        }
    }

    /// Apply the configured values, keeping the current selection for
    /// anything that does not parse.
    pub fn apply(&self, selection: &SelectionContext) -> Vec<SelectionWarning> {
        let mut warnings = Vec::new();

        if let Some(theme) = self.theme() {
            if !selection.select_bundle_key(theme) {
                warnings.push(SelectionWarning::UnknownTheme {
                    requested: theme.to_string(),
                    fallback: selection.active_bundle().id,
                });
            }
        }

        if let Some(locale) = self.locale() {
            if !selection.select_locale_key(locale) {
                warnings.push(SelectionWarning::UnknownLocale {
                    requested: locale.to_string(),
                    fallback: selection.active_locale(),
                });
            }
        }

        for warning in &warnings {
            log::warn!("{warning}");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_are_applied() {
        let selection = SelectionContext::builtin().unwrap();
        let config = SelectionConfig::new(Some("Island".to_string()), Some("hi_IN".to_string()));

        assert!(config.apply(&selection).is_empty());
        assert_eq!(selection.active_bundle().id, ThemeId::Island);
        assert_eq!(selection.active_locale(), LocaleCode::Hi);
    }

    #[test]
    fn test_unknown_values_fall_back_with_warnings() {
        let selection = SelectionContext::builtin().unwrap();
        let config = SelectionConfig::new(Some("nordic".to_string()), Some("fr".to_string()));

        let warnings = config.apply(&selection);

        assert_eq!(
            warnings,
            vec![
                SelectionWarning::UnknownTheme {
                    requested: "nordic".to_string(),
                    fallback: ThemeId::Indian,
                },
                SelectionWarning::UnknownLocale {
                    requested: "fr".to_string(),
                    fallback: LocaleCode::En,
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Unknown theme 'nordic', using 'indian'"
        );
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = SelectionConfig::new(Some("asian".to_string()), Some("zh".to_string()));

        let merged = file.with_overrides(Some("african"), None);

        assert_eq!(merged.theme(), Some("african"));
        assert_eq!(merged.locale(), Some("zh"));
    }
}
