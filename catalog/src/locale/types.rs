use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supported UI locales.
///
/// [`LocaleCode::En`] is the default and the fallback of last resort before
/// the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    En,
    Hi,
    Zh,
}

impl LocaleCode {
    /// Declaration order, used by the language picker.
    pub const ALL: [LocaleCode; 3] = [LocaleCode::En, LocaleCode::Hi, LocaleCode::Zh];

    pub const DEFAULT: LocaleCode = LocaleCode::En;

    pub const fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Hi => "hi",
            LocaleCode::Zh => "zh",
        }
    }

    /// Position in [`LocaleCode::ALL`].
    pub const fn index(self) -> usize {
        match self {
            LocaleCode::En => 0,
            LocaleCode::Hi => 1,
            LocaleCode::Zh => 2,
        }
    }

    /// Parse a locale value (case-insensitive, tolerant of region tags such as `zh-CN`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        Self::ALL.into_iter().find(|code| code.as_str() == lang)
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::DEFAULT
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleMeta {
    pub code: LocaleCode,
    /// Name in the locale's own script.
    pub name: String,
    pub flag: Option<String>,
}

impl LocaleMeta {
    /// `"<flag> <name>"`, or just the name when there is no flag.
    pub fn label(&self) -> String {
        match &self.flag {
            Some(flag) => format!("{flag} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// One locale's key to text table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleTable {
    pub meta: LocaleMeta,
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

impl LocaleTable {
    pub fn code(&self) -> LocaleCode {
        self.meta.code
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_code_parse() {
        assert_eq!(LocaleCode::parse("en"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::parse("HI"), Some(LocaleCode::Hi));
        assert_eq!(LocaleCode::parse("zh-CN"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::parse("hi_IN"), Some(LocaleCode::Hi));
        assert_eq!(LocaleCode::parse(" en-US "), Some(LocaleCode::En));
        assert_eq!(LocaleCode::parse("es"), None);
        assert_eq!(LocaleCode::parse(""), None);
    }

    #[test]
    fn test_locale_code_index_matches_declaration_order() {
        for (position, code) in LocaleCode::ALL.into_iter().enumerate() {
            assert_eq!(code.index(), position);
        }
        assert_eq!(LocaleCode::default(), LocaleCode::En);
    }

    #[test]
    fn test_meta_label() {
        let with_flag = LocaleMeta {
            code: LocaleCode::Zh,
            name: "中文".to_string(),
            flag: Some("🇨🇳".to_string()),
        };
        let without_flag = LocaleMeta {
            flag: None,
            ..with_flag.clone()
        };

        assert_eq!(with_flag.label(), "🇨🇳 中文");
        assert_eq!(without_flag.label(), "中文");
    }
}
