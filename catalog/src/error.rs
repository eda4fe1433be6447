use thiserror::Error;

/// Errors raised while the theme and locale registries are assembled.
///
/// Registries are built once at startup from the embedded definitions, so
/// every variant describes a defect in those definitions rather than a
/// runtime condition. Lookups and selection switches never fail.
///
/// # Examples
///
/// ```no_run
/// use catalog::{CatalogError, ThemeRegistry};
///
/// match ThemeRegistry::builtin() {
///     Ok(registry) => println!("{} themes available", registry.len()),
///     Err(CatalogError::InvalidColor { theme, role, value }) => {
///         eprintln!("theme {theme} has a bad {role} color: {value}");
///     }
///     Err(other) => eprintln!("catalog is broken: {other}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A definition file could not be parsed.
    #[error("Failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// A color role does not hold a `#RRGGBB` value.
    #[error("Theme '{theme}' has an invalid {role} color: '{value}'")]
    InvalidColor {
        theme: String,
        role: &'static str,
        value: String,
    },

    /// A font role is blank.
    #[error("Theme '{theme}' has an empty {role} font")]
    EmptyFont { theme: String, role: &'static str },

    /// A theme or locale is missing its human-readable label.
    #[error("{kind} '{id}' has an empty display name")]
    EmptyDisplayName { kind: &'static str, id: String },

    /// A known theme id or locale code has no definition.
    #[error("No definition for {kind} '{id}'")]
    Missing { kind: &'static str, id: String },

    /// A theme id or locale code is defined more than once.
    #[error("Duplicate definition for {kind} '{id}'")]
    Duplicate { kind: &'static str, id: String },

    /// A locale carries keys the default locale does not define.
    #[error("Locale '{locale}' defines keys missing from the default locale: {}", .keys.join(", "))]
    KeysOutsideDefault { locale: String, keys: Vec<String> },
}

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_outside_default_lists_every_key() {
        let error = CatalogError::KeysOutsideDefault {
            locale: "hi".to_string(),
            keys: vec!["namaste".to_string(), "shaadi".to_string()],
        };

        let message = error.to_string();
        assert!(message.contains("'hi'"));
        assert!(message.contains("namaste, shaadi"));
    }

    #[test]
    fn test_invalid_color_message() {
        let error = CatalogError::InvalidColor {
            theme: "indian".to_string(),
            role: "primary",
            value: "gold".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Theme 'indian' has an invalid primary color: 'gold'"
        );
    }
}
