use crate::error::{CatalogError, CatalogResult};
use crate::theme::types::ThemeBundle;

/// Built-in theme definitions embedded in the binary, in declaration order.
pub const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("themes/indian.toml", include_str!("../../themes/indian.toml")),
    ("themes/asian.toml", include_str!("../../themes/asian.toml")),
    ("themes/african.toml", include_str!("../../themes/african.toml")),
    ("themes/island.toml", include_str!("../../themes/island.toml")),
];

/// Parse one theme definition. `source_name` only feeds error messages.
pub fn parse_bundle(source_name: &str, content: &str) -> CatalogResult<ThemeBundle> {
    toml::from_str(content).map_err(|e| CatalogError::Parse {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::ThemeId;

    #[test]
    fn test_builtin_definitions_parse() {
        for (name, content) in BUILTIN_THEMES {
            assert!(!content.is_empty(), "Theme {name} should not be empty");
            let bundle = parse_bundle(name, content).expect("built-in theme should parse");
            assert!(name.ends_with(&format!("{}.toml", bundle.id)));
        }
    }

    #[test]
    fn test_missing_role_is_a_parse_error() {
        let content = r##"
            id = "asian"
            display_name = "East Asian Minimal"

            [colors]
            primary = "#DC143C"
            secondary = "#FFD700"
            accent = "#000000"
            background = "#FFFEF7"

            [fonts]
            script = "Noto Sans SC"
            serif = "Noto Serif SC"
            sans = "Inter"
        "##;

        let error = parse_bundle("partial.toml", content).unwrap_err();
        match error {
            CatalogError::Parse {
                source_name,
                reason,
            } => {
                assert_eq!(source_name, "partial.toml");
                assert!(reason.contains("text"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_theme_id_is_a_parse_error() {
        let content = r##"
            id = "nordic"
            display_name = "Nordic Frost"

            [colors]
            primary = "#FFFFFF"
            secondary = "#FFFFFF"
            accent = "#FFFFFF"
            background = "#FFFFFF"
            text = "#000000"

            [fonts]
            script = "A"
            serif = "B"
            sans = "C"
        "##;

        assert!(parse_bundle("nordic.toml", content).is_err());
    }

    #[test]
    fn test_patterns_are_optional() {
        let content = r##"
            id = "island"
            display_name = "Island Sunset"

            [colors]
            primary = "#FF7F50"
            secondary = "#20B2AA"
            accent = "#FFD700"
            background = "#F0F8FF"
            text = "#2F4F4F"

            [fonts]
            script = "Dancing Script"
            serif = "Playfair Display"
            sans = "Inter"
        "##;

        let bundle = parse_bundle("island.toml", content).unwrap();
        assert_eq!(bundle.id, ThemeId::Island);
        assert!(bundle.decorative_flags.is_empty());
    }
}
