use crate::error::{CatalogError, CatalogResult};
use crate::locale::types::LocaleTable;

/// Built-in locale tables embedded in the binary, in declaration order.
pub const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("locales/en.toml", include_str!("../../locales/en.toml")),
    ("locales/hi.toml", include_str!("../../locales/hi.toml")),
    ("locales/zh.toml", include_str!("../../locales/zh.toml")),
];

/// Parse one locale table. `source_name` only feeds error messages.
pub fn parse_table(source_name: &str, content: &str) -> CatalogResult<LocaleTable> {
    toml::from_str(content).map_err(|e| CatalogError::Parse {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::types::LocaleCode;

    #[test]
    fn test_builtin_tables_parse() {
        for (name, content) in BUILTIN_LOCALES {
            let table = parse_table(name, content).expect("built-in locale should parse");
            assert!(name.ends_with(&format!("{}.toml", table.code())));
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn test_table_without_strings_section() {
        let content = r#"
            [meta]
            code = "zh"
            name = "中文"
        "#;

        let table = parse_table("zh.toml", content).unwrap();
        assert_eq!(table.code(), LocaleCode::Zh);
        assert!(table.meta.flag.is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_code_is_a_parse_error() {
        let content = r#"
            [meta]
            code = "es"
            name = "Español"
        "#;

        assert!(matches!(
            parse_table("es.toml", content),
            Err(CatalogError::Parse { .. })
        ));
    }
}
