use catalog::locale::keys;
use catalog::theme::ColorRole;
use catalog::{CatalogError, LocaleCode, LocaleRegistry, SelectionContext, ThemeId, ThemeRegistry};
use claims::*;

mod helpers {
    use super::*;

    pub fn selection() -> SelectionContext {
        SelectionContext::builtin().expect("built-in catalog should assemble")
    }
}

#[test]
fn test_asian_bundle_primary_color() {
    let selection = helpers::selection();
    selection.select_bundle(ThemeId::Asian);

    let bundle = selection.active_bundle();
    assert_eq!(bundle.colors.primary, "#DC143C");
    assert_eq!(bundle.display_name, "East Asian Minimal");
    assert_some!(bundle.colors.rgb(ColorRole::Primary));
}

#[test]
fn test_hindi_admin_falls_back_to_english() {
    let selection = helpers::selection();
    selection.select_locale(LocaleCode::Hi);

    assert_eq!(selection.translate(keys::ADMIN), "Admin");
    assert_eq!(selection.translate(keys::THANK_YOU), "धन्यवाद");
}

#[test]
fn test_unknown_key_resolves_to_itself() {
    let selection = helpers::selection();

    for code in LocaleCode::ALL {
        selection.select_locale(code);
        assert_eq!(selection.translate("nonexistentKey"), "nonexistentKey");
    }
}

#[test]
fn test_locale_round_trip_restores_every_string() {
    let selection = helpers::selection();

    for first in LocaleCode::ALL {
        for second in LocaleCode::ALL {
            selection.select_locale(first);
            let before: Vec<String> = keys::ALL
                .iter()
                .chain(["nonexistentKey"].iter())
                .map(|key| selection.translate(key).to_string())
                .collect();

            selection.select_locale(second);
            selection.select_locale(first);

            let after: Vec<String> = keys::ALL
                .iter()
                .chain(["nonexistentKey"].iter())
                .map(|key| selection.translate(key).to_string())
                .collect();
            assert_eq!(before, after, "{first} -> {second} -> {first}");
        }
    }
}

#[test]
fn test_every_locale_resolves_every_ui_key() {
    let selection = helpers::selection();

    for code in LocaleCode::ALL {
        selection.select_locale(code);
        for key in keys::ALL {
            assert_ne!(selection.translate(key), *key, "{code} leaves '{key}' untranslated");
        }
    }
}

#[test]
fn test_theme_and_locale_are_independent() {
    let selection = helpers::selection();

    selection.select_bundle(ThemeId::Island);
    selection.select_locale(LocaleCode::Zh);
    selection.select_bundle(ThemeId::African);

    assert_eq!(selection.active_locale(), LocaleCode::Zh);
    assert_eq!(selection.active_bundle().id, ThemeId::African);
}

#[test]
fn test_lists_follow_declaration_order() {
    let selection = helpers::selection();

    let themes: Vec<&str> = selection
        .list_bundles()
        .map(|(_, bundle)| bundle.display_name.as_str())
        .collect();
    assert_eq!(
        themes,
        vec!["Indian Vibrance", "East Asian Minimal", "African Elegance", "Island Sunset"]
    );

    let locales: Vec<String> = selection.list_locales().map(|meta| meta.label()).collect();
    assert_eq!(locales, vec!["🇺🇸 English", "🇮🇳 हिंदी", "🇨🇳 中文"]);
}

#[test]
fn test_external_definitions_are_validated() {
    let broken = r##"
        id = "indian"
        display_name = "Indian Vibrance"

        [colors]
        primary = "gold"
        secondary = "#8B0000"
        accent = "#FF6B35"
        background = "#FFF8DC"
        text = "#2C1810"

        [fonts]
        script = "Dancing Script"
        serif = "Playfair Display"
        sans = "Inter"
    "##;

    let err = assert_err!(ThemeRegistry::from_sources(&[("indian.toml", broken)]));
    assert_matches!(err, CatalogError::InvalidColor { role: "primary", .. });

    let err = assert_err!(LocaleRegistry::from_sources(&[]));
    assert_matches!(err, CatalogError::Missing { kind: "locale", .. });
}
