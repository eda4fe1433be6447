use catalog::locale::keys;
use catalog::{LocaleCode, SelectionContext, ThemeId};
use proptest::prelude::*;

fn theme_id() -> impl Strategy<Value = ThemeId> {
    prop::sample::select(ThemeId::ALL.to_vec())
}

fn locale_code() -> impl Strategy<Value = LocaleCode> {
    prop::sample::select(LocaleCode::ALL.to_vec())
}

#[cfg(test)]
mod theme_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_select_then_get_returns_selected(ids in prop::collection::vec(theme_id(), 1..20)) {
            let selection = SelectionContext::builtin().unwrap();

            for id in ids {
                selection.select_bundle(id);
                prop_assert_eq!(selection.active_bundle().id, id);
            }
        }

        #[test]
        fn test_unknown_theme_key_is_a_no_op(
            start in theme_id(),
            key in "[a-z]{1,12}"
        ) {
            prop_assume!(ThemeId::parse(&key).is_none());
            let selection = SelectionContext::builtin().unwrap();
            selection.select_bundle(start);

            prop_assert!(!selection.select_bundle_key(&key));
            prop_assert_eq!(selection.active_bundle().id, start);
        }

        #[test]
        fn test_theme_key_parse_ignores_case(id in theme_id(), upper in any::<bool>()) {
            let key = if upper { id.as_str().to_uppercase() } else { id.as_str().to_string() };
            let selection = SelectionContext::builtin().unwrap();

            prop_assert!(selection.select_bundle_key(&key));
            prop_assert_eq!(selection.active_bundle().id, id);
        }
    }
}

#[cfg(test)]
mod locale_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_select_then_get_returns_selected(codes in prop::collection::vec(locale_code(), 1..20)) {
            let selection = SelectionContext::builtin().unwrap();

            for code in codes {
                selection.select_locale(code);
                prop_assert_eq!(selection.active_locale(), code);
            }
        }

        #[test]
        fn test_missing_keys_fall_back_to_default(
            code in locale_code(),
            key in prop::sample::select(keys::ALL.to_vec())
        ) {
            let selection = SelectionContext::builtin().unwrap();
            let table = selection.locales().table(code);
            let expected = match table.get(key) {
                Some(text) => text.to_string(),
                None => selection.locales().table(LocaleCode::En).get(key).unwrap().to_string(),
            };

            selection.select_locale(code);
            prop_assert_eq!(selection.translate(key), expected.as_str());
        }

        #[test]
        fn test_unknown_keys_resolve_to_themselves(
            code in locale_code(),
            key in "zz[A-Za-z]{1,16}"
        ) {
            let selection = SelectionContext::builtin().unwrap();
            selection.select_locale(code);

            prop_assert_eq!(selection.translate(&key), key.as_str());
        }

        #[test]
        fn test_switching_away_and_back_restores_output(
            first in locale_code(),
            second in locale_code(),
            key in prop_oneof![
                prop::sample::select(keys::ALL.to_vec()).prop_map(str::to_string),
                "zz[A-Za-z]{1,16}",
            ]
        ) {
            let selection = SelectionContext::builtin().unwrap();
            selection.select_locale(first);
            let before = selection.translate(&key).to_string();

            selection.select_locale(second);
            selection.select_locale(first);

            prop_assert_eq!(selection.active_locale(), first);
            prop_assert_eq!(selection.translate(&key), before.as_str());
        }

        #[test]
        fn test_locale_choice_survives_theme_switches(
            code in locale_code(),
            ids in prop::collection::vec(theme_id(), 0..10)
        ) {
            let selection = SelectionContext::builtin().unwrap();
            selection.select_locale(code);
            for id in ids {
                selection.select_bundle(id);
            }

            prop_assert_eq!(selection.active_locale(), code);
        }
    }
}
