use crate::theme::palette::Palette;
use catalog::{LocaleCode, SelectionContext, ThemeBundle, ThemeId};
use std::sync::Arc;
use tuirealm::props::Color;

/// Read access to the active theme and language for rendering code.
///
/// A thin, cloneable wrapper over the shared [`SelectionContext`]. Palettes
/// for every bundle are derived once at construction; switching themes only
/// moves the selection pointer, so components pick up the new colors on
/// their next draw.
#[derive(Clone, Debug)]
pub struct ThemeManager {
    selection: SelectionContext,
    palettes: Arc<[Palette; ThemeId::ALL.len()]>,
}

impl ThemeManager {
    pub fn new(selection: SelectionContext) -> Self {
        let palettes = ThemeId::ALL.map(|id| Palette::from_bundle(selection.themes().get(id)));
        log::debug!("Derived {} theme palettes", palettes.len());
        Self {
            selection,
            palettes: Arc::new(palettes),
        }
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn bundle(&self) -> &ThemeBundle {
        self.selection.active_bundle()
    }

    pub fn palette(&self) -> &Palette {
        self.palette_for(self.selection.snapshot().theme)
    }

    pub fn palette_for(&self, id: ThemeId) -> &Palette {
        &self.palettes[id.index()]
    }

    pub fn locale(&self) -> LocaleCode {
        self.selection.active_locale()
    }

    /// Translate a key in the active locale.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.selection.translate(key)
    }
}

// Accessors for the active palette
macro_rules! theme_accessor {
    ($($method:ident),* $(,)?) => {
        impl ThemeManager {
            $(
                pub fn $method(&self) -> Color {
                    self.palette().$method
                }
            )*
        }
    };
}

theme_accessor!(
    text_primary,
    text_muted,
    surface,
    surface_raised,
    primary_accent,
    title_accent,
    header_accent,
    selection_bg,
    selection_fg,
    shortcut_key,
    shortcut_description,
    status_success,
    status_warning,
    status_error,
    status_info,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_selection() {
        let selection = SelectionContext::builtin().unwrap();
        let theme = ThemeManager::new(selection.clone());

        assert_eq!(theme.primary_accent(), Color::Rgb(212, 175, 55));

        selection.select_bundle(ThemeId::Asian);
        assert_eq!(theme.primary_accent(), Color::Rgb(220, 20, 60));
        assert_eq!(theme.bundle().display_name, "East Asian Minimal");
    }

    #[test]
    fn test_translation_follows_locale() {
        let selection = SelectionContext::builtin().unwrap();
        let theme = ThemeManager::new(selection.clone());

        selection.select_locale(LocaleCode::Hi);
        assert_eq!(theme.locale(), LocaleCode::Hi);
        assert_eq!(theme.t("admin"), "Admin");
        assert_eq!(theme.t("nonexistentKey"), "nonexistentKey");
    }
}
