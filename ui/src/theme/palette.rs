use catalog::{ColorRole, Rgb, ThemeBundle};
use tuirealm::props::Color;

// Fallback colors for roles whose hex value cannot be decoded
pub(crate) mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const SURFACE: Color = Color::Black;
    pub const PRIMARY_ACCENT: Color = Color::Yellow;
    pub const TITLE_ACCENT: Color = Color::LightRed;
    pub const HEADER_ACCENT: Color = Color::LightMagenta;
    pub const SELECTION_BG: Color = Color::DarkGray;
    pub const SELECTION_FG: Color = Color::White;
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_INFO: Color = Color::Blue;
}

/// Convert a `#RRGGBB` value to a terminal color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    Rgb::from_hex(hex).map(rgb_to_color)
}

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Terminal colors derived from one theme bundle.
///
/// The five bundle roles map directly; muted text, selection and the
/// surface tints are blends of those roles so every bundle produces a
/// readable palette without extra definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text_primary: Color,
    pub text_muted: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub primary_accent: Color,
    pub title_accent: Color,
    pub header_accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub shortcut_key: Color,
    pub shortcut_description: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
    pub status_info: Color,
}

impl Palette {
    pub fn from_bundle(bundle: &ThemeBundle) -> Self {
        let colors = &bundle.colors;
        let role = |role: ColorRole| {
            let rgb = colors.rgb(role);
            if rgb.is_none() {
                log::warn!(
                    "Theme '{}' has an undecodable {} color, using fallback",
                    bundle.id,
                    role.as_str()
                );
            }
            rgb
        };

        let text = role(ColorRole::Text);
        let background = role(ColorRole::Background);
        let primary = role(ColorRole::Primary);
        let secondary = role(ColorRole::Secondary);
        let accent = role(ColorRole::Accent);

        let mixed = |base: Option<Rgb>, other: Option<Rgb>, weight: u8, fallback: Color| match (
            base, other,
        ) {
            (Some(base), Some(other)) => rgb_to_color(base.blend(other, weight)),
            _ => fallback,
        };
        let direct = |rgb: Option<Rgb>, fallback: Color| rgb.map(rgb_to_color).unwrap_or(fallback);

        Self {
            text_primary: direct(text, fallback_colors::TEXT_PRIMARY),
            text_muted: mixed(text, background, 45, fallback_colors::TEXT_MUTED),
            surface: direct(background, fallback_colors::SURFACE),
            surface_raised: mixed(background, primary, 12, fallback_colors::SURFACE),
            primary_accent: direct(primary, fallback_colors::PRIMARY_ACCENT),
            title_accent: direct(secondary, fallback_colors::TITLE_ACCENT),
            header_accent: direct(accent, fallback_colors::HEADER_ACCENT),
            selection_bg: mixed(background, primary, 40, fallback_colors::SELECTION_BG),
            selection_fg: direct(text, fallback_colors::SELECTION_FG),
            shortcut_key: direct(secondary, fallback_colors::TITLE_ACCENT),
            shortcut_description: mixed(text, background, 30, fallback_colors::TEXT_MUTED),
            status_success: fallback_colors::STATUS_SUCCESS,
            status_warning: fallback_colors::STATUS_WARNING,
            status_error: fallback_colors::STATUS_ERROR,
            status_info: direct(accent, fallback_colors::STATUS_INFO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ThemeId, ThemeRegistry};

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#DC143C"), Some(Color::Rgb(220, 20, 60)));
        assert_eq!(hex_to_color("ffd700"), Some(Color::Rgb(255, 215, 0)));
        assert_eq!(hex_to_color("#12345"), None);
        assert_eq!(hex_to_color("crimson"), None);
    }

    #[test]
    fn test_palette_maps_bundle_roles() {
        let registry = ThemeRegistry::builtin().unwrap();
        let palette = Palette::from_bundle(registry.get(ThemeId::Asian));

        assert_eq!(palette.primary_accent, Color::Rgb(220, 20, 60));
        assert_eq!(palette.title_accent, Color::Rgb(255, 215, 0));
        assert_eq!(palette.header_accent, Color::Rgb(0, 0, 0));
        assert_eq!(palette.surface, Color::Rgb(255, 254, 247));
        assert_eq!(palette.text_primary, Color::Rgb(44, 44, 44));
    }

    #[test]
    fn test_palette_falls_back_on_bad_hex() {
        let registry = ThemeRegistry::builtin().unwrap();
        let mut bundle = registry.get(ThemeId::Indian).clone();
        bundle.colors.primary = "gold".to_string();

        let palette = Palette::from_bundle(&bundle);

        assert_eq!(palette.primary_accent, fallback_colors::PRIMARY_ACCENT);
        assert_eq!(palette.selection_bg, fallback_colors::SELECTION_BG);
        assert_eq!(palette.text_primary, Color::Rgb(44, 24, 16));
    }

    #[test]
    fn test_every_builtin_bundle_has_distinct_palette() {
        let registry = ThemeRegistry::builtin().unwrap();
        let palettes: Vec<Palette> = registry
            .list()
            .map(|(_, bundle)| Palette::from_bundle(bundle))
            .collect();

        for (i, first) in palettes.iter().enumerate() {
            for second in &palettes[i + 1..] {
                assert_ne!(first.primary_accent, second.primary_accent);
            }
        }
    }
}
