use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a built-in theme bundle.
///
/// The set is closed: an unknown theme can only come from untyped input
/// (configuration, command line), where [`ThemeId::parse`] turns it into
/// `None` before it ever reaches the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Indian,
    Asian,
    African,
    Island,
}

impl ThemeId {
    /// Declaration order. The first entry is the preferred default.
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Indian,
        ThemeId::Asian,
        ThemeId::African,
        ThemeId::Island,
    ];

    /// Stable key used for selection, configuration and file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeId::Indian => "indian",
            ThemeId::Asian => "asian",
            ThemeId::African => "african",
            ThemeId::Island => "island",
        }
    }

    /// Position in [`ThemeId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            ThemeId::Indian => 0,
            ThemeId::Asian => 1,
            ThemeId::African => 2,
            ThemeId::Island => 3,
        }
    }

    /// Parse a theme key, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|id| id.as_str() == normalized)
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::ALL[0]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color roles every bundle defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
        }
    }
}

/// Semantic font roles every bundle defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Script,
    Serif,
    Sans,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Script, FontRole::Serif, FontRole::Sans];

    pub const fn as_str(self) -> &'static str {
        match self {
            FontRole::Script => "script",
            FontRole::Serif => "serif",
            FontRole::Sans => "sans",
        }
    }
}

/// An RGB triple decoded from a `#RRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Decode `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb(r, g, b))
    }

    /// Linear mix towards `other`; `weight` is the share of `other` in percent.
    pub fn blend(self, other: Rgb, weight: u8) -> Rgb {
        let weight = u16::from(weight.min(100));
        let mix = |a: u8, b: u8| -> u8 {
            ((u16::from(a) * (100 - weight) + u16::from(b) * weight) / 100) as u8
        };
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Palette of a bundle, one value per [`ColorRole`], in role order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ThemeColors {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
        }
    }

    /// Decoded color for a role; `None` only for values that skipped validation.
    pub fn rgb(&self, role: ColorRole) -> Option<Rgb> {
        Rgb::from_hex(self.get(role))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Font families of a bundle, one per [`FontRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFonts {
    pub script: String,
    pub serif: String,
    pub sans: String,
}

impl ThemeFonts {
    pub fn get(&self, role: FontRole) -> &str {
        match role {
            FontRole::Script => &self.script,
            FontRole::Serif => &self.serif,
            FontRole::Sans => &self.sans,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &str)> {
        FontRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// A named style bundle applied uniformly across the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeBundle {
    pub id: ThemeId,
    pub display_name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    /// Ornamental motifs; cosmetic only.
    #[serde(default, rename = "patterns")]
    pub decorative_flags: BTreeMap<String, bool>,
}

impl ThemeBundle {
    /// Names of the enabled motifs, alphabetically.
    pub fn motifs(&self) -> impl Iterator<Item = &str> {
        self.decorative_flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_parse() {
        assert_eq!(ThemeId::parse("asian"), Some(ThemeId::Asian));
        assert_eq!(ThemeId::parse("  Island "), Some(ThemeId::Island));
        assert_eq!(ThemeId::parse("INDIAN"), Some(ThemeId::Indian));
        assert_eq!(ThemeId::parse("nordic"), None);
        assert_eq!(ThemeId::parse(""), None);
    }

    #[test]
    fn test_theme_id_index_matches_declaration_order() {
        for (position, id) in ThemeId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), position);
        }
        assert_eq!(ThemeId::default(), ThemeId::Indian);
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#D4AF37"), Some(Rgb(0xD4, 0xAF, 0x37)));
        assert_eq!(Rgb::from_hex("dc143c"), Some(Rgb(0xDC, 0x14, 0x3C)));
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex("#ÄÄÄ"), None);
    }

    #[test]
    fn test_rgb_blend() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);

        assert_eq!(black.blend(white, 0), black);
        assert_eq!(black.blend(white, 100), white);
        assert_eq!(black.blend(white, 50), Rgb(127, 127, 127));
        assert_eq!(black.blend(white, 200), white);
    }

    #[test]
    fn test_colors_iterate_in_role_order() {
        let colors = ThemeColors {
            primary: "#000001".to_string(),
            secondary: "#000002".to_string(),
            accent: "#000003".to_string(),
            background: "#000004".to_string(),
            text: "#000005".to_string(),
        };

        let roles: Vec<&str> = colors.iter().map(|(role, _)| role.as_str()).collect();
        assert_eq!(
            roles,
            vec!["primary", "secondary", "accent", "background", "text"]
        );
        assert_eq!(colors.get(ColorRole::Text), "#000005");
    }

    #[test]
    fn test_motifs_skip_disabled_flags() {
        let mut flags = BTreeMap::new();
        flags.insert("mandala".to_string(), true);
        flags.insert("paisley".to_string(), false);
        let bundle = ThemeBundle {
            id: ThemeId::Indian,
            display_name: "Indian Vibrance".to_string(),
            colors: ThemeColors {
                primary: "#D4AF37".to_string(),
                secondary: "#8B0000".to_string(),
                accent: "#FF6B35".to_string(),
                background: "#FFF8DC".to_string(),
                text: "#2C1810".to_string(),
            },
            fonts: ThemeFonts {
                script: "Dancing Script".to_string(),
                serif: "Playfair Display".to_string(),
                sans: "Inter".to_string(),
            },
            decorative_flags: flags,
        };

        assert_eq!(bundle.motifs().collect::<Vec<_>>(), vec!["mandala"]);
    }
}
