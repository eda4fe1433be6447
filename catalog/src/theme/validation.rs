use crate::error::CatalogError;
use crate::theme::types::{Rgb, ThemeBundle};
use crate::validation::Validator;

/// Validator for `#RRGGBB` color values
pub struct HexColorValidator;

impl Validator<str> for HexColorValidator {
    type Error = String;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if !input.starts_with('#') {
            return Err("Color must start with '#'".to_string());
        }

        if Rgb::from_hex(input).is_none() {
            return Err("Color must have exactly six hexadecimal digits".to_string());
        }

        Ok(())
    }
}

/// Validator for a complete theme bundle.
///
/// Serde already rejects bundles with a missing role; this checks the
/// values the roles carry.
pub struct BundleValidator;

impl Validator<ThemeBundle> for BundleValidator {
    type Error = CatalogError;

    fn validate(&self, input: &ThemeBundle) -> Result<(), Self::Error> {
        let theme = input.id.as_str();

        if input.display_name.trim().is_empty() {
            return Err(CatalogError::EmptyDisplayName {
                kind: "Theme",
                id: theme.to_string(),
            });
        }

        let color_validator = HexColorValidator;
        for (role, value) in input.colors.iter() {
            if color_validator.validate(value).is_err() {
                return Err(CatalogError::InvalidColor {
                    theme: theme.to_string(),
                    role: role.as_str(),
                    value: value.to_string(),
                });
            }
        }

        for (role, family) in input.fonts.iter() {
            if family.trim().is_empty() {
                return Err(CatalogError::EmptyFont {
                    theme: theme.to_string(),
                    role: role.as_str(),
                });
            }
        }

        Ok(())
    }
}
