use crate::error::{CatalogError, CatalogResult};
use crate::theme::builtin::{self, BUILTIN_THEMES};
use crate::theme::types::{ThemeBundle, ThemeId};
use crate::theme::validation::BundleValidator;
use crate::validation::Validator;

/// Fixed catalog of theme bundles.
///
/// Holds exactly one bundle per [`ThemeId`], stored in declaration order, so
/// a lookup by id can never miss once the registry exists.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    bundles: Vec<ThemeBundle>,
}

impl ThemeRegistry {
    /// Registry assembled from the embedded definitions.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_sources(BUILTIN_THEMES)
    }

    /// Parse `(source_name, toml)` pairs and assemble a registry from them.
    pub fn from_sources(sources: &[(&str, &str)]) -> CatalogResult<Self> {
        let bundles = sources
            .iter()
            .map(|(name, content)| builtin::parse_bundle(name, content))
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_bundles(bundles)
    }

    /// Validate and order bundles. Every id must be defined exactly once.
    pub fn from_bundles(bundles: Vec<ThemeBundle>) -> CatalogResult<Self> {
        let validator = BundleValidator;
        let mut slots: Vec<Option<ThemeBundle>> = vec![None; ThemeId::ALL.len()];

        for bundle in bundles {
            validator.validate(&bundle)?;

            let slot = &mut slots[bundle.id.index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate {
                    kind: "theme",
                    id: bundle.id.to_string(),
                });
            }
            *slot = Some(bundle);
        }

        let bundles = ThemeId::ALL
            .into_iter()
            .zip(slots)
            .map(|(id, slot)| {
                slot.ok_or_else(|| CatalogError::Missing {
                    kind: "theme",
                    id: id.to_string(),
                })
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        log::debug!("Theme registry assembled with {} bundles", bundles.len());
        Ok(Self { bundles })
    }

    pub fn get(&self, id: ThemeId) -> &ThemeBundle {
        &self.bundles[id.index()]
    }

    /// The preferred bundle: first in declaration order.
    pub fn default_id(&self) -> ThemeId {
        self.bundles[0].id
    }

    /// Bundles in declaration order, not alphabetical.
    pub fn list(&self) -> impl Iterator<Item = (ThemeId, &ThemeBundle)> {
        self.bundles.iter().map(|bundle| (bundle.id, bundle))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
