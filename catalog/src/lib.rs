//! # Unity Threads Catalog
//!
//! Core library behind the Unity Threads celebration site. It owns the two
//! cross-cutting configuration subsystems every view reads from, and the
//! selection handle that threads them into the view tree.
//!
//! ## Modules
//!
//! - [`theme`] - Theme bundles (palette, fonts, decorative motifs) and the ordered registry
//! - [`locale`] - Per-locale string tables, the registry and the translation fallback chain
//! - [`selection`] - The active theme/locale selection with subscribe/notify semantics
//! - [`validation`] - Validator trait shared by catalog and UI input checks
//! - [`error`] - Errors raised while the built-in catalog is assembled
//!
//! ## Usage
//!
//! ```no_run
//! use catalog::{LocaleCode, SelectionContext, ThemeId};
//!
//! let selection = SelectionContext::builtin()?;
//! selection.select_bundle(ThemeId::Asian);
//! selection.select_locale(LocaleCode::Hi);
//!
//! assert_eq!(selection.active_bundle().colors.primary, "#DC143C");
//! assert_eq!(selection.translate("admin"), "Admin");
//! # Ok::<(), catalog::CatalogError>(())
//! ```

pub mod error;
pub mod locale;
pub mod selection;
pub mod theme;
pub mod validation;

pub use error::{CatalogError, CatalogResult};
pub use locale::{Coverage, LocaleCode, LocaleMeta, LocaleRegistry, LocaleTable};
pub use selection::{
    ActiveSelection, SelectionChange, SelectionContext, SelectionObserver, SubscriptionId,
};
pub use theme::{ColorRole, FontRole, Rgb, ThemeBundle, ThemeId, ThemeRegistry};
pub use validation::Validator;
