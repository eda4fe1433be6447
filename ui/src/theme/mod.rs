//! # Terminal Theming
//!
//! Turns the active catalog theme bundle into terminal colors.
//!
//! - **[`Palette`]** - Ratatui colors derived from one bundle's five roles
//! - **[`ThemeManager`]** - Cloneable handle every component receives; reads
//!   the active palette and translations through the shared selection
//!
//! ## Usage
//!
//! ```no_run
//! use catalog::{SelectionContext, ThemeId};
//! use ui::theme::ThemeManager;
//!
//! let selection = SelectionContext::builtin()?;
//! let theme = ThemeManager::new(selection.clone());
//!
//! selection.select_bundle(ThemeId::Island);
//! let accent = theme.primary_accent(); // coral
//! let heading = theme.t("ourStory");
//! # Ok::<(), catalog::CatalogError>(())
//! ```
//!
//! A role whose hex value cannot be decoded falls back to a fixed terminal
//! color and is logged; the built-in bundles are validated when the catalog
//! is built, so this only matters for hand-built bundles.

pub mod manager;
pub mod palette;

pub use manager::ThemeManager;
pub use palette::{Palette, hex_to_color};
