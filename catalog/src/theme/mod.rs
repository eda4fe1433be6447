//! # Theme Registry
//!
//! Named style bundles that re-skin the whole UI. Each bundle carries a
//! five-role palette, a three-role font set and a set of decorative motif
//! flags. Bundles are embedded TOML definitions, parsed and validated once
//! when the registry is built, and never change afterwards.
//!
//! ## Built-in Bundles
//!
//! In declaration order (the first one is the default):
//!
//! - **indian** - Indian Vibrance (gold, maroon, saffron)
//! - **asian** - East Asian Minimal (crimson, gold, ink)
//! - **african** - African Elegance (amber, saddle brown, forest green)
//! - **island** - Island Sunset (coral, sea green, sunflower)
//!
//! ## Definition Format
//!
//! ```toml
//! id = "indian"
//! display_name = "Indian Vibrance"
//!
//! [colors]
//! primary = "#D4AF37"
//! secondary = "#8B0000"
//! accent = "#FF6B35"
//! background = "#FFF8DC"
//! text = "#2C1810"
//!
//! [fonts]
//! script = "Dancing Script"
//! serif = "Playfair Display"
//! sans = "Inter"
//!
//! [patterns]
//! mandala = true
//! ```

pub mod builtin;
pub mod registry;
pub mod types;
pub mod validation;

pub use registry::ThemeRegistry;
pub use types::{ColorRole, FontRole, Rgb, ThemeBundle, ThemeColors, ThemeFonts, ThemeId};
