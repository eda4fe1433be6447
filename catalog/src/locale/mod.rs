//! # Locale Registry
//!
//! Per-locale key to text tables with a two-step fallback: a key missing
//! from the active locale resolves from English, and a key missing from
//! English resolves to the key itself. Tables are embedded TOML files:
//!
//! ```toml
//! [meta]
//! code = "hi"
//! name = "हिंदी"
//! flag = "🇮🇳"
//!
//! [strings]
//! welcome = "हमारी शादी में आपका स्वागत है"
//! ```
//!
//! Non-default locales may omit keys but may not introduce keys the default
//! locale lacks.

pub mod builtin;
pub mod keys;
pub mod registry;
pub mod types;

pub use registry::{Coverage, LocaleRegistry};
pub use types::{LocaleCode, LocaleMeta, LocaleTable};
