pub mod content;
pub mod rendering;

pub use content::{HelpContent, HelpSection, Shortcut};
pub use rendering::HelpRenderer;
