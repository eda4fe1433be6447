//! Message handlers, one module per activity.
//!
//! Handlers that cannot complete return `Some(Msg::Error(_))`, which the
//! model turns into an error popup. The theme and language pickers report
//! through the `ErrorReporter` instead, since a failed picker never blocks
//! the switch itself.

pub mod admin;
pub mod help;
pub mod locale;
pub mod popup;
pub mod section;
pub mod selection;
pub mod theme;
