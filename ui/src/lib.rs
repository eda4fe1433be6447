//! # Unity Threads UI Library
//!
//! Terminal front end for the Unity Threads celebration site, built with
//! Ratatui and tui-realm. Every view reads its colors from the active theme
//! bundle and its headings from the active locale, both held by the
//! [`catalog::SelectionContext`] handle the model injects into components.
//!
//! ## Modules
//!
//! - [`app`] - Model, update handlers, view composition and the main loop
//! - [`cli`] - Command line arguments
//! - [`components`] - Header, section pane, pickers, admin popups and the help bar
//! - [`config`] - Configuration loading, accessors and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Log file setup
//! - [`services`] - Collaborators injected into the model, such as the admin authenticator
//! - [`theme`] - Terminal palette derived from the active theme bundle
//! - [`validation`] - Input validation for the admin sign-in form
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod services;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

pub use components::common::Msg;

pub use validation::Validator;
