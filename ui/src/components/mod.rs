// Core components
pub mod common;
pub mod state;

// Reusable patterns and utilities
pub mod base_popup;
pub mod sections;

// Page components
pub mod header;
pub mod section_view;

// Selection components
pub mod locale_picker;
pub mod theme_picker;

// Admin components
pub mod admin_dashboard;
pub mod admin_login;

// Popup components
pub mod error_popup;

// Display components
pub mod help;
pub mod help_bar;
pub mod help_screen;

// System components
pub mod global_key_watcher;
