//! # Application Module
//!
//! Core application logic and state management for the Unity Threads terminal
//! site. This module contains the main application model, lifecycle
//! management, and coordination between the UI components and the shared
//! theme and language selection.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - Application state, the selection handle and the admin session
//! - **View** - UI rendering and layout
//! - **Updates** - Message handling and state transitions
//!
//! Theme and language switches notify a selection observer registered by the
//! model. The observer queues `Msg::SelectionChanged` on the model channel and
//! the next loop iteration redraws with the new palette and strings.
//!
//! ## Usage
//!
//! ```no_run
//! use ui::app::application_lifecycle::ApplicationLifecycle;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationLifecycle::load_configuration(None)?;
//!     let selection = ApplicationLifecycle::load_catalog()?;
//!     let warnings = config.selection().apply(&selection);
//!
//!     let mut model = ApplicationLifecycle::initialize(config, selection, warnings)?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)?;
//!     Ok(())
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// State tracking for the page and its popups
pub mod managers;
/// Core application model and state structures
pub mod model;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
