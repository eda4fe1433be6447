//! Application lifecycle management
//!
//! This module handles the initialization, main loop, and shutdown of the application.
//! It extracts complex functionality from main.rs to improve maintainability.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{self, AppConfig, ConfigValidationError, SelectionWarning};
use crate::error::{AppError, ErrorReporter};
use crate::services::{AdminAuthenticator, ConfigAdminAuthenticator};
use catalog::SelectionContext;

use log::{debug, error, info};
use std::error::Error as StdError;
use std::path::Path;
use tuirealm::Update;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;

/// Manages the display of configuration errors with user interaction
pub struct ConfigErrorDisplay {
    model: Model<CrosstermTerminalAdapter>,
}

impl ConfigErrorDisplay {
    /// Initialize the error display with the given validation errors
    pub fn new(
        config: &AppConfig,
        selection: SelectionContext,
        validation_errors: Vec<ConfigValidationError>,
    ) -> Result<Self, Box<dyn StdError>> {
        // The broken [admin] section may be the problem, so never sign anyone in here
        let authenticator = Box::new(ConfigAdminAuthenticator::default());
        let mut model = Model::new(config, selection, authenticator)
            .map_err(|e| format!("Failed to initialize model for error display: {e}"))?;

        // Show the first error in a popup (most critical one)
        if let Some(first_error) = validation_errors.first() {
            let error_message = first_error.user_message();
            error!("Configuration error: {error_message}");

            if let Err(e) = model.mount_error_popup(&AppError::Config(error_message)) {
                error!("Failed to mount configuration error popup: {e}");
                // Fallback to logging all errors
                for validation_error in &validation_errors {
                    error!(
                        "Config validation error: {}",
                        validation_error.user_message()
                    );
                }
            }
        }

        // Also log all validation errors for debugging
        for (i, validation_error) in validation_errors.iter().enumerate() {
            error!("Config validation error {}: {:?}", i + 1, validation_error);
        }

        Ok(Self { model })
    }

    /// Show the error popup and wait for user acknowledgment
    pub fn show_and_wait_for_acknowledgment(&mut self) -> Result<(), Box<dyn StdError>> {
        info!(
            "Configuration validation failed. Application will exit after user acknowledges the error."
        );

        ApplicationLifecycle::setup_terminal(&mut self.model)?;

        // Draw the error popup
        if let Err(e) = self.model.view() {
            error!("Error during error popup rendering: {e}");
        }

        // Main loop to handle the error popup until user closes it
        while !self.model.state_manager.should_quit() {
            match self.model.app.tick(PollStrategy::Once) {
                Err(err) => {
                    error!("Application tick error during error display: {err}");
                    break;
                }
                Ok(messages) if !messages.is_empty() => {
                    for msg in messages.into_iter() {
                        let mut msg = Some(msg);
                        while msg.is_some() {
                            // Handle the message
                            msg = self.model.update(msg);
                        }
                    }

                    // Check if error popup was closed - if so, quit the app
                    if !self.model.app.mounted(&ComponentId::ErrorPopup) {
                        info!("Configuration error popup closed by user, terminating application");
                        self.model.set_quit(true);
                        break;
                    }

                    if let Err(e) = self.model.view() {
                        error!("Error during view rendering: {e}");
                        break;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Properly shutdown the error display
    pub fn shutdown(mut self) {
        info!("Terminating application due to configuration errors");
        self.model.shutdown();
        ApplicationLifecycle::restore_terminal(&mut self.model);
    }
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Load the configuration, from `path` alone when given.
    pub fn load_configuration(
        path: Option<&Path>,
    ) -> Result<&'static AppConfig, Box<dyn StdError>> {
        match config::init_config(path) {
            config::ConfigLoadResult::Success(config) => Ok(config.as_ref()),
            config::ConfigLoadResult::LoadError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationLoader",
                    "load_config",
                    "Configuration loading failed. The application cannot start without a valid configuration.",
                );
                Err(error.to_string().into())
            }
            config::ConfigLoadResult::DeserializeError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationParser",
                    "parse_config",
                    "Configuration parsing failed. Please fix your configuration syntax and try again.",
                );
                Err(error.to_string().into())
            }
        }
    }

    /// Build the theme and language catalog. Nothing can be drawn without it.
    pub fn load_catalog() -> Result<SelectionContext, Box<dyn StdError>> {
        SelectionContext::builtin().map_err(|e| {
            Self::report_critical_error(
                AppError::from(e.clone()),
                "Catalog",
                "build",
                "The built-in themes or languages are invalid. The application cannot start.",
            );
            e.into()
        })
    }

    /// Initialize the application and return the configured model
    pub fn initialize(
        config: &AppConfig,
        selection: SelectionContext,
        warnings: Vec<SelectionWarning>,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting Unity Threads");

        Self::validate_configuration(config, &selection)?;
        info!("Configuration loaded and validated successfully");

        let authenticator = Box::new(ConfigAdminAuthenticator::from_config(config.admin()));
        let model = Self::create_model(config, selection, authenticator)?;
        Self::report_selection_warnings(&model, &warnings);

        Ok(model)
    }

    /// Validate configuration; on failure show the problem and stop
    fn validate_configuration(
        config: &AppConfig,
        selection: &SelectionContext,
    ) -> Result<(), Box<dyn StdError>> {
        if let Err(validation_errors) = config.validate() {
            error!(
                "Configuration validation failed with {} errors",
                validation_errors.len()
            );
            Self::show_config_error_and_exit(config, selection.clone(), validation_errors)?;
            return Err("Configuration validation failed".into());
        }
        Ok(())
    }

    /// Create and initialize the application model
    fn create_model(
        config: &AppConfig,
        selection: SelectionContext,
        authenticator: Box<dyn AdminAuthenticator>,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config, selection, authenticator) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start. Please check your configuration and try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Unknown theme or language names fell back to defaults; tell the user once
    fn report_selection_warnings(
        model: &Model<CrosstermTerminalAdapter>,
        warnings: &[SelectionWarning],
    ) {
        if warnings.is_empty() {
            return;
        }
        let message = warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        model
            .error_reporter
            .report_selection_warning("apply_config", message);
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.state_manager.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    /// Process a single iteration of the main loop
    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        // Tick and handle messages
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        // Switches made while handling keys queue their notifications on the channel
        model.update_outside_msg();

        // Handle redraw if needed
        Self::handle_redraw(model);

        Ok(())
    }

    /// Handle tick errors by showing error popup
    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        // Show error in popup
        if let Err(e) = model.mount_error_popup(&AppError::Component(format!(
            "Application error: {err:?}"
        ))) {
            error!("Failed to mount error popup: {e}");
            return Err(format!("Failed to display error: {err:?}").into());
        }
        model.state_manager.set_redraw(true);
        Ok(())
    }

    /// Process all received messages
    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        // Process all received messages and trigger redraw if any were handled
        model.state_manager.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    /// Handle view redraw if needed
    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) {
        if model.state_manager.needs_redraw() {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                // Show error in popup
                if let Err(popup_err) = model.mount_error_popup(&e) {
                    model
                        .error_reporter
                        .report_mount_error("ErrorPopup", "mount", popup_err);
                    // Since we can't show the error popup, report the original error through ErrorReporter
                    model
                        .error_reporter
                        .report_simple(e, "ViewRendering", "main_loop");
                }
            }
            model.state_manager.redraw_complete();
        }
    }

    /// Properly shutdown the application
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();
        Self::restore_terminal(&mut model);

        info!("Application terminated successfully");
        Ok(())
    }

    fn restore_terminal(model: &mut Model<CrosstermTerminalAdapter>) {
        debug!("Leaving alternate screen");
        if let Err(e) = model.terminal.leave_alternate_screen() {
            debug!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = model.terminal.disable_raw_mode() {
            debug!("Failed to disable raw mode: {e}");
        }
        if let Err(e) = model.terminal.clear_screen() {
            debug!("Failed to clear screen: {e}");
        }
    }

    /// Show configuration error and exit
    fn show_config_error_and_exit(
        config: &AppConfig,
        selection: SelectionContext,
        validation_errors: Vec<ConfigValidationError>,
    ) -> Result<(), Box<dyn StdError>> {
        let mut error_display = ConfigErrorDisplay::new(config, selection, validation_errors)?;
        error_display.show_and_wait_for_acknowledgment()?;
        error_display.shutdown();
        Ok(())
    }

    /// Report critical error and prepare for application exit
    /// Uses ErrorReporter system for consistency with application error handling
    fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        // Nobody listens on this channel; the reporter is only used for its logging
        let (tx, _rx) = std::sync::mpsc::channel();
        let error_reporter = ErrorReporter::new(tx);

        error_reporter.report_critical_and_exit(error, component, operation, user_message);

        // Also ensure the error is visible in case ErrorReporter fails
        eprintln!("Critical Error: {user_message}");
    }
}
