use crate::components::common::{Msg, PopupActivityMsg};
use catalog::CatalogError;
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Unity Threads terminal interface.
///
/// Each variant carries a human-readable message and integrates with the
/// [`ErrorReporter`], which logs it with context and routes it to a popup.
///
/// # Error Categories
///
/// - [`Component`] - UI component lifecycle and rendering errors
/// - [`State`] - Application state management issues
/// - [`Channel`] - Inter-component communication failures
/// - [`Config`] - Configuration loading and validation errors
/// - [`Auth`] - Admin sign-in failures
/// - [`Catalog`] - Built-in theme or locale definitions that failed to assemble
///
/// # Examples
///
/// ```no_run
/// use ui::error::{AppError, ErrorReporter};
///
/// fn report(error: AppError, reporter: &ErrorReporter) {
///     match error {
///         AppError::Auth(_) => reporter.report_warning(error, "AdminLogin", "sign_in"),
///         other => reporter.report_simple(other, "Application", "operation"),
///     }
/// }
/// ```
///
/// [`Component`]: AppError::Component
/// [`State`]: AppError::State
/// [`Channel`]: AppError::Channel
/// [`Config`]: AppError::Config
/// [`Auth`]: AppError::Auth
/// [`Catalog`]: AppError::Catalog
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    ///
    /// These should not disrupt the overall application flow but are
    /// logged for debugging.
    Component(String),

    /// Application state management issues.
    State(String),

    /// Configuration loading and validation errors.
    ///
    /// Loading errors prevent startup; unknown selection values only warn.
    Config(String),

    /// Admin sign-in failures. The message is shown inside the login popup.
    Auth(String),

    /// Inter-component communication failures.
    Channel(String),

    /// The embedded theme or locale catalog failed validation.
    ///
    /// The application refuses to start when this happens.
    Catalog(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Auth(msg) => write!(f, "Authentication Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
            AppError::Catalog(msg) => write!(f, "Catalog Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Last-resort handling when an error cannot be shown in a popup.
pub fn handle_error(error: AppError) {
    log::error!("Unhandled error: {error}");
    eprintln!("Error: {error}");
}

/// Error severity levels for appropriate UI response
#[derive(Debug, Clone)]
pub enum ErrorSeverity {
    /// Show warning popup and log
    Warning,
    /// Show error popup and log
    Error,
    /// Show error popup, log, and potentially exit
    Critical,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with a generic message. Use `.with_message()` for a custom one.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Contextual error with rich information
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Central error reporting system.
///
/// Logs every report with its component and operation, then sends a popup
/// message through the model channel so the main loop can display it.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report a simple error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report a warning (shows warning popup)
    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_message(&Self::strip_prefix(&error))
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    /// Report a critical error that will cause application exit
    pub fn report_critical_and_exit(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => Msg::PopupActivity(PopupActivityMsg::ShowWarning(
                self.format_user_message(&context),
            )),
            ErrorSeverity::Error | ErrorSeverity::Critical => Msg::PopupActivity(
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context)),
            ),
        };
        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send popup message: {e}");
        }
    }

    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("🔍 Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("💡 Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\n💡 Suggestion: {suggestion}"));
        }

        message
    }

    fn strip_prefix(error: &AppError) -> String {
        match error {
            AppError::Component(msg)
            | AppError::State(msg)
            | AppError::Config(msg)
            | AppError::Auth(msg)
            | AppError::Channel(msg)
            | AppError::Catalog(msg) => msg.clone(),
        }
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let emoji = match error {
            AppError::Config(_) => "⚙️",
            AppError::Component(_) => "🎛️",
            AppError::State(_) => "📊",
            AppError::Auth(_) => "🔐",
            AppError::Channel(_) => "📡",
            AppError::Catalog(_) => "🎨",
        };

        let mut formatted_message = format!("{} {}", emoji, self.get_error_title(error));
        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\n🔍 Details: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\n💡 Suggestion: {suggestion}"));
        }

        match error {
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::State(_) => AppError::State(formatted_message),
            AppError::Auth(_) => AppError::Auth(formatted_message),
            AppError::Channel(_) => AppError::Channel(formatted_message),
            AppError::Catalog(_) => AppError::Catalog(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Auth(_) => "Authentication Error",
            AppError::Channel(_) => "Communication Error",
            AppError::Catalog(_) => "Catalog Error",
        }
    }

    // ========== Helper Methods for Common Error Patterns ==========

    /// Report component mounting/unmounting errors
    pub fn report_mount_error(
        &self,
        component: &str,
        operation: &str,
        error: impl std::fmt::Display,
    ) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// Report selection switch problems (non-critical, use warning)
    pub fn report_selection_warning(&self, operation: &str, message: impl std::fmt::Display) {
        let app_error = AppError::Config(message.to_string());
        self.report_warning(app_error, "Selection", operation);
    }
}
