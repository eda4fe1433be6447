use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid poll_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    PollTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid crossterm_input_listener_retries: {configured} (limit: {limit})")]
    InputListenerRetries { configured: usize, limit: usize },
    #[error("Key '{key}' is bound to both {first} and {second}")]
    DuplicateKeyBinding {
        key: char,
        first: &'static str,
        second: &'static str,
    },
    #[error("Incomplete [admin] section: {missing} is not set")]
    IncompleteAdminCredentials { missing: &'static str },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml."
                )
            }
            ConfigValidationError::PollTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Poll timeout out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update poll_timeout_ms in config.toml."
                )
            }
            ConfigValidationError::InputListenerRetries { configured, limit } => {
                format!(
                    "Input listener retries too high!\n\n\
                    Your configured value: {configured}\n\
                    Maximum: {limit}\n\n\
                    Please update crossterm_input_listener_retries in config.toml."
                )
            }
            ConfigValidationError::DuplicateKeyBinding { key, first, second } => {
                format!(
                    "Conflicting key bindings!\n\n\
                    The key '{key}' is assigned to both {first} and {second}.\n\n\
                    Please give each action its own key in the [keys] section of config.toml."
                )
            }
            ConfigValidationError::IncompleteAdminCredentials { missing } => {
                format!(
                    "Admin credentials are incomplete!\n\n\
                    The [admin] section sets only one of email and password ({missing} is missing).\n\n\
                    Set both values, or remove the section to disable admin sign-in."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    /// The loaded configuration, or the message explaining why there is none.
    pub fn as_result(&self) -> Result<&AppConfig, &str> {
        match self {
            ConfigLoadResult::Success(config) => Ok(config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(msg)
            }
        }
    }
}
