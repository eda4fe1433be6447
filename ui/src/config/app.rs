use super::{
    LoggingConfig, admin::AdminConfig, keys::KeyBindingsConfig, limits::*,
    selection::SelectionConfig, validation::ConfigValidationError,
};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    selection: SelectionConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    admin: AdminConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let tick = self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let poll = self.poll_timeout_ms.unwrap_or(DEFAULT_POLL_TIMEOUT_MS);
        if !(MIN_POLL_TIMEOUT_MS..=MAX_POLL_TIMEOUT_MS).contains(&poll) {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll,
                min_limit: MIN_POLL_TIMEOUT_MS,
                max_limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        if self.crossterm_input_listener_retries() > MAX_INPUT_LISTENER_RETRIES {
            errors.push(ConfigValidationError::InputListenerRetries {
                configured: self.crossterm_input_listener_retries(),
                limit: MAX_INPUT_LISTENER_RETRIES,
            });
        }

        for (key, first, second) in self.keys.conflicts() {
            errors.push(ConfigValidationError::DuplicateKeyBinding { key, first, second });
        }

        if let Some(missing) = self.admin.missing_field() {
            errors.push(ConfigValidationError::IncompleteAdminCredentials { missing });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(DEFAULT_POLL_TIMEOUT_MS))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS))
    }

    // Configuration section accessors
    pub fn selection(&self) -> &SelectionConfig {
        &self.selection
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.poll_timeout(), Duration::from_millis(50));
        assert!(config.admin().credentials().is_none());
    }

    #[test]
    fn test_out_of_range_timings_are_reported() {
        let config = AppConfig {
            tick_interval_millis: Some(1),
            poll_timeout_ms: Some(5000),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ConfigValidationError::TickInterval { configured: 1, .. }
        ));
        assert!(matches!(
            errors[1],
            ConfigValidationError::PollTimeout {
                configured: 5000,
                ..
            }
        ));
    }

    #[test]
    fn test_half_configured_admin_is_reported() {
        let config = AppConfig {
            admin: AdminConfig::new(None, Some("s3cret".to_string())),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::IncompleteAdminCredentials { missing: "email" }]
        );
        assert!(errors[0].user_message().contains("email is missing"));
    }
}
