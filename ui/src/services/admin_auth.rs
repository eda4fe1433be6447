use crate::config::AdminConfig;
use chrono::{DateTime, Local};
use thiserror::Error;

/// A signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub email: String,
    pub signed_in_at: DateTime<Local>,
}

impl AdminSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signed_in_at: Local::now(),
        }
    }
}

/// Reasons a sign-in attempt fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credential pair is configured, so admin access is closed.
    #[error("Admin sign-in is disabled. Set [admin] email and password in config.toml.")]
    Disabled,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Gatekeeper for the admin dashboard.
///
/// Views hand the entered email and password to the injected implementation
/// and never compare credentials themselves.
///
/// # Examples
///
/// ```no_run
/// use ui::services::{AdminAuthenticator, AdminSession, AuthError};
///
/// struct AllowList(Vec<String>);
///
/// impl AdminAuthenticator for AllowList {
///     fn authenticate(&self, email: &str, _password: &str) -> Result<AdminSession, AuthError> {
///         if self.0.iter().any(|allowed| allowed == email) {
///             Ok(AdminSession::new(email))
///         } else {
///             Err(AuthError::InvalidCredentials)
///         }
///     }
///
///     fn is_enabled(&self) -> bool {
///         !self.0.is_empty()
///     }
/// }
/// ```
pub trait AdminAuthenticator: Send + Sync {
    /// Check a credential pair and open a session on success.
    fn authenticate(&self, email: &str, password: &str) -> Result<AdminSession, AuthError>;

    /// Whether any attempt could succeed at all.
    fn is_enabled(&self) -> bool;
}

/// Checks sign-in attempts against the `[admin]` configuration section.
#[derive(Clone, Default)]
pub struct ConfigAdminAuthenticator {
    credentials: Option<(String, String)>,
}

impl ConfigAdminAuthenticator {
    pub fn from_config(config: &AdminConfig) -> Self {
        let credentials = config
            .credentials()
            .map(|(email, password)| (email.to_string(), password.to_string()));
        if credentials.is_none() {
            log::info!("No admin credentials configured; admin sign-in is disabled");
        }
        Self { credentials }
    }
}

impl AdminAuthenticator for ConfigAdminAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<AdminSession, AuthError> {
        let Some((expected_email, expected_password)) = &self.credentials else {
            log::warn!("Rejected admin sign-in for '{email}': sign-in is disabled");
            return Err(AuthError::Disabled);
        };

        let email = email.trim();
        let email_matches = email.eq_ignore_ascii_case(expected_email);
        let password_matches = constant_time_eq(password.as_bytes(), expected_password.as_bytes());

        if email_matches && password_matches {
            log::info!("Admin '{email}' signed in");
            Ok(AdminSession::new(expected_email.clone()))
        } else {
            log::warn!("Rejected admin sign-in for '{email}'");
            Err(AuthError::InvalidCredentials)
        }
    }

    fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ConfigAdminAuthenticator {
        ConfigAdminAuthenticator::from_config(&AdminConfig::new(
            Some("host@unitythreads.example".to_string()),
            Some("marigold".to_string()),
        ))
    }

    #[test]
    fn test_matching_credentials_open_a_session() {
        let session = configured()
            .authenticate("Host@UnityThreads.example ", "marigold")
            .unwrap();
        assert_eq!(session.email, "host@unitythreads.example");
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        assert_eq!(
            configured().authenticate("host@unitythreads.example", "Marigold"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_unconfigured_authenticator_rejects_everything() {
        let authenticator = ConfigAdminAuthenticator::from_config(&AdminConfig::default());

        assert!(!authenticator.is_enabled());
        assert_eq!(
            authenticator.authenticate("", ""),
            Err(AuthError::Disabled)
        );
        assert_eq!(
            authenticator.authenticate("admin@unitythreads.com", "admin123"),
            Err(AuthError::Disabled)
        );
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
