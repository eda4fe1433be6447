use serde::Deserialize;

/// Credential pair for the built-in admin authenticator.
///
/// Both fields must be set together. Without them every sign-in attempt is
/// rejected.
#[derive(Deserialize, Default, Clone)]
pub struct AdminConfig {
    email: Option<String>,
    password: Option<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AdminConfig {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self { email, password }
    }

    /// The configured `(email, password)` pair, if complete and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password))
                if !email.trim().is_empty() && !password.is_empty() =>
            {
                Some((email.trim(), password))
            }
            _ => None,
        }
    }

    /// Name of the field that is missing when only half the pair is set.
    pub fn missing_field(&self) -> Option<&'static str> {
        match (&self.email, &self.password) {
            (Some(_), None) => Some("password"),
            (None, Some(_)) => Some("email"),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        let config = AdminConfig::new(Some("host@example.com".to_string()), None);
        assert!(config.credentials().is_none());
        assert_eq!(config.missing_field(), Some("password"));
    }

    #[test]
    fn test_credentials_trim_email() {
        let config = AdminConfig::new(
            Some("  host@example.com ".to_string()),
            Some("s3cret".to_string()),
        );
        assert_eq!(config.credentials(), Some(("host@example.com", "s3cret")));
        assert_eq!(config.missing_field(), None);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AdminConfig::new(
            Some("host@example.com".to_string()),
            Some("s3cret".to_string()),
        );
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
    }
}
