//! Input validation for operator-entered values.
//!
//! The [`Validator`] trait is shared with the catalog, which uses it for
//! theme and locale definitions.

use crate::config::limits::{MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH};
pub use catalog::Validator;

/// Form validation errors with user-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidationError {
    Empty {
        field_name: String,
    },
    InvalidFormat {
        field_name: String,
        expected_format: String,
    },
    TooLong {
        field_name: String,
        max_length: usize,
        actual_length: usize,
    },
}

impl FormValidationError {
    pub fn empty(field_name: impl Into<String>) -> Self {
        Self::Empty {
            field_name: field_name.into(),
        }
    }

    pub fn invalid_format(
        field_name: impl Into<String>,
        expected_format: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field_name: field_name.into(),
            expected_format: expected_format.into(),
        }
    }

    pub fn too_long(
        field_name: impl Into<String>,
        max_length: usize,
        actual_length: usize,
    ) -> Self {
        Self::TooLong {
            field_name: field_name.into(),
            max_length,
            actual_length,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty { field_name } => format!("{field_name} cannot be empty"),
            Self::InvalidFormat {
                field_name,
                expected_format,
            } => format!("{field_name} must be in {expected_format} format"),
            Self::TooLong {
                field_name,
                max_length,
                actual_length,
            } => format!(
                "{field_name} is too long ({actual_length} characters, maximum {max_length})"
            ),
        }
    }
}

/// Checks that the sign-in email looks like `name@domain.tld`.
pub struct EmailValidator;

impl Validator<str> for EmailValidator {
    type Error = FormValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let email = input.trim();
        if email.is_empty() {
            return Err(FormValidationError::empty("Email"));
        }

        let length = email.chars().count();
        if length > MAX_EMAIL_LENGTH {
            return Err(FormValidationError::too_long(
                "Email",
                MAX_EMAIL_LENGTH,
                length,
            ));
        }

        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain
                        .split_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };

        if well_formed {
            Ok(())
        } else {
            Err(FormValidationError::invalid_format(
                "Email",
                "name@example.com",
            ))
        }
    }
}

/// Checks that the sign-in password is present and within bounds.
pub struct PasswordValidator;

impl Validator<str> for PasswordValidator {
    type Error = FormValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(FormValidationError::empty("Password"));
        }

        let length = input.chars().count();
        if length > MAX_PASSWORD_LENGTH {
            return Err(FormValidationError::too_long(
                "Password",
                MAX_PASSWORD_LENGTH,
                length,
            ));
        }

        Ok(())
    }
}
