//! Collaborators injected into the model.

pub mod admin_auth;

pub use admin_auth::{AdminAuthenticator, AdminSession, AuthError, ConfigAdminAuthenticator};
