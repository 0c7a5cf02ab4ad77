//! Token-based authentication.
//!
//! Login exchanges credentials for an opaque bearer token persisted in
//! the store; logout deletes it. Protected routes run through
//! [`middleware::require_auth`], which resolves the presented token and
//! injects an [`AuthSession`] extension for the handlers.

pub mod middleware;
pub mod password;

/// Authenticated request context, inserted by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user the token belongs to.
    pub user_id: i64,
    /// The raw bearer token, needed by logout to revoke itself.
    pub token: String,
}

/// Generates a fresh opaque bearer token.
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
