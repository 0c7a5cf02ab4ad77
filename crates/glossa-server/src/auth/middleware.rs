//! Bearer token middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::AuthSession;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware guarding the protected API routes.
///
/// Resolves the bearer token against the store; a missing, unknown, or
/// revoked token yields 401 without reaching the handler. On success an
/// [`AuthSession`] extension is added to the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Unauthenticated".to_string()))?
        .to_string();

    let user_id = state
        .db()
        .find_token_user(&token)
        .map_err(AppError::from)?
        .ok_or_else(|| {
            debug!("Rejected request with unknown or revoked token");
            AppError::Unauthorized("Unauthenticated".to_string())
        })?;

    request
        .extensions_mut()
        .insert(AuthSession { user_id, token });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/languages");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn bearer_token_parses_well_formed_header() {
        let request = request_with_auth(Some("Bearer abc123"));
        assert_eq!(bearer_token(&request), Some("abc123"));
    }

    #[test]
    fn bearer_token_rejects_missing_or_malformed_header() {
        assert_eq!(bearer_token(&request_with_auth(None)), None);
        assert_eq!(bearer_token(&request_with_auth(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&request_with_auth(Some("Bearer "))), None);
    }
}
