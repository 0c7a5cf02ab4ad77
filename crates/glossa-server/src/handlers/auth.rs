//! Authentication endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth::{generate_token, password, AuthSession};
use crate::error::AppError;
use crate::state::AppState;

/// Request body para POST /api/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response con el token emitido.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// POST /api/login
///
/// Verifies the credentials and issues a fresh bearer token. A user can
/// hold several live tokens at once; logging in does not revoke earlier
/// ones.
#[instrument(skip_all, fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let user = state
        .db()
        .find_user_by_email(&body.email)?
        .filter(|u| password::verify_password(&body.password, &u.password_hash))
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let token = generate_token();
    state.db().create_token(user.id, &token)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(LoginResponse { token })).into_response())
}

/// POST /api/logout
///
/// Revokes the token that authenticated this request. Other tokens for
/// the same user stay valid.
#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<Response, AppError> {
    state.db().revoke_token(&session.token)?;

    tracing::info!(user_id = session.user_id, "User logged out");

    Ok((
        StatusCode::OK,
        Json(LogoutResponse {
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}
