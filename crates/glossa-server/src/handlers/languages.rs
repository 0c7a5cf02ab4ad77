//! Language endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use glossa_store::glossa_core::LanguageInput;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::handlers::response::LanguageResponse;
use crate::state::AppState;

/// Request body for language create/update.
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl LanguageRequest {
    fn into_input(self) -> LanguageInput {
        LanguageInput {
            code: self.code,
            name: self.name,
        }
    }
}

/// GET /api/languages
#[instrument(skip_all)]
pub async fn list_languages(State(state): State<AppState>) -> Result<Response, AppError> {
    let languages = state.db().list_languages()?;
    let data: Vec<LanguageResponse> = languages.iter().map(LanguageResponse::from).collect();

    Ok(Json(data).into_response())
}

/// GET /api/languages/{id}
#[instrument(skip_all, fields(id = id))]
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let language = state.db().get_language(id)?;

    Ok(Json(LanguageResponse::from(&language)).into_response())
}

/// POST /api/languages
#[instrument(skip_all, fields(code = %body.code))]
pub async fn create_language(
    State(state): State<AppState>,
    Json(body): Json<LanguageRequest>,
) -> Result<Response, AppError> {
    let language = state.db().create_language(&body.into_input())?;

    tracing::info!(id = language.id, code = %language.code, "Language created");

    Ok((StatusCode::CREATED, Json(LanguageResponse::from(&language))).into_response())
}

/// PUT /api/languages/{id}
#[instrument(skip_all, fields(id = id))]
pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<LanguageRequest>,
) -> Result<Response, AppError> {
    let language = state.db().update_language(id, &body.into_input())?;

    tracing::info!(id = id, "Language updated");

    Ok(Json(LanguageResponse::from(&language)).into_response())
}

/// DELETE /api/languages/{id}
#[instrument(skip_all, fields(id = id))]
pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.db().delete_language(id)?;

    tracing::info!(id = id, "Language deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
