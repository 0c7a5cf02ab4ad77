//! Translation endpoint handlers.
//!
//! Every mutation drains the export cache through the known-keys
//! registry, so the next export for any filter combination sees fresh
//! data instead of waiting out the TTL.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use glossa_store::glossa_core::TranslationInput;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::ListQuery;
use crate::handlers::response::{PageResponse, TranslationResponse};
use crate::state::AppState;

/// Request body for translation create/update.
#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub language_id: i64,
    pub tags: Option<Vec<i64>>,
}

impl TranslationRequest {
    fn into_input(self) -> TranslationInput {
        TranslationInput {
            key: self.key,
            value: self.value,
            language_id: self.language_id,
            tags: self.tags,
        }
    }
}

/// GET /api/translations
///
/// Filtered, paginated search. All filters are optional and combine
/// with AND semantics.
#[instrument(skip_all)]
pub async fn list_translations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let filter = query.into_filter();
    filter.validate().map_err(AppError::from)?;

    let page = state.db().search_translations(&filter)?;

    Ok(Json(PageResponse::from_page(&page)).into_response())
}

/// GET /api/translations/{id}
#[instrument(skip_all, fields(id = id))]
pub async fn get_translation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let detail = state.db().get_translation(id)?;

    Ok(Json(TranslationResponse::from(&detail)).into_response())
}

/// POST /api/translations
#[instrument(skip_all, fields(key = %body.key, language_id = body.language_id))]
pub async fn create_translation(
    State(state): State<AppState>,
    Json(body): Json<TranslationRequest>,
) -> Result<Response, AppError> {
    let detail = state.db().create_translation(&body.into_input())?;

    let result = state.cache().invalidate_all().await;
    tracing::info!(
        id = detail.translation.id,
        invalidated = result.count,
        "Translation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(TranslationResponse::from(&detail)),
    )
        .into_response())
}

/// PUT /api/translations/{id}
#[instrument(skip_all, fields(id = id))]
pub async fn update_translation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<TranslationRequest>,
) -> Result<Response, AppError> {
    let detail = state.db().update_translation(id, &body.into_input())?;

    let result = state.cache().invalidate_all().await;
    tracing::info!(id = id, invalidated = result.count, "Translation updated");

    Ok(Json(TranslationResponse::from(&detail)).into_response())
}

/// DELETE /api/translations/{id}
///
/// Soft delete. The row survives in storage but disappears from reads,
/// searches, and exports.
#[instrument(skip_all, fields(id = id))]
pub async fn delete_translation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.db().delete_translation(id)?;

    let result = state.cache().invalidate_all().await;
    tracing::info!(id = id, invalidated = result.count, "Translation deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
