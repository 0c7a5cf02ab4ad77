//! Bulk export endpoint handler.

use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Json, Response},
};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::ExportQuery;
use crate::state::AppState;

/// GET /api/translations/export
///
/// Returns every live translation grouped as
/// `{lang_code: {key: value}}`, optionally narrowed by `languages[]`
/// and `tags[]` id filters. Served through the read-through cache, so
/// repeated exports for the same filter combination hit memory until a
/// mutation invalidates them or the TTL expires.
#[instrument(skip_all)]
pub async fn export_translations(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    let query = ExportQuery::from_raw_query(raw.as_deref())?;

    let map = state
        .cache()
        .get_translations(state.db(), query.languages, query.tags)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(map.as_ref()).into_response())
}
