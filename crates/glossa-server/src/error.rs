//! HTTP error mapping.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glossa_store::StoreError;
use serde::Serialize;

/// Field name → list of failure messages, serialized in 422 responses.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug)]
pub enum AppError {
    /// Entidad no encontrada
    NotFound { entity: String, id: i64 },

    /// Payload invalido, con detalle por campo
    Validation(ValidationErrors),

    /// Credenciales o token invalidos
    Unauthorized(String),

    /// Parametros invalidos
    BadRequest(String),

    /// Error interno (store o cache no disponibles incluidos)
    Internal(String),
}

impl AppError {
    /// Builds a single-field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::Validation(errors)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, errors) = match self {
            AppError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("{} with id {} not found", entity, id),
                None,
            ),
            AppError::Validation(errors) => {
                let message = errors
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages.iter().map(move |m| format!("{} {}", field, m))
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Unprocessable Entity",
                    message,
                    Some(errors),
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "Unauthorized", msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg, None),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
                None,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            errors,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            StoreError::Validation { field, message } => Self::validation(field, message),
            StoreError::Sqlite(e) => Self::Internal(e.to_string()),
            StoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<glossa_store::glossa_core::GlossaError> for AppError {
    fn from(err: glossa_store::glossa_core::GlossaError) -> Self {
        Self::from(StoreError::from(err))
    }
}
