use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    #[allow(clippy::enum_variant_names)]
    ConfigError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    #[allow(clippy::enum_variant_names)]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("db error: {0}")]
    DbError(#[from] surrealdb::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ConfigError(_)
            | AppError::DbError(_)
            | AppError::IoError(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::ValidationError(ref e) => json!({
                "message": "All fields are required",
                "error": e.to_string(),
            }),
            AppError::MalformedBody(ref e) => json!({
                "message": "Malformed request body",
                "error": e.body_text(),
            }),
            AppError::NotFound(ref m) | AppError::Conflict(ref m) => json!({ "message": m }),
            ref e => {
                tracing::error!("request failed: {e}");
                json!({
                    "message": "Internal server error",
                    "error": e.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
