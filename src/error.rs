use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;
use utoipa::ToSchema;

use crate::types::ValidationError;

#[derive(Debug, ThisError)]
pub enum InspireError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Quote already exists")]
    Duplicate,

    #[error("No quotes found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(SqlxError),
}

impl From<SqlxError> for InspireError {
    fn from(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => InspireError::Duplicate,
            _ => InspireError::Database(e),
        }
    }
}

impl IntoResponse for InspireError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            InspireError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: err.reason,
                    field: Some(err.field),
                },
            ),
            InspireError::Duplicate => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "DUPLICATE_QUOTE".to_string(),
                    message: "Quote already exists".to_string(),
                    field: None,
                },
            ),
            InspireError::NotFound => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "No quotes found".to_string(),
                    field: None,
                },
            ),
            InspireError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "Database error occurred".to_string(),
                        field: None,
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
