//! Unified API error handling
//!
//! Provides consistent error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pagination::PaginationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Pagination(PaginationError::InvalidPageRequest { .. }) => StatusCode::BAD_REQUEST,
            Self::Pagination(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Pagination(err) => match err {
                PaginationError::InvalidPageRequest { .. } => "INVALID_PAGE_REQUEST",
                PaginationError::NoSortableField { .. } => "NO_SORTABLE_FIELD",
                PaginationError::SourceQuery(_) => "DATABASE_ERROR",
            },
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Pagination(err @ PaginationError::InvalidPageRequest { .. }) => err.to_string(),
            // Don't leak internal error details
            Self::Pagination(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest(_) | Self::Pagination(PaginationError::InvalidPageRequest { .. }) => {
                tracing::warn!(error = %self, "API error");
            }
            Self::Pagination(e) => {
                tracing::error!(error = ?e, "Pagination failed");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
