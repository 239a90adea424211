//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Table or record lookup failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Path, query or body could not be extracted; keeps axum's status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Store(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Rejected { status, .. } => *status,
        }
    }
}

macro_rules! impl_from_rejection {
    ($($rejection:ty),*) => {
        $(
            impl From<$rejection> for RestError {
                fn from(rejection: $rejection) -> Self {
                    RestError::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )*
    };
}

impl_from_rejection!(BytesRejection, PathRejection, QueryRejection);

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
