use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use service::errors::StoreError;

use crate::templates;

/// Error type for page handlers, rendered as a minimal HTML page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for PageError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => PageError::NotFound,
            StoreError::Persistence(msg) => PageError::Internal(msg),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title) = match &self {
            PageError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            PageError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            PageError::Internal(msg) => {
                error!(error = %msg, "page handler failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (status, templates::error_page(status, title)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
