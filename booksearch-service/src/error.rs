use crate::models::storage::StorageError;
use crate::services::auth::AuthError;
use crate::services::catalog::CatalogError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub const UPSTREAM_FAILURE: &str = "Error fetching data from the book catalog.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Error fetching data from the book catalog.")]
    Upstream(#[from] CatalogError),

    #[error("Invalid email or password.")]
    Unauthorized,

    #[error("{0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Conflict(message) => AppError::Conflict(message),
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) | AppError::Auth(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self {
            AppError::Storage(_) | AppError::Auth(_) | AppError::Internal(_) => {
                error!("{}", self);
                "Internal server error.".to_string()
            }
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
