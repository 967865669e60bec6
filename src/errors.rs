use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(entity) => AppError::NotFound(format!("{entity} not found")),
            DomainError::InvalidInput(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Internal(msg) => {
                log::error!("{msg}");
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { detail })
    }
}

/// Extractor error handler: malformed bodies, query strings and path
/// segments become 422 responses.
pub fn validation_error<E: std::fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}
