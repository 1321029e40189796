use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::db::SourceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(#[from] QueryPayloadError),

    #[error("Error fetching hotels")]
    Source(#[from] SourceError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidQuery(e) => log::debug!("Rejected query: {}", e),
            ApiError::Source(e) => log::error!("{}", e),
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
