use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Webhook Error: {0}")]
    Authentication(String),
    #[error("{0}")]
    Validation(String),
    #[error("No course IDs found in metadata")]
    NoCourses,
    #[error("Unhandled event type {0}")]
    UnsupportedEvent(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("{0}")]
    PaymentProvider(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }

    /// Message safe to hand back to a client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Authentication(_)
            | AppError::Validation(_)
            | AppError::NoCourses
            | AppError::UnsupportedEvent(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Storage(_) | AppError::PaymentProvider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(e) = self {
            tracing::error!("storage failure: {}", e);
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.public_message(),
        })
    }
}
