//! Error types and response handling for the storefront server.
//!
//! Maps store rejections and form errors to HTTP status codes and a JSON
//! error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::admin::ProductFormError;
use crate::checkout::CheckoutError;
use crate::store::Rejection;

/// Errors returned by storefront handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store refused the mutation
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// Checkout form or cart was not acceptable
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// Admin product form was not acceptable
    #[error("{0}")]
    ProductForm(#[from] ProductFormError),

    /// Requested resource does not exist
    #[error("{what} '{id}' not found")]
    NotFound { what: &'static str, id: String },

    /// Query string could not be understood
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(rejection) => match rejection {
                Rejection::QuantityBelowMinimum { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                Rejection::QuantityAboveMaximum { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                Rejection::ProductNotFound { .. } => StatusCode::NOT_FOUND,
                Rejection::AdminAccessDenied { .. } => StatusCode::FORBIDDEN,
                Rejection::Unauthorized { .. } => StatusCode::FORBIDDEN,
            },
            ApiError::Checkout(CheckoutError::EmptyCart) => StatusCode::CONFLICT,
            ApiError::Checkout(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ProductForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Rejected(rejection) => rejection.kind(),
            ApiError::Checkout(err) => err.kind(),
            ApiError::ProductForm(_) => "invalid_product",
            ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidQuery(_) => "invalid_query",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        let status = self.status_code();
        tracing::debug!(
            request_id = %request_id,
            status = status.as_u16(),
            error = %self,
            "Request failed"
        );

        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
                "request_id": request_id
            }
        });
        (status, Json(body)).into_response()
    }
}
