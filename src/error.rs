//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Draft not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, details) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", None),
            AppError::Pricing(PricingError::InvalidInput { field, .. }) => (
                StatusCode::BAD_REQUEST,
                "invalid_input",
                Some(serde_json::json!({ "field": field })),
            ),
            AppError::Pricing(PricingError::OfferNotSubmittable { .. }) => {
                (StatusCode::CONFLICT, "offer_not_submittable", None)
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
