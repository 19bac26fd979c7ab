//! Error handling
//!
//! The prediction pipeline has a real failure taxonomy (bad form value,
//! missing artifact, shape mismatch, scoring failure) but the user interface
//! shows one fixed message for all of them. The distinction exists for
//! operator logs only.

use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};

use crate::handlers::pages;

pub type AppResult<T> = Result<T, AppError>;

/// Message shown on the error page for every failed prediction.
pub const USER_ERROR_MESSAGE: &str = "Please enter valid Data";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A submitted form value did not parse as a number.
    #[error("form value {name:?} is not numeric: {value:?}")]
    InvalidFeature { name: String, value: String },

    /// The form submission contained no fields at all.
    #[error("form submission contained no fields")]
    EmptyForm,

    /// The classifier artifact is missing or corrupt.
    #[error("classifier artifact unavailable: {0}")]
    ModelUnavailable(String),

    /// Feature count disagrees with what the classifier was trained on.
    #[error("feature vector has {got} values, classifier expects {expected}")]
    ShapeMismatch { got: usize, expected: usize },

    /// The classifier itself failed while scoring.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidFeature { .. }
            | AppError::EmptyForm
            | AppError::ShapeMismatch { .. } => {
                tracing::warn!("prediction rejected: {}", self);
            }
            AppError::ModelUnavailable(_) | AppError::Inference(_) => {
                tracing::error!("prediction failed: {}", self);
            }
        }

        // The error page is a normal rendered view, not an HTTP error.
        (StatusCode::OK, Html(pages::render_error(USER_ERROR_MESSAGE))).into_response()
    }
}
