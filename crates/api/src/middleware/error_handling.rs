//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the workplan
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with workplan's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use workplan_core::errors::PlanError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `PlanError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads. Handlers return
/// `Result<Json<T>, AppError>` and use `?` on anything that converts into
/// a `PlanError`.
#[derive(Debug)]
pub struct AppError(pub PlanError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status code
/// and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::Conflict(_) => StatusCode::CONFLICT,
            PlanError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from PlanError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, PlanError>` in handler functions that return `Result<T, AppError>`.
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a `PlanError::Database`
/// variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlanError::Database(err))
    }
}

/// Maps a PlanError to an HTTP response
///
/// This function is provided for code that directly needs the error mapping
/// without going through a handler return type.
pub fn map_error(err: PlanError) -> Response {
    AppError(err).into_response()
}
