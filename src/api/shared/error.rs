// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! API error type and its mapping to HTTP responses.
//!
//! Handlers return `Result<_, ApiError>` and let `?` carry failures here;
//! [`ApiError`]'s `IntoResponse` impl is the single place where an error
//! becomes a status code and a JSON body. Error bodies never carry internal
//! details: unknown failures are logged server-side and answered with a
//! generic 500.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::responses::{ErrorResponse, NotFoundResponse};
use crate::validation::ValidationError;

/// Fixed messages carried by error responses
pub mod messages {
    pub const VALIDATION_FAILED: &str = "Validation Failed";
    pub const INVALID_JSON: &str = "Invalid JSON";
    pub const PAYLOAD_TOO_LARGE: &str = "Payload Too Large";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request did not match the endpoint's schema (422).
    #[error("request validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed as JSON (400).
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The request body exceeded the body size limit (413).
    #[error("request body too large")]
    PayloadTooLarge,

    /// No record with the requested id (404).
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Anything else (500).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        ApiError::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            ApiError::Validation(errors) => {
                log::warn!(
                    "Request failed validation: {}",
                    errors.field_names().join(", ")
                );
                let details = match serde_json::to_value(&errors) {
                    Ok(details) => Some(details),
                    Err(e) => {
                        log::error!("Failed to serialize validation details: {e}");
                        None
                    }
                };
                let body = ErrorResponse {
                    message: messages::VALIDATION_FAILED.to_string(),
                    details,
                };
                (status, Json(body)).into_response()
            }
            ApiError::MalformedBody(reason) => {
                log::warn!("Rejected malformed request body: {reason}");
                (status, Json(ErrorResponse::new(messages::INVALID_JSON))).into_response()
            }
            ApiError::PayloadTooLarge => {
                log::warn!("Rejected oversized request body");
                (status, Json(ErrorResponse::new(messages::PAYLOAD_TOO_LARGE))).into_response()
            }
            ApiError::NotFound { resource } => {
                let body = NotFoundResponse {
                    reason: format!("{resource} not found"),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Internal(err) => {
                log::error!("Unhandled error while processing request: {err:#}");
                (
                    status,
                    Json(ErrorResponse::new(messages::INTERNAL_SERVER_ERROR)),
                )
                    .into_response()
            }
        }
    }
}

/// Response for a handler that panicked. Used with `CatchPanicLayer`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
