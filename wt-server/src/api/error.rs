//! REST API error types
//!
//! Every error maps to a consistent JSON body with a machine-readable
//! lowercase code. All API-key failures are client errors and are never
//! retried server-side.

use crate::push::PushError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use wt_auth::ApiKeyError;
use wt_db::DbError;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "bad_api_key", "not_found")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Token is malformed, mis-signed, or names a user that does not
    /// exist (400). The last case is deliberately indistinguishable from
    /// the first two.
    #[error("Bad API key: {message} {location}")]
    BadApiKey {
        message: String,
        location: ErrorLocation,
    },

    /// Token is authentic but the credential changed since issuance (400)
    #[error("API key expired {location}")]
    ApiKeyExpired { location: ErrorLocation },

    /// Push subscription identifier from an unsupported service (400)
    #[error("Bad identifier: {message} {location}")]
    BadIdentifier {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_api_key<S: Into<String>>(message: S) -> Self {
        ApiError::BadApiKey {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::BadApiKey { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "bad_api_key".into(),
                    message: "Bad API key".into(),
                },
            ),
            ApiError::ApiKeyExpired { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "api_key_expired".into(),
                    message: "API key expired".into(),
                },
            ),
            ApiError::BadIdentifier { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "bad_identifier".into(),
                    message,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "not_found".into(),
                    message,
                },
            ),
            ApiError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "validation_error".into(),
                    message,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "internal_error".into(),
                    message,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert API-key errors to API errors.
///
/// `UserNotFound` folds into `BadApiKey` so the response never reveals
/// whether a user id exists.
impl From<ApiKeyError> for ApiError {
    #[track_caller]
    fn from(e: ApiKeyError) -> Self {
        match e {
            ApiKeyError::BadSignature { message, .. } => ApiError::BadApiKey {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            ApiKeyError::UserNotFound { .. } => ApiError::BadApiKey {
                message: "unknown user".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            ApiKeyError::Expired { .. } => ApiError::ApiKeyExpired {
                location: ErrorLocation::from(Location::caller()),
            },
            ApiKeyError::Store { message, .. } => ApiError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert push errors to API errors
impl From<PushError> for ApiError {
    #[track_caller]
    fn from(e: PushError) -> Self {
        match e {
            PushError::BadIdentifier { message, .. } => ApiError::BadIdentifier {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            PushError::MissingApiKey { .. } => ApiError::Validation {
                message: "Push delivery is not configured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            PushError::Delivery { source, .. } => {
                log::error!("Push delivery error: {}", source);
                ApiError::Internal {
                    message: "Push delivery failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
