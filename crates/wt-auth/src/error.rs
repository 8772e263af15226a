use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiKeyError {
    /// Structurally invalid token or signature mismatch.
    #[error("Bad API key signature: {message} {location}")]
    BadSignature {
        message: String,
        location: ErrorLocation,
    },

    /// Signature valid but the credential changed since issuance.
    #[error("API key expired {location}")]
    Expired { location: ErrorLocation },

    /// The token references a user id that no longer exists.
    #[error("No user for API key {location}")]
    UserNotFound { location: ErrorLocation },

    /// The user store failed. Unlike the variants above this is a server
    /// fault, not a caller fault.
    #[error("User store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiKeyError {
    #[track_caller]
    pub fn bad_signature<S: Into<String>>(message: S) -> Self {
        ApiKeyError::BadSignature {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn expired() -> Self {
        ApiKeyError::Expired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found() -> Self {
        ApiKeyError::UserNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        ApiKeyError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code for client responses.
    ///
    /// `UserNotFound` deliberately shares a code with `BadSignature` so a
    /// caller cannot probe which user ids exist.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadSignature { .. } | Self::UserNotFound { .. } => "bad_api_key",
            Self::Expired { .. } => "api_key_expired",
            Self::Store { .. } => "internal_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiKeyError>;
