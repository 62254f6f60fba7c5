/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error type for every client operation.

use reqwest::StatusCode;
use serde_json::{Map, Value};

/// Result alias used across the crate
pub type FoodgramResult<T> = Result<T, AppError>;

/// Errors produced by the Foodgram client
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport failure reported by the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body could not be parsed as JSON or mapped to the expected type
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file-system failure (token file, downloads)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a JSON error body, kept as is so field errors survive
    #[error("api error ({status}): {body}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Parsed JSON error body
        body: Value,
    },

    /// The server failed without a JSON body
    #[error("HTTP error! status: {}", .0.as_u16())]
    Http(StatusCode),

    /// The sign-in request did not settle before its timeout
    #[error("request was cancelled by timeout, please try again")]
    Timeout,

    /// Field validation message extracted from a sign-in rejection
    #[error("{0}")]
    Validation(String),

    /// A data endpoint succeeded without a JSON body
    #[error("unexpected body: status {} without JSON content", .0.as_u16())]
    UnexpectedBody(StatusCode),

    /// The shopping list download was rejected
    #[error("download failed: status {}", .0.as_u16())]
    DownloadFailed(StatusCode),

    /// Invalid argument or configuration
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status attached to this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Http(status)
            | AppError::UnexpectedBody(status)
            | AppError::DownloadFailed(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the field-keyed error map of a structured API error
    ///
    /// # Returns
    /// * `Some(map)` - when the server returned a JSON object
    /// * `None` - for every other error
    #[must_use]
    pub fn field_errors(&self) -> Option<&Map<String, Value>> {
        match self {
            AppError::Api { body, .. } => body.as_object(),
            _ => None,
        }
    }

    /// Checks if the server rejected the request as unauthenticated
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
