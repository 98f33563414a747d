//! Error types for the prediction workflow.
//!
//! Every failure the client can surface falls into one of three kinds:
//!
//! - [`ValidationError`] - a selected file was refused before any request
//! - [`PredictError::Transport`] - the service was unreachable or answered
//!   a success status with a body that is not a prediction
//! - [`PredictError::Service`] - the service answered with a non-success status
//!
//! [`ConfigError`] covers the service address entered by the user.
//!
//! Callers that only care about the category use [`ErrorKind`].

use thiserror::Error;

use crate::presenter::human_size;

// =============================================================================
// Error Kinds
// =============================================================================

/// Category of a surfaced failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File refused by the validator.
    Validation,
    /// No usable response from the service.
    Transport,
    /// Service replied with a non-success status.
    Service,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Reasons a candidate file is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Declared MIME type does not start with `image/`.
    #[error("Only image files can be uploaded.")]
    NotAnImage { mime_type: String },

    /// File is larger than the upload limit.
    #[error("File is too large (max {}).", limit_text(.limit))]
    TooLarge { size_bytes: u64, limit: u64 },
}

impl ValidationError {
    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NotAnImage { .. } => "not an image",
            ValidationError::TooLarge { .. } => "too large",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

fn limit_text(limit: &u64) -> String {
    human_size(*limit)
}

// =============================================================================
// Prediction Errors
// =============================================================================

/// Failure of a single prediction request.
///
/// `Display` yields the bare message; the workflow adds the user-facing prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// No response reached us, or a success body could not be decoded.
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status, with the service's `detail` or `HTTP {status}`.
    #[error("{message}")]
    Service { status: u16, message: String },
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Transport(_) => ErrorKind::Transport,
            PredictError::Service { .. } => ErrorKind::Service,
        }
    }

    /// HTTP status when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            PredictError::Transport(_) => None,
            PredictError::Service { status, .. } => Some(*status),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid service address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Address does not start with `http://` or `https://`.
    #[error("API address must start with http:// or https://")]
    InvalidApiBase(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for prediction requests.
pub type PredictResult<T> = Result<T, PredictError>;

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;
