//! Client configuration.
//!
//! Upload policy, notification timing and the service address.
//! The address is entered at runtime and validated through [`ApiBase::parse`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Service address used until the user enters another one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Maximum accepted file size (in bytes).
///
/// 5 MiB, the same limit the inference service enforces.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME prefix every accepted file must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Multipart field name the service reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// How long a notification stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 2200;

static API_BASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://.+").expect("Invalid API base pattern"));

/// Validated base URL of the inference service, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parse user input: trim whitespace, drop trailing slashes, then require
    /// an `http://` or `https://` scheme followed by at least one character.
    pub fn parse(input: &str) -> ConfigResult<Self> {
        let value = input.trim().trim_end_matches('/');
        if !API_BASE_RE.is_match(value) {
            return Err(ConfigError::InvalidApiBase(input.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute path (`/predict`) onto the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }

    /// `POST` target for predictions.
    pub fn predict_url(&self) -> String {
        self.endpoint("/predict")
    }

    /// `GET` target for the health indicator.
    pub fn health_url(&self) -> String {
        self.endpoint("/health")
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl FromStr for ApiBase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
