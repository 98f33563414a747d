//! Application configuration.
//!
//! The service address can be baked in at build time through the
//! `PREDICTOR_API_BASE` environment variable (read by `option_env!`), and
//! changed by the user at runtime from the header. Runtime changes last for
//! the page session only.

use predictor_core::ApiBase;

/// Application name.
///
/// Used as the page title.
pub const APP_NAME: &str = "Image Predictor";

/// `accept` filter of the file input.
pub const ACCEPT_FILTER: &str = "image/*";

/// Build-time override of the service address.
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("PREDICTOR_API_BASE");

/// Service address the page starts with.
pub fn initial_api_base() -> ApiBase {
    resolve_api_base(API_BASE_OVERRIDE)
}

fn resolve_api_base(value: Option<&str>) -> ApiBase {
    match value.map(ApiBase::parse) {
        Some(Ok(base)) => base,
        Some(Err(e)) => {
            log::warn!("Ignoring PREDICTOR_API_BASE: {}", e);
            ApiBase::default()
        }
        None => ApiBase::default(),
    }
}
