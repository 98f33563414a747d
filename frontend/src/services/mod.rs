//! Inference service communication.
//!
//! # Services
//!
//! - [`predict`] - gloo-net transport and browser clock for the core client
//! - [`health`] - health indicator check

pub mod predict;
pub mod health;

pub use predict::*;
pub use health::*;

use predictor_core::{ApiBase, PredictionClient};

/// Client type used by the page.
pub type BrowserClient = PredictionClient<BrowserTransport, PerformanceClock>;

/// Build a client for the given service address.
pub fn client_for(base: ApiBase) -> BrowserClient {
    PredictionClient::new(base, BrowserTransport, PerformanceClock)
}
