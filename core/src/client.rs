//! Client for the remote inference service.
//!
//! The HTTP layer is abstracted behind [`Transport`] so the same request and
//! response handling runs in the browser (gloo-net) and in native tests.
//! Timing goes through [`Clock`] for the same reason.
//!
//! # Endpoints
//!
//! | Method | Path       | Body                         |
//! |--------|------------|------------------------------|
//! | POST   | `/predict` | multipart, one part `file`   |
//! | GET    | `/health`  | none                         |
//!
//! Each submission is a single attempt: no retry, no timeout beyond the
//! transport's own.

use crate::config::ApiBase;
use crate::error::{PredictError, PredictResult};
use crate::models::{ErrorBody, HealthStatus, Prediction, PredictionRequest, PredictionResponse};

// =============================================================================
// Transport
// =============================================================================

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP operations the client needs.
///
/// `Err` means no response was obtained at all; the string is the
/// transport's own message and is shown to the user as-is.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// How file contents are carried on this platform.
    type Payload;

    /// `POST` a single-part multipart body built from `request`.
    async fn post_file(
        &self,
        url: &str,
        request: &PredictionRequest<Self::Payload>,
    ) -> Result<RawResponse, String>;

    /// Plain `GET`.
    async fn get(&self, url: &str) -> Result<RawResponse, String>;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// [`Clock`] backed by `std::time::Instant` (not available on wasm32).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

// =============================================================================
// Client
// =============================================================================

/// Issues prediction and health requests against one service address.
#[derive(Debug, Clone)]
pub struct PredictionClient<T, C> {
    base: ApiBase,
    transport: T,
    clock: C,
}

impl<T: Transport, C: Clock> PredictionClient<T, C> {
    pub fn new(base: ApiBase, transport: T, clock: C) -> Self {
        Self { base, transport, clock }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Send one prediction request and interpret the answer.
    ///
    /// Elapsed time is measured around the transport call and returned
    /// alongside the response.
    pub async fn submit(&self, request: &PredictionRequest<T::Payload>) -> PredictResult<Prediction> {
        let url = self.base.predict_url();
        log::info!("📤 POST {} ({})", url, request.filename());

        let started = self.clock.now_ms();
        let raw = self.transport.post_file(&url, request).await.map_err(|e| {
            log::warn!("Prediction request failed: {}", e);
            PredictError::Transport(e)
        })?;
        let elapsed_ms = self.clock.now_ms() - started;

        log::debug!("Prediction answered HTTP {} in {:.1} ms", raw.status, elapsed_ms);
        interpret_response(raw, elapsed_ms)
    }

    /// Query `GET /health` for the status indicator.
    pub async fn check_health(&self) -> HealthStatus {
        let url = self.base.health_url();
        let status = interpret_health(self.transport.get(&url).await);
        log::debug!("Health check {}: {:?}", url, status);
        status
    }
}

// =============================================================================
// Response interpretation
// =============================================================================

/// Map an HTTP answer to a [`Prediction`] or a [`PredictError`].
///
/// - 2xx: the body must decode as a [`PredictionResponse`]; anything else is
///   a transport error.
/// - otherwise: the message is the body's `detail`, or `HTTP {status}` when
///   the body carries none.
pub fn interpret_response(raw: RawResponse, elapsed_ms: f64) -> PredictResult<Prediction> {
    if !raw.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&raw.body)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| format!("HTTP {}", raw.status));
        log::warn!("Service error (HTTP {}): {}", raw.status, message);
        return Err(PredictError::Service {
            status: raw.status,
            message,
        });
    }

    let response: PredictionResponse = serde_json::from_str(&raw.body).map_err(|e| {
        log::warn!("Malformed prediction body: {}", e);
        PredictError::Transport(format!("Invalid JSON response: {}", e))
    })?;

    Ok(Prediction { response, elapsed_ms })
}

/// A health check is `Up` when a response arrived and its body is JSON.
pub fn interpret_health(result: Result<RawResponse, String>) -> HealthStatus {
    match result {
        Ok(raw) if serde_json::from_str::<serde_json::Value>(&raw.body).is_ok() => HealthStatus::Up,
        _ => HealthStatus::Down,
    }
}
