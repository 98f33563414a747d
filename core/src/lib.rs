//! # Predictor core - prediction workflow for the image classification client
//!
//! Everything here is platform-independent: the browser frontend plugs in its
//! own HTTP transport, clock and file handle type, and native tests use fakes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  File pick  │────▶│  Validator  │────▶│    Workflow      │────▶│ PredictionClient│
//! │ (drop/input)│     │ (type/size) │     │ (state machine)  │◀────│  POST /predict  │
//! └─────────────┘     └─────────────┘     └────────┬─────────┘     └─────────────────┘
//!                                                  │
//!                                                  ▼
//!                                         ┌──────────────────┐
//!                                         │ ResultPresenter  │
//!                                         │  (RenderPlan)    │
//!                                         └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy (validation, transport, service)
//! - [`config`] - Upload policy and service address
//! - [`models`] - Files, requests, responses
//! - [`validation`] - File acceptance rules
//! - [`client`] - HTTP request/response handling
//! - [`presenter`] - Response to display data
//! - [`workflow`] - Submission state machine

// Core modules
pub mod error;
pub mod config;
pub mod models;

// Workflow pieces
pub mod validation;
pub mod client;
pub mod presenter;
pub mod workflow;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ErrorKind,
    ValidationError,
    PredictError,
    ConfigError,
    ValidationResult,
    PredictResult,
    ConfigResult,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ApiBase, DEFAULT_API_BASE, MAX_FILE_SIZE, TOAST_DURATION_MS, UPLOAD_FIELD};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    CandidateFile,
    SelectedFile,
    PredictionRequest,
    PredictionResponse,
    RankedLabel,
    Prediction,
    HealthStatus,
    NotifyKind,
};

// =============================================================================
// Re-exports - Workflow
// =============================================================================

pub use validation::FileValidator;

pub use client::{
    PredictionClient,
    Transport,
    Clock,
    RawResponse,
    interpret_response,
    interpret_health,
};

#[cfg(not(target_arch = "wasm32"))]
pub use client::SystemClock;

pub use presenter::{
    ResultPresenter,
    RenderPlan,
    Summary,
    ResultRow,
    ConfidenceTier,
    present,
    file_meta,
    human_size,
};

pub use workflow::{WorkflowController, WorkflowState, Event, Effect};
