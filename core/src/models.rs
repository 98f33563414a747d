//! Domain models for the prediction workflow.
//!
//! - [`CandidateFile`] - metadata of a file the user picked
//! - [`SelectedFile`] - the accepted file together with its payload
//! - [`PredictionRequest`] - the multipart part sent to the service
//! - [`PredictionResponse`] / [`RankedLabel`] - what the service returns
//! - [`Prediction`] - a response plus the locally measured round-trip time
//!
//! The payload type `F` is whatever the platform uses to carry file contents:
//! a browser `File` handle in the frontend, plain bytes in tests.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::UPLOAD_FIELD;

// =============================================================================
// Files
// =============================================================================

/// Declared metadata of a file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Original filename
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// The file currently accepted for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub file: CandidateFile,
    pub payload: F,
}

// =============================================================================
// Request
// =============================================================================

/// A single named multipart part built from the selected file.
///
/// Fields are private: a request never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest<F> {
    field: &'static str,
    filename: String,
    mime_type: String,
    payload: F,
}

impl<F: Clone> PredictionRequest<F> {
    pub fn from_selected(selected: &SelectedFile<F>) -> Self {
        Self {
            field: UPLOAD_FIELD,
            filename: selected.file.name.clone(),
            mime_type: selected.file.mime_type.clone(),
            payload: selected.payload.clone(),
        }
    }
}

impl<F> PredictionRequest<F> {
    /// Multipart field name (always `file`).
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn payload(&self) -> &F {
        &self.payload
    }
}

// =============================================================================
// Response
// =============================================================================

/// One entry of the top-k list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLabel {
    pub label: String,
    /// Probability in `[0, 1]`
    pub probability: f64,
}

impl RankedLabel {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Success body of `POST /predict`.
///
/// `topk` is kept in the order the service sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topk: Vec<RankedLabel>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub inference_time_ms: Option<f64>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub model_name: Option<String>,
}

/// Error body of a non-success response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable message carried by `detail`, if any.
    ///
    /// Accepts a plain string, or FastAPI's validation list
    /// (`[{"msg": "..."}, ...]`) whose messages are joined with `"; "`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg")?.as_str())
                    .filter(|msg| !msg.is_empty())
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// A decoded response together with the round-trip time measured locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub response: PredictionResponse,
    pub elapsed_ms: f64,
}

impl Prediction {
    /// Time shown to the user: the service's own figure when it sent one,
    /// otherwise the locally measured round trip.
    pub fn display_time_ms(&self) -> f64 {
        self.response.inference_time_ms.unwrap_or(self.elapsed_ms)
    }

    /// Model name, or `"unknown"` when absent or empty.
    pub fn display_model(&self) -> &str {
        match self.response.model_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "unknown",
        }
    }
}

// =============================================================================
// Health
// =============================================================================

/// State of the service health indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// No check completed yet.
    #[default]
    Unknown,
    /// Service answered with a JSON body.
    Up,
    /// Service unreachable or answered something that is not JSON.
    Down,
}

impl HealthStatus {
    /// Get CSS class for the indicator dot.
    pub fn css_class(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "dot",
            HealthStatus::Up => "dot ok",
            HealthStatus::Down => "dot bad",
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Style of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Error,
}

impl NotifyKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotifyKind::Info => "toast info",
            NotifyKind::Error => "toast error",
        }
    }
}

// =============================================================================
// Lenient field decoding
// =============================================================================

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RankedLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RankedLabel>>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "topk": [
                {"label": "tabby", "probability": 0.61},
                {"label": "tiger cat", "probability": 0.22}
            ],
            "inference_time_ms": 41.237,
            "model_name": "resnet50_imagenet"
        }"#;

        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.topk.len(), 2);
        assert_eq!(response.topk[0].label, "tabby");
        assert_eq!(response.inference_time_ms, Some(41.237));
        assert_eq!(response.model_name.as_deref(), Some("resnet50_imagenet"));
    }

    #[test]
    fn test_response_tolerates_missing_and_odd_fields() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"topk": null, "inference_time_ms": "fast", "model_name": 3}"#).unwrap();
        assert!(response.topk.is_empty());
        assert_eq!(response.inference_time_ms, None);
        assert_eq!(response.model_name, None);

        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, PredictionResponse::default());
    }

    #[test]
    fn test_response_rejects_malformed_entries() {
        let result: Result<PredictionResponse, _> =
            serde_json::from_str(r#"{"topk": [{"label": "cat"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "model not loaded"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("model not loaded"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"error": "x"}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}, {"msg": "bad type"}]}"#,
        )
        .unwrap();
        assert_eq!(body.message().as_deref(), Some("field required; bad type"));
    }

    #[test]
    fn test_prediction_display_values() {
        let mut prediction = Prediction {
            response: PredictionResponse {
                topk: vec![],
                inference_time_ms: Some(12.5),
                model_name: Some(String::new()),
            },
            elapsed_ms: 80.0,
        };
        assert_eq!(prediction.display_time_ms(), 12.5);
        assert_eq!(prediction.display_model(), "unknown");

        prediction.response.inference_time_ms = None;
        prediction.response.model_name = Some("vit".into());
        assert_eq!(prediction.display_time_ms(), 80.0);
        assert_eq!(prediction.display_model(), "vit");
    }

    #[test]
    fn test_request_from_selected() {
        let selected = SelectedFile {
            file: CandidateFile::new("cat.png", 1024, "image/png"),
            payload: vec![1u8, 2, 3],
        };
        let request = PredictionRequest::from_selected(&selected);
        assert_eq!(request.field(), "file");
        assert_eq!(request.filename(), "cat.png");
        assert_eq!(request.mime_type(), "image/png");
        assert_eq!(request.payload(), &vec![1u8, 2, 3]);
    }
}
