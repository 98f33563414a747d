//! Turns a prediction response into display data.
//!
//! Presentation is pure: the same response always yields the same
//! [`RenderPlan`], and nothing here touches the network or the page.

use crate::models::{CandidateFile, Prediction, PredictionResponse};

/// Message shown when the service returns an empty top-k list.
pub const NO_RESULTS_MESSAGE: &str = "No results.";

/// Narrowest bar drawn, in percent, so near-zero rows stay visible.
pub const MIN_BAR_WIDTH: u32 = 3;

// =============================================================================
// Confidence Tier
// =============================================================================

/// Badge style of the top-ranked probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Mid,
    Low,
}

impl ConfidenceTier {
    /// `p >= 0.7` is high, `0.4 <= p < 0.7` is mid, anything else low.
    pub fn from_probability(p: f64) -> Self {
        if p >= 0.7 {
            ConfidenceTier::High
        } else if p >= 0.4 {
            ConfidenceTier::Mid
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Mid => "mid",
            ConfidenceTier::Low => "low",
        }
    }

    /// Get CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "badge high",
            ConfidenceTier::Mid => "badge mid",
            ConfidenceTier::Low => "badge low",
        }
    }
}

// =============================================================================
// Render Plan
// =============================================================================

/// Top-1 summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: String,
    pub tier: ConfidenceTier,
    /// e.g. `"82.0%"`
    pub percent_text: String,
}

/// One ranked row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// 1-indexed rank
    pub rank: usize,
    /// `"{rank}. {label}"`
    pub label_text: String,
    /// Bar width in percent
    pub bar_width: u32,
    pub percent_text: String,
}

/// Everything the result area needs to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// Empty top-k: a single message, no summary, no bars.
    NoResults { message: String },
    /// Summary plus one row per label, in service order.
    Ranked { summary: Summary, rows: Vec<ResultRow> },
}

impl RenderPlan {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            RenderPlan::NoResults { .. } => None,
            RenderPlan::Ranked { summary, .. } => Some(summary),
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        match self {
            RenderPlan::NoResults { .. } => &[],
            RenderPlan::Ranked { rows, .. } => rows,
        }
    }
}

// =============================================================================
// Presenter
// =============================================================================

/// Builds [`RenderPlan`]s from responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPresenter;

impl ResultPresenter {
    pub fn present(&self, response: &PredictionResponse) -> RenderPlan {
        let Some(top1) = response.topk.first() else {
            return RenderPlan::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        };

        let summary = Summary {
            label: top1.label.clone(),
            tier: ConfidenceTier::from_probability(top1.probability),
            percent_text: format_percent(top1.probability),
        };

        let rows = response
            .topk
            .iter()
            .enumerate()
            .map(|(idx, item)| ResultRow {
                rank: idx + 1,
                label_text: format!("{}. {}", idx + 1, item.label),
                bar_width: bar_width(item.probability),
                percent_text: format_percent(item.probability),
            })
            .collect();

        RenderPlan::Ranked { summary, rows }
    }
}

/// Present with the default presenter.
pub fn present(response: &PredictionResponse) -> RenderPlan {
    ResultPresenter.present(response)
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// `max(3, round(p * 100))`.
pub fn bar_width(probability: f64) -> u32 {
    let pct = (probability * 100.0).round();
    if pct.is_nan() || pct < MIN_BAR_WIDTH as f64 {
        MIN_BAR_WIDTH
    } else {
        pct as u32
    }
}

/// Probability as a percentage with one decimal, e.g. `0.8234 -> "82.3%"`.
///
/// Ties round up (`0.1225 -> "12.3%"`); `{:.1}` alone would round them to even.
pub fn format_percent(probability: f64) -> String {
    let tenths = (probability * 1000.0).round() / 10.0;
    format!("{:.1}%", tenths)
}

/// Status line shown after a successful prediction.
pub fn status_line(prediction: &Prediction) -> String {
    format!(
        "{:.1} ms · model: {}",
        prediction.display_time_ms(),
        prediction.display_model()
    )
}

/// Byte count in B/KB/MB/GB with one decimal, e.g. `2048 -> "2.0 KB"`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Preview caption: `"{name} · {size} · {mime}"`.
pub fn file_meta(file: &CandidateFile) -> String {
    format!("{} · {} · {}", file.name, human_size(file.size_bytes), file.mime_type)
}
