//! The prediction workflow state machine.
//!
//! [`WorkflowController`] owns the selected file and the state of the current
//! submission. The UI feeds it [`Event`]s and applies the [`Effect`]s it
//! returns; the controller itself never touches the page or the network.
//!
//! ```text
//!            submit (file selected)
//!   Idle ───────────────────────────▶ Busy
//!    ▲                               │    │
//!    │ valid file          succeeded │    │ failed
//!    │                               ▼    ▼
//!    └──────────────────── Completed    Failed
//! ```
//!
//! A submission cannot be cancelled: once `Busy`, the controller waits for the
//! request to resolve, and further submits are ignored until it does.

use crate::error::PredictError;
use crate::models::{CandidateFile, NotifyKind, Prediction, PredictionRequest, SelectedFile};
use crate::presenter::{status_line, RenderPlan, ResultPresenter};
use crate::validation::FileValidator;

/// Status text while a request is in flight.
pub const PREDICTING_MESSAGE: &str = "Predicting…";

/// Prefix of every failed-prediction notification.
pub const ERROR_PREFIX: &str = "Error: ";

/// State of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Busy,
    Completed,
    Failed,
}

/// Input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<F> {
    /// User picked or dropped a file.
    FileSelected { file: CandidateFile, payload: F },
    /// User pressed the submit control.
    SubmitTriggered,
    /// The in-flight request resolved with a prediction.
    PredictionSucceeded(Prediction),
    /// The in-flight request failed.
    PredictionFailed(PredictError),
}

/// Work the UI must carry out after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    /// Show a transient notification.
    Notify { message: String, kind: NotifyKind },
    /// Display the accepted file.
    ShowPreview(SelectedFile<F>),
    /// Remove summary and result rows.
    ClearResults,
    /// Replace the status line; `None` clears it.
    SetStatus(Option<String>),
    /// Enable or disable the submit control.
    SetSubmitEnabled(bool),
    /// Show or hide the busy indication.
    SetBusy(bool),
    /// Draw a prediction.
    Render(RenderPlan),
    /// Send the request; its outcome comes back as
    /// [`Event::PredictionSucceeded`] or [`Event::PredictionFailed`].
    StartPrediction(PredictionRequest<F>),
}

/// Owns the selected file and the submission state for one page session.
#[derive(Debug, Clone)]
pub struct WorkflowController<F> {
    state: WorkflowState,
    selected: Option<SelectedFile<F>>,
    validator: FileValidator,
    presenter: ResultPresenter,
}

impl<F> Default for WorkflowController<F> {
    fn default() -> Self {
        Self::new(FileValidator::default())
    }
}

impl<F> WorkflowController<F> {
    pub fn new(validator: FileValidator) -> Self {
        Self {
            state: WorkflowState::Idle,
            selected: None,
            validator,
            presenter: ResultPresenter,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    /// Submit is possible iff a file is selected and nothing is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.selected.is_some() && self.state != WorkflowState::Busy
    }
}

impl<F: Clone> WorkflowController<F> {
    /// React to one event, returning the effects to apply in order.
    pub fn handle(&mut self, event: Event<F>) -> Vec<Effect<F>> {
        let before = self.state;
        let effects = match event {
            Event::FileSelected { file, payload } => self.on_file_selected(file, payload),
            Event::SubmitTriggered => self.on_submit(),
            Event::PredictionSucceeded(prediction) => self.on_success(prediction),
            Event::PredictionFailed(error) => self.on_failure(error),
        };
        if before != self.state {
            log::debug!("Workflow {:?} -> {:?}", before, self.state);
        }
        effects
    }

    fn on_file_selected(&mut self, file: CandidateFile, payload: F) -> Vec<Effect<F>> {
        let file = match self.validator.validate(file) {
            Ok(file) => file,
            Err(e) => {
                log::info!("File refused ({}): {}", e.reason(), e);
                return vec![Effect::Notify {
                    message: e.to_string(),
                    kind: NotifyKind::Error,
                }];
            }
        };

        log::info!("📎 Selected {} ({} bytes)", file.name, file.size_bytes);
        let selected = SelectedFile { file, payload };
        self.selected = Some(selected.clone());

        // The in-flight request still owns the result area and status line.
        if self.state == WorkflowState::Busy {
            return vec![Effect::ShowPreview(selected)];
        }

        self.state = WorkflowState::Idle;
        vec![
            Effect::ClearResults,
            Effect::SetStatus(None),
            Effect::ShowPreview(selected),
            Effect::SetSubmitEnabled(true),
        ]
    }

    fn on_submit(&mut self) -> Vec<Effect<F>> {
        if self.state == WorkflowState::Busy {
            log::debug!("Submit ignored: a prediction is already in flight");
            return Vec::new();
        }
        let Some(selected) = self.selected.as_ref() else {
            log::debug!("Submit ignored: no file selected");
            return Vec::new();
        };

        let request = PredictionRequest::from_selected(selected);
        self.state = WorkflowState::Busy;
        vec![
            Effect::SetBusy(true),
            Effect::SetSubmitEnabled(false),
            Effect::ClearResults,
            Effect::SetStatus(Some(PREDICTING_MESSAGE.to_string())),
            Effect::StartPrediction(request),
        ]
    }

    fn on_success(&mut self, prediction: Prediction) -> Vec<Effect<F>> {
        if self.state != WorkflowState::Busy {
            log::warn!("Ignoring prediction result outside of a submission");
            return Vec::new();
        }

        log::info!(
            "✅ Prediction: {} labels from {}",
            prediction.response.topk.len(),
            prediction.display_model()
        );
        self.state = WorkflowState::Completed;
        vec![
            Effect::Render(self.presenter.present(&prediction.response)),
            Effect::SetStatus(Some(status_line(&prediction))),
            Effect::SetBusy(false),
            Effect::SetSubmitEnabled(self.submit_enabled()),
        ]
    }

    fn on_failure(&mut self, error: PredictError) -> Vec<Effect<F>> {
        if self.state != WorkflowState::Busy {
            log::warn!("Ignoring prediction failure outside of a submission: {}", error);
            return Vec::new();
        }

        match error.status() {
            Some(status) => log::warn!("❌ Prediction failed (HTTP {}): {}", status, error),
            None => log::warn!("❌ Prediction failed ({:?}): {}", error.kind(), error),
        }
        self.state = WorkflowState::Failed;
        vec![
            Effect::SetStatus(None),
            Effect::Notify {
                message: format!("{}{}", ERROR_PREFIX, error),
                kind: NotifyKind::Error,
            },
            Effect::SetBusy(false),
            Effect::SetSubmitEnabled(self.submit_enabled()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{FakeTransport, StepClock};
    use crate::client::PredictionClient;
    use crate::config::{ApiBase, MAX_FILE_SIZE};
    use crate::models::{PredictionResponse, RankedLabel};
    use crate::presenter::ConfidenceTier;

    type Controller = WorkflowController<Vec<u8>>;

    fn select(name: &str, size: u64, mime: &str) -> Event<Vec<u8>> {
        Event::FileSelected {
            file: CandidateFile::new(name, size, mime),
            payload: vec![7; 4],
        }
    }

    fn prediction(items: &[(&str, f64)]) -> Prediction {
        Prediction {
            response: PredictionResponse {
                topk: items.iter().map(|(l, p)| RankedLabel::new(*l, *p)).collect(),
                inference_time_ms: Some(12.0),
                model_name: Some("resnet50_imagenet".into()),
            },
            elapsed_ms: 90.0,
        }
    }

    fn notifications(effects: &[Effect<Vec<u8>>]) -> Vec<(&str, NotifyKind)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify { message, kind } => Some((message.as_str(), *kind)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_valid_selection_enables_submit() {
        let mut controller = Controller::default();
        assert!(!controller.submit_enabled());

        let effects = controller.handle(select("cat.png", 2048, "image/png"));

        assert_eq!(controller.state(), WorkflowState::Idle);
        assert_eq!(controller.selected().unwrap().file.name, "cat.png");
        assert!(controller.submit_enabled());
        assert_eq!(effects[0], Effect::ClearResults);
        assert_eq!(effects[1], Effect::SetStatus(None));
        assert!(matches!(&effects[2], Effect::ShowPreview(s) if s.file.name == "cat.png"));
        assert_eq!(effects[3], Effect::SetSubmitEnabled(true));
    }

    #[test]
    fn test_rejected_selection_keeps_previous_file() {
        let mut controller = Controller::default();
        controller.handle(select("cat.png", 2048, "image/png"));

        let effects = controller.handle(select("notes.txt", 10, "text/plain"));
        assert_eq!(
            notifications(&effects),
            [("Only image files can be uploaded.", NotifyKind::Error)]
        );
        assert_eq!(effects.len(), 1);

        let effects = controller.handle(select("huge.png", MAX_FILE_SIZE + 1, "image/png"));
        assert_eq!(notifications(&effects), [("File is too large (max 5.0 MB).", NotifyKind::Error)]);

        assert_eq!(controller.selected().unwrap().file.name, "cat.png");
        assert!(controller.submit_enabled());
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut controller = Controller::default();
        assert!(controller.handle(Event::SubmitTriggered).is_empty());
        assert_eq!(controller.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_submit_enters_busy() {
        let mut controller = Controller::default();
        controller.handle(select("cat.png", 2048, "image/png"));

        let effects = controller.handle(Event::SubmitTriggered);
        assert_eq!(controller.state(), WorkflowState::Busy);
        assert!(!controller.submit_enabled());
        assert_eq!(
            &effects[..4],
            &[
                Effect::SetBusy(true),
                Effect::SetSubmitEnabled(false),
                Effect::ClearResults,
                Effect::SetStatus(Some(PREDICTING_MESSAGE.to_string())),
            ]
        );
        match &effects[4] {
            Effect::StartPrediction(request) => {
                assert_eq!(request.field(), "file");
                assert_eq!(request.filename(), "cat.png");
            }
            other => panic!("expected StartPrediction, got {:?}", other),
        }

        // Second submit while busy starts nothing.
        assert!(controller.handle(Event::SubmitTriggered).is_empty());
    }

    #[test]
    fn test_success_renders_and_reports_time() {
        let mut controller = Controller::default();
        controller.handle(select("cat.png", 2048, "image/png"));
        controller.handle(Event::SubmitTriggered);

        let effects = controller.handle(Event::PredictionSucceeded(prediction(&[
            ("cat", 0.82),
            ("dog", 0.18),
        ])));

        assert_eq!(controller.state(), WorkflowState::Completed);
        match &effects[0] {
            Effect::Render(plan) => {
                let summary = plan.summary().unwrap();
                assert_eq!(summary.label, "cat");
                assert_eq!(summary.tier, ConfidenceTier::High);
                assert_eq!(summary.percent_text, "82.0%");
                assert_eq!(plan.rows()[0].bar_width, 82);
                assert_eq!(plan.rows()[1].bar_width, 18);
            }
            other => panic!("expected Render, got {:?}", other),
        }
        assert_eq!(
            effects[1],
            Effect::SetStatus(Some("12.0 ms · model: resnet50_imagenet".to_string()))
        );
        assert_eq!(effects[2], Effect::SetBusy(false));
        assert_eq!(effects[3], Effect::SetSubmitEnabled(true));
        assert!(notifications(&effects).is_empty());
    }

    #[test]
    fn test_empty_result_renders_no_results() {
        let mut controller = Controller::default();
        controller.handle(select("cat.png", 2048, "image/png"));
        controller.handle(Event::SubmitTriggered);

        let effects = controller.handle(Event::PredictionSucceeded(prediction(&[])));
        assert!(matches!(&effects[0], Effect::Render(RenderPlan::NoResults { .. })));
    }

    #[test]
    fn test_failure_notifies_once_and_recovers() {
        let mut controller = Controller::default();
        controller.handle(select("cat.png", 2048, "image/png"));
        controller.handle(Event::SubmitTriggered);

        let effects = controller.handle(Event::PredictionFailed(PredictError::Service {
            status: 500,
            message: "model not loaded".into(),
        }));

        assert_eq!(controller.state(), WorkflowState::Failed);
        assert_eq!(effects[0], Effect::SetStatus(None));
        assert_eq!(
            notifications(&effects),
            [("Error: model not loaded", NotifyKind::Error)]
        );
        assert!(effects.contains(&Effect::SetBusy(false)));
        assert!(effects.contains(&Effect::SetSubmitEnabled(true)));
        assert!(controller.submit_enabled());

        // A failed attempt leaves the file selected for another try.
        assert_eq!(controller.selected().unwrap().file.name, "cat.png");
        let effects = controller.handle(Event::SubmitTriggered);
        assert!(matches!(effects.last(), Some(Effect::StartPrediction(_))));
    }

    #[test]
    fn test_second_selection_clears_results() {
        let mut controller = Controller::default();
        controller.handle(select("a.png", 10, "image/png"));
        let effects = controller.handle(select("b.jpg", 20, "image/jpeg"));

        assert!(effects.contains(&Effect::ClearResults));
        assert!(effects.contains(&Effect::SetStatus(None)));
        assert_eq!(controller.selected().unwrap().file.name, "b.jpg");

        controller.handle(Event::SubmitTriggered);
        controller.handle(Event::PredictionSucceeded(prediction(&[("x", 0.5)])));
        let effects = controller.handle(select("c.gif", 30, "image/gif"));
        assert_eq!(controller.state(), WorkflowState::Idle);
        assert_eq!(effects[0], Effect::ClearResults);
    }

    #[test]
    fn test_selection_while_busy_keeps_request_running() {
        let mut controller = Controller::default();
        controller.handle(select("a.png", 10, "image/png"));
        controller.handle(Event::SubmitTriggered);

        let effects = controller.handle(select("b.png", 10, "image/png"));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::ShowPreview(s) if s.file.name == "b.png"));
        assert_eq!(controller.state(), WorkflowState::Busy);
        assert!(!controller.submit_enabled());

        let effects = controller.handle(Event::PredictionSucceeded(prediction(&[("x", 0.5)])));
        assert_eq!(effects.last(), Some(&Effect::SetSubmitEnabled(true)));
        assert_eq!(controller.selected().unwrap().file.name, "b.png");
    }

    #[test]
    fn test_stray_results_are_ignored() {
        let mut controller = Controller::default();
        assert!(controller
            .handle(Event::PredictionSucceeded(prediction(&[("x", 0.5)])))
            .is_empty());
        assert!(controller
            .handle(Event::PredictionFailed(PredictError::Transport("x".into())))
            .is_empty());
        assert_eq!(controller.state(), WorkflowState::Idle);
    }

    /// Runs effects against a fake transport the way the page does.
    async fn drive(
        controller: &mut Controller,
        client: &PredictionClient<FakeTransport, StepClock>,
        event: Event<Vec<u8>>,
    ) -> Vec<Effect<Vec<u8>>> {
        let mut applied = Vec::new();
        let mut pending = vec![event];
        while let Some(event) = pending.pop() {
            for effect in controller.handle(event) {
                if let Effect::StartPrediction(request) = &effect {
                    pending.push(match client.submit(request).await {
                        Ok(prediction) => Event::PredictionSucceeded(prediction),
                        Err(e) => Event::PredictionFailed(e),
                    });
                }
                applied.push(effect);
            }
        }
        applied
    }

    #[tokio::test]
    async fn test_http_500_end_to_end() {
        let client = PredictionClient::new(
            ApiBase::default(),
            FakeTransport::answering(500, r#"{"detail":"model not loaded"}"#),
            StepClock::new(10.0),
        );
        let mut controller = Controller::default();
        drive(&mut controller, &client, select("cat.png", 2048, "image/png")).await;

        let effects = drive(&mut controller, &client, Event::SubmitTriggered).await;
        assert_eq!(
            notifications(&effects),
            [("Error: model not loaded", NotifyKind::Error)]
        );
        assert_eq!(controller.state(), WorkflowState::Failed);
        assert!(controller.submit_enabled());
    }

    #[tokio::test]
    async fn test_elapsed_time_fallback_end_to_end() {
        let client = PredictionClient::new(
            ApiBase::default(),
            FakeTransport::answering(200, r#"{"topk":[{"label":"cat","probability":0.3}]}"#),
            StepClock::new(37.5),
        );
        let mut controller = Controller::default();
        drive(&mut controller, &client, select("cat.png", 2048, "image/png")).await;

        let effects = drive(&mut controller, &client, Event::SubmitTriggered).await;
        assert!(effects.contains(&Effect::SetStatus(Some("37.5 ms · model: unknown".to_string()))));
        assert_eq!(controller.state(), WorkflowState::Completed);
    }
}
