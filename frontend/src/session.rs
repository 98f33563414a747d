//! Page session: the workflow controller and the signals it drives.
//!
//! One [`Session`] is created when the page mounts and handed to every
//! component. Components turn DOM events into [`Event`]s via
//! [`Session::dispatch`]; the effects the controller returns are applied to
//! the signals here, and nowhere else.

use leptos::*;
use gloo_timers::future::TimeoutFuture;
use predictor_core::{
    ApiBase, CandidateFile, Effect, Event, HealthStatus, NotifyKind, RenderPlan,
    WorkflowController, TOAST_DURATION_MS,
};
use web_sys::{File, Url};

use crate::services::{check_health, client_for, js_error};
use crate::types::{PreviewInfo, ToastMessage};

/// Everything the page renders from.
#[derive(Clone, Copy)]
pub struct UiState {
    pub api_base: RwSignal<ApiBase>,
    pub health: RwSignal<HealthStatus>,
    pub preview: RwSignal<Option<PreviewInfo>>,
    pub plan: RwSignal<Option<RenderPlan>>,
    pub status: RwSignal<Option<String>>,
    pub submit_enabled: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub toast: RwSignal<Option<ToastMessage>>,
    toast_seq: StoredValue<u64>,
}

impl UiState {
    fn new(api_base: ApiBase) -> Self {
        Self {
            api_base: create_rw_signal(api_base),
            health: create_rw_signal(HealthStatus::Unknown),
            preview: create_rw_signal(None),
            plan: create_rw_signal(None),
            status: create_rw_signal(None),
            submit_enabled: create_rw_signal(false),
            busy: create_rw_signal(false),
            toast: create_rw_signal(None),
            toast_seq: store_value(0),
        }
    }

    /// Record a health result for `base`.
    ///
    /// Ignored when the address changed while the check was in flight.
    pub fn set_health(&self, base: &ApiBase, status: HealthStatus) -> bool {
        if self.api_base.with_untracked(|current| current != base) {
            log::debug!("Dropping health result for {}: address changed", base);
            return false;
        }
        self.health.set(status);
        true
    }

    /// Show a toast and schedule its dismissal.
    ///
    /// A newer toast replaces this one; the timer then leaves it alone.
    pub fn notify(&self, message: impl Into<String>, kind: NotifyKind) {
        let id = self
            .toast_seq
            .try_update_value(|seq| {
                *seq += 1;
                *seq
            })
            .unwrap_or_default();
        let message = message.into();
        match kind {
            NotifyKind::Error => log::warn!("🔔 {}", message),
            NotifyKind::Info => log::info!("🔔 {}", message),
        }
        self.toast.set(Some(ToastMessage { id, message, kind }));

        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                }
            });
        });
    }
}

/// Controller plus UI state for one page.
#[derive(Clone, Copy)]
pub struct Session {
    pub ui: UiState,
    controller: StoredValue<WorkflowController<File>>,
}

impl Session {
    pub fn new(api_base: ApiBase) -> Self {
        Self {
            ui: UiState::new(api_base),
            controller: store_value(WorkflowController::default()),
        }
    }

    /// Feed a browser file into the workflow.
    pub fn select_file(self, file: File) {
        let candidate = CandidateFile::new(file.name(), file.size() as u64, file.type_());
        self.dispatch(Event::FileSelected {
            file: candidate,
            payload: file,
        });
    }

    pub fn submit(self) {
        self.dispatch(Event::SubmitTriggered);
    }

    /// Run one event through the controller and apply the resulting effects.
    pub fn dispatch(self, event: Event<File>) {
        let effects = self
            .controller
            .try_update_value(|controller| controller.handle(event))
            .unwrap_or_default();
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self, effect: Effect<File>) {
        let ui = self.ui;
        match effect {
            Effect::Notify { message, kind } => ui.notify(message, kind),
            Effect::ShowPreview(selected) => {
                if let Some(old) = ui.preview.get_untracked() {
                    if let Err(e) = Url::revoke_object_url(&old.url) {
                        log::warn!("Failed to revoke preview URL: {}", js_error(e));
                    }
                }
                let url = Url::create_object_url_with_blob(&selected.payload).map_err(js_error);
                match PreviewInfo::from_object_url(url, &selected.file) {
                    Ok(preview) => ui.preview.set(Some(preview)),
                    Err(message) => {
                        ui.preview.set(None);
                        ui.notify(message, NotifyKind::Error);
                    }
                }
            }
            Effect::ClearResults => ui.plan.set(None),
            Effect::SetStatus(status) => ui.status.set(status),
            Effect::SetSubmitEnabled(enabled) => ui.submit_enabled.set(enabled),
            Effect::SetBusy(busy) => ui.busy.set(busy),
            Effect::Render(plan) => ui.plan.set(Some(plan)),
            Effect::StartPrediction(request) => {
                let client = client_for(ui.api_base.get_untracked());
                spawn_local(async move {
                    let event = match client.submit(&request).await {
                        Ok(prediction) => Event::PredictionSucceeded(prediction),
                        Err(e) => Event::PredictionFailed(e),
                    };
                    self.dispatch(event);
                });
            }
        }
    }

    /// Validate and adopt a new service address, then check its health.
    pub fn save_api_base(self, input: &str) {
        match ApiBase::parse(input) {
            Ok(base) => {
                log::info!("🔧 API address set to {}", base);
                self.ui.api_base.set(base);
                self.ui.notify("API address saved", NotifyKind::Info);
                self.refresh_health();
            }
            Err(e) => self.ui.notify(e.to_string(), NotifyKind::Error),
        }
    }

    /// Check the current service address and update the status dot.
    pub fn refresh_health(self) {
        let base = self.ui.api_base.get_untracked();
        let ui = self.ui;
        spawn_local(async move {
            let status = check_health(base.clone()).await;
            ui.set_health(&base, status);
        });
    }
}
