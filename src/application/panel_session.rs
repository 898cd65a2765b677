// Panel session - composition root for one operator session
use crate::application::dashboard_state::{
    DashboardState, RequestLifecycle, SharedState, SubmitError, lock,
};
use crate::application::history_store::HistoryStore;
use crate::application::prediction_client::PredictionClient;
use crate::application::request_controller::{
    Notice, PendingPrediction, RequestController, SubmitOutcome,
};
use crate::application::sensor_form::SensorForm;
use crate::domain::diagnosis::PredictionResult;
use crate::domain::history::HistoryEntry;
use crate::domain::reading::{SensorField, SensorReading};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// Point-in-time copy of everything the views need
#[derive(Debug, Clone)]
pub struct PanelSnapshot {
    pub draft: SensorReading,
    pub lifecycle: RequestLifecycle,
    pub current: Option<PredictionResult>,
    pub history: Vec<HistoryEntry>,
}

impl PanelSnapshot {
    pub fn is_loading(&self) -> bool {
        self.lifecycle == RequestLifecycle::Loading
    }
}

#[derive(Clone)]
pub struct PanelSession {
    form: Arc<Mutex<SensorForm>>,
    state: SharedState,
    controller: RequestController,
    history: HistoryStore,
}

impl PanelSession {
    pub fn new(client: Arc<dyn PredictionClient>) -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let history = HistoryStore::new(client.clone(), state.clone());
        let (controller, notices) = RequestController::new(client, state.clone(), history.clone());

        let session = Self {
            form: Arc::new(Mutex::new(SensorForm::new())),
            state,
            controller,
            history,
        };
        (session, notices)
    }

    /// Load the history once; see `HistoryStore::initialize`
    pub async fn initialize(&self) -> bool {
        self.history.initialize().await
    }

    pub fn edit(&self, field: SensorField, raw: &str) -> f64 {
        self.form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .edit(field, raw)
    }

    pub fn draft(&self) -> SensorReading {
        *self.form.lock().unwrap_or_else(PoisonError::into_inner).draft()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// Snapshot the draft and switch to loading right away; the returned
    /// prediction does the network call.
    pub fn begin_submit(&self) -> Result<PendingPrediction, SubmitError> {
        let reading = self.form.lock().unwrap_or_else(PoisonError::into_inner).submit();
        self.controller.begin(reading)
    }

    #[allow(dead_code)]
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        Ok(self.begin_submit()?.run().await)
    }

    /// Reverse of the order the service sent
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        let draft = self.draft();
        let state = lock(&self.state);
        PanelSnapshot {
            draft,
            lifecycle: state.lifecycle().clone(),
            current: state.current().cloned(),
            history: state.history().to_vec(),
        }
    }
}
