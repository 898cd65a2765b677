// Request controller - lifecycle of a single prediction submission
use crate::application::dashboard_state::{SharedState, SubmitError, lock};
use crate::application::history_store::HistoryStore;
use crate::application::prediction_client::{NetworkError, PredictionClient};
use crate::domain::diagnosis::PredictionResult;
use crate::domain::reading::SensorReading;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão com o servidor.";

/// User-facing message raised once per failed prediction
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub detail: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    fn connection_error(error: &NetworkError) -> Self {
        Self {
            message: CONNECTION_ERROR_MESSAGE.to_string(),
            detail: error.to_string(),
            raised_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The history refresh runs on its own; awaiting the handle is optional
    /// and dropping it does not cancel the refresh.
    Succeeded {
        result: PredictionResult,
        history_refresh: JoinHandle<()>,
    },
    Failed(NetworkError),
}

#[derive(Clone)]
pub struct RequestController {
    client: Arc<dyn PredictionClient>,
    state: SharedState,
    history: HistoryStore,
    notices: mpsc::UnboundedSender<Notice>,
}

impl RequestController {
    pub fn new(
        client: Arc<dyn PredictionClient>,
        state: SharedState,
        history: HistoryStore,
    ) -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (notices, rx) = mpsc::unbounded_channel();
        let controller = Self {
            client,
            state,
            history,
            notices,
        };
        (controller, rx)
    }

    /// While true the submit control is disabled
    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading()
    }

    /// Switch to loading and hand back the prediction to run. Refused with
    /// `Busy`, without touching the client, while another one is pending.
    pub fn begin(&self, reading: SensorReading) -> Result<PendingPrediction, SubmitError> {
        lock(&self.state).begin_submit()?;
        Ok(PendingPrediction {
            controller: self.clone(),
            reading,
        })
    }

    #[allow(dead_code)]
    pub async fn submit(&self, reading: SensorReading) -> Result<SubmitOutcome, SubmitError> {
        Ok(self.begin(reading)?.run().await)
    }
}

/// A submission already accepted by `RequestController::begin`.
///
/// The panel stays in `Loading` until `run` completes, so it must be run.
pub struct PendingPrediction {
    controller: RequestController,
    reading: SensorReading,
}

impl PendingPrediction {
    pub async fn run(self) -> SubmitOutcome {
        let controller = self.controller;
        let reading = self.reading;
        tracing::debug!(?reading, "Dispatching prediction request");

        match controller.client.predict(&reading).await {
            Ok(result) => {
                tracing::info!(
                    status = %result.status,
                    risk = result.failure_risk_percent,
                    "Prediction received"
                );
                lock(&controller.state).predict_succeeded(result.clone());

                let history = controller.history.clone();
                let history_refresh = tokio::spawn(async move {
                    let _ = history.refresh().await;
                });
                SubmitOutcome::Succeeded {
                    result,
                    history_refresh,
                }
            }
            Err(e) => {
                tracing::error!("Prediction request failed: {}", e);
                lock(&controller.state).predict_failed();
                // receiver gone means the session was dismissed
                let _ = controller.notices.send(Notice::connection_error(&e));
                SubmitOutcome::Failed(e)
            }
        }
    }
}
