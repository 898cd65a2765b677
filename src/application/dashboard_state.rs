// Shared panel state and its named transitions
use crate::domain::diagnosis::PredictionResult;
use crate::domain::history::HistoryEntry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type SharedState = Arc<Mutex<DashboardState>>;

/// Lock the shared state. Never hold the guard across an await point.
pub fn lock(state: &SharedState) -> MutexGuard<'_, DashboardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading,
    Succeeded(PredictionResult),
    Failed,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("a prediction is already in progress")]
    Busy,
}

/// Everything the views render from, behind one lock.
///
/// `current` is kept apart from the lifecycle so a failed or pending request
/// leaves the last diagnosis on screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    lifecycle: RequestLifecycle,
    current: Option<PredictionResult>,
    history: Vec<HistoryEntry>,
}

impl DashboardState {
    pub fn lifecycle(&self) -> &RequestLifecycle {
        &self.lifecycle
    }

    pub fn current(&self) -> Option<&PredictionResult> {
        self.current.as_ref()
    }

    /// Reverse of the order the service sent
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == RequestLifecycle::Loading
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }
        self.lifecycle = RequestLifecycle::Loading;
        Ok(())
    }

    pub fn predict_succeeded(&mut self, result: PredictionResult) {
        self.current = Some(result.clone());
        self.lifecycle = RequestLifecycle::Succeeded(result);
    }

    pub fn predict_failed(&mut self) {
        self.lifecycle = RequestLifecycle::Failed;
    }

    /// Replace the history with `fetched` reversed.
    pub fn history_refreshed(&mut self, mut fetched: Vec<HistoryEntry>) {
        fetched.reverse();
        self.history = fetched;
    }
}
