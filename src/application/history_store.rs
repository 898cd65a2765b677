// History store - past analyses, reverse of arrival order
use crate::application::dashboard_state::{SharedState, lock};
use crate::application::prediction_client::{NetworkError, PredictionClient};
use crate::domain::history::HistoryEntry;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds no entries of its own; reads and replaces the history inside the
/// shared dashboard state. The only way in is a full replace on a successful
/// refresh.
#[derive(Clone)]
pub struct HistoryStore {
    client: Arc<dyn PredictionClient>,
    state: SharedState,
    initialized: Arc<AtomicBool>,
}

impl HistoryStore {
    pub fn new(client: Arc<dyn PredictionClient>, state: SharedState) -> Self {
        Self {
            client,
            state,
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Initial load for a new session. Only the first call reaches the
    /// service, whatever its outcome; later calls return `false` at once.
    pub async fn initialize(&self) -> bool {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("History already initialized, skipping load");
            return false;
        }
        let _ = self.refresh().await;
        true
    }

    /// Fetch the full history and store it reversed.
    ///
    /// Concurrent refreshes are not serialized: whichever response arrives
    /// last is what stays stored. A failure is logged and the stored entries
    /// are left as they were.
    pub async fn refresh(&self) -> Result<usize, NetworkError> {
        match self.client.fetch_history().await {
            Ok(entries) => {
                let count = entries.len();
                lock(&self.state).history_refreshed(entries);
                tracing::debug!("History refreshed with {} entries", count);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Error loading history: {}", e);
                Err(e)
            }
        }
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        lock(&self.state).history().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_state::DashboardState;
    use crate::application::test_support::{FakeClient, history, wait_until};
    use std::sync::Mutex;

    fn store_with(client: Arc<FakeClient>) -> HistoryStore {
        let state = Arc::new(Mutex::new(DashboardState::default()));
        HistoryStore::new(client, state)
    }

    fn hours(entries: &[HistoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.hour.clone()).collect()
    }

    #[tokio::test]
    async fn test_refresh_stores_reversed() {
        let client = Arc::new(FakeClient::default());
        client.history_ok(history(&["t0", "t1", "t2", "t3"]));
        let store = store_with(client);

        assert_eq!(store.refresh().await, Ok(4));
        assert_eq!(hours(&store.entries()), vec!["t3", "t2", "t1", "t0"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_entries() {
        let client = Arc::new(FakeClient::default());
        client.history_ok(history(&["t0", "t1"]));
        client.history_err();
        let store = store_with(client);

        store.refresh().await.unwrap();
        let before = store.entries();

        assert!(store.refresh().await.is_err());
        assert_eq!(store.entries(), before);
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let client = Arc::new(FakeClient::default());
        client.history_ok(history(&["t0"]));
        client.history_ok(history(&["t0", "t1"]));
        let store = store_with(client.clone());

        assert!(store.initialize().await);
        assert!(!store.initialize().await);
        assert_eq!(client.history_calls(), 1);
        assert_eq!(hours(&store.entries()), vec!["t0"]);
    }

    #[tokio::test]
    async fn test_initialize_failure_still_counts() {
        let client = Arc::new(FakeClient::default());
        client.history_err();
        let store = store_with(client.clone());

        assert!(store.initialize().await);
        assert!(!store.initialize().await);
        assert_eq!(client.history_calls(), 1);
        assert!(store.entries().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_refresh_last_completion_wins() {
        let client = Arc::new(FakeClient::default());
        let first_gate = client.history_gated();
        let second_gate = client.history_gated();
        let store = store_with(client.clone());

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });
        wait_until(|| client.history_calls() == 1).await;

        let second = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });
        wait_until(|| client.history_calls() == 2).await;

        // second dispatched, first to complete
        second_gate.send(Ok(history(&["b0", "b1"]))).unwrap();
        second.await.unwrap().unwrap();
        assert_eq!(hours(&store.entries()), vec!["b1", "b0"]);

        // first dispatched, last to complete: its response stays
        first_gate.send(Ok(history(&["a0", "a1", "a2"]))).unwrap();
        first.await.unwrap().unwrap();
        assert_eq!(hours(&store.entries()), vec!["a2", "a1", "a0"]);
    }
}
