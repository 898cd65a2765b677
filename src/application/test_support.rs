// In-memory prediction client for driving the panel in tests
use crate::application::prediction_client::{NetworkError, PredictionClient};
use crate::domain::diagnosis::PredictionResult;
use crate::domain::history::HistoryEntry;
use crate::domain::reading::SensorReading;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

pub type Gate<T> = oneshot::Sender<Result<T, NetworkError>>;

enum Reply<T> {
    Ready(Result<T, NetworkError>),
    Gated(oneshot::Receiver<Result<T, NetworkError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, NetworkError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Gated(rx) => rx.await.unwrap_or_else(|_| Err(transport_error("gate dropped"))),
        }
    }
}

/// Replies are scripted per endpoint and consumed in call order. A call
/// with nothing scripted fails with a transport error.
#[derive(Default)]
pub struct FakeClient {
    predict_replies: Mutex<VecDeque<Reply<PredictionResult>>>,
    history_replies: Mutex<VecDeque<Reply<Vec<HistoryEntry>>>>,
    submitted: Mutex<Vec<SensorReading>>,
    predict_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl FakeClient {
    pub fn predict_ok(&self, result: PredictionResult) {
        self.push_predict(Reply::Ready(Ok(result)));
    }

    pub fn predict_err(&self) {
        self.push_predict(Reply::Ready(Err(transport_error("connection refused"))));
    }

    pub fn predict_gated(&self) -> Gate<PredictionResult> {
        let (tx, rx) = oneshot::channel();
        self.push_predict(Reply::Gated(rx));
        tx
    }

    pub fn history_ok(&self, entries: Vec<HistoryEntry>) {
        self.push_history(Reply::Ready(Ok(entries)));
    }

    pub fn history_err(&self) {
        self.push_history(Reply::Ready(Err(transport_error("connection refused"))));
    }

    pub fn history_gated(&self) -> Gate<Vec<HistoryEntry>> {
        let (tx, rx) = oneshot::channel();
        self.push_history(Reply::Gated(rx));
        tx
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<SensorReading> {
        self.submitted.lock().unwrap().clone()
    }

    fn push_predict(&self, reply: Reply<PredictionResult>) {
        self.predict_replies.lock().unwrap().push_back(reply);
    }

    fn push_history(&self, reply: Reply<Vec<HistoryEntry>>) {
        self.history_replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl PredictionClient for FakeClient {
    async fn predict(&self, reading: &SensorReading) -> Result<PredictionResult, NetworkError> {
        self.submitted.lock().unwrap().push(*reading);
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.predict_replies.lock().unwrap().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(transport_error("no scripted reply")),
        }
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, NetworkError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.history_replies.lock().unwrap().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(transport_error("no scripted reply")),
        }
    }
}

fn transport_error(reason: &str) -> NetworkError {
    NetworkError::Transport {
        endpoint: "fake".to_string(),
        reason: reason.to_string(),
    }
}

/// Entries labelled by `hours`, in the order given
pub fn history(hours: &[&str]) -> Vec<HistoryEntry> {
    hours
        .iter()
        .enumerate()
        .map(|(i, hour)| HistoryEntry::new(*hour, 60.0 + i as f64, 3.0 + i as f64 / 10.0))
        .collect()
}

pub fn result(status: &str, risk: f64) -> PredictionResult {
    PredictionResult {
        status: status.to_string(),
        failure_risk_percent: risk,
        root_cause: "N/A".to_string(),
        recommendation: "Nenhuma ação necessária".to_string(),
        estimated_roi: "R$0".to_string(),
    }
}

/// Yield to other tasks until `condition` holds.
pub async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
