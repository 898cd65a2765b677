// Port for the remote prediction service
use crate::domain::diagnosis::PredictionResult;
use crate::domain::history::HistoryEntry;
use crate::domain::reading::SensorReading;
use async_trait::async_trait;

/// The only failure the panel distinguishes: the call did not produce a
/// successful response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },
}

#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Submit a reading and get the service's diagnosis
    async fn predict(&self, reading: &SensorReading) -> Result<PredictionResult, NetworkError>;

    /// Fetch past analyses in the order the service returns them
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, NetworkError>;
}
