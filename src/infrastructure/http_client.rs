// HTTP adapter for the prediction service
use crate::application::prediction_client::{NetworkError, PredictionClient};
use crate::domain::diagnosis::PredictionResult;
use crate::domain::history::{HistoryEntry, HistoryResponse};
use crate::domain::reading::SensorReading;
use crate::infrastructure::config::ServiceSettings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const PREDICT_PATH: &str = "/predict";
const HISTORY_PATH: &str = "/historico";

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(settings: &ServiceSettings) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, NetworkError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("{} answered {}: {}", endpoint, status, body);
            return Err(NetworkError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| transport(endpoint, e))
    }
}

fn transport(endpoint: &str, error: reqwest::Error) -> NetworkError {
    NetworkError::Transport {
        endpoint: endpoint.to_string(),
        reason: error.to_string(),
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, reading: &SensorReading) -> Result<PredictionResult, NetworkError> {
        tracing::debug!("POST {}", self.url(PREDICT_PATH));
        let request = self.client.post(self.url(PREDICT_PATH)).json(reading);
        self.read_json(PREDICT_PATH, request).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, NetworkError> {
        tracing::debug!("GET {}", self.url(HISTORY_PATH));
        let request = self.client.get(self.url(HISTORY_PATH));
        let response: HistoryResponse = self.read_json(HISTORY_PATH, request).await?;
        Ok(response.entries)
    }
}
