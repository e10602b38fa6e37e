//! HTTP-backed sensor source.
//!
//! Fetches readings from the sensor API's two read-only endpoints:
//!
//! - `GET {base}/api/sensor/current`
//! - `GET {base}/api/sensor/history?hours={n}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::SensorSource;
use crate::data::Sample;
use crate::error::FetchError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A sensor source backed by the remote HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    description: String,
}

impl HttpSource {
    /// Create a source for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a source with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let description = format!("http: {base_url}");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            description,
        }
    }

    fn current_url(&self) -> String {
        format!("{}/api/sensor/current", self.base_url)
    }

    fn history_url(&self, hours: u32) -> String {
        format!("{}/api/sensor/history?hours={hours}", self.base_url)
    }
}

#[async_trait]
impl SensorSource for HttpSource {
    async fn fetch_current(&self) -> Result<Sample, FetchError> {
        let response = self.client.get(self.current_url()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(response.status().to_string()));
        }

        let sample: Sample = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to decode current reading: {e}")))?;

        tracing::debug!(timestamp = %sample.timestamp, "fetched current reading");
        Ok(sample)
    }

    async fn fetch_history(&self, hours: u32) -> Result<Vec<Sample>, FetchError> {
        let response = self.client.get(self.history_url(hours)).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(response.status().to_string()));
        }

        let samples: Vec<Sample> = response.json().await.map_err(|e| {
            tracing::debug!(error = %e, "history response did not decode as a sample array");
            FetchError::EmptyHistory
        })?;

        if samples.is_empty() {
            return Err(FetchError::EmptyHistory);
        }

        tracing::debug!(hours, count = samples.len(), "fetched history window");
        Ok(samples)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = HttpSource::new("http://sensors.local:1880");
        assert_eq!(
            source.current_url(),
            "http://sensors.local:1880/api/sensor/current"
        );
        assert_eq!(
            source.history_url(24),
            "http://sensors.local:1880/api/sensor/history?hours=24"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = HttpSource::new("http://sensors.local/");
        assert_eq!(
            source.current_url(),
            "http://sensors.local/api/sensor/current"
        );
    }

    #[test]
    fn test_description() {
        let source = HttpSource::new("http://sensors.local");
        assert_eq!(source.description(), "http: http://sensors.local");
    }
}
