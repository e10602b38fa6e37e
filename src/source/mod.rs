//! Sensor data source abstraction.
//!
//! This module provides a trait-based abstraction for fetching sensor
//! readings from different backends: a live HTTP API or locally
//! synthesized mock data.

mod http;
mod mock;

pub use http::HttpSource;
pub use mock::MockSource;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::data::Sample;
use crate::error::FetchError;

/// Trait for fetching sensor readings.
///
/// Implementations provide the latest single reading and an ordered
/// history window. Fetches are the suspension points of the refresh
/// pipeline; everything downstream of this trait is synchronous.
///
/// # Example
///
/// ```
/// use airwatch::source::{MockSource, SensorSource};
///
/// # tokio_test::block_on(async {
/// let source = MockSource::new();
/// let sample = source.fetch_current().await.unwrap();
/// assert!(sample.temperature.is_some());
/// # });
/// ```
#[async_trait]
pub trait SensorSource: Send + Sync + Debug {
    /// Fetch the latest single reading.
    async fn fetch_current(&self) -> Result<Sample, FetchError>;

    /// Fetch the history window covering the last `hours` hours,
    /// ordered oldest to newest. Never returns an empty sequence:
    /// an empty response is [`FetchError::EmptyHistory`].
    async fn fetch_history(&self, hours: u32) -> Result<Vec<Sample>, FetchError>;

    /// Human-readable description of the source, for the status bar.
    fn description(&self) -> &str;
}
