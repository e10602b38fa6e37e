//! Synthetic sensor source for offline use and testing.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rand::Rng;

use super::SensorSource;
use crate::data::Sample;
use crate::error::FetchError;

const TEMPERATURE_BASE: f64 = 22.0;
const HUMIDITY_BASE: f64 = 50.0;
const CO2_BASE: f64 = 600.0;

/// Points per synthesized history window.
const HISTORY_POINTS: usize = 101;

/// A sensor source that synthesizes readings locally, without I/O.
///
/// Current readings are uniformly jittered around fixed baselines at the
/// current instant; history windows are 101 evenly spaced points where each
/// value follows a sinusoid of the point index plus bounded jitter. Useful
/// for demoing the dashboard and exercising the whole refresh pipeline
/// without network access.
#[derive(Debug, Default)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SensorSource for MockSource {
    async fn fetch_current(&self) -> Result<Sample, FetchError> {
        let mut rng = rand::thread_rng();
        Ok(Sample {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            temperature: Some(TEMPERATURE_BASE + rng.gen_range(-1.5..1.5)),
            humidity: Some(HUMIDITY_BASE + rng.gen_range(-5.0..5.0)),
            co2: Some(CO2_BASE + rng.gen_range(-50.0..50.0)),
        })
    }

    async fn fetch_history(&self, hours: u32) -> Result<Vec<Sample>, FetchError> {
        let mut rng = rand::thread_rng();
        let window = chrono::Duration::hours(i64::from(hours.max(1)));
        let start = Utc::now() - window;
        let step = window / (HISTORY_POINTS as i32 - 1);

        let samples = (0..HISTORY_POINTS)
            .map(|i| {
                let at = start + step * i as i32;
                let phase = i as f64 / (HISTORY_POINTS - 1) as f64 * std::f64::consts::TAU;
                Sample {
                    timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
                    temperature: Some(
                        TEMPERATURE_BASE + 2.0 * phase.sin() + rng.gen_range(-0.3..0.3),
                    ),
                    humidity: Some(
                        HUMIDITY_BASE + 8.0 * (phase * 0.5).sin() + rng.gen_range(-1.0..1.0),
                    ),
                    co2: Some(CO2_BASE + 80.0 * (phase * 1.5).sin() + rng.gen_range(-10.0..10.0)),
                }
            })
            .collect();

        Ok(samples)
    }

    fn description(&self) -> &str {
        "mock data"
    }
}
