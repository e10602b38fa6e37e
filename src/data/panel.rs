//! Current-value panel state.

use chrono::{DateTime, Utc};

use super::normalize::{display_value, parse_timestamp};
use super::sample::{Metric, Sample};

/// Sentinel shown when the current-reading fetch itself failed.
///
/// Distinct from [`NO_DATA`](super::normalize::NO_DATA), which means the
/// fetch succeeded but the sensor reported nothing for that field.
pub const FETCH_FAILED: &str = "fetch failed";

/// Placeholder shown before the first fetch completes.
pub const PLACEHOLDER: &str = "---";

/// Display state for the current-value panel: one formatted string per
/// metric plus the instant of the last successful reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPanel {
    pub temperature: String,
    pub humidity: String,
    pub co2: String,
    /// Timestamp of the last successfully displayed sample. Preserved
    /// across failed refreshes so the panel still shows when data was
    /// last seen.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CurrentPanel {
    /// The pre-first-fetch placeholder panel.
    pub fn placeholder() -> Self {
        Self {
            temperature: PLACEHOLDER.to_string(),
            humidity: PLACEHOLDER.to_string(),
            co2: PLACEHOLDER.to_string(),
            last_updated: None,
        }
    }

    /// Build the panel from a freshly fetched sample.
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            temperature: display_value(Metric::Temperature, sample),
            humidity: display_value(Metric::Humidity, sample),
            co2: display_value(Metric::Co2, sample),
            last_updated: parse_timestamp(&sample.timestamp).ok(),
        }
    }

    /// The displayed string for one metric.
    pub fn value(&self, metric: Metric) -> &str {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
            Metric::Co2 => &self.co2,
        }
    }

    /// Overwrite every field with the fetch-failed sentinel, keeping the
    /// last-updated instant from the previous successful reading.
    pub fn mark_failed(&mut self) {
        self.temperature = FETCH_FAILED.to_string();
        self.humidity = FETCH_FAILED.to_string();
        self.co2 = FETCH_FAILED.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalize::NO_DATA;

    #[test]
    fn test_from_sample_formats_all_fields() {
        let sample = Sample {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            temperature: Some(21.3),
            humidity: Some(55.7),
            co2: Some(612.0),
        };

        let panel = CurrentPanel::from_sample(&sample);
        assert_eq!(panel.temperature, "21.3");
        assert_eq!(panel.humidity, "55.7");
        assert_eq!(panel.co2, "612");
        assert!(panel.last_updated.is_some());
    }

    #[test]
    fn test_from_sample_absent_field_shows_no_data() {
        let sample = Sample {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            temperature: None,
            humidity: Some(55.7),
            co2: None,
        };

        let panel = CurrentPanel::from_sample(&sample);
        assert_eq!(panel.temperature, NO_DATA);
        assert_eq!(panel.humidity, "55.7");
        assert_eq!(panel.co2, NO_DATA);
    }

    #[test]
    fn test_mark_failed_keeps_last_updated() {
        let sample = Sample {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            temperature: Some(20.0),
            humidity: Some(50.0),
            co2: Some(600.0),
        };
        let mut panel = CurrentPanel::from_sample(&sample);
        let seen_at = panel.last_updated;

        panel.mark_failed();
        assert_eq!(panel.temperature, FETCH_FAILED);
        assert_eq!(panel.humidity, FETCH_FAILED);
        assert_eq!(panel.co2, FETCH_FAILED);
        assert_eq!(panel.last_updated, seen_at);
    }

    #[test]
    fn test_placeholder() {
        let panel = CurrentPanel::placeholder();
        for metric in Metric::ALL {
            assert_eq!(panel.value(metric), PLACEHOLDER);
        }
        assert!(panel.last_updated.is_none());
    }
}
