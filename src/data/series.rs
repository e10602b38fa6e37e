//! Chart-ready series state for the three metric charts.

use chrono::{DateTime, Utc};

use super::sample::Metric;

/// One plotted point on a single series.
///
/// `y` is never NaN or absent: samples with a missing measurement are
/// excluded from the series during normalization, not zero-filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

/// The three per-metric series, kept in source order.
///
/// Each series is fully replaced on a successful history refresh and fully
/// cleared on a failed one; there is no incremental merging, so no stale
/// points survive an error.
#[derive(Debug, Clone, Default)]
pub struct SeriesSet {
    temperature: Vec<ChartPoint>,
    humidity: Vec<ChartPoint>,
    co2: Vec<ChartPoint>,
}

impl SeriesSet {
    /// The points for one metric's chart.
    pub fn get(&self, metric: Metric) -> &[ChartPoint] {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Humidity => &self.humidity,
            Metric::Co2 => &self.co2,
        }
    }

    /// Replace one metric's series wholesale.
    pub fn replace(&mut self, metric: Metric, points: Vec<ChartPoint>) {
        match metric {
            Metric::Temperature => self.temperature = points,
            Metric::Humidity => self.humidity = points,
            Metric::Co2 => self.co2 = points,
        }
    }

    /// Drop all points from all three series.
    pub fn clear(&mut self) {
        self.temperature.clear();
        self.humidity.clear();
        self.co2.clear();
    }

    /// True when no metric has any points.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.humidity.is_empty() && self.co2.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(secs: i64, y: f64) -> ChartPoint {
        ChartPoint {
            x: Utc.timestamp_opt(secs, 0).unwrap(),
            y,
        }
    }

    #[test]
    fn test_replace_and_get() {
        let mut series = SeriesSet::default();
        series.replace(Metric::Humidity, vec![point(0, 50.0), point(60, 51.0)]);

        assert_eq!(series.get(Metric::Humidity).len(), 2);
        assert!(series.get(Metric::Temperature).is_empty());
        assert!(!series.is_empty());
    }

    #[test]
    fn test_clear_empties_all_metrics() {
        let mut series = SeriesSet::default();
        series.replace(Metric::Temperature, vec![point(0, 20.0)]);
        series.replace(Metric::Co2, vec![point(0, 600.0)]);

        series.clear();
        assert!(series.is_empty());
        for metric in Metric::ALL {
            assert!(series.get(metric).is_empty());
        }
    }
}
