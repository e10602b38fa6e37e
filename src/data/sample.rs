//! Raw sensor samples as received from a source.

use serde::Deserialize;

/// One timestamped sensor reading.
///
/// This is the wire shape returned by both the current-reading and history
/// endpoints: any of the three measurements may be `null` (missing sensor or
/// transient fault), but the timestamp is always present. The timestamp is
/// kept as the raw string here; parsing happens during normalization so that
/// a malformed instant is surfaced as an explicit error instead of a bad
/// chart point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    /// ISO-8601 timestamp of the reading.
    pub timestamp: String,
    /// Temperature in degrees Celsius, if the sensor reported one.
    pub temperature: Option<f64>,
    /// Relative humidity in percent, if reported.
    pub humidity: Option<f64>,
    /// CO2 concentration in ppm, if reported.
    pub co2: Option<f64>,
}

/// The three metrics tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Co2,
}

impl Metric {
    /// All metrics, in panel/chart display order.
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::Co2];

    /// Display label for this metric.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Co2 => "CO2",
        }
    }

    /// Unit suffix for displayed values.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "\u{b0}C",
            Metric::Humidity => "%",
            Metric::Co2 => "ppm",
        }
    }

    /// Extract this metric's value from a sample, if present.
    pub fn value_in(self, sample: &Sample) -> Option<f64> {
        match self {
            Metric::Temperature => sample.temperature,
            Metric::Humidity => sample.humidity,
            Metric::Co2 => sample.co2,
        }
    }
}
