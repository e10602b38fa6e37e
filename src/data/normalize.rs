//! Sample normalization: raw samples to display strings and chart points.

use chrono::{DateTime, Utc};

use super::sample::{Metric, Sample};
use super::series::ChartPoint;
use crate::error::InvalidTimestamp;

/// Sentinel shown when a sample is present but the field is not.
pub const NO_DATA: &str = "no data";

/// Parse an ISO-8601 timestamp into an instant.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, InvalidTimestamp> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| InvalidTimestamp {
            raw: raw.to_string(),
            source,
        })
}

/// Format one metric of a sample for the current-value panel.
///
/// Temperature and humidity are shown with one decimal place, CO2 rounded
/// to the nearest integer. An absent (or non-finite) value yields the
/// [`NO_DATA`] sentinel; this function never fails.
pub fn display_value(metric: Metric, sample: &Sample) -> String {
    match metric.value_in(sample) {
        Some(value) if value.is_finite() => match metric {
            Metric::Temperature | Metric::Humidity => format!("{value:.1}"),
            Metric::Co2 => format!("{}", value.round() as i64),
        },
        _ => NO_DATA.to_string(),
    }
}

/// Build one metric's chart series from an ordered batch of samples.
///
/// Samples whose value is absent are omitted from the series entirely
/// rather than interpolated or zero-filled; the relative order of the
/// remaining points matches the input. A timestamp that fails to parse
/// aborts the whole batch with [`InvalidTimestamp`].
pub fn to_series(samples: &[Sample], metric: Metric) -> Result<Vec<ChartPoint>, InvalidTimestamp> {
    let mut points = Vec::with_capacity(samples.len());
    for sample in samples {
        let x = parse_timestamp(&sample.timestamp)?;
        match metric.value_in(sample) {
            Some(y) if y.is_finite() => points.push(ChartPoint { x, y }),
            _ => {}
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: &str, value: Option<f64>) -> Sample {
        Sample {
            timestamp: timestamp.to_string(),
            temperature: value,
            humidity: value,
            co2: value,
        }
    }

    #[test]
    fn test_display_value_one_decimal_for_temperature_and_humidity() {
        let s = sample("2024-01-01T00:00:00Z", Some(21.34));
        assert_eq!(display_value(Metric::Temperature, &s), "21.3");
        assert_eq!(display_value(Metric::Humidity, &s), "21.3");
    }

    #[test]
    fn test_display_value_rounds_co2_to_integer() {
        let low = sample("2024-01-01T00:00:00Z", Some(612.4));
        let high = sample("2024-01-01T00:00:00Z", Some(612.6));
        assert_eq!(display_value(Metric::Co2, &low), "612");
        assert_eq!(display_value(Metric::Co2, &high), "613");
    }

    #[test]
    fn test_display_value_whole_numbers_keep_decimal() {
        let s = sample("2024-01-01T00:00:00Z", Some(20.0));
        assert_eq!(display_value(Metric::Temperature, &s), "20.0");
        assert_eq!(display_value(Metric::Co2, &s), "20");
    }

    #[test]
    fn test_display_value_absent_field_is_sentinel() {
        let s = sample("2024-01-01T00:00:00Z", None);
        for metric in Metric::ALL {
            assert_eq!(display_value(metric, &s), NO_DATA);
        }
    }

    #[test]
    fn test_display_value_nan_is_sentinel() {
        let s = sample("2024-01-01T00:00:00Z", Some(f64::NAN));
        assert_eq!(display_value(Metric::Temperature, &s), NO_DATA);
    }

    #[test]
    fn test_parse_timestamp_accepts_rfc3339() {
        let parsed = parse_timestamp("2024-01-01T12:30:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1_704_112_200);

        // Offset forms normalize to UTC
        let offset = parse_timestamp("2024-01-01T13:30:00+01:00").unwrap();
        assert_eq!(offset, parsed);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert_eq!(err.raw, "yesterday");
    }

    #[test]
    fn test_to_series_skips_absent_values_preserving_order() {
        let samples = vec![
            sample("2024-01-01T00:00:00Z", Some(1.0)),
            sample("2024-01-01T00:01:00Z", None),
            sample("2024-01-01T00:02:00Z", Some(3.0)),
            sample("2024-01-01T00:03:00Z", None),
            sample("2024-01-01T00:04:00Z", Some(5.0)),
        ];

        let points = to_series(&samples, Metric::Temperature).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(
            points.iter().map(|p| p.y).collect::<Vec<_>>(),
            vec![1.0, 3.0, 5.0]
        );
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_to_series_output_never_longer_than_input() {
        let samples: Vec<Sample> = (0..10)
            .map(|i| {
                sample(
                    &format!("2024-01-01T00:{i:02}:00Z"),
                    if i % 3 == 0 { None } else { Some(i as f64) },
                )
            })
            .collect();

        let points = to_series(&samples, Metric::Co2).unwrap();
        let absent = samples.iter().filter(|s| s.co2.is_none()).count();
        assert_eq!(points.len(), samples.len() - absent);
    }

    #[test]
    fn test_to_series_bad_timestamp_aborts_batch() {
        let samples = vec![
            sample("2024-01-01T00:00:00Z", Some(1.0)),
            sample("not-a-timestamp", Some(2.0)),
            sample("2024-01-01T00:02:00Z", Some(3.0)),
        ];

        let err = to_series(&samples, Metric::Temperature).unwrap_err();
        assert_eq!(err.raw, "not-a-timestamp");
    }

    #[test]
    fn test_to_series_bad_timestamp_aborts_even_when_value_absent() {
        let samples = vec![sample("not-a-timestamp", None)];
        assert!(to_series(&samples, Metric::Humidity).is_err());
    }

    #[test]
    fn test_to_series_empty_input() {
        let points = to_series(&[], Metric::Humidity).unwrap();
        assert!(points.is_empty());
    }
}
