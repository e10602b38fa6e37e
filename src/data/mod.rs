//! Data models and normalization for sensor readings.
//!
//! This module turns raw samples from a [`SensorSource`](crate::source::SensorSource)
//! into the two shapes the UI consumes.
//!
//! ## Submodules
//!
//! - [`sample`]: Wire-shape [`Sample`] and the [`Metric`] selector
//! - [`normalize`]: Display formatting and sample-to-series conversion
//! - [`series`]: Chart-ready [`SeriesSet`] of [`ChartPoint`]s
//! - [`panel`]: Current-value panel state with its display sentinels
//!
//! ## Data flow
//!
//! ```text
//! Sample (raw JSON)
//!    │
//!    ├──▶ normalize::display_value() ──▶ CurrentPanel (latest reading)
//!    │
//!    └──▶ normalize::to_series() ──────▶ SeriesSet (history charts)
//! ```

pub mod normalize;
pub mod panel;
pub mod sample;
pub mod series;

pub use normalize::{display_value, parse_timestamp, to_series, NO_DATA};
pub use panel::{CurrentPanel, FETCH_FAILED, PLACEHOLDER};
pub use sample::{Metric, Sample};
pub use series::{ChartPoint, SeriesSet};
