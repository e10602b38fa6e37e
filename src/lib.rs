// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # airwatch
//!
//! A terminal dashboard and library for monitoring indoor air quality.
//!
//! This crate polls an environmental sensor HTTP API for temperature,
//! humidity, and CO2 readings and renders them in an interactive
//! terminal UI: a current-value panel plus three history line charts
//! over a selectable time range.
//!
//! ## Architecture
//!
//! The crate is organized into four main modules:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(normalize)    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | MockSource                    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, refresh scheduling, and range selection
//! - **[`source`]**: Data source abstraction ([`SensorSource`] trait) with an
//!   HTTP implementation and a synthetic mock for offline use
//! - **[`data`]**: Data models and normalization - converts raw samples into
//!   display strings and chart series, with sentinel text for missing values
//! - **[`ui`]**: Terminal rendering using ratatui - value tiles, line charts,
//!   range tabs, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll a sensor API
//! airwatch --url http://localhost:1880
//!
//! # Run against synthetic data
//! airwatch --mock
//! ```
//!
//! ### As a library with the mock source
//!
//! ```
//! use std::time::Duration;
//! use airwatch::{App, MockSource};
//!
//! let source = Box::new(MockSource::new());
//! let app = App::new(source, 1, Duration::from_secs(30));
//! ```
//!
//! ### As a library with an HTTP source
//!
//! ```no_run
//! use std::time::Duration;
//! use airwatch::{App, HttpSource};
//!
//! let source = Box::new(HttpSource::new("http://localhost:1880"));
//! let mut app = App::new(source, 1, Duration::from_secs(30));
//!
//! # tokio_test::block_on(async {
//! app.start().await;
//! # });
//! ```

pub mod app;
pub mod data;
pub mod error;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AxisGranularity, Phase, RefreshSchedule, Status};
pub use data::{ChartPoint, CurrentPanel, Metric, Sample, SeriesSet};
pub use error::{FetchError, InvalidTimestamp};
pub use source::{HttpSource, MockSource, SensorSource};
