//! Application state and the refresh state machine.

use std::time::{Duration, Instant};

use crate::data::{to_series, CurrentPanel, Metric, Sample, SeriesSet};
use crate::error::{FetchError, InvalidTimestamp};
use crate::source::SensorSource;
use crate::ui::Theme;

/// History range presets offered by the UI, in hours.
pub const RANGE_PRESETS: [u32; 5] = [1, 6, 12, 24, 72];

/// Default period between automatic refresh cycles.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Startup phase of the dashboard.
///
/// `Initializing` is entered once at construction and transitions to
/// `Ready` after the first current+history refresh pair completes,
/// whether or not either fetch succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready,
}

/// Outcome of the most recent fetch, rendered to the status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// No fetch has completed yet.
    Loading,
    /// The most recent fetch succeeded.
    Normal,
    /// The most recent fetch failed with the given message.
    Error(String),
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// Tick density of the chart time axis, derived from the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisGranularity {
    /// Time-of-day labels, for ranges up to 12 hours.
    Fine,
    /// Date-qualified labels, for longer ranges.
    Coarse,
}

impl AxisGranularity {
    /// Granularity for a history range of `hours`.
    pub fn for_hours(hours: u32) -> Self {
        if hours <= 12 {
            AxisGranularity::Fine
        } else {
            AxisGranularity::Coarse
        }
    }

    /// strftime format for x-axis labels at this granularity.
    pub fn time_format(self) -> &'static str {
        match self {
            AxisGranularity::Fine => "%H:%M",
            AxisGranularity::Coarse => "%m/%d %H:%M",
        }
    }
}

/// Explicit repeating-refresh timer.
///
/// The main loop asks [`due`](Self::due) whether a tick should fire;
/// [`stop`](Self::stop) disarms the schedule and bumps a generation
/// counter so that a fetch already in flight when the schedule was
/// stopped commits nothing when it completes.
#[derive(Debug)]
pub struct RefreshSchedule {
    period: Duration,
    armed: bool,
    last_fired: Option<Instant>,
    generation: u64,
}

impl RefreshSchedule {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: false,
            last_fired: None,
            generation: 0,
        }
    }

    /// Arm the schedule; the first due tick fires one period from now.
    pub fn start(&mut self) {
        self.armed = true;
        self.last_fired = Some(Instant::now());
    }

    /// Disarm the schedule. Idempotent; no tick is due after this returns.
    pub fn stop(&mut self) {
        if self.armed {
            self.armed = false;
            self.generation += 1;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Current generation; results fetched under an older generation are
    /// discarded instead of committed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick is due at `now`. Firing advances the schedule.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.period => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

/// Main application state: the dashboard controller.
///
/// Owns every piece of mutable dashboard state (panel, series, range,
/// status, schedule) and is the only place that mutates it. All methods
/// run on the single control flow of the event loop; fetches are awaited
/// to completion, so refreshes never overlap.
pub struct App {
    pub running: bool,
    pub phase: Phase,
    pub status: Status,
    pub show_help: bool,

    // Data source and derived state
    source: Box<dyn SensorSource>,
    pub panel: CurrentPanel,
    pub series: SeriesSet,

    // Range selection
    pub range_hours: u32,
    pub granularity: AxisGranularity,

    // Refresh timing
    pub schedule: RefreshSchedule,

    // UI
    pub theme: Theme,
}

impl App {
    /// Create a new App with the given source, initial history range and
    /// refresh period.
    pub fn new(source: Box<dyn SensorSource>, range_hours: u32, period: Duration) -> Self {
        let range_hours = range_hours.max(1);
        Self {
            running: true,
            phase: Phase::Initializing,
            status: Status::Loading,
            show_help: false,
            source,
            panel: CurrentPanel::placeholder(),
            series: SeriesSet::default(),
            range_hours,
            granularity: AxisGranularity::for_hours(range_hours),
            schedule: RefreshSchedule::new(period),
            theme: Theme::auto_detect(),
        }
    }

    /// Returns a description of the data source for the status bar.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Arm the refresh schedule and run the initial refresh pair.
    pub async fn start(&mut self) {
        self.schedule.start();
        self.refresh_current().await;
        self.refresh_history().await;
        self.phase = Phase::Ready;
    }

    /// Disarm the refresh schedule. Idempotent.
    pub fn stop(&mut self) {
        self.schedule.stop();
    }

    /// Signal the application to quit and stop refreshing.
    pub fn quit(&mut self) {
        self.stop();
        self.running = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// One periodic refresh cycle: current reading, then history.
    ///
    /// The two refreshes are independent; one failing does not skip
    /// the other.
    pub async fn tick(&mut self) {
        self.refresh_current().await;
        self.refresh_history().await;
    }

    /// Refresh the current-value panel from the source.
    ///
    /// On failure every panel field shows the fetch-failed sentinel and
    /// the status turns to `Error`; the history series are never touched
    /// from here.
    pub async fn refresh_current(&mut self) {
        let generation = self.schedule.generation();
        let result = self.source.fetch_current().await;
        self.commit_current(generation, result);
    }

    /// Commit a fetched current reading, unless the schedule was stopped
    /// while the fetch was in flight.
    fn commit_current(&mut self, generation: u64, result: Result<Sample, FetchError>) {
        if self.schedule.generation() != generation {
            tracing::debug!("discarding current reading fetched before stop");
            return;
        }

        match result {
            Ok(sample) => {
                self.panel = CurrentPanel::from_sample(&sample);
                self.status = Status::Normal;
                tracing::debug!(timestamp = %sample.timestamp, "current panel updated");
            }
            Err(err) => {
                self.panel.mark_failed();
                self.status = Status::Error(err.to_string());
                tracing::warn!(error = %err, "current reading refresh failed");
            }
        }
    }

    /// Refresh all three history series for the selected range.
    ///
    /// On success every series is replaced wholesale; on any failure
    /// (transport, empty response, or a bad timestamp in the batch) all
    /// three are cleared and the status turns to `Error`. The current
    /// panel is never touched from here. A successful history refresh
    /// leaves the status alone so it keeps reflecting the current-value
    /// fetch outcome within the same cycle.
    pub async fn refresh_history(&mut self) {
        let generation = self.schedule.generation();
        let result = self.source.fetch_history(self.range_hours).await;
        self.commit_history(generation, result);
    }

    /// Commit a fetched history window, unless the schedule was stopped
    /// while the fetch was in flight.
    fn commit_history(&mut self, generation: u64, result: Result<Vec<Sample>, FetchError>) {
        if self.schedule.generation() != generation {
            tracing::debug!("discarding history fetched before stop");
            return;
        }

        let message = match result {
            Ok(samples) => match self.rebuild_series(&samples) {
                Ok(()) => {
                    tracing::debug!(count = samples.len(), "history series replaced");
                    return;
                }
                Err(err) => err.to_string(),
            },
            Err(err) => err.to_string(),
        };

        self.series.clear();
        self.status = Status::Error(message.clone());
        tracing::warn!(error = %message, "history refresh failed, series cleared");
    }

    /// Select a new history range and refresh once.
    ///
    /// This is the only mutator of the range. Zero is structurally
    /// invalid and ignored without side effects; any positive value is
    /// accepted even if it is not one of [`RANGE_PRESETS`].
    pub async fn select_range(&mut self, hours: u32) {
        if hours == 0 {
            tracing::warn!("ignoring non-positive range selection");
            return;
        }
        self.range_hours = hours;
        self.granularity = AxisGranularity::for_hours(hours);
        self.refresh_history().await;
    }

    /// Convert all three series before committing any of them, so a bad
    /// timestamp cannot leave a partially updated SeriesSet behind.
    fn rebuild_series(&mut self, samples: &[Sample]) -> Result<(), InvalidTimestamp> {
        let temperature = to_series(samples, Metric::Temperature)?;
        let humidity = to_series(samples, Metric::Humidity)?;
        let co2 = to_series(samples, Metric::Co2)?;

        self.series.replace(Metric::Temperature, temperature);
        self.series.replace(Metric::Humidity, humidity);
        self.series.replace(Metric::Co2, co2);
        Ok(())
    }
}
