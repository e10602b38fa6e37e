//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::app::Status;
use crate::data::Metric;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub accent: Color,
    /// Color for the normal operational status.
    pub ok: Color,
    /// Color for the loading status.
    pub loading: Color,
    /// Color for the error status.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Line color of the temperature chart.
    pub temperature: Color,
    /// Line color of the humidity chart.
    pub humidity: Color,
    /// Line color of the CO2 chart.
    pub co2: Color,
    /// Style for the active range preset.
    pub tab_active: Style,
    /// Style for inactive range presets.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            ok: Color::Green,
            loading: Color::Yellow,
            error: Color::Red,
            border: Color::Gray,
            temperature: Color::Red,
            humidity: Color::Blue,
            co2: Color::Green,
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            ok: Color::Green,
            loading: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGray,
            temperature: Color::Red,
            humidity: Color::Blue,
            co2: Color::Green,
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the line color for one metric's chart.
    pub fn metric_color(&self, metric: Metric) -> Color {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Co2 => self.co2,
        }
    }

    /// Get the style for an operational status.
    pub fn status_style(&self, status: &Status) -> Style {
        match status {
            Status::Normal => Style::default().fg(self.ok),
            Status::Loading => Style::default().fg(self.loading),
            Status::Error(_) => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }
}
