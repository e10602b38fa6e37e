//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`panel`]: Current-value tiles for the three metrics
//! - [`charts`]: The three stacked history line charts
//! - [`common`]: Shared components (header, range tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Range tabs (common::render_range_tabs)
//! ├──────────────────────────────────────┤
//! │ Current values (panel::render)       │
//! ├──────────────────────────────────────┤
//! │ Temperature / Humidity / CO2 charts  │
//! │ (charts::render)                     │
//! ├──────────────────────────────────────┤
//! │ Status bar (common::render_status_bar)
//! └──────────────────────────────────────┘
//!         ↑
//!    common::render_help rendered on top when toggled
//! ```

pub mod charts;
pub mod common;
pub mod panel;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for a usable display.
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

/// Render one full frame of the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(
            0,
            area.height.saturating_sub(4) / 2,
            area.width,
            5.min(area.height),
        );
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Range tabs
        Constraint::Length(5), // Current-value tiles
        Constraint::Min(9),    // Charts
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_range_tabs(frame, app, chunks[1]);
    panel::render(frame, app, chunks[2]);
    charts::render(frame, app, chunks[3]);
    common::render_status_bar(frame, app, chunks[4]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
