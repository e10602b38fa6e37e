//! Common UI components: header bar, range tabs, status bar, help overlay.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Status, RANGE_PRESETS};

/// Render the header bar with the status indicator.
///
/// Displays: status dot, title, status text, data source description.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = match &app.status {
        Status::Loading => "loading...".to_string(),
        Status::Normal => "normal".to_string(),
        Status::Error(message) => format!("error: {message}"),
    };

    let line = Line::from(vec![
        Span::styled(" ● ", app.theme.status_style(&app.status)),
        Span::styled("AIRWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(status_text, app.theme.status_style(&app.status)),
        Span::raw(" │ "),
        Span::styled(
            app.source_description().to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the range preset bar.
///
/// Highlights the preset matching the active selection; a custom range
/// (set programmatically) leaves every preset unhighlighted.
pub fn render_range_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = RANGE_PRESETS
        .iter()
        .enumerate()
        .map(|(i, hours)| Line::from(format!(" {}:{}h ", i + 1, hours)))
        .collect();

    let mut tabs = Tabs::new(titles)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    if let Some(selected) = RANGE_PRESETS.iter().position(|&p| p == app.range_hours) {
        tabs = tabs.select(selected);
    }

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the last-updated instant and the available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let updated = match app.panel.last_updated {
        Some(at) => format!("Updated {}", at.with_timezone(&Local).format("%H:%M:%S")),
        None => "No data yet".to_string(),
    };

    let status = format!(
        " {} | {}h range | 1-5:range ←/→:step r:refresh ?:help q:quit",
        updated, app.range_hours,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(" History range", bold)]),
        Line::from("  1..5      Select preset (1h/6h/12h/24h/72h)"),
        Line::from("  ←/→ h/l   Step through presets"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  r         Refresh now"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q/Esc     Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay, responsive to terminal size
    let help_width = 48u16.min(area.width.saturating_sub(4));
    let help_height = 15u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
