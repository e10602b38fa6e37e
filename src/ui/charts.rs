//! History line charts, one per metric, sharing a time-based x-axis.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::{App, AxisGranularity};
use crate::data::Metric;

/// Render the three stacked history charts.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (metric, row) in Metric::ALL.into_iter().zip(rows.iter()) {
        render_chart(frame, app, metric, *row);
    }
}

fn render_chart(frame: &mut Frame, app: &App, metric: Metric, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ({}) ", metric.label(), metric.unit()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let series = app.series.get(metric);
    if series.is_empty() {
        let placeholder = Paragraph::new("no history data")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let data: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (p.x.timestamp() as f64, p.y))
        .collect();

    let x_bounds = x_bounds(&data);
    let y_bounds = y_bounds(&data);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.metric_color(metric)))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds(x_bounds)
                .labels(x_labels(x_bounds, app.granularity))
                .style(Style::default().add_modifier(Modifier::DIM)),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(y_labels(y_bounds))
                .style(Style::default().add_modifier(Modifier::DIM)),
        );

    frame.render_widget(chart, area);
}

/// X-axis bounds covering the series, widened when degenerate so the
/// chart widget always has a non-zero span.
fn x_bounds(data: &[(f64, f64)]) -> [f64; 2] {
    let first = data.first().map(|p| p.0).unwrap_or(0.0);
    let last = data.last().map(|p| p.0).unwrap_or(0.0);
    if last > first {
        [first, last]
    } else {
        [first, first + 1.0]
    }
}

/// Y-axis bounds with headroom above and below the observed values.
fn y_bounds(data: &[(f64, f64)]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, y) in data {
        min = min.min(y);
        max = max.max(y);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(0.5);
    [min - pad, max + pad]
}

fn x_labels(bounds: [f64; 2], granularity: AxisGranularity) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|&ts| format_instant(ts, granularity))
        .collect()
}

fn y_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

/// Format an epoch-seconds x value for its axis label.
fn format_instant(epoch_secs: f64, granularity: AxisGranularity) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_secs as i64, 0) {
        Some(at) => at
            .with_timezone(&Local)
            .format(granularity.time_format())
            .to_string(),
        None => String::new(),
    }
}
