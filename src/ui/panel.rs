//! Current-value tiles for the three metrics.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Metric, FETCH_FAILED, NO_DATA, PLACEHOLDER};

/// Render the current-value panel: one tile per metric plus the
/// last-updated time and date.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (metric, column) in Metric::ALL.into_iter().zip(columns.iter()) {
        render_tile(frame, app, metric, *column);
    }
}

fn render_tile(frame: &mut Frame, app: &App, metric: Metric, area: Rect) {
    let value = app.panel.value(metric);
    let sentinel = matches!(value, NO_DATA | FETCH_FAILED | PLACEHOLDER);

    let value_line = if sentinel {
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(app.theme.metric_color(metric))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", metric.unit())),
        ])
    };

    let updated_line = match app.panel.last_updated {
        Some(at) => {
            let local = at.with_timezone(&Local);
            Line::from(Span::styled(
                format!("{} {}", local.format("%H:%M:%S"), local.format("%Y-%m-%d")),
                Style::default().add_modifier(Modifier::DIM),
            ))
        }
        None => Line::from(""),
    };

    let block = Block::default()
        .title(format!(" {} ", metric.label()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(vec![Line::from(""), value_line, updated_line])
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
