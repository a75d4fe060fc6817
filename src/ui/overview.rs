//! Overview rendering: gauges, KPI readouts, and the recent-alert strip.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::metric::format_value;
use crate::data::MetricReading;

use super::common::render_sparkline;

/// Render the Overview: one gauge row per metric plus the alert strip.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(data) = app.data.clone() else {
        let block = Block::default()
            .title(" Station ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        let paragraph = Paragraph::new("Waiting for first snapshot...").block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Min(10),   // gauges
        Constraint::Length(5), // recent alerts
    ])
    .split(area);

    render_gauges(frame, app, &data.readings, chunks[0]);
    render_alert_strip(frame, app, chunks[1]);
}

fn render_gauges(frame: &mut Frame, app: &App, readings: &[MetricReading], area: Rect) {
    let visible: Vec<(usize, &MetricReading)> = readings
        .iter()
        .enumerate()
        .filter(|(_, r)| app.matches_filter(r.spec.name))
        .collect();

    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };

    let title = format!(" Metrics ({}/{}){} ", visible.len(), readings.len(), filter_info);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        return;
    }

    // Two rows per metric: a KPI line and a gauge bar.
    let constraints: Vec<Constraint> =
        visible.iter().map(|_| Constraint::Length(2)).collect();
    let rows = Layout::vertical(constraints).split(inner);

    let selected = app.selected_metric_index.min(visible.len() - 1);

    for (row_idx, (_, reading)) in visible.iter().enumerate() {
        let Some(row) = rows.get(row_idx) else {
            break;
        };
        let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(*row);

        render_kpi_line(frame, app, reading, row_idx == selected, lines[0]);

        let status_style = app.theme.status_style(reading.status);
        let gauge = Gauge::default()
            .gauge_style(status_style)
            .ratio(reading.fraction())
            .label(format!(
                "{} / {} {}",
                format_value(reading.value),
                format_value(reading.spec.max),
                reading.spec.unit
            ));
        frame.render_widget(gauge, lines[1]);
    }
}

fn render_kpi_line(
    frame: &mut Frame,
    app: &App,
    reading: &MetricReading,
    selected: bool,
    area: Rect,
) {
    let id = reading.spec.id;

    let delta = app.history.delta(id);
    let change = app.history.change_percent(id);
    let (arrow, change_text) = match (delta, change) {
        (Some(d), Some(pct)) => {
            let arrow = if d >= 0.0 { "▲" } else { "▼" };
            (arrow, format!("{:.2}%", pct.abs()))
        }
        _ => ("-", "-".to_string()),
    };

    let sparkline = render_sparkline(&app.history.sparkline(id), 10);

    let name_style = if selected {
        app.theme.selected
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<24}", reading.spec.name), name_style),
        Span::styled(
            format!("{:>9} {:<5}", format_value(reading.value), reading.spec.unit),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {:<7}", reading.status.symbol()),
            app.theme.status_style(reading.status),
        ),
        Span::raw(format!(" {} {:<8}", arrow, change_text)),
        Span::styled(sparkline, Style::default().fg(app.theme.highlight)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_alert_strip(frame: &mut Frame, app: &App, area: Rect) {
    let recent = app.alerts.recent_unacknowledged(3);

    let block = Block::default()
        .title(format!(" Recent Alerts ({} open) ", recent.len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines: Vec<Line> = if recent.is_empty() {
        vec![Line::from(Span::styled(
            " All alerts acknowledged",
            Style::default().fg(app.theme.safe),
        ))]
    } else {
        recent
            .iter()
            .map(|alert| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<6}", alert.severity.label()),
                        app.theme.severity_style(alert.severity),
                    ),
                    Span::styled(
                        format!("{:<24}", alert.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{} • {}", alert.area, alert.raised)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
