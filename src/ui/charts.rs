//! Chart view rendering.
//!
//! A 2×2 grid of metric windows plus the wide anomaly-demonstration chart,
//! with a range selector and per-chart μ/σ/Δ readouts.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::metric::format_value;
use crate::sim::series::{TimeRange, TimeSeries};

/// Render the Charts view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // range selector
        Constraint::Min(8),    // metric grid
        Constraint::Min(6),    // anomaly chart
    ])
    .split(area);

    render_range_selector(frame, app, chunks[0]);
    render_metric_grid(frame, app, chunks[1]);
    render_anomaly_chart(frame, app, chunks[2]);
}

fn render_range_selector(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" Window: ")];
    for range in TimeRange::ALL {
        let style = if range == app.time_range {
            app.theme.tab_active
        } else {
            app.theme.tab_inactive
        };
        spans.push(Span::styled(format!(" {} ", range.label()), style));
    }
    spans.push(Span::styled(
        if app.auto_refresh {
            format!("   auto-refresh {}s", app.refresh_interval.as_secs())
        } else {
            "   auto-refresh paused".to_string()
        },
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_metric_grid(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let cells = [
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]),
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]),
    ];

    for (i, (spec, series)) in app.charts.metrics.iter().enumerate().take(4) {
        let cell = cells[i / 2][i % 2];
        render_series_chart(
            frame,
            app,
            cell,
            spec.name,
            spec.unit,
            series,
            Some((spec.min, spec.max)),
        );
    }
}

fn render_anomaly_chart(frame: &mut Frame, app: &App, area: Rect) {
    // The demo chart scales to its data rather than a fixed envelope.
    render_series_chart(
        frame,
        app,
        area,
        "Anomaly Detection Analysis",
        "bar",
        &app.charts.false_signal,
        None,
    );
}

fn render_series_chart(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    name: &str,
    unit: &str,
    series: &TimeSeries,
    envelope: Option<(f64, f64)>,
) {
    if series.is_empty() {
        return;
    }

    let (y_min, y_max) = match envelope {
        Some(bounds) => bounds,
        None => {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for v in series.values() {
                min = min.min(v);
                max = max.max(v);
            }
            (min - 1.0, max + 1.0)
        }
    };

    let window = app.time_range.minutes() as f64;
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (-p.minutes_ago, p.value))
        .collect();

    let current = series.current().unwrap_or(0.0);
    let delta = series
        .previous()
        .map(|prev| current - prev)
        .unwrap_or(0.0);
    let change_pct = series
        .previous()
        .filter(|&prev| prev != 0.0)
        .map(|prev| (current - prev) / prev * 100.0)
        .unwrap_or(0.0);
    let arrow = if delta >= 0.0 { "▲" } else { "▼" };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{} {} ", format_value(current), unit)),
        Span::styled(
            format!("{}{:.2}% ", arrow, change_pct.abs()),
            if delta >= 0.0 {
                Style::default().fg(app.theme.safe)
            } else {
                Style::default().fg(app.theme.danger)
            },
        ),
        Span::styled(
            format!("μ {:.2} σ {:.2} n {} ", series.mean(), series.std_dev(), series.len()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.highlight))
        .data(&points);

    let x_labels = vec![
        Span::raw(format!("-{}", app.time_range.label())),
        Span::raw("now"),
    ];
    let y_labels = vec![
        Span::raw(format!("{:.1}", y_min)),
        Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
        Span::raw(format!("{:.1}", y_max)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(
            Axis::default()
                .bounds([-window, 0.0])
                .labels(x_labels)
                .style(Style::default().fg(app.theme.border)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_labels)
                .style(Style::default().fg(app.theme.border)),
        );

    frame.render_widget(chart, area);
}
