//! Alert list rendering and the detail overlay.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::{Alert, Attention};

use super::common::render_sparkline;

/// Minimum size for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
const MIN_OVERLAY_HEIGHT: u16 = 16;

/// Render the Alerts view as a filterable table.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible_alerts();

    let header = Row::new(vec![
        Cell::from("Sev"),
        Cell::from("Title"),
        Cell::from("Area"),
        Cell::from("Raised"),
        Cell::from("Signal"),
        Cell::from("Attention"),
        Cell::from("Ack"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = visible
        .iter()
        .map(|alert| {
            let severity_style = app.theme.severity_style(alert.severity);
            let ack = if alert.acknowledged { "✔" } else { "-" };

            Row::new(vec![
                Cell::from(alert.severity.label()).style(severity_style),
                Cell::from(alert.title).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(alert.area),
                Cell::from(alert.raised),
                Cell::from(alert.signal.label()),
                Cell::from(alert.attention.label()),
                Cell::from(ack).style(if alert.acknowledged {
                    Style::default().fg(app.theme.safe)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                }),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(15),
        Constraint::Length(4),
    ];

    let selected = app.selected_alert_index.min(visible.len().saturating_sub(1));

    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };

    let title = format!(
        " Alerts ({}/{}) [{}]{} ",
        visible.len(),
        app.alerts.len(),
        pill_bar(app),
        filter_info
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// The attention pills with counts, current selection marked.
fn pill_bar(app: &App) -> String {
    let mut parts = vec![if app.alert_filter.is_none() {
        format!("*All {}", app.alerts.len())
    } else {
        format!("All {}", app.alerts.len())
    }];
    for attention in Attention::ALL {
        let marker = if app.alert_filter == Some(attention) {
            "*"
        } else {
            ""
        };
        parts.push(format!(
            "{}{} {}",
            marker,
            attention.label(),
            app.alerts.count_for(attention)
        ));
    }
    parts.join(" | ")
}

/// Render the alert detail as a modal overlay.
///
/// Shows the assessment panel, sensor info, the trend sparkline, and the
/// actions-taken list for the selected alert.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if the terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let visible = app.visible_alerts();
    let Some(alert) = visible.get(app.selected_alert_index).copied() else {
        return;
    };

    let overlay_width = (area.width * 90 / 100).clamp(MIN_OVERLAY_WIDTH, 90);
    let overlay_height = (area.height * 85 / 100).clamp(MIN_OVERLAY_HEIGHT, 40);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Length(6), // header with badges
        Constraint::Min(8),    // status + sensor info
        Constraint::Length(1), // footer
    ])
    .split(overlay_area);

    render_overlay_header(frame, app, alert, chunks[0]);
    render_overlay_body(frame, app, alert, chunks[1]);

    let footer = Paragraph::new(" a:acknowledge  Esc:close ")
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(footer, chunks[2]);
}

fn render_overlay_header(frame: &mut Frame, app: &App, alert: &Alert, area: Rect) {
    let ack_span = if alert.acknowledged {
        Span::styled("ACKNOWLEDGED", Style::default().fg(app.theme.safe))
    } else {
        Span::styled("OPEN", Style::default().fg(app.theme.warning))
    };

    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", alert.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", alert.severity.label()),
                app.theme.severity_style(alert.severity),
            ),
        ]),
        Line::from(format!(" {}", alert.description)),
        Line::from(vec![
            Span::raw(" Signal: "),
            Span::styled(
                alert.signal.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Assessment: "),
            Span::styled(
                alert.attention.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({:.1}%)   ", alert.confidence)),
            ack_span,
        ]),
    ];

    let block = Block::default()
        .title(" Alert Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    frame.render_widget(Paragraph::new(header_lines).block(block), area);
}

fn render_overlay_body(frame: &mut Frame, app: &App, alert: &Alert, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    // ----- LEFT: current status + sensor info -----
    let trend_bars = normalize_sparkline(&alert.sparkline);
    let sparkline = render_sparkline(&trend_bars, alert.sparkline.len());

    let value_line = if alert.unit.is_empty() {
        format!(" Value:     {}", alert.current_value)
    } else {
        format!(
            " Value:     {} {} (threshold {} {})",
            alert.current_value, alert.unit, alert.threshold_value, alert.unit
        )
    };

    let status_lines = vec![
        Line::from(value_line),
        Line::from(vec![
            Span::raw(format!(" Trend:     {} ", alert.trend)),
            Span::styled(sparkline, Style::default().fg(app.theme.highlight)),
        ]),
        Line::from(format!(" Sensor:    {} ({})", alert.sensor, alert.sensor_type)),
        Line::from(format!(" Location:  {}", alert.location)),
        Line::from(format!(" Area:      {}", alert.area)),
        Line::from(format!(" Time:      {}", alert.raised_at)),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Assessment",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(format!(" {}", alert.analysis)),
    ];

    let status_block = Block::default()
        .title(" Current Status ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(
        Paragraph::new(status_lines)
            .block(status_block)
            .wrap(ratatui::widgets::Wrap { trim: false }),
        columns[0],
    );

    // ----- RIGHT: actions taken -----
    let action_lines: Vec<Line> = alert
        .actions
        .iter()
        .map(|action| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", action.status.label()),
                    Style::default().fg(app.theme.action_color(action.status)),
                ),
                Span::raw(action.text),
            ])
        })
        .collect();

    let actions_block = Block::default()
        .title(" Actions Taken ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(action_lines).block(actions_block), columns[1]);
}

/// Normalize a raw sparkline series to the 0-7 bar levels.
fn normalize_sparkline(values: &[f64]) -> Vec<u8> {
    if values.len() < 2 {
        return Vec::new();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let range = (max - min).max(f64::EPSILON);
    values
        .iter()
        .map(|&v| (((v - min) / range * 7.0) as u8).min(7))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sparkline_spans_levels() {
        let bars = normalize_sparkline(&[14.2, 15.8, 16.9, 17.8, 18.5]);
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0], 0);
        assert_eq!(*bars.last().unwrap(), 7);
    }

    #[test]
    fn test_normalize_flat_series() {
        // A flat series (the maintenance alert) stays at the bottom level.
        let bars = normalize_sparkline(&[0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(bars.iter().all(|&b| b == 0));
    }
}
