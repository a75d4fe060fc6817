//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::metric::format_value;
use crate::data::Status;

/// Sparkline characters (8 levels of height).
pub const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a 0-7 normalized series as bar characters, last `width` samples.
pub fn render_sparkline(data: &[u8], width: usize) -> String {
    if data.is_empty() {
        return " ".repeat(width);
    }
    data.iter()
        .rev()
        .take(width)
        .rev()
        .map(|&v| SPARKLINE_CHARS[v.min(7) as usize])
        .collect()
}

/// Render the header bar with the station status overview.
///
/// Displays: status indicator, metric counts by band, gas reading.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " GAS STATION MONITOR ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let safe = data.count(Status::Safe);
    let warning = data.count(Status::Warning);
    let danger = data.count(Status::Danger);

    let status_style = app.theme.status_style(data.station_status());

    // Gas concentration always leads the header; it is the headline metric.
    let gas = &data.readings[0];

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("STATION ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(format!("{}", safe), Style::default().fg(app.theme.safe)),
        Span::raw(" safe "),
        if warning > 0 {
            Span::styled(
                format!("{}", warning),
                Style::default().fg(app.theme.warning),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" warn "),
        if danger > 0 {
            Span::styled(
                format!("{}", danger),
                Style::default().fg(app.theme.danger).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" danger │ "),
        Span::raw(format!("Gas {} {} ", format_value(gas.value), gas.spec.unit)),
        Span::styled(gas.status.symbol(), app.theme.status_style(gas.status)),
        Span::raw(" │ "),
        Span::raw(app.source_description().to_string()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Overview "),
        Line::from(" 2:Charts "),
        Line::from(" 3:Alerts "),
    ];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Charts => 1,
        View::Alerts => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: time since last update, refresh state, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref data) = app.data {
        let elapsed = data.last_updated.elapsed();

        let refresh = if app.auto_refresh {
            format!("auto {}s", app.refresh_interval.as_secs())
        } else {
            "paused".to_string()
        };

        // Context-sensitive controls
        let controls = match app.current_view {
            View::Overview => {
                if app.filter_active {
                    "Type to search | Enter:apply Esc:cancel"
                } else {
                    "/:search Tab:switch p:pause r:refresh ?:help q:quit"
                }
            }
            View::Charts => "t:range p:pause r:refresh Tab:switch ?:help q:quit",
            View::Alerts => {
                if app.filter_active {
                    "Type to search | Enter:apply Esc:cancel"
                } else {
                    "a:ack f:filter /:search Enter:detail ?:help q:quit"
                }
            }
        };

        format!(
            " {} | Updated {:.1}s ago | {} | {}",
            app.current_view.label(),
            elapsed.as_secs_f64(),
            refresh,
            controls,
        )
    } else if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  ↑/↓ j/k     Navigate list"),
        Line::from("  PgUp/PgDn   Jump 10 items"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Alert detail"),
        Line::from("  Esc         Go back"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Telemetry",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh now"),
        Line::from("  p         Pause/resume auto-refresh"),
        Line::from("  t         Cycle chart range (Charts)"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Alerts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  a         Acknowledge"),
        Line::from("  f         Cycle attention filter"),
        Line::from("  /         Start search"),
        Line::from("  c         Clear search"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
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
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 30u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_pads_when_empty() {
        assert_eq!(render_sparkline(&[], 8), "        ");
    }

    #[test]
    fn test_sparkline_takes_trailing_samples() {
        let bars: Vec<u8> = (0..12).map(|i| (i % 8) as u8).collect();
        let rendered = render_sparkline(&bars, 8);
        assert_eq!(rendered.chars().count(), 8);
        // Last sample is 11 % 8 == 3.
        assert_eq!(rendered.chars().last(), Some(SPARKLINE_CHARS[3]));
    }
}
