//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{ActionStatus, Severity, Status};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for warning-level statuses.
    pub warning: Color,
    /// Color for danger/critical statuses.
    pub danger: Color,
    /// Color for safe/healthy statuses.
    pub safe: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            warning: Color::Yellow,
            danger: Color::Red,
            safe: Color::Green,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Yellow,
            danger: Color::Red,
            safe: Color::Green,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
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

    /// Get style for a metric status band
    pub fn status_style(&self, status: Status) -> Style {
        match status {
            Status::Safe => Style::default().fg(self.safe),
            Status::Warning => Style::default().fg(self.warning),
            Status::Danger => Style::default().fg(self.danger).add_modifier(Modifier::BOLD),
        }
    }

    /// Get style for an alert severity
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Low => Style::default().fg(self.safe),
            Severity::Medium => Style::default().fg(self.warning),
            Severity::High => Style::default().fg(self.danger).add_modifier(Modifier::BOLD),
        }
    }

    /// Get the color for a response-action state
    pub fn action_color(&self, status: ActionStatus) -> Color {
        match status {
            ActionStatus::Completed | ActionStatus::Running => self.safe,
            ActionStatus::InProgress => self.warning,
            ActionStatus::Failed => self.danger,
            ActionStatus::Cancelled | ActionStatus::Pending => self.border,
        }
    }
}
