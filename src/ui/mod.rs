//! Terminal UI rendering using ratatui.
//!
//! This module contains all the view-specific rendering logic for the TUI.
//! Each view is implemented in its own submodule with a `render` function.
//!
//! ## Submodules
//!
//! - [`overview`]: gauges, KPI readouts, and the recent-alert strip
//! - [`charts`]: time-series chart grid with the range selector
//! - [`alerts`]: filterable alert table and the detail overlay
//! - [`common`]: shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` calls into these modules based on the current view:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content                         │
//! │ (overview/charts/alerts::render)     │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - alerts::render_overlay
//!    - common::render_help
//! ```

pub mod alerts;
pub mod charts;
pub mod common;
pub mod overview;
pub mod theme;

pub use theme::Theme;
