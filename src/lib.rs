// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # gaswatch
//!
//! A diagnostic TUI and library presenting simulated gas-compressor-station
//! telemetry: gauges, KPI readouts, alert lists, and time-series charts.
//!
//! All data is locally generated — bounded random walks for live metrics,
//! fixed-length regenerated chart windows, and canned alert records. There
//! is no sensor ingestion, no backend, and no persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(classify)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                ▲                                    │
//! │       ▼                │                                    │
//! │  ┌─────────┐      ┌────┴────┐                               │
//! │  │ source  │◀─────│   sim   │  SimSource | FileSource |     │
//! │  │ (input) │      │(generate)│           ChannelSource      │
//! │  └─────────┘      └─────────┘                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and user interaction logic
//! - **[`sim`]**: Bounded random walks, chart-window generation, and the
//!   scripted false-signal demonstration series
//! - **[`source`]**: Telemetry source abstraction ([`TelemetrySource`] trait)
//!   with the built-in simulator, file replay, and channel-based input
//! - **[`data`]**: The metric catalog, threshold classification, the alert
//!   log, and recent-value history for sparklines
//! - **[`ui`]**: Terminal rendering using ratatui - gauges, charts, alert
//!   tables, and theme support
//! - **[`settings`]**: Layered runtime settings (defaults, file, environment)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Run the built-in simulator
//! gaswatch
//!
//! # Reproducible demo, 2-second refresh
//! gaswatch --seed 42 --refresh 2
//!
//! # Replay a recorded snapshot file
//! gaswatch --replay station.json
//! ```
//!
//! ### As a library with the simulator source
//!
//! ```
//! use gaswatch::{App, Settings, SimSource};
//!
//! let source = Box::new(SimSource::with_seed(42));
//! let mut app = App::new(source, Settings::default());
//! app.refresh().unwrap();
//! assert!(app.data.is_some());
//! ```
//!
//! ### As a library with a channel source (for embedding)
//!
//! ```
//! use gaswatch::{App, ChannelSource, Settings};
//!
//! // Create a channel for pushing snapshots
//! let (tx, source) = ChannelSource::create("host application");
//!
//! let app = App::new(Box::new(source), Settings::default());
//! # let _ = (tx, app);
//! ```
//!
//! ### Classifying values directly
//!
//! ```
//! use gaswatch::{Status, ThresholdBands};
//!
//! let bands = ThresholdBands::standard(50.0, 70.0, 90.0);
//! assert_eq!(*bands.classify(72.0), Status::Warning);
//! assert_eq!(*bands.classify(90.0), Status::Danger);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod sim;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, ChartSet, View};
pub use data::{
    catalog, Alert, AlertLog, Attention, History, MetricId, MetricSpec, Severity, SignalStatus,
    Status, TelemetryData, ThresholdBands,
};
pub use settings::{Settings, ThemePreference};
pub use sim::{BoundedWalk, Scenario, SeriesSpec, StationSim, TimeRange, TimeSeries};
pub use source::{ChannelSource, FileSource, SimSource, StationSnapshot, TelemetrySource};
