//! Simulated telemetry generation.
//!
//! Everything the dashboard displays comes from here: a bounded random walk
//! per live metric, fixed-length chart windows, and the scripted
//! false-signal demonstration series.
//!
//! ## Submodules
//!
//! - [`walk`]: the clamp-bounded random walk driving live gauge values
//! - [`series`]: chart windows per time range, normal and scripted scenarios
//! - [`station`]: all catalog walks bundled behind a single `tick()`

pub mod series;
pub mod station;
pub mod walk;

pub use series::{Scenario, SeriesPoint, SeriesSpec, TimeRange, TimeSeries, SAMPLES_PER_WINDOW};
pub use station::StationSim;
pub use walk::BoundedWalk;
