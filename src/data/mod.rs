//! Data models and classification.
//!
//! This module turns raw station snapshots into display-ready, classified
//! data and owns the static parts of the domain.
//!
//! ## Submodules
//!
//! - [`metric`]: the canonical metric catalog (ranges, steps, bands)
//! - [`threshold`]: status bands and the generic threshold classifier
//! - [`telemetry`]: classified readings derived from a snapshot
//! - [`alert`]: the seeded alert log with acknowledgment and filtering
//! - [`history`]: bounded recent-value tracking for sparklines and deltas
//!
//! ## Data flow
//!
//! ```text
//! StationSnapshot (from any TelemetrySource)
//!        │
//!        ▼
//! TelemetryData::from_snapshot()  — classify against the catalog bands
//!        │
//!        └──▶ History::record()   — sparklines, KPI deltas
//! ```

pub mod alert;
pub mod history;
pub mod metric;
pub mod telemetry;
pub mod threshold;

pub use alert::{ActionStatus, Alert, AlertAction, AlertLog, Attention, Severity, SignalStatus};
pub use history::History;
pub use metric::{catalog, MetricId, MetricSpec};
pub use telemetry::{MetricReading, TelemetryData};
pub use threshold::{Status, ThresholdBands};
