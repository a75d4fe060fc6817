//! Telemetry source abstraction.
//!
//! The dashboard does not care where snapshots come from. A trait-based
//! source lets the same app state run against the built-in simulator, a
//! recorded snapshot file, or an in-process channel (tests, embedding).

mod channel;
mod file;
mod sim;
mod snapshot;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use sim::SimSource;
pub use snapshot::StationSnapshot;

use std::fmt::Debug;

/// Trait for receiving station snapshots from various producers.
///
/// # Example
///
/// ```
/// use gaswatch::{SimSource, TelemetrySource};
///
/// let mut source = SimSource::with_seed(7);
/// let snapshot = source.poll().expect("simulator always has data");
/// assert!(!snapshot.is_empty());
/// ```
pub trait TelemetrySource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// Must be non-blocking; the UI loop calls this between renders.
    fn poll(&mut self) -> Option<StationSnapshot>;

    /// Human-readable description of the source for the status bar.
    fn description(&self) -> &str;

    /// Error from the most recent poll, if any.
    fn error(&self) -> Option<&str>;
}
