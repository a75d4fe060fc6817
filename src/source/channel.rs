//! Channel-based source.
//!
//! Receives snapshots via a tokio watch channel. Lets a host application
//! (or a test) push station states into the dashboard instead of polling
//! a file or running the simulator.

use tokio::sync::watch;

use super::{StationSnapshot, TelemetrySource};

/// A source fed by the sending half of a watch channel.
///
/// # Example
///
/// ```
/// use gaswatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("embedded feed");
/// # let _ = (tx, source);
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<StationSnapshot>,
    description: String,
    /// Whether the channel's initial value has been handed out yet.
    initial_returned: bool,
}

impl ChannelSource {
    pub fn new(receiver: watch::Receiver<StationSnapshot>, feed_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", feed_description),
            initial_returned: false,
        }
    }

    /// Create a sender/source pair.
    pub fn create(feed_description: &str) -> (watch::Sender<StationSnapshot>, Self) {
        let (tx, rx) = watch::channel(StationSnapshot::default());
        let source = Self::new(rx, feed_description);
        (tx, source)
    }
}

impl TelemetrySource for ChannelSource {
    fn poll(&mut self) -> Option<StationSnapshot> {
        // Hand out the channel's current value on the first poll.
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Producer failures show up as silence, not as source errors.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metric::MetricId;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // First poll yields the initial (empty) snapshot.
        let snapshot = source.poll().unwrap();
        assert!(snapshot.is_empty());

        // No change, so the next poll is empty-handed.
        assert!(source.poll().is_none());

        let mut update = StationSnapshot::default();
        update.readings.insert(MetricId::GasConcentration, 51.0);
        tx.send(update).unwrap();

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.get(MetricId::GasConcentration), Some(51.0));
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("host app");
        assert_eq!(source.description(), "channel: host app");
    }
}
