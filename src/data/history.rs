//! Recent-value tracking for sparklines and KPI deltas.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::data::metric::MetricId;
use crate::data::telemetry::TelemetryData;

/// Maximum number of ticks retained per metric.
const MAX_HISTORY_SIZE: usize = 60;

/// Bounded per-metric value history.
///
/// Metrics here are levels, not counters, so sparklines normalize the raw
/// values rather than deltas between samples.
#[derive(Debug, Clone, Default)]
pub struct History {
    values: HashMap<MetricId, VecDeque<f64>>,
    timestamps: VecDeque<Instant>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified snapshot.
    pub fn record(&mut self, data: &TelemetryData) {
        for reading in &data.readings {
            let values = self.values.entry(reading.spec.id).or_default();
            values.push_back(reading.value);
            if values.len() > MAX_HISTORY_SIZE {
                values.pop_front();
            }
        }

        self.timestamps.push_back(data.last_updated);
        if self.timestamps.len() > MAX_HISTORY_SIZE {
            self.timestamps.pop_front();
        }
    }

    /// Number of recorded ticks.
    pub fn ticks(&self) -> usize {
        self.timestamps.len()
    }

    /// Sparkline bars for a metric, normalized to 0-7 (8 bar levels).
    ///
    /// Empty until at least two ticks have been recorded.
    pub fn sparkline(&self, id: MetricId) -> Vec<u8> {
        let Some(values) = self.values.get(&id) else {
            return Vec::new();
        };
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
            .map(|&v| {
                let normalized = ((v - min) / range * 7.0) as u8;
                normalized.min(7)
            })
            .collect()
    }

    /// Change between the two most recent ticks.
    pub fn delta(&self, id: MetricId) -> Option<f64> {
        let values = self.values.get(&id)?;
        if values.len() < 2 {
            return None;
        }
        let current = *values.back()?;
        let previous = *values.get(values.len() - 2)?;
        Some(current - previous)
    }

    /// Change between the two most recent ticks as a percentage of the
    /// previous value.
    pub fn change_percent(&self, id: MetricId) -> Option<f64> {
        let values = self.values.get(&id)?;
        if values.len() < 2 {
            return None;
        }
        let current = *values.back()?;
        let previous = *values.get(values.len() - 2)?;
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metric::MetricId;
    use crate::source::StationSnapshot;

    fn data_with_gas(value: f64) -> TelemetryData {
        let mut snapshot = StationSnapshot::default();
        snapshot.readings.insert(MetricId::GasConcentration, value);
        TelemetryData::from_snapshot(&snapshot)
    }

    #[test]
    fn test_sparkline_needs_two_ticks() {
        let mut history = History::new();
        assert!(history.sparkline(MetricId::GasConcentration).is_empty());

        history.record(&data_with_gas(45.0));
        assert!(history.sparkline(MetricId::GasConcentration).is_empty());

        history.record(&data_with_gas(48.0));
        assert_eq!(history.sparkline(MetricId::GasConcentration).len(), 2);
    }

    #[test]
    fn test_sparkline_normalizes_to_eight_levels() {
        let mut history = History::new();
        for v in [40.0, 45.0, 50.0, 55.0, 60.0] {
            history.record(&data_with_gas(v));
        }
        let bars = history.sparkline(MetricId::GasConcentration);
        assert_eq!(bars.first(), Some(&0));
        assert_eq!(bars.last(), Some(&7));
        assert!(bars.iter().all(|&b| b <= 7));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for i in 0..200 {
            history.record(&data_with_gas(40.0 + (i % 10) as f64));
        }
        assert_eq!(history.ticks(), MAX_HISTORY_SIZE);
        assert_eq!(
            history.sparkline(MetricId::GasConcentration).len(),
            MAX_HISTORY_SIZE
        );
    }

    #[test]
    fn test_delta_and_change_percent() {
        let mut history = History::new();
        assert!(history.delta(MetricId::GasConcentration).is_none());

        history.record(&data_with_gas(50.0));
        history.record(&data_with_gas(48.0));

        let delta = history.delta(MetricId::GasConcentration).unwrap();
        assert!((delta - (-2.0)).abs() < 1e-9);

        let pct = history.change_percent(MetricId::GasConcentration).unwrap();
        assert!((pct - (-4.0)).abs() < 1e-9);
    }
}
