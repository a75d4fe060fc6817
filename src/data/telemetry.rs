//! Classified station telemetry ready for display.

use std::time::Instant;

use crate::data::metric::{catalog, MetricSpec};
use crate::data::threshold::Status;
use crate::source::StationSnapshot;

/// One metric reading with its classification.
#[derive(Debug, Clone)]
pub struct MetricReading {
    pub spec: MetricSpec,
    pub value: f64,
    pub status: Status,
}

impl MetricReading {
    /// Fraction of the metric's clamp range, for gauge fill.
    pub fn fraction(&self) -> f64 {
        self.spec.range_fraction(self.value)
    }
}

/// The whole station, classified against the catalog.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    /// Readings in catalog order.
    pub readings: Vec<MetricReading>,
    pub last_updated: Instant,
}

impl TelemetryData {
    /// Classify a snapshot against the default catalog.
    pub fn from_snapshot(snapshot: &StationSnapshot) -> Self {
        Self::classify(&catalog(), snapshot)
    }

    /// Classify a snapshot against the given specs (catalog order).
    ///
    /// Metrics absent from the snapshot fall back to their spec baseline
    /// so a partial replay file still renders a complete dashboard.
    pub fn classify(specs: &[MetricSpec], snapshot: &StationSnapshot) -> Self {
        let readings = specs
            .iter()
            .map(|spec| {
                let value = snapshot.get(spec.id).unwrap_or(spec.baseline);
                let status = spec.classify(value);
                MetricReading {
                    spec: spec.clone(),
                    value,
                    status,
                }
            })
            .collect();

        Self {
            readings,
            last_updated: Instant::now(),
        }
    }

    /// The worst status across all readings.
    pub fn station_status(&self) -> Status {
        self.readings
            .iter()
            .map(|r| r.status)
            .max()
            .unwrap_or(Status::Safe)
    }

    /// Count of readings at the given status.
    pub fn count(&self, status: Status) -> usize {
        self.readings.iter().filter(|r| r.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metric::MetricId;

    fn snapshot_with(values: &[(MetricId, f64)]) -> StationSnapshot {
        let mut snapshot = StationSnapshot::default();
        for (id, v) in values {
            snapshot.readings.insert(*id, *v);
        }
        snapshot
    }

    #[test]
    fn test_readings_preserve_catalog_order() {
        let data = TelemetryData::from_snapshot(&StationSnapshot::default());
        let ids: Vec<MetricId> = data.readings.iter().map(|r| r.spec.id).collect();
        assert_eq!(ids, MetricId::ALL.to_vec());
    }

    #[test]
    fn test_missing_metrics_use_baseline() {
        let snapshot = snapshot_with(&[(MetricId::GasConcentration, 72.0)]);
        let data = TelemetryData::from_snapshot(&snapshot);

        let gas = &data.readings[0];
        assert_eq!(gas.value, 72.0);
        assert_eq!(gas.status, Status::Warning);

        let suction = &data.readings[1];
        assert_eq!(suction.value, suction.spec.baseline);
        assert_eq!(suction.status, Status::Safe);
    }

    #[test]
    fn test_station_status_is_worst_reading() {
        let all_safe = TelemetryData::from_snapshot(&StationSnapshot::default());
        assert_eq!(all_safe.station_status(), Status::Safe);

        let snapshot = snapshot_with(&[
            (MetricId::GasConcentration, 95.0),
            (MetricId::CompressorTemperature, 41.0),
        ]);
        let data = TelemetryData::from_snapshot(&snapshot);
        assert_eq!(data.station_status(), Status::Danger);
        assert_eq!(data.count(Status::Danger), 1);
        assert_eq!(data.count(Status::Warning), 1);
        assert_eq!(data.count(Status::Safe), 3);
    }
}
