//! The snapshot type shared by all telemetry sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::metric::MetricId;

/// One observation of the whole station: a value per metric.
///
/// This is the common format between producers (the simulator, a recorded
/// replay file, a channel feed) and the dashboard consumer. Metrics missing
/// from a snapshot simply keep their previous displayed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub readings: BTreeMap<MetricId, f64>,
}

impl StationSnapshot {
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn get(&self, id: MetricId) -> Option<f64> {
        self.readings.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "readings": {
                "gas_concentration": 45.0,
                "suction_pressure": 42.8,
                "flow_rate": 85210.5
            }
        }"#;

        let snapshot: StationSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(MetricId::GasConcentration), Some(45.0));
        assert_eq!(snapshot.get(MetricId::FlowRate), Some(85210.5));
        assert_eq!(snapshot.get(MetricId::CompressorTemperature), None);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut snapshot = StationSnapshot::default();
        snapshot.readings.insert(MetricId::SuctionPressure, 43.1);
        snapshot.readings.insert(MetricId::DischargePressure, 65.2);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
