//! The station metric catalog.
//!
//! One canonical table of the five simulated metrics: identity, display
//! name, unit, clamp range, per-tick step, baseline, and threshold bands.
//! Everything downstream (simulator, classifier, views, export) reads from
//! this table, so ranges and bands cannot drift between surfaces.

use serde::{Deserialize, Serialize};

use super::threshold::{Status, ThresholdBands};

/// Identity of a simulated station metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    GasConcentration,
    SuctionPressure,
    DischargePressure,
    CompressorTemperature,
    FlowRate,
}

impl MetricId {
    /// All catalog metrics in display order.
    pub const ALL: [MetricId; 5] = [
        MetricId::GasConcentration,
        MetricId::SuctionPressure,
        MetricId::DischargePressure,
        MetricId::CompressorTemperature,
        MetricId::FlowRate,
    ];
}

/// Static description of one metric: how it is simulated and classified.
#[derive(Debug, Clone)]
pub struct MetricSpec {
    pub id: MetricId,
    pub name: &'static str,
    pub unit: &'static str,
    /// Inclusive clamp range for the random walk.
    pub min: f64,
    pub max: f64,
    /// Maximum per-tick excursion of the walk.
    pub step: f64,
    /// Starting value for the walk and center of generated chart windows.
    pub baseline: f64,
    pub bands: ThresholdBands<Status>,
}

impl MetricSpec {
    /// Fraction of the clamp range covered by `value`, in `0.0..=1.0`.
    pub fn range_fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Classify a value against this metric's bands.
    pub fn classify(&self, value: f64) -> Status {
        *self.bands.classify(value)
    }
}

/// The canonical metric table.
///
/// Ranges and baselines come from the station's operating envelope; the gas
/// bands sit at 50/70/90 ppm and the temperature warning bound at 40 °C.
pub fn catalog() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            id: MetricId::GasConcentration,
            name: "Gas Concentration",
            unit: "ppm",
            min: 0.0,
            max: 100.0,
            step: 6.0,
            baseline: 45.0,
            bands: ThresholdBands::standard(50.0, 70.0, 90.0),
        },
        MetricSpec {
            id: MetricId::SuctionPressure,
            name: "Suction Pressure",
            unit: "bar",
            min: 40.0,
            max: 46.0,
            step: 1.2,
            baseline: 42.8,
            bands: ThresholdBands::new(
                Status::Safe,
                vec![(44.5, Status::Warning), (45.5, Status::Danger)],
            ),
        },
        MetricSpec {
            id: MetricId::DischargePressure,
            name: "Discharge Pressure",
            unit: "bar",
            min: 62.0,
            max: 68.0,
            step: 1.8,
            baseline: 65.5,
            bands: ThresholdBands::new(
                Status::Safe,
                vec![(66.8, Status::Warning), (67.5, Status::Danger)],
            ),
        },
        MetricSpec {
            id: MetricId::CompressorTemperature,
            name: "Compressor Temperature",
            unit: "°C",
            min: 32.0,
            max: 45.0,
            step: 3.2,
            baseline: 38.5,
            bands: ThresholdBands::new(
                Status::Safe,
                vec![(40.0, Status::Warning), (44.0, Status::Danger)],
            ),
        },
        MetricSpec {
            id: MetricId::FlowRate,
            name: "Flow Rate",
            unit: "m³/h",
            min: 83_000.0,
            max: 87_500.0,
            step: 1_800.0,
            baseline: 85_200.0,
            bands: ThresholdBands::new(
                Status::Safe,
                vec![(86_500.0, Status::Warning), (87_200.0, Status::Danger)],
            ),
        },
    ]
}

/// Format a value with the precision appropriate for its magnitude.
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_ids() {
        let specs = catalog();
        assert_eq!(specs.len(), MetricId::ALL.len());
        for (spec, id) in specs.iter().zip(MetricId::ALL) {
            assert_eq!(spec.id, id);
        }
    }

    #[test]
    fn test_catalog_ranges_are_valid() {
        for spec in catalog() {
            assert!(spec.min < spec.max, "{}: empty range", spec.name);
            assert!(
                spec.baseline >= spec.min && spec.baseline <= spec.max,
                "{}: baseline outside range",
                spec.name
            );
            assert!(spec.step > 0.0, "{}: non-positive step", spec.name);
        }
    }

    #[test]
    fn test_range_fraction_clamps() {
        let spec = &catalog()[1]; // suction pressure, 40..46
        assert!((spec.range_fraction(43.0) - 0.5).abs() < 1e-9);
        assert_eq!(spec.range_fraction(39.0), 0.0);
        assert_eq!(spec.range_fraction(50.0), 1.0);
    }

    #[test]
    fn test_gas_classification_matches_bands() {
        let gas = &catalog()[0];
        assert_eq!(gas.classify(45.0), Status::Safe);
        assert_eq!(gas.classify(72.0), Status::Warning);
        assert_eq!(gas.classify(90.0), Status::Danger);
    }

    #[test]
    fn test_metric_id_serde_round_trip() {
        let json = serde_json::to_string(&MetricId::SuctionPressure).unwrap();
        assert_eq!(json, "\"suction_pressure\"");
        let id: MetricId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, MetricId::SuctionPressure);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(42.81), "42.8");
        assert_eq!(format_value(85_200.4), "85200");
    }
}
