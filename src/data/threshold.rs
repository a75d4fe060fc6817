//! Status bands and the threshold classifier.
//!
//! Every visual surface (gauge colors, KPI badges, alert severities) is
//! driven by classifying a metric value into a discrete band. The
//! classifier is a pure function over an ordered list of inclusive lower
//! bounds.

/// Status band for a metric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Safe,
    Warning,
    Danger,
}

impl Status {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Safe => "SAFE",
            Status::Warning => "WARN",
            Status::Danger => "DANGER",
        }
    }

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Safe => "Safe",
            Status::Warning => "Warning",
            Status::Danger => "Danger",
        }
    }
}

/// An ordered set of `(lower bound, label)` bands over a base label.
///
/// Classification picks the highest band whose lower bound is less than or
/// equal to the value; a value below every bound gets the base label. Bounds
/// are inclusive: a value exactly equal to a bound belongs to the band that
/// bound introduces.
#[derive(Debug, Clone)]
pub struct ThresholdBands<L> {
    base: L,
    bands: Vec<(f64, L)>,
}

impl<L> ThresholdBands<L> {
    /// Create a band set.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not strictly ascending — that is a
    /// programming error, not a runtime condition.
    pub fn new(base: L, bands: Vec<(f64, L)>) -> Self {
        for pair in bands.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "threshold bounds must be strictly ascending: {} then {}",
                pair[0].0,
                pair[1].0
            );
        }
        Self { base, bands }
    }

    /// Classify a value into a band label.
    pub fn classify(&self, value: f64) -> &L {
        self.bands
            .iter()
            .rev()
            .find(|(bound, _)| value >= *bound)
            .map(|(_, label)| label)
            .unwrap_or(&self.base)
    }

}

impl ThresholdBands<Status> {
    /// Standard Safe/Warning/Danger bands.
    pub fn standard(safe: f64, warning: f64, danger: f64) -> Self {
        Self::new(
            Status::Safe,
            vec![
                (safe, Status::Safe),
                (warning, Status::Warning),
                (danger, Status::Danger),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gas_bands() -> ThresholdBands<Status> {
        ThresholdBands::standard(50.0, 70.0, 90.0)
    }

    #[test]
    fn test_classify_mid_band() {
        assert_eq!(*gas_bands().classify(72.0), Status::Warning);
    }

    #[test]
    fn test_classify_inclusive_bound() {
        assert_eq!(*gas_bands().classify(90.0), Status::Danger);
        assert_eq!(*gas_bands().classify(70.0), Status::Warning);
    }

    #[test]
    fn test_classify_below_all_bounds() {
        assert_eq!(*gas_bands().classify(45.0), Status::Safe);
        assert_eq!(*gas_bands().classify(-3.0), Status::Safe);
    }

    #[test]
    fn test_classify_top_band_iff_at_or_above_last_bound() {
        let bands = gas_bands();
        assert_eq!(*bands.classify(89.999), Status::Warning);
        assert_eq!(*bands.classify(90.0), Status::Danger);
        assert_eq!(*bands.classify(100.0), Status::Danger);
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn test_unordered_bounds_panic() {
        let _ = ThresholdBands::new(
            Status::Safe,
            vec![(70.0, Status::Warning), (70.0, Status::Danger)],
        );
    }

    #[test]
    fn test_status_ordering() {
        assert!(Status::Danger > Status::Warning);
        assert!(Status::Warning > Status::Safe);
    }

    #[test]
    fn test_empty_bands_always_return_base() {
        let empty: ThresholdBands<Status> = ThresholdBands::new(Status::Safe, Vec::new());
        assert_eq!(*empty.classify(f64::MAX), Status::Safe);
    }
}
