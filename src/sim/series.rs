//! Fixed-length time-series windows for the chart view.
//!
//! Windows are regenerated wholesale on every refresh or range change, never
//! appended to. Points carry minutes-before-now offsets; the oldest point
//! comes first and the newest (offset 0) last.

use rand::Rng;

/// Samples per window, for every range.
///
/// One sample per sixtieth of the window, inclusive of both endpoints.
pub const SAMPLES_PER_WINDOW: usize = 61;

/// Selectable chart window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Hour1,
    Hour6,
    Hour24,
    Day7,
}

impl TimeRange {
    /// All ranges in selector order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Hour1,
        TimeRange::Hour6,
        TimeRange::Hour24,
        TimeRange::Day7,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Hour1 => "1h",
            TimeRange::Hour6 => "6h",
            TimeRange::Hour24 => "24h",
            TimeRange::Day7 => "7d",
        }
    }

    pub fn hours(&self) -> u32 {
        match self {
            TimeRange::Hour1 => 1,
            TimeRange::Hour6 => 6,
            TimeRange::Hour24 => 24,
            TimeRange::Day7 => 168,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.hours() * 60
    }

    /// Cycle to the next range.
    pub fn next(self) -> Self {
        match self {
            TimeRange::Hour1 => TimeRange::Hour6,
            TimeRange::Hour6 => TimeRange::Hour24,
            TimeRange::Hour24 => TimeRange::Day7,
            TimeRange::Day7 => TimeRange::Hour1,
        }
    }
}

/// How a window's values are scripted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Baseline plus uniform variance and a subtle sine trend.
    Normal,
    /// The demonstration series: two transient dips that recover on their
    /// own, used to illustrate alert-suppression narratives. The dip bands
    /// are scripted constants, not derived from the baseline.
    FalseSignal,
}

/// Inputs for one generated window.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    pub baseline: f64,
    pub variance: f64,
    pub scenario: Scenario,
}

impl SeriesSpec {
    pub fn normal(baseline: f64, variance: f64) -> Self {
        Self {
            baseline,
            variance,
            scenario: Scenario::Normal,
        }
    }

    /// The scripted false-signal demonstration series.
    pub fn false_signal() -> Self {
        Self {
            baseline: FALSE_SIGNAL_BASELINE,
            variance: 1.8,
            scenario: Scenario::FalseSignal,
        }
    }
}

/// One sample: minutes before the window anchor, and the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub minutes_ago: f64,
    pub value: f64,
}

/// A generated window of samples, oldest first.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Newest sample value.
    pub fn current(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    /// Sample before the newest.
    pub fn previous(&self) -> Option<f64> {
        let n = self.points.len();
        (n >= 2).then(|| self.points[n - 2].value)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn mean(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.values().sum::<f64>() / self.points.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let var =
            self.values().map(|v| (v - mean).powi(2)).sum::<f64>() / self.points.len() as f64;
        var.sqrt()
    }
}

// Scripted constants for the false-signal demonstration. The band fractions
// and magnitudes are fixed; the visual demo depends on them.
const FALSE_SIGNAL_BASELINE: f64 = 42.8;
const FIRST_DIP: (f64, f64) = (0.25, 0.40);
const FIRST_RECOVERY: (f64, f64) = (0.40, 0.45);
const SECOND_DIP: (f64, f64) = (0.60, 0.70);
const SECOND_RECOVERY: (f64, f64) = (0.70, 0.72);

/// Generate a window for the given range and spec.
///
/// Values are clamped at zero and rounded to two decimals.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, range: TimeRange, spec: &SeriesSpec) -> TimeSeries {
    let total = range.minutes() as f64;
    let points = window_offsets(range)
        .map(|minutes_ago| {
            let value = match spec.scenario {
                Scenario::Normal => normal_value(rng, spec, minutes_ago),
                Scenario::FalseSignal => {
                    false_signal_value(rng, spec, (total - minutes_ago) / total)
                }
            };
            SeriesPoint {
                minutes_ago,
                value: round2(value.max(0.0)),
            }
        })
        .collect();
    TimeSeries { points }
}

fn normal_value<R: Rng + ?Sized>(rng: &mut R, spec: &SeriesSpec, minutes_ago: f64) -> f64 {
    let noise = (rng.random::<f64>() - 0.5) * spec.variance;
    let trend = (minutes_ago / 60.0).sin() * spec.variance * 0.3;
    spec.baseline + noise + trend
}

fn false_signal_value<R: Rng + ?Sized>(rng: &mut R, spec: &SeriesSpec, progress: f64) -> f64 {
    if progress > FIRST_DIP.0 && progress < FIRST_DIP.1 {
        // Sudden drop that looks like an alarm (pressure loss)
        38.2 - rng.random::<f64>() * 2.5
    } else if progress > FIRST_RECOVERY.0 && progress < FIRST_RECOVERY.1 {
        // Quick return to baseline (indicating a false alarm)
        spec.baseline + (rng.random::<f64>() - 0.5) * 1.2
    } else if progress > SECOND_DIP.0 && progress < SECOND_DIP.1 {
        // A second, smaller drop
        40.5 - rng.random::<f64>() * 1.2
    } else if progress > SECOND_RECOVERY.0 && progress < SECOND_RECOVERY.1 {
        spec.baseline + (rng.random::<f64>() - 0.5) * 1.2
    } else {
        spec.baseline + (rng.random::<f64>() - 0.5) * spec.variance
    }
}

/// Offsets for one window: `total, total-spacing, .., 0` minutes ago.
fn window_offsets(range: TimeRange) -> impl Iterator<Item = f64> {
    let total = range.minutes() as f64;
    assert!(total > 0.0, "window must cover a positive span");
    let spacing = total / (SAMPLES_PER_WINDOW - 1) as f64;
    (0..SAMPLES_PER_WINDOW).map(move |i| total - i as f64 * spacing)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_range_yields_fixed_sample_count() {
        let mut rng = StdRng::seed_from_u64(3);
        for range in TimeRange::ALL {
            let series = generate(&mut rng, range, &SeriesSpec::normal(42.8, 1.2));
            assert_eq!(series.len(), SAMPLES_PER_WINDOW, "{}", range.label());
            let scripted = generate(&mut rng, range, &SeriesSpec::false_signal());
            assert_eq!(scripted.len(), SAMPLES_PER_WINDOW, "{}", range.label());
        }
    }

    #[test]
    fn test_window_is_oldest_first_newest_last() {
        let mut rng = StdRng::seed_from_u64(9);
        let series = generate(&mut rng, TimeRange::Hour6, &SeriesSpec::normal(65.5, 1.8));
        assert_eq!(series.points.first().unwrap().minutes_ago, 360.0);
        assert_eq!(series.points.last().unwrap().minutes_ago, 0.0);
        for pair in series.points.windows(2) {
            assert!(pair[0].minutes_ago > pair[1].minutes_ago);
        }
    }

    #[test]
    fn test_regeneration_is_structurally_stable() {
        // Different draws, same shape: same length, same boundary offsets.
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let spec = SeriesSpec::normal(38.5, 3.2);
        let first = generate(&mut a, TimeRange::Hour24, &spec);
        let second = generate(&mut b, TimeRange::Hour24, &spec);
        assert_eq!(first.len(), second.len());
        assert_eq!(
            first.points.first().unwrap().minutes_ago,
            second.points.first().unwrap().minutes_ago
        );
        assert_eq!(
            first.points.last().unwrap().minutes_ago,
            second.points.last().unwrap().minutes_ago
        );
        assert_ne!(
            first.points.iter().map(|p| p.value).collect::<Vec<_>>(),
            second.points.iter().map(|p| p.value).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_normal_series_stays_near_baseline() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = generate(&mut rng, TimeRange::Hour1, &SeriesSpec::normal(42.8, 1.2));
        for v in series.values() {
            // Noise is at most variance/2, trend at most 0.3 * variance.
            assert!((v - 42.8).abs() <= 1.2 * 0.8 + 0.01, "outlier {v}");
        }
    }

    #[test]
    fn test_false_signal_dips_inside_scripted_bands() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate(&mut rng, TimeRange::Hour1, &SeriesSpec::false_signal());
        let total = TimeRange::Hour1.minutes() as f64;
        for p in &series.points {
            let progress = (total - p.minutes_ago) / total;
            if progress > 0.27 && progress < 0.38 {
                assert!(p.value < 38.3, "first dip missing at {progress}: {}", p.value);
            }
            if progress > 0.47 && progress < 0.58 {
                assert!(
                    (p.value - 42.8).abs() <= 0.91,
                    "expected recovery near baseline at {progress}: {}",
                    p.value
                );
            }
            if progress > 0.62 && progress < 0.68 {
                assert!(p.value <= 40.5, "second dip missing at {progress}: {}", p.value);
            }
        }
    }

    #[test]
    fn test_series_statistics() {
        let series = TimeSeries {
            points: vec![
                SeriesPoint { minutes_ago: 2.0, value: 2.0 },
                SeriesPoint { minutes_ago: 1.0, value: 4.0 },
                SeriesPoint { minutes_ago: 0.0, value: 6.0 },
            ],
        };
        assert!((series.mean() - 4.0).abs() < 1e-9);
        assert!((series.std_dev() - (8.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(series.current(), Some(6.0));
        assert_eq!(series.previous(), Some(4.0));
    }

    #[test]
    fn test_range_cycle_and_labels() {
        assert_eq!(TimeRange::Hour1.next(), TimeRange::Hour6);
        assert_eq!(TimeRange::Day7.next(), TimeRange::Hour1);
        assert_eq!(TimeRange::Day7.hours(), 168);
        assert_eq!(TimeRange::Hour24.label(), "24h");
    }
}
