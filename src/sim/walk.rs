//! Bounded random walk for a single metric.

use rand::Rng;

/// A random walk confined to a clamp range.
///
/// Each step moves the value by at most half the configured step in either
/// direction and clamps the result back into `[min, max]` — values drift
/// smoothly from tick to tick and never leave the range. This is a display
/// simulation, not a physical model.
#[derive(Debug, Clone)]
pub struct BoundedWalk {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl BoundedWalk {
    /// Create a walk starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, `step` is not positive, or `start` lies
    /// outside the range. All three are programming errors.
    pub fn new(min: f64, max: f64, step: f64, start: f64) -> Self {
        assert!(min <= max, "walk range is inverted: [{min}, {max}]");
        assert!(step > 0.0, "walk step must be positive, got {step}");
        assert!(
            (min..=max).contains(&start),
            "walk start {start} outside [{min}, {max}]"
        );
        Self {
            min,
            max,
            step,
            value: start,
        }
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advance one tick and return the new value.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let half = self.step / 2.0;
        let delta = rng.random_range(-half..=half);
        self.value = (self.value + delta).clamp(self.min, self.max);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_walk_stays_in_range_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut walk = BoundedWalk::new(40.0, 50.0, 2.0, 45.0);
        for _ in 0..10_000 {
            let v = walk.advance(&mut rng);
            assert!((40.0..=50.0).contains(&v), "walk escaped range: {v}");
        }
    }

    #[test]
    fn test_walk_step_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut walk = BoundedWalk::new(0.0, 100.0, 6.0, 50.0);
        let mut prev = walk.value();
        for _ in 0..1_000 {
            let next = walk.advance(&mut rng);
            assert!(
                (next - prev).abs() <= 3.0 + 1e-9,
                "tick moved more than step/2: {prev} -> {next}"
            );
            prev = next;
        }
    }

    #[test]
    fn test_walk_clamps_at_boundary() {
        let mut rng = StdRng::seed_from_u64(1);
        // Start pinned at the top of a very tight range; every step clamps.
        let mut walk = BoundedWalk::new(9.9, 10.0, 5.0, 10.0);
        for _ in 0..100 {
            let v = walk.advance(&mut rng);
            assert!((9.9..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_walks_are_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut walk = BoundedWalk::new(40.0, 46.0, 1.2, 42.8);
            (0..50).map(|_| walk.advance(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    #[should_panic(expected = "inverted")]
    fn test_inverted_range_panics() {
        let _ = BoundedWalk::new(50.0, 40.0, 2.0, 45.0);
    }

    #[test]
    #[should_panic(expected = "step must be positive")]
    fn test_zero_step_panics() {
        let _ = BoundedWalk::new(0.0, 1.0, 0.0, 0.5);
    }
}
