/// Running statistics for one key.
///
/// A `Statistic` only exists once its key has been observed, so `count` is
/// always at least one and `min <= max` holds for non-NaN input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistic {
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub count: u64,
}

impl Statistic {
    /// Statistic seeded by the first observation of a key.
    pub fn new(value: f64) -> Self {
        Self {
            sum: value,
            min: value,
            max: value,
            count: 1,
        }
    }

    /// Fold in one more observation. Ties keep the earlier value, so the
    /// sign of a zero bound is the one seen first.
    pub fn record(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Fold another statistic for the same key into this one.
    pub fn merge(&mut self, other: &Self) {
        self.sum += other.sum;
        self.count += other.count;
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
    }

    /// Arithmetic mean, computed from the running sum on demand.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_sets_everything() {
        let s = Statistic::new(-3.5);
        assert_eq!(s.count, 1);
        assert_eq!(s.min, -3.5);
        assert_eq!(s.max, -3.5);
        assert_eq!(s.mean(), -3.5);
    }

    #[test]
    fn record_tracks_bounds_and_mean() {
        let mut s = Statistic::new(1.0);
        s.record(3.0);
        s.record(-2.0);
        assert_eq!(s.count, 3);
        assert_eq!(s.min, -2.0);
        assert_eq!(s.max, 3.0);
        assert!((s.mean() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn equal_values_keep_the_first_signed_zero() {
        let mut s = Statistic::new(-0.0);
        s.record(0.0);
        assert!(s.min.is_sign_negative());
        assert!(s.max.is_sign_negative());

        let mut s = Statistic::new(0.0);
        s.record(-0.0);
        assert!(s.min.is_sign_positive());
        assert!(s.max.is_sign_positive());
    }

    #[test]
    fn merge_equals_sequential_record() {
        let mut left = Statistic::new(5.0);
        left.record(7.0);
        let mut right = Statistic::new(-1.0);
        right.record(9.5);

        let mut sequential = Statistic::new(5.0);
        for v in [7.0, -1.0, 9.5] {
            sequential.record(v);
        }

        left.merge(&right);
        assert_eq!(left, sequential);
    }
}
