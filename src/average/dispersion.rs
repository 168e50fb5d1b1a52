//! Standard deviation and standard error of the window
//!
//! Both are computed on demand with one pass over the valid samples. The
//! mean used is the truncated [`fast_average`](RunningAverage::fast_average),
//! so the deviation is measured from the same value the buffer reports as its
//! average.

use super::RunningAverage;
use crate::math;

/// Sample size from which the standard error divides by `sqrt(n)` instead of
/// `sqrt(n - 1)`
const LARGE_SAMPLE: usize = 30;

impl RunningAverage {
    /// Sample standard deviation of the window (Bessel's correction)
    ///
    /// Returns `None` with fewer than two samples.
    ///
    /// # Example
    ///
    /// ```
    /// use ringstats::RunningAverage;
    ///
    /// let mut avg = RunningAverage::new(8);
    /// avg.extend([2, 4, 4, 4, 5, 5, 7, 9]);
    ///
    /// // sqrt(32 / 7)
    /// let stddev = avg.standard_deviation().unwrap();
    /// assert!((stddev - 2.138).abs() < 0.001);
    /// ```
    pub fn standard_deviation(&self) -> Option<f32> {
        if self.count <= 1 {
            return None;
        }

        let mean = f32::from(self.fast_average()?);
        let squares: f32 = self
            .valid()
            .iter()
            .map(|&v| {
                let delta = f32::from(v) - mean;
                delta * delta
            })
            .sum();
        Some(math::sqrt(squares / (self.count - 1) as f32))
    }

    /// Standard error of the window average
    ///
    /// Divides the standard deviation by `sqrt(n)` for 30 or more samples and
    /// by `sqrt(n - 1)` below that. Returns `None` with fewer than two samples.
    pub fn standard_error(&self) -> Option<f32> {
        let deviation = self.standard_deviation()?;
        let n = if self.count >= LARGE_SAMPLE {
            self.count
        } else {
            self.count - 1
        };
        Some(deviation / math::sqrt(n as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f32>, expected: f32) {
        let actual = actual.expect("expected a value");
        assert!(
            (actual - expected).abs() < 1e-3,
            "got {} expected {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_standard_deviation() {
        let mut avg = RunningAverage::new(8);
        avg.extend([2, 4, 4, 4, 5, 5, 7, 9]);

        // Sample variance = 32 / 7
        approx(avg.standard_deviation(), 2.13809);
    }

    #[test]
    fn test_standard_error_small_sample() {
        let mut avg = RunningAverage::new(8);
        avg.extend([2, 4, 4, 4, 5, 5, 7, 9]);

        // Below 30 samples: sqrt(n - 1)
        approx(avg.standard_error(), 2.13809 / 7f32.sqrt());
    }

    #[test]
    fn test_standard_error_large_sample() {
        let mut avg = RunningAverage::new(30);
        for i in 0..30 {
            avg.add(if i % 2 == 0 { 0 } else { 10 });
        }

        // Mean 5, squares 30 * 25 = 750
        let stddev = (750f32 / 29.0).sqrt();
        approx(avg.standard_deviation(), stddev);
        approx(avg.standard_error(), stddev / 30f32.sqrt());
    }

    #[test]
    fn test_uses_truncated_mean() {
        let mut avg = RunningAverage::new(4);
        avg.add(1);
        avg.add(2);

        // fast_average truncates 1.5 to 1: squares 0 + 1
        approx(avg.standard_deviation(), 1.0);
    }

    #[test]
    fn test_constant_window() {
        let mut avg = RunningAverage::new(10);
        avg.fill(42, 10);

        approx(avg.standard_deviation(), 0.0);
        approx(avg.standard_error(), 0.0);
    }

    #[test]
    fn test_too_few_samples() {
        let mut avg = RunningAverage::new(4);

        assert_eq!(avg.standard_deviation(), None);
        assert_eq!(avg.standard_error(), None);

        avg.add(7);
        assert_eq!(avg.standard_deviation(), None);
        assert_eq!(avg.standard_error(), None);

        avg.add(9);
        assert!(avg.standard_deviation().is_some());
    }

    #[test]
    fn test_only_window_counts() {
        let mut avg = RunningAverage::new(3);
        avg.extend([1000, 1, 2, 3]);

        // 1000 is evicted; window 1, 2, 3
        approx(avg.standard_deviation(), 1.0);
    }
}
