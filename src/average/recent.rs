//! Queries over the most recent samples and cursor-relative subsets

use super::{RunningAverage, Sample, Sum};

impl RunningAverage {
    /// Physical slots of the `n` most recent samples, newest first
    ///
    /// `n` is clamped to the number of valid samples.
    fn newest(&self, n: usize) -> impl Iterator<Item = Sample> + '_ {
        let n = n.min(self.count);
        let mut idx = self.index;
        (0..n).map(move |_| {
            if idx == 0 {
                idx = self.window_size;
            }
            idx -= 1;
            self.slots[idx]
        })
    }

    /// Average of the `n` most recent samples, truncated
    ///
    /// `n` is clamped to the number of valid samples; returns `None` when
    /// nothing is left to average.
    ///
    /// # Example
    ///
    /// ```
    /// use ringstats::RunningAverage;
    ///
    /// let mut avg = RunningAverage::new(5);
    /// avg.extend([1, 2, 3, 4, 5, 6]);
    ///
    /// assert_eq!(avg.average_last(2), Some(5));
    /// assert_eq!(avg.average_last(100), avg.fast_average());
    /// ```
    pub fn average_last(&self, n: usize) -> Option<Sample> {
        let n = n.min(self.count);
        if n == 0 {
            return None;
        }
        let sum: Sum = self.newest(n).map(Sum::from).sum();
        Some((sum / n as Sum) as Sample)
    }

    /// Smallest of the `n` most recent samples
    pub fn min_in_buffer_last(&self, n: usize) -> Option<Sample> {
        self.newest(n).min()
    }

    /// Largest of the `n` most recent samples
    pub fn max_in_buffer_last(&self, n: usize) -> Option<Sample> {
        self.newest(n).max()
    }

    /// Average of `n` consecutive slots starting `start` slots past the cursor
    ///
    /// The scan is relative to the write cursor and wraps at the window size,
    /// so on a full buffer `start = 0` begins at the oldest sample. `n` is
    /// clamped to the number of valid samples.
    pub fn average_subset(&self, start: usize, n: usize) -> Option<Sample> {
        let n = n.min(self.count);
        if n == 0 {
            return None;
        }

        let first = self.index + start % self.window_size;
        let sum: Sum = (0..n)
            .map(|i| Sum::from(self.slots[(first + i) % self.window_size]))
            .sum();
        Some((sum / n as Sum) as Sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_last() {
        let mut avg = RunningAverage::new(4);

        for v in [10, 20, 30, 40, 50, 60] {
            avg.add(v);
        }

        // Window holds 30, 40, 50, 60
        assert_eq!(avg.average_last(1), Some(60));
        assert_eq!(avg.average_last(2), Some(55));
        assert_eq!(avg.average_last(3), Some(50));
        assert_eq!(avg.average_last(4), Some(45));
        assert_eq!(avg.average_last(4), avg.fast_average());
        assert_eq!(avg.average_last(10), Some(45));
        assert_eq!(avg.average_last(0), None);
    }

    #[test]
    fn test_average_last_partial_fill() {
        let mut avg = RunningAverage::new(8);
        avg.extend([3, 6, 9]);

        assert_eq!(avg.average_last(2), Some(7));
        assert_eq!(avg.average_last(8), Some(6));
    }

    #[test]
    fn test_last_wraps_at_window() {
        let mut avg = RunningAverage::new(10);
        avg.set_window_size(3);

        for v in [1, 2, 3, 4] {
            avg.add(v);
        }

        // Physical [4, 2, 3], cursor at 1; slots 3.. never used
        assert_eq!(avg.average_last(3), Some(3));
        assert_eq!(avg.min_in_buffer_last(2), Some(3));
        assert_eq!(avg.max_in_buffer_last(3), Some(4));
        assert_eq!(avg.min_in_buffer_last(3), Some(2));
    }

    #[test]
    fn test_min_max_last() {
        let mut avg = RunningAverage::new(5);

        for v in [9, 1, 7, 3, 5] {
            avg.add(v);
        }

        assert_eq!(avg.min_in_buffer_last(1), Some(5));
        assert_eq!(avg.max_in_buffer_last(1), Some(5));
        assert_eq!(avg.min_in_buffer_last(2), Some(3));
        assert_eq!(avg.max_in_buffer_last(3), Some(7));
        assert_eq!(avg.min_in_buffer_last(5), Some(1));
        assert_eq!(avg.max_in_buffer_last(50), Some(9));
        assert_eq!(avg.min_in_buffer_last(0), None);
    }

    #[test]
    fn test_empty_queries() {
        let avg = RunningAverage::new(5);

        assert_eq!(avg.average_last(5), None);
        assert_eq!(avg.min_in_buffer_last(5), None);
        assert_eq!(avg.max_in_buffer_last(5), None);
        assert_eq!(avg.average_subset(0, 5), None);
    }

    #[test]
    fn test_average_subset() {
        let mut avg = RunningAverage::new(4);

        for v in [10, 20, 30, 40, 50, 60] {
            avg.add(v);
        }

        // Physical [50, 60, 30, 40], cursor at 2; oldest first: 30 40 50 60
        assert_eq!(avg.average_subset(0, 4), Some(45));
        assert_eq!(avg.average_subset(0, 2), Some(35));
        assert_eq!(avg.average_subset(1, 2), Some(45));
        assert_eq!(avg.average_subset(3, 2), Some(45));
        assert_eq!(avg.average_subset(6, 1), Some(50));
        assert_eq!(avg.average_subset(0, 100), Some(45));
        assert_eq!(avg.average_subset(0, 0), None);
    }

    #[test]
    fn test_inert_queries() {
        let avg = RunningAverage::new(0);

        assert_eq!(avg.average_last(3), None);
        assert_eq!(avg.min_in_buffer_last(3), None);
        assert_eq!(avg.max_in_buffer_last(3), None);
        assert_eq!(avg.average_subset(2, 3), None);
    }
}
