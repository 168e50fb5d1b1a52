//! Running average over a fixed-capacity ring buffer
//!
//! The running sum is updated on every insertion by subtracting the evicted
//! slot and adding the new sample, so the average is available in O(1).
//! Slots are zeroed on reset, which lets never-used slots take part in the
//! subtraction without a special case.

use super::{Sample, Sum, MAX_CAPACITY};
use crate::traits::{CapacityError, Window};
use log::{debug, trace, warn};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Running average, minimum and maximum over the most recent samples
///
/// Storage is allocated once at construction. The logical window
/// ([`window_size`](Self::window_size)) may be narrowed to the first `K` of
/// the allocated slots; indices then cycle modulo `K`.
///
/// If the storage cannot be allocated, [`new`](Self::new) returns an inert
/// buffer of capacity 0: every mutation is a no-op and every query reports
/// no data. Use [`try_new`](Self::try_new) to get the error instead.
///
/// # Example
///
/// ```
/// use ringstats::RunningAverage;
///
/// let mut avg = RunningAverage::new(3);
///
/// for value in [1, 2, 3, 4] {
///     avg.add(value);
/// }
///
/// // 1 was overwritten by 4
/// assert_eq!(avg.fast_average(), Some(3));
/// assert_eq!(avg.min(), Some(1));
/// assert_eq!(avg.max(), Some(4));
/// assert_eq!(avg.min_in_buffer(), Some(2));
/// assert_eq!(avg.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningAverage {
    /// Physical slots, `capacity` long
    pub(super) slots: Vec<Sample>,
    /// Logical ring length ("partial")
    pub(super) window_size: usize,
    /// Next slot to overwrite
    pub(super) index: usize,
    /// Number of valid samples
    pub(super) count: usize,
    /// Sum of the valid samples
    pub(super) sum: Sum,
    /// Smallest sample added since the last reset
    pub(super) min: Sample,
    /// Largest sample added since the last reset
    pub(super) max: Sample,
}

impl RunningAverage {
    /// Create a buffer with `capacity` slots
    ///
    /// A capacity of 0, a capacity above [`MAX_CAPACITY`], or a failed
    /// allocation yields an inert buffer.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(avg) => avg,
            Err(err) => {
                warn!("running average is inert: {}", err);
                Self::inert()
            }
        }
    }

    /// Create a buffer with `capacity` slots, reporting why construction failed
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is 0, exceeds [`MAX_CAPACITY`],
    /// or the storage cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        if capacity > MAX_CAPACITY {
            return Err(CapacityError::TooLarge {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| CapacityError::AllocationFailed {
                requested: capacity,
            })?;
        slots.resize(capacity, 0);

        let mut avg = Self {
            slots,
            window_size: capacity,
            index: 0,
            count: 0,
            sum: 0,
            min: 0,
            max: 0,
        };
        avg.clear();
        Ok(avg)
    }

    fn inert() -> Self {
        Self {
            slots: Vec::new(),
            window_size: 0,
            index: 0,
            count: 0,
            sum: 0,
            min: 0,
            max: 0,
        }
    }

    /// Reset counters, extremes and every slot to zero
    ///
    /// The window size is kept.
    pub fn clear(&mut self) {
        trace!("clearing running average (window {})", self.window_size);
        self.count = 0;
        self.index = 0;
        self.sum = 0;
        self.min = 0;
        self.max = 0;
        self.slots.fill(0);
    }

    /// Add a sample, evicting the oldest one once the window is full
    pub fn add(&mut self, value: Sample) {
        if self.is_inert() {
            return;
        }

        let evicted = self.slots[self.index];
        self.slots[self.index] = value;
        self.sum = self.sum - Sum::from(evicted) + Sum::from(value);

        self.index += 1;
        if self.index == self.window_size {
            self.index = 0;
        }

        // First sample of the epoch seeds both extremes
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else if value < self.min {
            self.min = value;
        } else if value > self.max {
            self.max = value;
        }

        // Must come after the extremes, which key off count == 0
        if self.count < self.window_size {
            self.count += 1;
        }
    }

    /// Clear the buffer, then add `value` `number` times
    ///
    /// `number` is capped at the window size; more copies would only
    /// overwrite each other.
    pub fn fill(&mut self, value: Sample, number: usize) {
        self.clear();
        let copies = number.min(self.window_size);
        debug!("filling running average with {} x {}", copies, value);
        for _ in 0..copies {
            self.add(value);
        }
    }

    /// Use only the first `window_size` slots
    ///
    /// 0 or a value above the capacity selects the full capacity. Always
    /// clears the buffer.
    pub fn set_window_size(&mut self, window_size: usize) {
        let capacity = self.capacity();
        self.window_size = if window_size == 0 || window_size > capacity {
            capacity
        } else {
            window_size
        };
        debug!(
            "running average window set to {} of {} slots",
            self.window_size, capacity
        );
        self.clear();
    }

    /// Average of the window, recomputing the running sum from the slots
    ///
    /// The refreshed sum is kept, which also discards any drift in the
    /// incremental sum.
    pub fn average(&mut self) -> Option<Sample> {
        if self.count == 0 {
            return None;
        }
        self.sum = self.valid().iter().map(|&v| Sum::from(v)).sum();
        self.fast_average()
    }

    /// Average of the window from the running sum, truncated
    pub fn fast_average(&self) -> Option<Sample> {
        if self.count == 0 {
            None
        } else {
            // A truncated mean never exceeds the largest sample
            Some((self.sum / self.count as Sum) as Sample)
        }
    }

    /// Smallest sample added since the last reset, even if already evicted
    pub fn min(&self) -> Option<Sample> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest sample added since the last reset, even if already evicted
    pub fn max(&self) -> Option<Sample> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Smallest sample currently in the window
    pub fn min_in_buffer(&self) -> Option<Sample> {
        self.valid().iter().copied().min()
    }

    /// Largest sample currently in the window
    pub fn max_in_buffer(&self) -> Option<Sample> {
        self.valid().iter().copied().max()
    }

    /// Raw value of physical slot `index`
    ///
    /// Returns `None` if the buffer is empty or `index` is outside the window.
    pub fn element(&self, index: usize) -> Option<Sample> {
        if self.count == 0 {
            return None;
        }
        self.slots[..self.window_size].get(index).copied()
    }

    /// The `position`-th oldest sample in the window (0 = oldest)
    pub fn value(&self, position: usize) -> Option<Sample> {
        if position >= self.count {
            return None;
        }

        // Until the first wrap the cursor equals the count and the oldest
        // sample sits in slot 0, so reducing by the count covers both cases.
        let mut slot = self.index + position;
        if slot >= self.count {
            slot -= self.count;
        }
        Some(self.slots[slot])
    }

    /// Iterate over the window from oldest to newest sample
    pub fn iter(&self) -> Iter<'_> {
        let start = if self.count < self.window_size {
            0
        } else {
            self.index
        };
        Iter {
            window: &self.slots[..self.window_size],
            start,
            pos: 0,
            len: self.count,
        }
    }

    /// Number of physical slots (0 when inert)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Logical window length
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of valid samples
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the next sample evicts the oldest one
    pub fn is_full(&self) -> bool {
        !self.is_inert() && self.count == self.window_size
    }

    /// Check if construction failed and the buffer has no storage
    pub fn is_inert(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot the next sample will be written to
    pub fn write_index(&self) -> usize {
        self.index
    }

    /// Running sum of the window
    pub fn sum(&self) -> Sum {
        self.sum
    }

    /// Valid samples in physical slot order
    ///
    /// Before the first wrap the valid samples are exactly the first `count`
    /// slots; once full they are the whole window.
    pub(super) fn valid(&self) -> &[Sample] {
        &self.slots[..self.count]
    }
}

/// Iterator over a [`RunningAverage`] window, oldest sample first
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    window: &'a [Sample],
    start: usize,
    pos: usize,
    len: usize,
}

impl Iterator for Iter<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let slot = (self.start + self.pos) % self.window.len();
        self.pos += 1;
        Some(self.window[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RunningAverage {
    type Item = Sample;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Sample> for RunningAverage {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl Window for RunningAverage {
    type Sample = Sample;

    fn update(&mut self, sample: Self::Sample) {
        self.add(sample);
    }

    fn clear(&mut self) {
        RunningAverage::clear(self);
    }

    fn capacity(&self) -> usize {
        RunningAverage::capacity(self)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.slots.capacity() * core::mem::size_of::<Sample>()
    }

    fn is_full(&self) -> bool {
        RunningAverage::is_full(self)
    }
}
