//! Running averages over a circular sample buffer
//!
//! This module provides [`RunningAverage`], a ring buffer of [`Sample`]s that
//! keeps its running sum up to date on every insertion. The buffer can be
//! narrowed to a partial window so a large allocation can serve a shorter
//! trailing average.
//!
//! # Example
//!
//! ```
//! use ringstats::average::RunningAverage;
//!
//! let mut avg = RunningAverage::new(8);
//!
//! // Only average over the 3 most recent samples
//! avg.set_window_size(3);
//! for value in [10, 20, 30, 40] {
//!     avg.add(value);
//! }
//!
//! assert_eq!(avg.fast_average(), Some(30));
//! assert!(avg.is_full());
//! assert_eq!(avg.min(), Some(10)); // extremes survive eviction
//! assert_eq!(avg.min_in_buffer(), Some(20));
//! ```

mod dispersion;
mod recent;
mod running;

pub use running::{Iter, RunningAverage};

/// Sample type stored in the buffer
pub type Sample = u16;

/// Accumulator type for the running sum
pub type Sum = u32;

/// Largest supported capacity
///
/// Bounded so that a window full of `Sample::MAX` values still fits in [`Sum`].
pub const MAX_CAPACITY: usize = u16::MAX as usize;
