//! # Ringstats
//!
//! Running averages over a fixed-capacity circular buffer, for small targets.
//!
//! Ringstats keeps the last `N` samples of a stream in a ring buffer sized once
//! at construction and maintains the running sum incrementally, so the moving
//! average costs O(1) per sample. Windowed queries (last-N, subsets, buffer
//! extremes, dispersion) scan the window on demand.
//!
//! ## Features
//!
//! - **Running average**: incremental sum, O(1) fast average, full recompute
//! - **Partial windows**: allocate `N` slots, analyse only the first `K`
//! - **Extremes**: all-time min/max since reset, plus min/max of the window
//! - **Windowed queries**: average/min/max of the last `n` samples, subsets
//! - **Dispersion**: sample standard deviation and standard error
//! - **Graceful degradation**: failed allocation yields an inert buffer, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use ringstats::prelude::*;
//!
//! let mut avg = RunningAverage::new(4);
//! for reading in [512, 520, 508, 516, 530] {
//!     avg.add(reading);
//! }
//!
//! // 512 was evicted by 530
//! assert_eq!(avg.fast_average(), Some(518));
//! assert_eq!(avg.min(), Some(508));
//! assert_eq!(avg.min_in_buffer(), Some(508));
//! assert_eq!(avg.average_last(2), Some(523));
//! ```
//!
//! ## Missing data
//!
//! Every query that needs at least one sample (two for dispersion) returns
//! `None` on an empty window. Out-of-range positions also return `None`;
//! counts are clamped to what the window holds.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Without it the crate is
//!   `no_std` + `alloc` and float math goes through `libm`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod average;
pub mod traits;

mod math;

pub mod prelude {
    pub use crate::average::{RunningAverage, Sample, Sum};
    pub use crate::traits::*;
}

pub use average::RunningAverage;
pub use traits::CapacityError;
