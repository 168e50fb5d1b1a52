//! Core traits and errors for fixed-capacity sample windows
//!
//! Window buffers implement the [`Window`] trait, which covers the
//! mutating and introspection surface shared by every buffer.

use core::fmt::Debug;

/// Error returned by strict buffer construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// A zero-slot buffer was requested
    Zero,
    /// Requested capacity exceeds what the running sum can hold
    TooLarge { requested: usize, max: usize },
    /// The backing storage could not be allocated
    AllocationFailed { requested: usize },
}

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CapacityError::Zero => write!(f, "capacity must be positive"),
            CapacityError::TooLarge { requested, max } => {
                write!(f, "capacity too large: requested {}, max {}", requested, max)
            }
            CapacityError::AllocationFailed { requested } => {
                write!(f, "allocation failed for {} slots", requested)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

/// Core trait for fixed-capacity sample windows
pub trait Window: Clone + Debug {
    /// The type of sample this window holds
    type Sample: Copy;

    /// Push a sample, evicting the oldest one once the window is full
    fn update(&mut self, sample: Self::Sample);

    /// Reset the window to its freshly constructed state
    fn clear(&mut self);

    /// Number of physical slots
    fn capacity(&self) -> usize;

    /// Number of valid samples currently held
    fn len(&self) -> usize;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if the window holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the next sample will evict the oldest one
    fn is_full(&self) -> bool;

    /// Push every sample of a slice in order
    fn update_all(&mut self, samples: &[Self::Sample]) {
        for &sample in samples {
            self.update(sample);
        }
    }
}
