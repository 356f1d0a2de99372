//! Growth and retry constants for line reading.
//!
//! These values pin down the observable behaviour of the readers: the exact capacity sequence a
//! line buffer walks through while it grows, and the notice printed when a line is rejected.
//!
//! # Growth Sequence
//!
//! A line buffer starts with no storage at all. The first byte allocates [`INITIAL_CAPACITY`]
//! bytes and every further growth doubles the previous capacity:
//!
//! `0 -> 32 -> 64 -> 128 -> ... -> PRACTICAL_MAX_SIZE`
//!
//! # Invariant
//!
//! - `INITIAL_CAPACITY` is a power of 2 and at least 2 (room for one byte plus the terminator)
//! - `PRACTICAL_MAX_SIZE > INITIAL_CAPACITY` and is a power of 2 multiple of `INITIAL_CAPACITY`
//!
//! Both together guarantee that doubling from `INITIAL_CAPACITY` lands exactly on
//! `PRACTICAL_MAX_SIZE` and never overflows.

/// Capacity (32 bytes) allocated when the first byte of a line arrives.
pub const INITIAL_CAPACITY: usize =
    // 2^5 = 32
    1 << 5;

/// Largest capacity reachable by doubling from [`INITIAL_CAPACITY`].
///
/// This is a platform limit rather than a recommendation. A `Vec<u8>` can never hold more than
/// `isize::MAX` bytes, so the largest power of two below that bound is the last step of the growth
/// sequence. A line that would need more is reported as an allocation failure.
pub const PRACTICAL_MAX_SIZE: usize = 1 << (usize::BITS - 2);

/// Notice written to the output after a line is rejected by a typed reader.
pub const RETRY_NOTICE: &str = "Retry: ";
