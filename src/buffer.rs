//! Growable storage for a single line of input.
//!
//! The [`LineBuffer`] type accumulates the bytes of one line while it is being read. It starts
//! without any storage and grows along a fixed doubling sequence, so a line of any length can be
//! read without a fixed-size limit. It is used internally by
//! [`Console::read_line`](crate::Console::read_line) and is exposed for users who want to drive
//! the growth policy themselves.
//!
//! # Example
//!
//! ```
//! use typed_input::buffer::LineBuffer;
//! use typed_input::constants::INITIAL_CAPACITY;
//!
//! let mut buffer = LineBuffer::new();
//! assert_eq!(buffer.cap(), 0); // Nothing allocated yet
//!
//! for &byte in b"Hello" {
//!     buffer.push(byte).unwrap();
//! }
//! assert_eq!(buffer.cap(), INITIAL_CAPACITY);
//!
//! // Finishing shrinks to the content plus the terminator
//! let line = buffer.finish();
//! assert_eq!(line.as_bytes(), b"Hello");
//! assert_eq!(line.capacity(), 6);
//! ```

use crate::constants::{INITIAL_CAPACITY, PRACTICAL_MAX_SIZE};
use crate::line::InputLine;
use thiserror::Error;

/// The line buffer could not grow to hold the next byte.
///
/// Either the allocator refused the request or the requested capacity exceeds the growth limit
/// the buffer was created with.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot grow line buffer to {requested} bytes")]
pub struct AllocationFailure {
    /// The capacity the buffer tried to grow to.
    pub requested: usize,
}

/// A growable byte buffer following the line-reading growth policy.
///
/// # Capacity Management
///
/// - **Start**: no storage is allocated until the first byte is pushed.
/// - **Growth**: whenever the next byte would not leave room for the terminator
///   (`len + 1 >= cap`), the capacity becomes [`INITIAL_CAPACITY`] if it was zero, or doubles
///   otherwise. A line of length `n` therefore causes `O(log n)` reallocations.
/// - **Finish**: [`finish()`](Self::finish) shrinks the storage to exactly `len + 1` bytes and
///   writes the terminator.
///
/// # Invariants
///
/// This buffer maintains `0 <= len < cap == buf.len() <= buf.capacity()` whenever `cap > 0`, and
/// `len == cap == 0` before the first byte. Unused bytes past `len` are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// Internal storage, zero-filled up to `cap`.
    buf: Vec<u8>,
    /// Logical capacity on the growth sequence.
    cap: usize,
    /// Number of line bytes stored.
    len: usize,
    /// Number of times the capacity was doubled (the first allocation is not a doubling).
    doublings: usize,
    /// Largest capacity this buffer may grow to.
    limit: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Creates an empty buffer that may grow up to [`PRACTICAL_MAX_SIZE`].
    ///
    /// No memory is allocated until the first byte is pushed.
    #[inline]
    pub fn new() -> Self {
        Self::with_limit(PRACTICAL_MAX_SIZE)
    }

    /// Creates an empty buffer that refuses to grow beyond `limit` bytes.
    ///
    /// The limit is clamped to [`PRACTICAL_MAX_SIZE`]. Since capacities only take values on the
    /// growth sequence, the effective limit is the largest sequence value not above `limit`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_input::buffer::LineBuffer;
    /// let mut buffer = LineBuffer::with_limit(32);
    /// for _ in 0..31 {
    ///     buffer.push(b'x').unwrap();
    /// }
    ///
    /// // 31 bytes plus the terminator fill 32 bytes, the next byte needs 64
    /// let err = buffer.push(b'x').unwrap_err();
    /// assert_eq!(err.requested, 64);
    /// ```
    #[inline]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
            len: 0,
            doublings: 0,
            limit: limit.min(PRACTICAL_MAX_SIZE),
        }
    }

    /// Returns the stored line bytes.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the current capacity in bytes.
    ///
    /// This is `0` before the first byte and a value on the growth sequence afterwards.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the number of line bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no byte has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns how many times the capacity has doubled so far.
    ///
    /// The initial allocation of [`INITIAL_CAPACITY`] bytes is not counted.
    #[inline]
    pub fn doublings(&self) -> usize {
        self.doublings
    }

    /// Returns the capacity that follows `cap` on the growth sequence.
    ///
    /// Returns `None` once the sequence would pass [`PRACTICAL_MAX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_input::buffer::LineBuffer;
    /// # use typed_input::constants::PRACTICAL_MAX_SIZE;
    /// assert_eq!(LineBuffer::next_capacity(0), Some(32));
    /// assert_eq!(LineBuffer::next_capacity(32), Some(64));
    /// assert_eq!(LineBuffer::next_capacity(64), Some(128));
    /// assert_eq!(LineBuffer::next_capacity(PRACTICAL_MAX_SIZE), None);
    /// ```
    #[inline]
    pub fn next_capacity(cap: usize) -> Option<usize> {
        if cap == 0 {
            return Some(INITIAL_CAPACITY);
        }

        cap.checked_mul(2).filter(|&next| next <= PRACTICAL_MAX_SIZE)
    }

    /// Returns the capacity a buffer reaches after `len` bytes have been pushed.
    ///
    /// This is `0` for an empty line, otherwise the smallest value on the growth sequence that is
    /// at least `len + 1`. Returns `None` if no such value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_input::buffer::LineBuffer;
    /// assert_eq!(LineBuffer::capacity_for(0), Some(0));
    /// assert_eq!(LineBuffer::capacity_for(1), Some(32));
    /// assert_eq!(LineBuffer::capacity_for(31), Some(32));
    /// assert_eq!(LineBuffer::capacity_for(32), Some(64));
    /// assert_eq!(LineBuffer::capacity_for(1000), Some(1024));
    /// ```
    #[inline]
    pub fn capacity_for(len: usize) -> Option<usize> {
        if len == 0 {
            return Some(0);
        }

        // The sequence is every power of two from `INITIAL_CAPACITY` upwards
        len.checked_add(1)
            .and_then(usize::checked_next_power_of_two)
            .map(|cap| cap.max(INITIAL_CAPACITY))
            .filter(|&cap| cap <= PRACTICAL_MAX_SIZE)
    }

    /// Grows the buffer to the next capacity on the growth sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailure`] if the next capacity exceeds the growth limit or the
    /// allocator cannot provide it. All stored bytes are released in that case and the buffer is
    /// left empty.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    pub fn grow(&mut self) -> Result<(), AllocationFailure> {
        let requested = if self.cap == 0 {
            INITIAL_CAPACITY
        } else {
            self.cap.saturating_mul(2)
        };

        let next = match Self::next_capacity(self.cap) {
            Some(next) if next <= self.limit => next,
            _ => return Err(self.release(requested)),
        };

        // `buf.len() == cap < next` so this can't underflow
        if self.buf.try_reserve_exact(next - self.buf.len()).is_err() {
            return Err(self.release(requested));
        }
        self.buf.resize(next, 0);

        if self.cap != 0 {
            self.doublings += 1;
        }
        self.cap = next;

        Ok(())
    }

    /// Appends one byte, growing first if it would not leave room for the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailure`] if growth was needed and failed. See [`grow()`](Self::grow).
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), AllocationFailure> {
        // `len < cap <= PRACTICAL_MAX_SIZE` so `len + 1` can't overflow
        if self.len + 1 >= self.cap {
            self.grow()?;
        }

        self.buf[self.len] = byte;
        self.len += 1;

        Ok(())
    }

    /// Turns the buffer into a finished [`InputLine`].
    ///
    /// The storage is shrunk to exactly `len + 1` bytes and the terminator is written at index
    /// `len`. An empty buffer produces an empty line.
    pub fn finish(mut self) -> InputLine {
        self.buf.truncate(self.len);
        self.buf.push(0);
        self.buf.shrink_to_fit();

        InputLine::from_terminated(self.buf, self.doublings)
    }

    /// Drops all storage and builds the failure for `requested`.
    fn release(&mut self, requested: usize) -> AllocationFailure {
        self.buf = Vec::new();
        self.cap = 0;
        self.len = 0;

        AllocationFailure { requested }
    }
}

#[cfg(test)]
mod tests;
