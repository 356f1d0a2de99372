//! Tests for the LineBuffer
//!
//! These tests are in the same narrative order as the main file, and are designed to not depend on
//! things that we've yet to have written tests for, at least narratively.

#![expect(
    clippy::indexing_slicing,
    clippy::unwrap_used,
    reason = "Okay in tests"
)]

use super::*;

// -----------------------------------------------------------------------------
// AllocationFailure
// -----------------------------------------------------------------------------

#[test]
fn test_allocation_failure_display() {
    let failure = AllocationFailure { requested: 64 };
    assert_eq!(failure.to_string(), "cannot grow line buffer to 64 bytes");
}

// -----------------------------------------------------------------------------
// LineBuffer - Creation
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_new() {
    let buffer = LineBuffer::new();

    // Nothing is allocated up front
    assert_eq!(buffer.buf.capacity(), 0);
    assert_eq!(buffer.cap, 0);
    assert_eq!(buffer.len, 0);
    assert_eq!(buffer.doublings, 0);
    assert_eq!(buffer.limit, PRACTICAL_MAX_SIZE);

    assert_eq!(buffer, LineBuffer::default());
}

#[test]
fn test_buffer_with_limit() {
    let buffer = LineBuffer::with_limit(100);
    assert_eq!(buffer.limit, 100);
    assert_eq!(buffer.cap, 0);

    // Limits past the practical maximum are clamped
    let buffer = LineBuffer::with_limit(usize::MAX);
    assert_eq!(buffer.limit, PRACTICAL_MAX_SIZE);
}

// -----------------------------------------------------------------------------
// LineBuffer - Growth sequence
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_next_capacity() {
    assert_eq!(LineBuffer::next_capacity(0), Some(INITIAL_CAPACITY));
    assert_eq!(LineBuffer::next_capacity(32), Some(64));
    assert_eq!(LineBuffer::next_capacity(1024), Some(2048));

    // The last step lands exactly on the maximum, and nothing follows it
    assert_eq!(
        LineBuffer::next_capacity(PRACTICAL_MAX_SIZE / 2),
        Some(PRACTICAL_MAX_SIZE)
    );
    assert_eq!(LineBuffer::next_capacity(PRACTICAL_MAX_SIZE), None);
    assert_eq!(LineBuffer::next_capacity(usize::MAX), None);
}

#[test]
fn test_buffer_capacity_for() {
    assert_eq!(LineBuffer::capacity_for(0), Some(0));
    assert_eq!(LineBuffer::capacity_for(1), Some(32));
    assert_eq!(LineBuffer::capacity_for(31), Some(32));
    assert_eq!(LineBuffer::capacity_for(32), Some(64));
    assert_eq!(LineBuffer::capacity_for(63), Some(64));
    assert_eq!(LineBuffer::capacity_for(64), Some(128));

    // Nothing on the sequence can hold this
    assert_eq!(LineBuffer::capacity_for(PRACTICAL_MAX_SIZE), None);
    assert_eq!(LineBuffer::capacity_for(usize::MAX), None);
}

#[test]
fn test_buffer_grow() {
    let mut buffer = LineBuffer::new();

    // The first growth allocates the initial capacity and is not a doubling
    buffer.grow().unwrap();
    assert_eq!(buffer.cap(), INITIAL_CAPACITY);
    assert_eq!(buffer.buf.len(), INITIAL_CAPACITY); // Also double check the internals
    assert_eq!(buffer.doublings(), 0);

    // Each further growth doubles
    buffer.grow().unwrap();
    assert_eq!(buffer.cap(), 2 * INITIAL_CAPACITY);
    assert_eq!(buffer.buf.len(), 2 * INITIAL_CAPACITY);
    assert_eq!(buffer.doublings(), 1);

    // And again for good measure
    buffer.grow().unwrap();
    assert_eq!(buffer.cap(), 4 * INITIAL_CAPACITY);
    assert_eq!(buffer.buf.len(), 4 * INITIAL_CAPACITY);
    assert_eq!(buffer.doublings(), 2);
}

#[test]
fn test_buffer_grow_past_limit() {
    let mut buffer = LineBuffer::with_limit(64);
    buffer.push(b'a').unwrap();
    buffer.grow().unwrap();
    assert_eq!(buffer.cap(), 64);

    // The next step would be 128
    let failure = buffer.grow().unwrap_err();
    assert_eq!(failure, AllocationFailure { requested: 128 });

    // Everything was released
    assert_eq!(buffer.cap(), 0);
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.buf.capacity(), 0);
}

#[test]
fn test_buffer_limit_below_initial_capacity() {
    // Not even the first allocation fits
    let mut buffer = LineBuffer::with_limit(16);
    let failure = buffer.push(b'a').unwrap_err();
    assert_eq!(failure.requested, INITIAL_CAPACITY);
    assert!(buffer.is_empty());
}

// -----------------------------------------------------------------------------
// LineBuffer - Push
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_push() {
    let mut buffer = LineBuffer::new();

    buffer.push(b'H').unwrap();
    buffer.push(b'i').unwrap();
    assert_eq!(buffer.as_bytes(), b"Hi");
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.cap(), INITIAL_CAPACITY);

    // Unused space stays zeroed
    assert!(buffer.buf[2..].iter().all(|&b| b == 0));
}

#[test]
fn test_buffer_push_growth_boundaries() {
    let mut buffer = LineBuffer::new();

    // 31 bytes plus room for the terminator fit in the first allocation
    for _ in 0..31 {
        buffer.push(b'x').unwrap();
    }
    assert_eq!(buffer.cap(), 32);
    assert_eq!(buffer.doublings(), 0);

    // The 32nd byte doubles
    buffer.push(b'x').unwrap();
    assert_eq!(buffer.cap(), 64);
    assert_eq!(buffer.doublings(), 1);

    // Up to 63 bytes fit in 64
    for _ in 32..63 {
        buffer.push(b'x').unwrap();
    }
    assert_eq!(buffer.cap(), 64);

    // And the 64th doubles again
    buffer.push(b'x').unwrap();
    assert_eq!(buffer.cap(), 128);
    assert_eq!(buffer.doublings(), 2);
    assert_eq!(buffer.len(), 64);
    assert!(buffer.as_bytes().iter().all(|&b| b == b'x'));
}

#[test]
fn test_buffer_push_matches_capacity_for() {
    let mut buffer = LineBuffer::new();

    for len in 1..=2048 {
        buffer.push(b'z').unwrap();
        assert_eq!(Some(buffer.cap()), LineBuffer::capacity_for(len));
        assert!(buffer.cap() > buffer.len());
    }

    // 2049 bytes still fit in 4096, reached in 7 doublings from 32
    buffer.push(b'z').unwrap();
    assert_eq!(buffer.cap(), 4096);
    assert_eq!(buffer.doublings(), 7);
}

#[test]
fn test_buffer_push_with_limit() {
    let mut buffer = LineBuffer::with_limit(32);

    for _ in 0..31 {
        buffer.push(b'y').unwrap();
    }

    let failure = buffer.push(b'y').unwrap_err();
    assert_eq!(failure.requested, 64);
    assert!(buffer.is_empty());
    assert_eq!(buffer.as_bytes(), b"");
}

// -----------------------------------------------------------------------------
// LineBuffer - Finish
// -----------------------------------------------------------------------------

#[test]
fn test_buffer_finish() {
    let mut buffer = LineBuffer::new();
    for &byte in b"Hello" {
        buffer.push(byte).unwrap();
    }

    let line = buffer.finish();

    // Shrunk to the content plus the terminator
    assert_eq!(line.as_bytes(), b"Hello");
    assert_eq!(line.as_bytes_with_nul(), b"Hello\0");
    assert_eq!(line.capacity(), 6);
    assert_eq!(line.doublings(), 0);
}

#[test]
fn test_buffer_finish_empty() {
    let line = LineBuffer::new().finish();

    assert!(line.is_empty());
    assert_eq!(line.as_bytes_with_nul(), b"\0");
    assert_eq!(line.capacity(), 1);
}

#[test]
fn test_buffer_finish_keeps_doublings() {
    let mut buffer = LineBuffer::new();
    for _ in 0..100 {
        buffer.push(b'q').unwrap();
    }
    assert_eq!(buffer.cap(), 128);

    let line = buffer.finish();
    assert_eq!(line.len(), 100);
    assert_eq!(line.capacity(), 101);
    assert_eq!(line.doublings(), 2);
}
