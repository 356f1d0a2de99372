//! Error types for typed reads

use std::io;
use thiserror::Error;

use crate::buffer::AllocationFailure;

/// Fatal errors of a typed read.
///
/// Malformed input is not an error (it is retried) and neither is end-of-input (it is reported as
/// [`Parsed::EndOfInput`](crate::Parsed::EndOfInput)).
#[derive(Error, Debug)]
pub enum Error {
    /// The line buffer could not grow
    #[error("failed to allocate {requested} bytes for the input line")]
    Allocation {
        /// The capacity the buffer tried to grow to
        requested: usize,
    },

    /// I/O error on the input or the output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<AllocationFailure> for Error {
    fn from(failure: AllocationFailure) -> Self {
        Self::Allocation {
            requested: failure.requested,
        }
    }
}

/// Result type for typed reads
pub type Result<T> = std::result::Result<T, Error>;
