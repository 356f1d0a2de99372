use std::borrow::Cow;
use std::ffi::{CStr, FromBytesWithNulError};
use std::str::Utf8Error;
use std::string::FromUtf8Error;

/// One line of input with the trailing newline stripped.
///
/// The bytes are stored followed by a single `0` terminator, so the line can be handed to code
/// that expects null-terminated text. The terminator is positional: a line may itself contain
/// `0` bytes, which [`as_bytes()`](Self::as_bytes) keeps and [`to_c_str()`](Self::to_c_str)
/// rejects.
///
/// # Invariants
///
/// `capacity() == len() + 1` and the byte at index `len()` of
/// [`as_bytes_with_nul()`](Self::as_bytes_with_nul) is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputLine {
    /// Line bytes followed by the terminator.
    bytes: Vec<u8>,
    /// Capacity doublings performed while the line was read.
    doublings: usize,
}

impl InputLine {
    /// Wraps storage that already ends with the terminator.
    pub(crate) fn from_terminated(bytes: Vec<u8>, doublings: usize) -> Self {
        debug_assert_eq!(bytes.last(), Some(&0));
        Self { bytes, doublings }
    }

    /// Returns the number of bytes in the line, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` for an empty line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes allocated for the line, including the terminator.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Returns how many times the buffer doubled while this line was read.
    #[inline]
    pub fn doublings(&self) -> usize {
        self.doublings
    }

    /// Returns the line bytes without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.split_last().map_or(&[], |(_, line)| line)
    }

    /// Returns the line bytes including the terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the line as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error`] if the line is not valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    /// Returns the line as text, replacing invalid UTF-8 with `U+FFFD`.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Returns the line as a C string.
    ///
    /// # Errors
    ///
    /// Returns [`FromBytesWithNulError`] if the line contains a `0` byte before the terminator.
    pub fn to_c_str(&self) -> Result<&CStr, FromBytesWithNulError> {
        CStr::from_bytes_with_nul(&self.bytes)
    }

    /// Consumes the line and returns its bytes without the terminator.
    pub fn into_bytes(mut self) -> Vec<u8> {
        let _ = self.bytes.pop();
        self.bytes
    }

    /// Consumes the line and returns it as a [`String`].
    ///
    /// # Errors
    ///
    /// Returns [`FromUtf8Error`] if the line is not valid UTF-8. The bytes can be recovered from
    /// the error.
    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.into_bytes())
    }
}

impl AsRef<[u8]> for InputLine {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for InputLine {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for InputLine {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for InputLine {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Result of a single [`Console::read_line`](crate::Console::read_line) call.
///
/// Exactly one variant holds per call. An empty line is a [`Line`](Self::Line) of length 0 and is
/// never confused with [`EndOfInput`](Self::EndOfInput).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line was read, either up to a newline or up to the end of a non-empty final line.
    Line(InputLine),

    /// The input ended before any byte of a new line was read.
    EndOfInput,

    /// The line buffer could not grow. Everything read for the line so far was discarded.
    AllocationFailure {
        /// The capacity the buffer tried to grow to.
        requested: usize,
    },
}

impl ReadOutcome {
    /// Returns the line, if one was read.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_input::ReadOutcome;
    /// assert!(ReadOutcome::EndOfInput.into_line().is_none());
    /// ```
    pub fn into_line(self) -> Option<InputLine> {
        match self {
            Self::Line(line) => Some(line),
            Self::EndOfInput | Self::AllocationFailure { .. } => None,
        }
    }

    /// Returns `true` if the input was exhausted.
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
