//! Strict whole-line conversions used by the typed readers.
//!
//! A conversion either consumes the entire line or fails. There is no partial result: `"42abc"`
//! is not `42`, and an empty or blank line is never zero.
//!
//! # Numeric rules
//!
//! - Leading ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`) is skipped.
//! - Anything after the number, trailing whitespace included, rejects the line.
//! - Integers are decimal with an optional sign. No exponent, no base prefix, and the value must
//!   fit the target type.
//! - Floats take the usual decimal or exponential form (`3.14`, `-.5`, `6.02e23`) as well as
//!   `inf`, `infinity` and `nan`, case-insensitively.
//! - Lines that are not valid UTF-8 are rejected.
//!
//! ```
//! use typed_input::parse::FromLine;
//! # use typed_input::Console;
//! # use std::io::Cursor;
//! # let mut console = Console::new(Cursor::new("  -17\n"), Vec::new());
//! # let line = console.read_line("").unwrap().into_line().unwrap();
//!
//! // `line` holds "  -17"
//! assert_eq!(i32::from_line(&line), Some(-17));
//! assert_eq!(u8::from_line(&line), None);
//! ```

use crate::line::InputLine;

/// Outcome of a typed reader.
///
/// Malformed lines never show up here: they are retried until a value arrives or the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parsed<T> {
    /// A line was converted successfully.
    Value(T),

    /// The input ended before a valid line was read.
    EndOfInput,
}

impl<T> Parsed<T> {
    /// Returns a reference to the value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::EndOfInput => None,
        }
    }

    /// Converts into an [`Option`], mapping end-of-input to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::EndOfInput => None,
        }
    }

    /// Returns `true` if the input ended before a value was read.
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Maps the contained value, leaving end-of-input untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Parsed<U> {
        match self {
            Self::Value(value) => Parsed::Value(f(value)),
            Self::EndOfInput => Parsed::EndOfInput,
        }
    }
}

impl<T> From<Parsed<T>> for Option<T> {
    fn from(parsed: Parsed<T>) -> Self {
        parsed.into_option()
    }
}

/// Types a typed reader can produce from one line.
///
/// Returning `None` marks the line as malformed, which makes the reader print its retry notice
/// and ask again.
pub trait FromLine: Sized {
    /// Converts the whole line, or returns `None` if any part of it does not fit.
    fn from_line(line: &InputLine) -> Option<Self>;
}

/// Exactly one byte, returned as the matching `char` (`U+0000` to `U+00FF`).
impl FromLine for char {
    fn from_line(line: &InputLine) -> Option<Self> {
        match line.as_bytes() {
            &[byte] => Some(char::from(byte)),
            _ => None,
        }
    }
}

/// Any valid UTF-8 line, including an empty one.
impl FromLine for String {
    fn from_line(line: &InputLine) -> Option<Self> {
        line.to_str().ok().map(str::to_owned)
    }
}

macro_rules! from_line_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromLine for $ty {
                fn from_line(line: &InputLine) -> Option<Self> {
                    numeric_text(line)?.parse().ok()
                }
            }
        )*
    };
}

from_line_via_from_str!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Returns the line with leading whitespace skipped, or `None` if nothing numeric can remain.
fn numeric_text(line: &InputLine) -> Option<&str> {
    let text = line
        .to_str()
        .ok()?
        .trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));

    // A blank line is never a number
    (!text.is_empty()).then_some(text)
}
