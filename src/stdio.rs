//! Typed reads on the process stdin and stdout.
//!
//! Each function locks stdin and stdout for the duration of one call through
//! [`Console::stdio`]. Input past the consumed line stays in the shared stdin buffer, so calls
//! can be mixed freely with other reads from [`std::io::stdin`].
//!
//! ```no_run
//! use typed_input::{stdio, Parsed};
//!
//! match stdio::read_int("How many? ").unwrap() {
//!     Parsed::Value(n) => println!("{n} it is"),
//!     Parsed::EndOfInput => println!("no answer"),
//! }
//! ```

use crate::error::Result;
use crate::line::ReadOutcome;
use crate::parse::Parsed;
use crate::prompt::Prompt;
use crate::reader::Console;
use std::io;

/// Reads one line from stdin after printing `prompt`. See [`Console::read_line`].
///
/// # Errors
///
/// Returns any I/O error from stdin or stdout.
pub fn read_line<P: Prompt>(prompt: P) -> io::Result<ReadOutcome> {
    Console::stdio().read_line(prompt)
}

/// Reads a single character from stdin. See [`Console::read_char`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_char<P: Prompt>(prompt: P) -> Result<Parsed<char>> {
    Console::stdio().read_char(prompt)
}

/// Reads an `i32` from stdin. See [`Console::read_int`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_int<P: Prompt>(prompt: P) -> Result<Parsed<i32>> {
    Console::stdio().read_int(prompt)
}

/// Reads an `i64` from stdin. See [`Console::read_long`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_long<P: Prompt>(prompt: P) -> Result<Parsed<i64>> {
    Console::stdio().read_long(prompt)
}

/// Reads an `f32` from stdin. See [`Console::read_float`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_float<P: Prompt>(prompt: P) -> Result<Parsed<f32>> {
    Console::stdio().read_float(prompt)
}

/// Reads an `f64` from stdin. See [`Console::read_double`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_double<P: Prompt>(prompt: P) -> Result<Parsed<f64>> {
    Console::stdio().read_double(prompt)
}

/// Reads a UTF-8 line from stdin. See [`Console::read_string`].
///
/// # Errors
///
/// See [`Console::read_until_valid`].
pub fn read_string<P: Prompt>(prompt: P) -> Result<Parsed<String>> {
    Console::stdio().read_string(prompt)
}
