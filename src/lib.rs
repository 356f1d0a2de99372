//! Line input of any length, and typed input that asks again until it gets a valid value.
//!
//! Reading user input into a fixed-size buffer is a classic source of overflows. This crate reads
//! a whole line into storage that grows on demand, then optionally converts that line strictly
//! into a character, integer, or float. Malformed lines are answered with a retry notice and a
//! fresh prompt. The end of the input is reported as its own outcome, never as a magic value.
//!
//! # When to use this
//!
//! This crate is a good fit for interactive command-line programs and exercises that read simple
//! typed values from a terminal, a pipe, or an in-memory buffer in tests. It does not tokenize: a
//! line holds exactly one value.
//!
//! # Quick start
//!
//! ```
//! use typed_input::{Console, Parsed, ReadOutcome};
//! use std::io::Cursor;
//!
//! let input = "Ada\nforty\n36\n";
//! let mut console = Console::new(Cursor::new(input), Vec::new());
//!
//! // Read a raw line
//! let name = console.read_line("Name: ").unwrap().into_line().unwrap();
//! assert_eq!(name, "Ada");
//!
//! // Read a typed value, the malformed line is retried
//! let age = console.read_int(format_args!("Age of {}: ", name.to_str().unwrap())).unwrap();
//! assert_eq!(age, Parsed::Value(36));
//!
//! // The input is exhausted now
//! assert_eq!(console.read_line("").unwrap(), ReadOutcome::EndOfInput);
//! ```
//!
//! # Configuration
//!
//! ```
//! use typed_input::Console;
//! use std::io::Cursor;
//!
//! let console = Console::builder(Cursor::new("data"), Vec::new())
//!     .retry_notice("Try again: ")   // replaces "Retry: "
//!     .max_line_capacity(64 * 1024)  // refuse lines past 64 KiB
//!     .build();
//! ```
//!
//! # Crate organisation
//!
//! - [`Console`] — the primary type, pairing a [`BufRead`](std::io::BufRead) input with a
//!   [`Write`](std::io::Write) output.
//! - [`ConsoleBuilder`] — configures the retry notice and line size cap.
//! - [`Prompt`] — anything that can be rendered before a read, including
//!   [`format_args!`] output.
//! - [`InputLine`], [`ReadOutcome`] and [`Parsed`] — the results of raw and typed reads.
//! - [`parse::FromLine`] — the strict whole-line conversions.
//! - [`buffer::LineBuffer`] — the growable line storage and its doubling policy.
//! - [`stdio`] — the typed reads bound to the process stdin and stdout.
//! - [`constants`] — growth and retry constants.

pub mod buffer;
pub mod constants;
mod error;
mod line;
pub mod parse;
mod prompt;
mod reader;
pub mod stdio;

pub use error::{Error, Result};
pub use line::{InputLine, ReadOutcome};
pub use parse::Parsed;
pub use prompt::{NoPrompt, Prompt, PromptFn, prompt_fn};
pub use reader::{Console, ConsoleBuilder};
