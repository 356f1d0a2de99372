use crate::buffer::{AllocationFailure, LineBuffer};
use crate::constants::{PRACTICAL_MAX_SIZE, RETRY_NOTICE};
use crate::error::{Error, Result};
use crate::line::ReadOutcome;
use crate::parse::{FromLine, Parsed};
use crate::prompt::Prompt;
use std::any::type_name;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};
use tracing::{debug, trace, warn};

/// A line-oriented console over an input stream and an output sink.
///
/// The input is read up to one newline per line, so bytes after a newline stay in `R` for the
/// next read. Prompts and retry notices go to `W`, which is flushed before every read so
/// interactive users see the prompt before the program blocks.
///
/// Every read takes `&mut self`: one caller, one thread, blocking until a newline or the end of
/// the input.
///
/// ```
/// use typed_input::{Console, Parsed};
/// use std::io::Cursor;
///
/// let mut console = Console::new(Cursor::new("abc\n42\n"), Vec::new());
///
/// assert_eq!(console.read_int("Number: ").unwrap(), Parsed::Value(42));
/// assert_eq!(console.output(), b"Number: Retry: Number: ");
/// assert_eq!(console.read_int("Number: ").unwrap(), Parsed::EndOfInput);
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    retry_notice: String,
    max_line_capacity: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a new `Console` with default configuration.
    ///
    /// Lines may grow up to [`PRACTICAL_MAX_SIZE`] and rejected lines print
    /// [`RETRY_NOTICE`].
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console::builder(input, output).build()
    }

    /// Returns a [`ConsoleBuilder`] for configuring a new `Console`.
    pub fn builder(input: R, output: W) -> ConsoleBuilder<R, W> {
        ConsoleBuilder {
            input,
            output,
            retry_notice: None,
            max_line_capacity: None,
        }
    }
}

impl Console<StdinLock<'static>, StdoutLock<'static>> {
    /// Creates a `Console` over the locked process stdin and stdout.
    ///
    /// Both locks are held until the console is dropped. Unread bytes stay in the shared stdin
    /// buffer, so a later console picks up where this one stopped.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout().lock())
    }
}

/// A builder for constructing a [`Console`] with custom settings.
#[must_use]
pub struct ConsoleBuilder<R, W> {
    input: R,
    output: W,
    retry_notice: Option<String>,
    max_line_capacity: Option<usize>,
}

impl<R: BufRead, W: Write> ConsoleBuilder<R, W> {
    /// Sets the notice written after a rejected line. Defaults to [`RETRY_NOTICE`].
    pub fn retry_notice(mut self, notice: impl Into<String>) -> Self {
        self.retry_notice = Some(notice.into());
        self
    }

    /// Caps the capacity a single line may grow to. Defaults to [`PRACTICAL_MAX_SIZE`].
    ///
    /// A line that would need more is reported as [`ReadOutcome::AllocationFailure`]. As the
    /// capacity keeps room for the terminator, the longest accepted line is one byte shorter than
    /// the largest growth step within the cap.
    pub fn max_line_capacity(mut self, cap: usize) -> Self {
        self.max_line_capacity = Some(cap);
        self
    }

    /// Builds the [`Console`] with the configured settings.
    pub fn build(self) -> Console<R, W> {
        Console {
            input: self.input,
            output: self.output,
            retry_notice: self
                .retry_notice
                .unwrap_or_else(|| RETRY_NOTICE.to_owned()),
            max_line_capacity: self
                .max_line_capacity
                .map_or(PRACTICAL_MAX_SIZE, |cap| cap.min(PRACTICAL_MAX_SIZE)),
        }
    }
}

impl<R, W> Console<R, W> {
    /// Returns a reference to the input stream.
    pub fn input(&self) -> &R {
        &self.input
    }

    /// Returns a reference to the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Returns a mutable reference to the output sink.
    ///
    /// Writing through it interleaves with prompts and retry notices.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the input stream and output sink.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Progress made on one chunk of buffered input.
enum Scan {
    /// The input is exhausted.
    Eof,
    /// The whole chunk was stored without reaching a newline.
    Partial(usize),
    /// A newline was found; the count includes it.
    Newline(usize),
    /// The buffer failed to grow; the count includes the byte that did not fit.
    Failed(usize, AllocationFailure),
}

/// Moves bytes from `available` into `line` up to the first newline.
#[expect(clippy::arithmetic_side_effects, reason = "Bounded by the slice length")]
fn scan(available: &[u8], line: &mut LineBuffer) -> Scan {
    if available.is_empty() {
        return Scan::Eof;
    }

    for (i, &byte) in available.iter().enumerate() {
        if byte == b'\n' {
            return Scan::Newline(i + 1);
        }

        if let Err(failure) = line.push(byte) {
            return Scan::Failed(i + 1, failure);
        }
    }

    Scan::Partial(available.len())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Renders `prompt`, then reads one line.
    ///
    /// The prompt is written and the output flushed exactly once, before any byte is read. The
    /// line ends at a newline, which is consumed but not stored, or at the end of the input.
    ///
    /// - A newline yields [`ReadOutcome::Line`], which may be empty.
    /// - End of input after at least one byte yields the partial [`ReadOutcome::Line`].
    /// - End of input before any byte yields [`ReadOutcome::EndOfInput`].
    /// - A buffer that cannot grow yields [`ReadOutcome::AllocationFailure`]. The bytes read so
    ///   far are discarded and the rest of the line stays unread.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the output or the input. Interrupted reads are retried.
    pub fn read_line<P: Prompt>(&mut self, prompt: P) -> io::Result<ReadOutcome> {
        prompt.render(&mut self.output)?;
        self.output.flush()?;

        let mut line = LineBuffer::with_limit(self.max_line_capacity);

        loop {
            let step = {
                let available = match self.input.fill_buf() {
                    Ok(available) => available,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };

                scan(available, &mut line)
            };

            match step {
                Scan::Eof if line.is_empty() => {
                    trace!("end of input");
                    return Ok(ReadOutcome::EndOfInput);
                }
                Scan::Eof => {
                    trace!(len = line.len(), "read final line without newline");
                    return Ok(ReadOutcome::Line(line.finish()));
                }
                Scan::Partial(used) => self.input.consume(used),
                Scan::Newline(used) => {
                    self.input.consume(used);
                    trace!(len = line.len(), cap = line.cap(), "read line");
                    return Ok(ReadOutcome::Line(line.finish()));
                }
                Scan::Failed(used, failure) => {
                    self.input.consume(used);
                    warn!(requested = failure.requested, "line buffer could not grow");
                    return Ok(ReadOutcome::AllocationFailure {
                        requested: failure.requested,
                    });
                }
            }
        }
    }

    /// Reads lines until one converts to `T` or the input ends.
    ///
    /// Each attempt renders `prompt` and reads one line. A line that does not convert is dropped,
    /// the retry notice is written, and the next attempt starts. There is no attempt limit and no
    /// timeout: on an input that never ends and never yields a valid line this loops forever.
    /// Callers that want a bound have to impose it on the input they pass in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if a line outgrows the buffer and [`Error::Io`] on I/O
    /// failure. Neither is retried.
    pub fn read_until_valid<T: FromLine, P: Prompt>(&mut self, prompt: P) -> Result<Parsed<T>> {
        loop {
            let line = match self.read_line(&prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::EndOfInput => return Ok(Parsed::EndOfInput),
                ReadOutcome::AllocationFailure { requested } => {
                    return Err(Error::Allocation { requested });
                }
            };

            if let Some(value) = T::from_line(&line) {
                return Ok(Parsed::Value(value));
            }

            debug!(len = line.len(), kind = type_name::<T>(), "rejected line");
            self.output.write_all(self.retry_notice.as_bytes())?;
        }
    }

    /// Reads a line consisting of exactly one byte.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_char<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<char>> {
        self.read_until_valid(prompt)
    }

    /// Reads a line holding a decimal `i32`.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_int<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<i32>> {
        self.read_until_valid(prompt)
    }

    /// Reads a line holding a decimal `i64`.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_long<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<i64>> {
        self.read_until_valid(prompt)
    }

    /// Reads a line holding an `f32`.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_float<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<f32>> {
        self.read_until_valid(prompt)
    }

    /// Reads a line holding an `f64`.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_double<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<f64>> {
        self.read_until_valid(prompt)
    }

    /// Reads a line of valid UTF-8 text.
    ///
    /// # Errors
    ///
    /// See [`read_until_valid`](Self::read_until_valid).
    pub fn read_string<P: Prompt>(&mut self, prompt: P) -> Result<Parsed<String>> {
        self.read_until_valid(prompt)
    }
}
