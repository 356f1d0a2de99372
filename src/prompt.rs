use std::fmt;
use std::io::{self, Write};

/// Something that can be rendered to the output before a line is read.
///
/// A `Prompt` is rendered once per read attempt, so the typed readers render the same prompt
/// again after every rejected line. Implementations must therefore be repeatable.
///
/// Strings render verbatim and [`fmt::Arguments`] lets [`format_args!`] act as the positional
/// formatter:
///
/// ```
/// use typed_input::Console;
/// use std::io::Cursor;
///
/// let name = "Ada";
/// let mut console = Console::new(Cursor::new("36\n"), Vec::new());
///
/// let age = console.read_int(format_args!("Age of {name}: ")).unwrap();
/// assert_eq!(age.into_option(), Some(36));
/// assert_eq!(console.output(), b"Age of Ada: ");
/// ```
pub trait Prompt {
    /// Writes the prompt to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A prompt that renders nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn render(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

impl Prompt for str {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Prompt for String {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Prompt for fmt::Arguments<'_> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_fmt(*self)
    }
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).render(out)
    }
}

impl<P: Prompt> Prompt for Option<P> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Some(prompt) => prompt.render(out),
            None => Ok(()),
        }
    }
}

/// A prompt rendered by a closure. Created by [`prompt_fn`].
#[derive(Clone, Copy)]
pub struct PromptFn<F>(F);

impl<F> fmt::Debug for PromptFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptFn").finish_non_exhaustive()
    }
}

impl<F> Prompt for PromptFn<F>
where
    F: Fn(&mut dyn Write) -> io::Result<()>,
{
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.0)(out)
    }
}

/// Builds a prompt from a closure that writes to the output.
///
/// Useful when the prompt depends on state that changes between attempts.
///
/// ```
/// use typed_input::{Console, prompt_fn};
/// use std::cell::Cell;
/// use std::io::{Cursor, Write};
///
/// let attempt = Cell::new(0);
/// let prompt = prompt_fn(|out: &mut dyn Write| {
///     attempt.set(attempt.get() + 1);
///     write!(out, "[{}] > ", attempt.get())
/// });
///
/// let mut console = Console::new(Cursor::new("nope\n7\n"), Vec::new());
/// let value = console.read_long(prompt).unwrap();
///
/// assert_eq!(value.into_option(), Some(7));
/// assert_eq!(console.output(), b"[1] > Retry: [2] > ");
/// ```
pub fn prompt_fn<F>(f: F) -> PromptFn<F>
where
    F: Fn(&mut dyn Write) -> io::Result<()>,
{
    PromptFn(f)
}
