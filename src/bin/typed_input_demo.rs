//! Typed Input Demo
//!
//! Asks for one value of every supported type on stdin and echoes what it got.
//! Set `RUST_LOG=typed_input=debug` to see rejected lines logged on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use typed_input::{Console, Parsed};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> typed_input::Result<()> {
    let mut console = Console::stdio();

    let Parsed::Value(name) = console.read_string("What is your name? ")? else {
        return end_of_input(&mut console);
    };
    let Parsed::Value(initial) = console.read_char("Your favourite letter? ")? else {
        return end_of_input(&mut console);
    };
    let Parsed::Value(age) = console.read_int(format_args!("How old are you, {name}? "))? else {
        return end_of_input(&mut console);
    };
    let Parsed::Value(steps) = console.read_long("Steps walked this year? ")? else {
        return end_of_input(&mut console);
    };
    let Parsed::Value(height) = console.read_float("Height in metres? ")? else {
        return end_of_input(&mut console);
    };
    let Parsed::Value(pi) = console.read_double("Pi, as far as you know it? ")? else {
        return end_of_input(&mut console);
    };

    let out = console.output_mut();
    writeln!(out)?;
    writeln!(out, "name:    {name}")?;
    writeln!(out, "letter:  {initial:?}")?;
    writeln!(out, "age:     {age}")?;
    writeln!(out, "steps:   {steps}")?;
    writeln!(out, "height:  {height}")?;
    writeln!(out, "pi:      {pi}")?;

    Ok(())
}

fn end_of_input<R, W: Write>(console: &mut Console<R, W>) -> typed_input::Result<()> {
    tracing::info!("input ended early");
    writeln!(console.output_mut())?;
    writeln!(console.output_mut(), "No more input.")?;
    Ok(())
}
