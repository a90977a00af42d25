//! Prompted line input for task commands.
//!
//! Commands never talk to the terminal directly; they receive a `BufRead` and a
//! `Write` from the interpreter, which may be the process streams or in-memory
//! buffers of a pipeline.

use crate::env::Environment;
use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Read one line, writing `message` first when the environment echoes prompts.
///
/// Returns `None` at end of input. The trailing line break is stripped.
pub fn read_line(
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    env: &Environment,
    message: &str,
) -> Result<Option<String>> {
    if env.echo_prompts {
        write!(stdout, "{}", message)?;
        stdout.flush()?;
    }
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Like [`read_line`] but running out of input is an error.
pub fn ask(
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    env: &Environment,
    message: &str,
) -> Result<String> {
    read_line(stdin, stdout, env, message)?.ok_or_else(|| {
        anyhow!(
            "input ended while waiting for {}",
            message.trim_end_matches([':', ' '])
        )
    })
}

/// Prompt for a value that may be skipped with an empty line (or end of input).
pub fn ask_optional(
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    env: &Environment,
    message: &str,
) -> Result<Option<String>> {
    Ok(read_line(stdin, stdout, env, message)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Parse a numeric answer, naming the value in the error.
pub fn parse_number<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("{} must be a number, got '{}'", what, raw.trim()))
}
