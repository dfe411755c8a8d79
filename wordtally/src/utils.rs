// src/utils.rs
use anyhow::{Context as _, Result, bail};
use std::io::{BufRead, Write};

/// Prints `message` and reads one answer line from `input`.
///
/// The answer is returned without surrounding whitespace or line terminator.
///
/// # Errors
///
/// This function may return an error if:
/// * Writing the message or reading the answer fails
/// * `input` is already at end of input
/// * The answer is blank
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read answer from standard input")?;
    if read == 0 {
        bail!("Input ended before an answer to \"{}\" was given", message.trim());
    }

    let answer = answer.trim();
    if answer.is_empty() {
        bail!("No answer given to \"{}\"", message.trim());
    }
    Ok(answer.to_owned())
}
