//! Interactive single-meeting selection.
//!
//! A synchronous read-validate-reprompt loop over injected handles, so it is
//! testable without a terminal. Invalid input is the only locally-recovered
//! error kind; the loop prints a hint and asks again. There is no cancel
//! option.

use crate::error::{Error, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Validate one line of menu input against a 1-based list of `len` items.
///
/// Blank input selects `default` (1-based). Returns the selected 0-based
/// index, or [`Error::InvalidSelection`] for non-numeric or out-of-range
/// input.
pub fn parse_selection(input: &str, len: usize, default: usize) -> Result<usize> {
    let input = input.trim();
    let invalid = || Error::InvalidSelection {
        input: input.to_string(),
        max: len,
    };

    let choice = if input.is_empty() {
        default
    } else {
        input.parse::<usize>().map_err(|_| invalid())?
    };

    if choice < 1 || choice > len {
        return Err(invalid());
    }
    Ok(choice - 1)
}

/// Present a numbered list and prompt until a valid selection is made.
///
/// Returns the selected 0-based index. EOF on the input stream is an I/O
/// error rather than an endless re-prompt.
pub fn prompt_selection<R, W, T>(
    items: &[T],
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: usize,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    T: Display,
{
    writeln!(output)?;
    for (index, item) in items.iter().enumerate() {
        writeln!(output, "{:>3}. {item}", index + 1)?;
    }

    loop {
        write!(output, "\n{prompt} [{default}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a selection was made",
            )
            .into());
        }

        match parse_selection(&line, items.len(), default) {
            Ok(index) => return Ok(index),
            Err(_) => {
                writeln!(
                    output,
                    "Invalid. Requires a value between 1 and {}",
                    items.len()
                )?;
            }
        }
    }
}
