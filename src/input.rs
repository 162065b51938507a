//! Interactive parameter input.
//!
//! Values come from flags when given and from stdin prompts otherwise.
//! Anything that is not a positive integer is rejected with a message
//! naming the field.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

pub const UPPER_PROMPT: &str = "Upper bound of the range to scan: ";
pub const WORKERS_PROMPT: &str = "Maximum thread count to test: ";

/// Parse `raw` as a positive integer.
pub fn parse_positive(field: &str, raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{field}: no value given")));
    }
    match trimmed.parse::<u64>() {
        Ok(0) => Err(Error::InvalidInput(format!(
            "{field}: must be greater than zero"
        ))),
        Ok(n) => Ok(n),
        Err(_) if trimmed.strip_prefix('-').is_some_and(all_digits) => Err(
            Error::InvalidInput(format!("{field}: must be greater than zero, got {trimmed}")),
        ),
        Err(_) if all_digits(trimmed.strip_prefix('+').unwrap_or(trimmed)) => {
            Err(Error::InvalidInput(format!(
                "{field}: {trimmed} is too large (max {})",
                u64::MAX
            )))
        }
        Err(_) => Err(Error::InvalidInput(format!(
            "{field}: '{trimmed}' is not a whole number"
        ))),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Write `prompt`, read one line, and parse it as a positive integer.
pub fn prompt_positive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &str,
    prompt: &str,
) -> Result<u64> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput(format!(
            "{field}: input ended before a value was given"
        )));
    }
    parse_positive(field, &line)
}

/// Use `given` if present, otherwise prompt for it.
pub fn resolve<R: BufRead, W: Write>(
    given: Option<u64>,
    input: &mut R,
    output: &mut W,
    field: &str,
    prompt: &str,
) -> Result<u64> {
    match given {
        Some(0) => Err(Error::InvalidInput(format!(
            "{field}: must be greater than zero"
        ))),
        Some(n) => Ok(n),
        None => prompt_positive(input, output, field, prompt),
    }
}
