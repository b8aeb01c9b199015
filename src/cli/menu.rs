//! Small prompt helpers for the interactive shell.
//!
//! Everything is generic over the input and output streams so the shell can
//! be driven from tests.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prints `message` and reads one line, without the trailing newline.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prompts until the answer parses as `T`.
pub fn prompt<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, message)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Invalid input '{}', try again.", line.trim())?,
        }
    }
}

/// Lists `options` numbered from 1 and returns the 0-based index picked.
pub fn read_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W, options: &[&str]) -> Result<usize> {
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, option)?;
    }
    loop {
        let choice: usize = prompt(input, output, "> ")?;
        if (1..=options.len()).contains(&choice) {
            return Ok(choice - 1);
        }
        writeln!(output, "Pick a number between 1 and {}.", options.len())?;
    }
}

/// Asks a yes/no question; anything but `y`/`yes` means no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<bool> {
    let answer = prompt_line(input, output, &format!("{} [y/N] ", message))?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
