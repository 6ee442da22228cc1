//! Line input for interactive callbacks
//!
//! Callbacks that drive a read-eval loop validate each line before acting on
//! it: lines that do not match the expected shape are reported and skipped,
//! and the loop keeps going without consuming them as results.

use std::io::{self, BufRead, Write};

use regex::Regex;

/// Read lines until one matches `pattern`, skipping malformed ones with a
/// diagnostic. Returns `None` when the input is exhausted.
///
/// # Errors
///
/// Propagates read failures from the underlying stream.
pub fn read_until_match<R: BufRead>(input: &mut R, pattern: &Regex) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if pattern.is_match(trimmed) {
            return Ok(Some(trimmed.to_string()));
        }
        eprintln!("invalid input `{trimmed}`, expected `{pattern}`; ignoring");
    }
}

/// Prompt on stdout, then read from stdin via [`read_until_match`].
///
/// # Errors
///
/// Propagates IO failures from stdout or stdin.
pub fn prompt_match(prompt: &str, pattern: &Regex) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_until_match(&mut io::stdin().lock(), pattern)
}
