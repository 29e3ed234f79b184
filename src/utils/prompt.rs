use crate::error::Result;
use std::io::{BufRead, Write};

/// Reads one selection character from stdin behind a `>> ` prompt.
///
/// Returns the first non-whitespace character of the line, or `None` for an
/// empty line or closed stdin.
pub fn read_selection() -> Result<Option<char>> {
    print!(">> ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes = std::io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(line.trim().chars().next())
}

/// Yes/no question; requires an explicit answer.
pub fn confirm(message: &str) -> Result<bool> {
    let confirmed = dialoguer::Confirm::new().with_prompt(message).interact()?;
    Ok(confirmed)
}
