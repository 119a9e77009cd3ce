use crate::view::PasswordInput;
use anyhow::{anyhow, Result};
use std::io::{self, BufRead, Write};

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Free-text input, trimmed.
pub fn input(prompt: &str) -> Result<String> {
    o_print!("{}: ", prompt);
    io::stdout().flush()?;
    Ok(read_line(&mut io::stdin().lock())?.trim().to_string())
}

/// A form field, taken exactly as typed (only the line ending is dropped).
pub fn field(prompt: &str) -> Result<String> {
    o_print!("{}: ", prompt);
    io::stdout().flush()?;
    read_line(&mut io::stdin().lock())
}

/// Like `input`, but refuses an empty answer.
pub fn input_required(prompt: &str) -> Result<String> {
    let value = input(prompt)?;
    if value.is_empty() {
        return Err(anyhow!("{} is required.", prompt));
    }
    Ok(value)
}

/// Reads a password, echoing it only when the field is switched to plain text.
/// The value is taken as typed, without trimming.
pub fn password(prompt: &str, element: &PasswordInput) -> Result<String> {
    if element.is_masked() {
        return Ok(rpassword::prompt_password(format!("{}: ", prompt))?);
    }
    field(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline_only() {
        let mut input = Cursor::new("  pass word \r\nnext\n");
        assert_eq!(read_line(&mut input).unwrap(), "  pass word ");
        assert_eq!(read_line(&mut input).unwrap(), "next");
        assert_eq!(read_line(&mut input).unwrap(), "");
    }
}
