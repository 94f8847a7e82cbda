use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Asks for one line of input; surrounding whitespace is dropped.
///
/// # Errors
/// Returns an error if the input is closed or unreadable.
pub(crate) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for {label}");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_trims_line() -> Result<()> {
        let mut input = Cursor::new("  123456 \n");
        let mut output = Vec::new();
        assert_eq!(ask(&mut input, &mut output, "Code")?, "123456");
        assert_eq!(String::from_utf8(output)?, "Code: ");
        Ok(())
    }

    #[test]
    fn ask_fails_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(ask(&mut input, &mut output, "Email").is_err());
    }
}
