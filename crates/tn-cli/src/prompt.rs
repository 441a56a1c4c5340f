//! Interactive console prompts.
//!
//! All prompt functions are generic over the reader and writer so tests
//! can drive them with in-memory buffers. Prompts go to the writer
//! (stderr in the binary, to keep stdout clean for the payload), answers
//! come line-by-line from the reader.

use crate::error::{CliError, Result};
use std::io::{BufRead, Write};

/// Ask a yes/no question with a default, re-prompting on junk answers.
///
/// An empty answer takes the default. The default is shown uppercased,
/// `[Y/n]` or `[y/N]`.
pub fn ask_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        write!(writer, "{prompt} [{hint}] ").map_err(CliError::Prompt)?;
        writer.flush().map_err(CliError::Prompt)?;

        let Some(line) = read_line(reader)? else {
            // Stdin closed: fall back to the default rather than spin.
            return Ok(default);
        };
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "Please enter 'y' or 'n'").map_err(CliError::Prompt)?,
        }
    }
}

/// Collect multi-line text, terminated by an empty line once at least
/// one line has been entered. Lines are joined with `\n`.
///
/// End-of-input also terminates collection, so piped input works.
pub fn read_multiline<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        match read_line(reader)? {
            None => break,
            Some(line) => {
                if line.is_empty() && !lines.is_empty() {
                    break;
                }
                lines.push(line);
            }
        }
    }
    Ok(lines.join("\n"))
}

/// Prompt for a file name, substituting `default` for an empty answer.
pub fn ask_filename<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    default: &str,
) -> Result<String> {
    write!(writer, "{prompt} (default: {default}): ").map_err(CliError::Prompt)?;
    writer.flush().map_err(CliError::Prompt)?;

    let answer = read_line(reader)?.unwrap_or_default();
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read one line without its trailing newline; `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let n = reader.read_line(&mut buf).map_err(CliError::Prompt)?;
    if n == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}
