use std::io::{self, BufRead, Write};

pub(crate) const URL_PROMPT: &str = "Please enter the LinkedIn profile URL: ";

/// Prompts on `out` and reads one line from `input`.
///
/// Only the line terminator is removed; validation decides what else is
/// acceptable. End of input yields an empty string.
pub(crate) fn read_profile_url<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<String> {
    write!(out, "{URL_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
