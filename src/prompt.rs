//! Interactive school selection

use crate::directory::SchoolDirectory;
use std::io::{self, BufRead, Write};

/// Prompt shown before each selection attempt
pub const PROMPT: &str = "Please enter the high school name or school code: ";

/// Asks for a school until the answer resolves.
///
/// Unknown selections print the error message and prompt again. Returns
/// `Ok(None)` once `input` is exhausted.
///
/// # Errors
///
/// Returns any I/O error raised while reading or writing.
pub fn prompt_for_school(
    directory: &SchoolDirectory,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let selection = line.trim_end_matches(['\r', '\n']);

        match directory.resolve(selection) {
            Ok(index) => return Ok(Some(index)),
            Err(e) if e.is_recoverable() => {
                log::debug!("Rejected selection '{selection}'");
                writeln!(output, "{e}")?;
            }
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }
}
