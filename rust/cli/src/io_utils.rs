//! Line-oriented console helpers shared by the interactive prompts.
//!
//! Game events and prompts may target the same stream while the engine holds
//! both the decision provider and the observer, so writers are shared through
//! a [`SharedWriter`].

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// A writer that several collaborators append to during one game.
pub type SharedWriter<'w> = RefCell<&'w mut dyn Write>;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `Ok(None)` at end of input. Invalid UTF-8 is
/// replaced with U+FFFD, not rejected.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use pig_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hold \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("hold".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    match stdin.read_until(b'\n', &mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(String::from_utf8_lossy(&buf).trim().to_string())),
    }
}

/// Print `prompt` without a newline, flush, then read one answer.
pub fn prompt_line(
    stdin: &mut dyn BufRead,
    out: &SharedWriter<'_>,
    prompt: &str,
) -> io::Result<Option<String>> {
    {
        let mut w = out.borrow_mut();
        write!(w, "{}", prompt)?;
        w.flush()?;
    }
    read_stdin_line(stdin)
}

/// Write a full line to a shared writer.
pub fn say(out: &SharedWriter<'_>, line: &str) -> io::Result<()> {
    writeln!(out.borrow_mut(), "{}", line)
}
