//! Stdin helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line (possibly empty), `Ok(None)` on EOF, and
/// propagates read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use pokerhand_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  AS KD \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("AS KD".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}
