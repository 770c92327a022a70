//! Line sources feeding the match parser.
//!
//! Both sources read from any [`BufRead`](std::io::BufRead) so tests can
//! drive them from in-memory buffers.

mod prompt;
mod stream;

pub use prompt::*;
pub use stream::*;

use crate::error::Result;

/// A finite, ordered supply of raw input lines.
pub trait LineSource {
    /// Next line without its terminator, or `None` once the input is done.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Read one line from `reader`, stripping `\n` or `\r\n`.
///
/// Invalid UTF-8 is replaced with U+FFFD so the line still reaches the parser.
pub(crate) fn read_trimmed_line<R: std::io::BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
