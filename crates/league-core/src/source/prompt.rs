use std::io::BufRead;

use tracing::debug;

use crate::error::Result;

use super::{LineSource, read_trimmed_line};

/// Default word that ends interactive input.
pub const DEFAULT_SENTINEL: &str = "done";

/// Interactive input, ended by a sentinel line or end-of-stream.
///
/// The sentinel match is case-insensitive and is not trimmed, so `" done"`
/// is an ordinary (invalid) match line.
pub struct PromptSource<R> {
    reader: R,
    sentinel: String,
    finished: bool,
}

impl<R: BufRead> PromptSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_sentinel(reader, DEFAULT_SENTINEL)
    }

    pub fn with_sentinel(reader: R, sentinel: impl Into<String>) -> Self {
        Self {
            reader,
            sentinel: sentinel.into(),
            finished: false,
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    fn is_sentinel(&self, line: &str) -> bool {
        line.eq_ignore_ascii_case(&self.sentinel)
    }
}

impl<R: BufRead> LineSource for PromptSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }
        match read_trimmed_line(&mut self.reader)? {
            Some(line) if self.is_sentinel(&line) => {
                debug!("Sentinel {:?} received", line);
                self.finished = true;
                Ok(None)
            }
            Some(line) => Ok(Some(line)),
            None => {
                debug!("Input closed before sentinel");
                self.finished = true;
                Ok(None)
            }
        }
    }
}
