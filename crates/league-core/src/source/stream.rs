use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::{LineSource, read_trimmed_line};

/// Reads every line until end-of-stream. Used for match files.
pub struct StreamSource<R> {
    reader: R,
}

impl StreamSource<BufReader<File>> {
    /// Open a match file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening match file {:?}", path);
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        read_trimmed_line(&mut self.reader)
    }
}
