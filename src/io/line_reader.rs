//! Line-oriented request reader with iterator interface
//!
//! Provides a streaming iterator over requests, one JSON object per input
//! line. Delegates JSON format concerns to the json_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, read failures) are returned from `open()`
//!   or yielded as `AuthorizerError::Io`
//! - Lines that are not valid requests (bad JSON, invalid UTF-8) are yielded
//!   as `AuthorizerError::Decode` with their 1-based line number, and
//!   iteration continues
//! - Blank lines are skipped

use crate::io::json_format::decode_request;
use crate::types::{AuthorizerError, Request};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Streaming request reader over any buffered input
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_num: u64,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far, blank ones included
    pub fn lines_read(&self) -> u64 {
        self.line_num
    }
}

impl LineReader<BufReader<File>> {
    /// Open a request file for streaming
    pub fn open(path: &Path) -> Result<Self, AuthorizerError> {
        open_file(path).map(Self::new)
    }
}

/// Open a file as buffered input
pub fn open_file(path: &Path) -> Result<BufReader<File>, AuthorizerError> {
    let file = File::open(path).map_err(|e| AuthorizerError::Io {
        message: format!("Failed to open file '{}': {}", path.display(), e),
    })?;
    Ok(BufReader::new(file))
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Request, AuthorizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_num += 1;
                    let line = self.buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(
                        decode_request(line)
                            .map_err(|e| AuthorizerError::decode(self.line_num, &e)),
                    );
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line_num += 1;
                    return Some(Err(AuthorizerError::Decode {
                        line: self.line_num,
                        message: e.to_string(),
                    }));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
