use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::error::{EngineError, Result};
use crate::options::TrailingLine;

/// Pulls `\n`-terminated lines out of a byte stream, one at a time.
///
/// Each line is handed out as a borrow of an internal buffer that is reused
/// for the next call. A line longer than `max_line` bytes (terminator
/// included) is an error, so memory use stays bounded whatever the input.
/// The reader is forward-only.
pub struct LineReader<R> {
    inner: R,
    line: Vec<u8>,
    max_line: usize,
    trailing: TrailingLine,
    lines_read: u64,
    finished: bool,
}

impl<R: Read> LineReader<BufReader<R>> {
    /// Wrap a raw reader in a buffer of `capacity` bytes.
    pub fn with_capacity(capacity: usize, inner: R, max_line: usize, trailing: TrailingLine) -> Self {
        Self::new(BufReader::with_capacity(capacity.max(1), inner), max_line, trailing)
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_line: usize, trailing: TrailingLine) -> Self {
        Self {
            inner,
            line: Vec::with_capacity(128),
            max_line: max_line.max(1),
            trailing,
            lines_read: 0,
            finished: false,
        }
    }

    /// Next line including its `\n`, or `None` at end of stream.
    ///
    /// A final line without a terminator is dropped or yielded depending on
    /// the [`TrailingLine`] policy. Interrupted reads are retried; any other
    /// I/O error is returned as [`EngineError::Read`], and a line over the
    /// length limit as [`EngineError::LineTooLong`].
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        if self.finished {
            return Ok(None);
        }
        self.line.clear();
        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(EngineError::Read(e)),
            };
            if available.is_empty() {
                break;
            }
            let (used, complete) = match memchr::memchr(b'\n', available) {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            };
            if self.line.len() + used > self.max_line {
                self.finished = true;
                return Err(EngineError::LineTooLong {
                    line_number: self.lines_read + 1,
                    limit: self.max_line,
                });
            }
            self.line.extend_from_slice(&available[..used]);
            self.inner.consume(used);
            if complete {
                break;
            }
        }

        if self.line.is_empty() {
            self.finished = true;
            return Ok(None);
        }
        if self.line.last() != Some(&b'\n') {
            self.finished = true;
            if self.trailing == TrailingLine::Drop {
                log::debug!(
                    "dropping unterminated final line ({} bytes) after line {}",
                    self.line.len(),
                    self.lines_read
                );
                return Ok(None);
            }
        }
        self.lines_read += 1;
        Ok(Some(self.line.as_slice()))
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
