//! Line counting over a streamed body.
//!
//! A line is a maximal run of bytes without `\n`, ended by `\n` or by end of stream. A final line
//! without a trailing `\n` still counts; `\r` is an ordinary byte. Chunk boundaries never split a
//! line in two, however long it is.

use reqwest::Response;
use tracing::debug;

use crate::core::Result;

/// Incremental counter fed with arbitrary chunks.
#[derive(Debug, Default, Clone)]
pub struct LineCounter {
    terminated: usize,
    /// Bytes seen since the last `\n`.
    open_line: bool,
}

impl LineCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };
        self.terminated += chunk.iter().filter(|&&b| b == b'\n').count();
        self.open_line = last != b'\n';
    }

    /// Lines seen so far, counting an unterminated trailing line.
    pub fn count(&self) -> usize {
        self.terminated + usize::from(self.open_line)
    }

    pub fn finish(self) -> usize {
        self.count()
    }
}

/// Counts lines in an in-memory buffer.
pub fn count_lines_in(bytes: &[u8]) -> usize {
    let mut counter = LineCounter::new();
    counter.feed(bytes);
    counter.finish()
}

/// Streams `response` chunk by chunk and counts its lines. Read failures are transport errors.
pub async fn count_lines(mut response: Response) -> Result<usize> {
    let mut counter = LineCounter::new();
    let mut bytes_read = 0usize;
    while let Some(chunk) = response.chunk().await? {
        bytes_read += chunk.len();
        counter.feed(&chunk);
    }
    let lines = counter.finish();
    debug!(bytes_read, lines, "counted lines");
    Ok(lines)
}
