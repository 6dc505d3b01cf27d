//! A lazy line producer over any `Read` source.

use std::io::{self, Read};

use crate::scan::{split_line, Split};

const INITIAL_CAPACITY: usize = 8 * 1024;

/// Pulls terminator-retaining line tokens out of a reader, one at a time.
///
/// The scanner owns its read buffer, compacts consumed bytes, and doubles
/// the buffer whenever a single line outgrows it, so tokens are produced
/// identically no matter how the underlying reads are chunked. Callers that
/// only need an early answer simply stop calling [`next_line`].
///
/// [`next_line`]: LineScanner::next_line
pub struct LineScanner<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> LineScanner<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, INITIAL_CAPACITY)
    }

    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buf: vec![0; capacity.max(1)],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// The next token, terminator included, or `None` once the input is
    /// exhausted. The returned slice is valid until the next call.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        loop {
            match split_line(&self.buf[self.start..self.end], self.eof) {
                Split::Token { len } => {
                    let start = self.start;
                    self.start += len;
                    return Ok(Some(&self.buf[start..start + len]));
                }
                Split::Finished => return Ok(None),
                Split::NeedMore => self.fill()?,
            }
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            let grown = self.buf.len() * 2;
            self.buf.resize(grown, 0);
        }
        let n = self.inner.read(&mut self.buf[self.end..])?;
        if n == 0 {
            self.eof = true;
        } else {
            self.end += n;
        }
        Ok(())
    }
}
