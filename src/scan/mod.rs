//! Line tokenization that retains terminators.
//!
//! The splitter recognizes `\r\n` and `\n` line endings and keeps them on
//! the token, so concatenating every token reproduces the input exactly.
//! A lone `\r` never splits: Mac-Classic line endings are out of scope, and
//! a `\n\r` sequence yields a line ending in `\n` followed by a line that
//! begins with `\r`.

pub mod lines;

pub use lines::LineScanner;

use memchr::memchr;

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';
pub const CRLF: &[u8] = b"\r\n";

/// Outcome of one split attempt over the currently buffered bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// A complete token of `len` bytes, terminator included (or the final
    /// unterminated remainder when no more data will arrive).
    Token { len: usize },
    /// The buffer may end mid-terminator; read more before deciding.
    NeedMore,
    /// Empty buffer and no more data: no more tokens.
    Finished,
}

/// Split the next line off `buf`, terminator kept.
///
/// Terminator rules, in priority order:
/// 1. a `\r\n` pair closes the token, pair included;
/// 2. a bare `\n` closes the token, `\n` included; a lone `\r` is not a
///    terminator;
/// 3. at end of input a non-empty remainder is a final unterminated token.
///
/// The decision is deferred (`NeedMore`) whenever the buffered bytes could
/// still be extended into a different split, so feeding the input in
/// arbitrarily small chunks produces the same tokens as feeding it whole.
pub fn split_line(buf: &[u8], at_eof: bool) -> Split {
    if at_eof && buf.is_empty() {
        return Split::Finished;
    }
    if let Some(lf) = memchr(LF, buf) {
        // The first `\n` closes the token whether it stands alone or ends a
        // `\r\n` pair; the pair reading wins where both apply, which only
        // shows up in the token's classification, never in its length.
        return Split::Token { len: lf + 1 };
    }
    if at_eof {
        // Final, non-terminated line. A trailing `\r` lands here too: with
        // no `\n` ever arriving it is ordinary content.
        return Split::Token { len: buf.len() };
    }
    // No terminator yet; the last byte could be the `\r` of a pair that
    // continues in the next read.
    Split::NeedMore
}
