//! Byte cursor with line/column tracking.
//!
//! The cursor advances through a [`SourceBuffer`] one byte at a time.
//! Reading at or past the end yields the `0x00` sentinel; advancing at the
//! end is a no-op, so the cursor can never move past the source length.
//!
//! # Position Tracking
//!
//! Consuming `\n` increments the line and resets the column to 1. Any
//! other byte (including `\r`) increments the column. The bulk helpers
//! used by the comment and string scanners jump over whole runs with
//! `memchr` and recount lines over the skipped bytes, so line and column
//! stay exact either way.

use crate::SourceBuffer;

/// A point in the source: byte offset plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Byte 0, line 1, column 1.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// Cursor over a [`SourceBuffer`].
///
/// Created via [`SourceBuffer::cursor()`]. Owns the buffer, so a cursor
/// built from an owned buffer releases it when dropped.
///
/// # Invariant
///
/// `pos <= source.len()`, `line >= 1`, `column >= 1`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: SourceBuffer<'a>,
    /// Current read position (byte index into the source).
    pos: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: SourceBuffer<'a>) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.byte(self.pos)
    }

    /// Returns the byte one position ahead of current, `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.source.byte(self.pos.saturating_add(1))
    }

    /// Consume the current byte and return it.
    ///
    /// At EOF this returns the sentinel and leaves the cursor unchanged.
    #[inline]
    pub fn advance(&mut self) -> u8 {
        if self.is_eof() {
            return 0;
        }
        let b = self.source.byte(self.pos);
        self.pos += 1;
        if b == b'\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        b
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Offset, line, and column of the current byte.
    pub fn location(&self) -> Location {
        Location {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// The buffer being scanned.
    pub fn source(&self) -> &SourceBuffer<'a> {
        &self.source
    }

    /// Give the buffer back, dropping the position state.
    pub fn into_source(self) -> SourceBuffer<'a> {
        self.source
    }

    /// Source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.slice(start, end)
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &[u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance to the next `\n` byte (not consuming it) or to EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        let skip = memchr::memchr(b'\n', remaining).unwrap_or(remaining.len());
        self.skip(skip);
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    ///
    /// Returns the byte found (not consumed), or `0x00` at EOF. Newlines
    /// inside the skipped run are counted.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let found = memchr::memchr2(b'"', b'\\', remaining);
        let rest = remaining.len();
        match found {
            Some(off) => {
                self.skip(off);
                self.current()
            }
            None => {
                self.skip(rest);
                0
            }
        }
    }

    /// Advance past the next `*/`, inclusive.
    ///
    /// Returns `false` (with the cursor at EOF) if no closer exists.
    pub fn eat_until_block_end(&mut self) -> bool {
        let remaining = self.remaining();
        let found = memchr::memmem::find(remaining, b"*/");
        let rest = remaining.len();
        match found {
            Some(off) => {
                self.skip(off + 2);
                true
            }
            None => {
                self.skip(rest);
                false
            }
        }
    }

    fn remaining(&self) -> &[u8] {
        self.source.slice(self.pos, self.source.len())
    }

    /// Consume `n` bytes at once, recounting lines over the skipped run.
    ///
    /// `n` never exceeds the remaining length: every caller derives it
    /// from [`remaining()`](Self::remaining).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "n and newline counts are bounded by source_len, which fits in u32"
    )]
    fn skip(&mut self, n: usize) {
        let skipped = &self.remaining()[..n];
        match memchr::memrchr(b'\n', skipped) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped).count() as u32;
                self.line = self.line.saturating_add(newlines);
                // Column of the byte after the run: bytes since the last `\n`, plus one.
                self.column = (n - last) as u32;
            }
            None => self.column = self.column.saturating_add(n as u32),
        }
        self.pos += n as u32;
    }
}

#[cfg(test)]
mod tests;
