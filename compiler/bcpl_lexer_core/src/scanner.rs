//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! [`Scanner::next_token`] looks at the current byte and one byte of
//! lookahead and routes to a focused sub-scanner. Each sub-scanner consumes
//! a maximal run, returns one token, and keeps all of its state local to
//! the call. The routing order resolves the only ambiguous lead byte, `/`:
//! comments are checked before the operator table.
//!
//! # Guarantees
//!
//! - Every call before EOF consumes at least one byte.
//! - Token spans are contiguous: each token starts where the previous one
//!   ended, and the final zero-length `Eof` sits at the end of the source.
//! - Once at EOF, every further call returns the same `Eof` token without
//!   touching position, line, or column.

mod literal;
mod number;
mod operator;
mod trivia;

use std::path::Path;

use crate::scan_error::ErrorReporter;
use crate::{
    Cursor, Location, ScanError, ScanErrorKind, SourceBuffer, SourceError, Token, TokenKind,
    Whitespace,
};

use operator::{ASSIGN, BANG, GREATER, LESS, MINUS, PERCENT, PLUS, SLASH, STAR};

/// Pull-based scanner over one source buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    errors: ErrorReporter<'a>,
}

impl<'a> Scanner<'a> {
    /// Scan borrowed source text in place.
    pub fn new(source: &'a str) -> Self {
        Self::from_buffer(SourceBuffer::new(source))
    }

    /// Scan borrowed bytes in place.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self::from_buffer(SourceBuffer::from_bytes(source))
    }

    /// Scan a buffer, borrowed or owned.
    pub fn from_buffer(source: SourceBuffer<'a>) -> Self {
        Self {
            cursor: source.cursor(),
            errors: ErrorReporter::default(),
        }
    }

    /// Read a whole file and scan it. The scanner owns the bytes.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Self::from_buffer(SourceBuffer::from_file(path)?))
    }

    /// Builder form of [`set_error_handler`](Self::set_error_handler).
    #[must_use]
    pub fn on_error(mut self, handler: impl FnMut(&ScanError) + 'a) -> Self {
        self.set_error_handler(handler);
        self
    }

    /// Register the callback invoked for each malformed token.
    ///
    /// Replaces any previous handler. The handler runs synchronously inside
    /// [`next_token`](Self::next_token), before the token is returned.
    pub fn set_error_handler(&mut self, handler: impl FnMut(&ScanError) + 'a) {
        self.errors.set_handler(handler);
    }

    /// Drop the current handler; later errors are only counted.
    pub fn clear_error_handler(&mut self) {
        self.errors.clear_handler();
    }

    pub fn has_error_handler(&self) -> bool {
        self.errors.has_handler()
    }

    /// Number of errors detected so far, whether or not a handler saw them.
    pub fn error_count(&self) -> u32 {
        self.errors.reported()
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn source(&self) -> &SourceBuffer<'a> {
        self.cursor.source()
    }

    /// Release the scanner, keeping the buffer.
    pub fn into_source(self) -> SourceBuffer<'a> {
        self.cursor.into_source()
    }

    /// Bytes covered by `token`.
    pub fn text(&self, token: Token) -> &[u8] {
        self.cursor.slice(token.start, token.end())
    }

    /// Produce the next token.
    ///
    /// Returns `TokenKind::Eof` with `len == 0` when the source is
    /// exhausted. Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        let next = self.cursor.peek();
        match self.cursor.current() {
            b'/' if next == b'/' => self.line_comment(start),
            b'/' if next == b'*' => self.block_comment(start),
            b' ' => self.whitespace(start, Whitespace::Space),
            b'\t' => self.whitespace(start, Whitespace::Tab),
            b'\n' => self.whitespace(start, Whitespace::Newline),
            0x0B => self.whitespace(start, Whitespace::VerticalTab),
            0x0C => self.whitespace(start, Whitespace::FormFeed),
            b'\r' => self.whitespace(start, Whitespace::CarriageReturn),
            b'0'..=b'9' => self.number(start),
            b'.' if next.is_ascii_digit() => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'"' => self.string(start),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b';' => self.single(start, TokenKind::Semicolon),
            b'+' => self.operator(start, &PLUS),
            b'-' => self.operator(start, &MINUS),
            b'*' => self.operator(start, &STAR),
            b'/' => self.operator(start, &SLASH),
            b'%' => self.operator(start, &PERCENT),
            b'=' => self.operator(start, &ASSIGN),
            b'!' => self.operator(start, &BANG),
            b'<' => self.operator(start, &LESS),
            b'>' => self.operator(start, &GREATER),
            0 if self.cursor.is_eof() => Token::new(TokenKind::Eof, start, 0),
            _ => self.unexpected(start),
        }
    }

    // ─── Shared helpers ──────────────────────────────────────────────

    /// Token of `kind` spanning `start` to the current position.
    #[inline]
    fn token(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, start, self.cursor.pos() - start)
    }

    fn report(&mut self, kind: ScanErrorKind, at: Location, byte: u8) {
        self.errors.report(ScanError::new(kind, at, byte));
    }

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind, start)
    }

    /// Consume one byte that cannot start a token.
    fn unexpected(&mut self, start: u32) -> Token {
        let at = self.cursor.location();
        let byte = self.cursor.advance();
        self.report(ScanErrorKind::UnexpectedCharacter, at, byte);
        self.token(TokenKind::Error, start)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns every token except the final `Eof`. Errors are not reported;
/// check [`TokenKind::is_error`] on the result, or drive a [`Scanner`]
/// with a handler for diagnostics.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
