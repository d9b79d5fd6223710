//! Scan-time errors and the reporting side channel.
//!
//! Errors never interrupt scanning. The scanner tags the offending token
//! (see [`TokenKind::is_error`](crate::TokenKind::is_error)) and, if a
//! handler is registered, hands it a [`ScanError`] describing where and
//! why. Without a handler the report is dropped.

use thiserror::Error;

use crate::Location;

/// What kind of malformed input was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    /// Leading zero (`0755`), a digit outside the radix (`0b102`), or a
    /// radix prefix with no digits (`0x`).
    #[error("malformed numeric literal")]
    MalformedNumber,
    /// End of input before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// End of input before the closing `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A byte that cannot start any token.
    #[error("unexpected character")]
    UnexpectedCharacter,
}

impl ScanErrorKind {
    /// Human-readable message passed to handlers.
    pub fn message(self) -> &'static str {
        match self {
            Self::MalformedNumber => "malformed numeric literal",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedComment => "unterminated comment",
            Self::UnexpectedCharacter => "unexpected character",
        }
    }
}

/// A single report delivered to the error handler.
///
/// Points at the offending byte: the unexpected byte, the first invalid
/// digit, the leading zero, or the opening delimiter of an unterminated
/// string or comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{line}:{column}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// 1-based line of the offending byte.
    pub line: u32,
    /// 1-based column of the offending byte.
    pub column: u32,
    /// Byte offset of the offending byte.
    pub offset: u32,
    /// The offending byte itself.
    pub byte: u8,
}

impl ScanError {
    pub(crate) fn new(kind: ScanErrorKind, at: Location, byte: u8) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            offset: at.offset,
            byte,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Optional callback plus a count of reports made so far.
///
/// The callback's captures play the role of user context: they are opaque
/// to the scanner and passed through untouched.
#[derive(Default)]
pub(crate) struct ErrorReporter<'h> {
    handler: Option<Box<dyn FnMut(&ScanError) + 'h>>,
    reported: u32,
}

impl<'h> ErrorReporter<'h> {
    pub(crate) fn set_handler(&mut self, handler: impl FnMut(&ScanError) + 'h) {
        self.handler = Some(Box::new(handler));
    }

    pub(crate) fn clear_handler(&mut self) {
        self.handler = None;
    }

    pub(crate) fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn report(&mut self, error: ScanError) {
        self.reported = self.reported.saturating_add(1);
        if let Some(handler) = self.handler.as_mut() {
            handler(&error);
        }
    }

    pub(crate) fn reported(&self) -> u32 {
        self.reported
    }
}

#[cfg(test)]
mod tests;
