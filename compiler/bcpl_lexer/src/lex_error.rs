//! Errors surfaced by the integration API.
//!
//! Scan-time problems never appear here: they are recovered in the token
//! stream and collected as [`ScanError`](bcpl_lexer_core::ScanError)s.
//! `LexError` covers the failures that stop an operation outright.

use bcpl_lexer_core::SourceError;
use thiserror::Error;

use crate::EscapeError;

#[derive(Debug, Error)]
pub enum LexError {
    /// The source could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// A string literal could not be decoded.
    #[error("invalid string literal: {0}")]
    Escape(#[from] EscapeError),
    /// A token other than a string literal was passed for decoding.
    #[error("expected a STRING token, found {found}")]
    NotAString { found: &'static str },
}
