//! Low-level scanner for BCPL source.
//!
//! Converts a byte buffer into a pull-based stream of [`Token`] spans.
//! Every byte of the input belongs to exactly one token, so concatenating
//! the spans of all tokens up to and including [`TokenKind::Eof`]
//! reconstructs the source. Malformed input never stops the scanner: it is
//! tagged in the returned token and reported through an optional callback.
//!
//! # Example
//!
//! ```
//! use bcpl_lexer_core::{Keyword, Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("LET x = 42");
//! assert_eq!(scanner.next_token().kind, TokenKind::Keyword(Keyword::Let));
//! ```
//!
//! The crate has no knowledge of the integration layer (`bcpl_lexer`),
//! which collects tokens and decodes string literals.

mod cursor;
mod keywords;
mod scan_error;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::{Cursor, Location};
pub use keywords::{classify, Keyword};
pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::{tokenize, Scanner};
pub use source_buffer::{SourceBuffer, SourceError};
pub use token::{is_whitespace, Token, TokenDisplay, TokenKind, Whitespace};
