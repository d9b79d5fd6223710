//! Token collection, diagnostics, and string decoding for BCPL.
//!
//! Drives [`bcpl_lexer_core::Scanner`] over a whole source, collecting the
//! tokens and every scan error into a [`LexOutput`]. Trivia can be kept or
//! dropped through [`LexOptions`]. String literals stay undecoded in the
//! token stream; [`string_value`] decodes one on request.
//!
//! # Debugging
//!
//! Call [`init_tracing`] once, then run with:
//!
//! - `RUST_LOG=bcpl_lexer=debug`: one summary line per lex run.
//! - `RUST_LOG=bcpl_lexer=trace`: every token as it is produced.

mod escape;
mod lex_error;

use std::borrow::Cow;
use std::path::Path;
use std::sync::Once;

use tracing::{debug, trace};

pub use bcpl_lexer_core::{
    Keyword, ScanError, ScanErrorKind, Scanner, SourceBuffer, SourceError, Token, TokenKind,
    Whitespace,
};
pub use escape::{unescape_string, EscapeError};
pub use lex_error::LexError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// How a lex run collects its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Keep whitespace and comment tokens. When `false` only significant
    /// tokens and the final `Eof` are collected.
    pub keep_trivia: bool,
}

impl LexOptions {
    /// Options that keep every token, so spans cover the whole source.
    pub fn lossless() -> Self {
        Self { keep_trivia: true }
    }
}

/// Tokens and diagnostics from one lex run.
///
/// `tokens` always ends with a zero-length `Eof` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens before the final `Eof`.
    pub fn without_eof(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.kind == TokenKind::Eof => rest,
            _ => &self.tokens,
        }
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}

/// A file's buffer together with the tokens scanned from it.
#[derive(Clone, Debug)]
pub struct LexedFile {
    pub source: SourceBuffer<'static>,
    pub output: LexOutput,
}

impl LexedFile {
    /// Bytes covered by `token`.
    pub fn text(&self, token: Token) -> &[u8] {
        self.source.slice(token.start, token.end())
    }

    /// Decoded value of a string token from this file.
    pub fn string_value(
        &self,
        token: Token,
        errors: &mut Vec<EscapeError>,
    ) -> Result<Cow<'_, [u8]>, LexError> {
        string_value(self.source.as_bytes(), token, errors)
    }
}

/// Lex `source` dropping trivia.
pub fn lex(source: &str) -> LexOutput {
    lex_with_options(source, LexOptions::default())
}

pub fn lex_with_options(source: &str, options: LexOptions) -> LexOutput {
    lex_bytes(source.as_bytes(), options)
}

/// Lex raw bytes. Non-ASCII bytes produce error tokens, not a failure.
pub fn lex_bytes(source: &[u8], options: LexOptions) -> LexOutput {
    let mut errors = Vec::new();
    let mut tokens = Vec::new();
    {
        let mut scanner = Scanner::from_bytes(source).on_error(|err| {
            debug!(
                line = err.line,
                column = err.column,
                offset = err.offset,
                kind = %err.kind,
                "scan error"
            );
            errors.push(*err);
        });
        loop {
            let token = scanner.next_token();
            trace!(
                start = token.start,
                len = token.len,
                kind = token.kind.name(),
                "token"
            );
            if options.keep_trivia || !token.kind.is_trivia() {
                tokens.push(token);
            }
            if token.kind == TokenKind::Eof {
                break;
            }
        }
    }
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        errors = errors.len(),
        keep_trivia = options.keep_trivia,
        "lexed source"
    );
    LexOutput { tokens, errors }
}

/// Read and lex a whole file.
pub fn lex_file(path: impl AsRef<Path>, options: LexOptions) -> Result<LexedFile, LexError> {
    let path = path.as_ref();
    let source = SourceBuffer::from_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    let output = lex_bytes(source.as_bytes(), options);
    Ok(LexedFile { source, output })
}

/// Decode the string literal covered by `token`.
///
/// `source` must be the buffer the token was scanned from. Unknown and
/// dangling escapes are pushed into `errors`; decoding still succeeds.
pub fn string_value<'s>(
    source: &'s [u8],
    token: Token,
    errors: &mut Vec<EscapeError>,
) -> Result<Cow<'s, [u8]>, LexError> {
    if token.kind != TokenKind::String {
        return Err(LexError::NotAString {
            found: token.kind.name(),
        });
    }
    let literal = source
        .get(token.range())
        .ok_or(LexError::Escape(EscapeError::NotQuoted))?;
    unescape_string(literal, token.start, errors).map_err(LexError::from)
}
