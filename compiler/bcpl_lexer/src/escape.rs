//! String-literal decoding.
//!
//! The scanner leaves escapes untouched so tokens stay zero-copy spans.
//! Consumers that need the value of a string literal call
//! [`unescape_string`], which strips the quotes and decodes:
//!
//! | Escape | Byte   |
//! |--------|--------|
//! | `\n`   | `0x0A` |
//! | `\t`   | `0x09` |
//! | `\r`   | `0x0D` |
//! | `\0`   | `0x00` |
//! | `\\`   | `\`    |
//! | `\"`   | `"`    |
//! | `\'`   | `'`    |
//!
//! Anything else after a backslash is kept verbatim (backslash included)
//! and pushed as an [`EscapeError`] into the caller's accumulator.

use std::borrow::Cow;

use thiserror::Error;

/// A problem found while decoding a string literal.
///
/// Offsets are absolute byte offsets of the backslash in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum EscapeError {
    #[error("unknown escape `\\{}` at offset {offset}", .escape.escape_ascii())]
    Unknown { offset: u32, escape: u8 },
    /// Backslash as the last byte of the body.
    #[error("dangling `\\` at offset {offset}")]
    Dangling { offset: u32 },
    /// Input does not start and end with `"`.
    #[error("string literal is not enclosed in double quotes")]
    NotQuoted,
}

#[inline]
fn resolve_escape(b: u8) -> Option<u8> {
    match b {
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        b'r' => Some(b'\r'),
        b'0' => Some(0),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        b'\'' => Some(b'\''),
        _ => None,
    }
}

/// Decode a quoted string literal, delimiters included.
///
/// `base_offset` is the source offset of the opening quote. Recoverable
/// problems are pushed into `errors` and decoding continues; only a
/// missing delimiter fails outright.
///
/// Fast path: a body without backslashes is returned borrowed.
#[allow(
    clippy::cast_possible_truncation,
    reason = "literal offsets are bounded by the source length, which fits in u32"
)]
pub fn unescape_string<'s>(
    literal: &'s [u8],
    base_offset: u32,
    errors: &mut Vec<EscapeError>,
) -> Result<Cow<'s, [u8]>, EscapeError> {
    let body = match literal {
        [b'"', body @ .., b'"'] => body,
        _ => return Err(EscapeError::NotQuoted),
    };
    if !body.contains(&b'\\') {
        return Ok(Cow::Borrowed(body));
    }

    // Body starts one byte after the opening quote.
    let body_offset = base_offset + 1;
    let mut out = Vec::with_capacity(body.len());
    let mut bytes = body.iter().copied().enumerate();
    while let Some((i, b)) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let offset = body_offset + i as u32;
        match bytes.next() {
            Some((_, esc)) => match resolve_escape(esc) {
                Some(decoded) => out.push(decoded),
                None => {
                    errors.push(EscapeError::Unknown {
                        offset,
                        escape: esc,
                    });
                    out.extend_from_slice(&[b'\\', esc]);
                }
            },
            None => {
                errors.push(EscapeError::Dangling { offset });
                out.push(b'\\');
            }
        }
    }
    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests;
