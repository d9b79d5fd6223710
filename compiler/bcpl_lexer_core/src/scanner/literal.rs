//! Identifiers, keywords, and string literals.

use super::Scanner;
use crate::{classify, ScanErrorKind, Token, TokenKind};

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

impl Scanner<'_> {
    // ─── Identifiers ─────────────────────────────────────────────────

    #[inline]
    pub(super) fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);
        let kind =
            classify(self.cursor.slice_from(start)).map_or(TokenKind::Ident, TokenKind::Keyword);
        self.token(kind, start)
    }

    // ─── Strings ─────────────────────────────────────────────────────

    /// Scan a double-quoted string.
    ///
    /// A backslash consumes the next byte unconditionally, so `\"` does
    /// not close the string. Escapes are left undecoded; see
    /// `bcpl_lexer::escape` for the decoding step.
    pub(super) fn string(&mut self, start: u32) -> Token {
        let open = self.cursor.location();
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.token(TokenKind::String, start);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance(); // escaped byte; no-op at EOF
                }
                _ => {
                    self.report(ScanErrorKind::UnterminatedString, open, b'"');
                    return self.token(TokenKind::Error, start);
                }
            }
        }
    }
}
