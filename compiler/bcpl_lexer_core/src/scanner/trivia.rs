//! Whitespace runs and comments.

use super::Scanner;
use crate::{is_whitespace, ScanErrorKind, Token, TokenKind, Whitespace};

impl Scanner<'_> {
    // ─── Whitespace ──────────────────────────────────────────────────

    /// Consume a run of any whitespace bytes.
    ///
    /// `class` comes from the first byte; mixed runs such as `"  \t\n"`
    /// still produce a single token tagged with that first class.
    #[inline]
    pub(super) fn whitespace(&mut self, start: u32, class: Whitespace) -> Token {
        self.cursor.eat_while(is_whitespace);
        self.token(TokenKind::Whitespace(class), start)
    }

    // ─── Comments ────────────────────────────────────────────────────

    /// `//` through the next `\n` inclusive, or through EOF.
    pub(super) fn line_comment(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first '/'
        self.cursor.advance(); // consume second '/'
        self.cursor.eat_until_newline_or_eof();
        self.cursor.advance(); // consume '\n'; no-op at EOF
        self.token(TokenKind::Comment, start)
    }

    /// `/*` through the next `*/` inclusive. Block comments do not nest.
    pub(super) fn block_comment(&mut self, start: u32) -> Token {
        let open = self.cursor.location();
        self.cursor.advance(); // consume '/'
        self.cursor.advance(); // consume '*'
        if self.cursor.eat_until_block_end() {
            self.token(TokenKind::Comment, start)
        } else {
            self.report(ScanErrorKind::UnterminatedComment, open, b'/');
            self.token(TokenKind::Error, start)
        }
    }
}
