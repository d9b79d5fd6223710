//! Operator scanning: maximal munch over a fixed lead-byte table.
//!
//! Each lead byte has a bare kind and at most two one-byte extensions.
//! The scanner consumes the lead byte, checks exactly one more byte, and
//! never looks further ahead.

use super::Scanner;
use crate::{Token, TokenKind};

/// Bare kind for a lead byte plus the extensions it may take.
pub(super) struct OperatorRule {
    bare: TokenKind,
    extensions: &'static [(u8, TokenKind)],
}

pub(super) const PLUS: OperatorRule = OperatorRule {
    bare: TokenKind::Plus,
    extensions: &[(b'+', TokenKind::PlusPlus), (b'=', TokenKind::PlusEqual)],
};

pub(super) const MINUS: OperatorRule = OperatorRule {
    bare: TokenKind::Minus,
    extensions: &[(b'-', TokenKind::MinusMinus), (b'=', TokenKind::MinusEqual)],
};

pub(super) const STAR: OperatorRule = OperatorRule {
    bare: TokenKind::Star,
    extensions: &[(b'=', TokenKind::StarEqual)],
};

/// `//` and `/*` never reach here; the dispatcher routes them to comments.
pub(super) const SLASH: OperatorRule = OperatorRule {
    bare: TokenKind::Slash,
    extensions: &[(b'=', TokenKind::SlashEqual)],
};

pub(super) const PERCENT: OperatorRule = OperatorRule {
    bare: TokenKind::Percent,
    extensions: &[],
};

pub(super) const ASSIGN: OperatorRule = OperatorRule {
    bare: TokenKind::Assign,
    extensions: &[(b'=', TokenKind::EqualEqual)],
};

pub(super) const BANG: OperatorRule = OperatorRule {
    bare: TokenKind::Bang,
    extensions: &[(b'=', TokenKind::BangEqual)],
};

pub(super) const LESS: OperatorRule = OperatorRule {
    bare: TokenKind::Less,
    extensions: &[(b'=', TokenKind::LessEqual)],
};

pub(super) const GREATER: OperatorRule = OperatorRule {
    bare: TokenKind::Greater,
    extensions: &[(b'=', TokenKind::GreaterEqual)],
};

impl Scanner<'_> {
    pub(super) fn operator(&mut self, start: u32, rule: &OperatorRule) -> Token {
        self.cursor.advance(); // consume lead byte
        let next = self.cursor.current();
        let extended = rule
            .extensions
            .iter()
            .find(|&&(b, _)| b == next)
            .map(|&(_, kind)| kind);
        let kind = match extended {
            Some(kind) => {
                self.cursor.advance();
                kind
            }
            None => rule.bare,
        };
        self.token(kind, start)
    }
}
