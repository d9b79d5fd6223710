//! Numeric literal state machine.
//!
//! ```text
//! Start ──0[xXbBoO]──▶ RadixPrefix ──▶ Hex | Bin | Oct
//!   │ ──0[0-9]───────▶ Error   (leading zero)
//!   │ ──.────────────▶ Float
//!   └ ──[0-9]────────▶ Int ──.──▶ Float
//! ```
//!
//! One byte is consumed per step. `Float` accepts digits only, so a second
//! `.` ends the literal. The radix states consume the whole alphanumeric
//! run after the prefix; any byte in that run outside the radix marks the
//! literal malformed once, and the whole run becomes one token.

use super::Scanner;
use crate::{Location, ScanErrorKind, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumState {
    Start,
    Int,
    Float,
    RadixPrefix,
    Hex,
    Bin,
    Oct,
    /// Leading zero: keep consuming decimal digits into one bad token.
    Error,
}

impl NumState {
    /// Whether `b` is a valid digit in a radix state.
    fn accepts(self, b: u8) -> bool {
        match self {
            Self::Hex => b.is_ascii_hexdigit(),
            Self::Bin => matches!(b, b'0' | b'1'),
            Self::Oct => matches!(b, b'0'..=b'7'),
            _ => b.is_ascii_digit(),
        }
    }

    fn radix_kind(self) -> TokenKind {
        match self {
            Self::Hex => TokenKind::HexInt,
            Self::Bin => TokenKind::BinInt,
            Self::Oct => TokenKind::OctInt,
            _ => TokenKind::Int,
        }
    }
}

/// First offending byte of a malformed literal.
type Offense = Option<(Location, u8)>;

impl Scanner<'_> {
    /// Scan a literal starting at a digit, or at `.` followed by a digit.
    pub(super) fn number(&mut self, start: u32) -> Token {
        let literal_start = self.cursor.location();
        let mut state = NumState::Start;
        let mut radix_digits: u32 = 0;
        let mut offense: Offense = None;

        let kind = loop {
            let b = self.cursor.current();
            state = match state {
                NumState::Start => {
                    let next = self.cursor.peek();
                    match self.cursor.advance() {
                        b'0' if matches!(next, b'x' | b'X' | b'b' | b'B' | b'o' | b'O') => {
                            NumState::RadixPrefix
                        }
                        b'0' if next.is_ascii_digit() => {
                            offense = Some((literal_start, b'0'));
                            NumState::Error
                        }
                        b'.' => NumState::Float,
                        _ => NumState::Int,
                    }
                }
                NumState::RadixPrefix => {
                    let at = self.cursor.location();
                    match self.cursor.advance() {
                        b'x' | b'X' => NumState::Hex,
                        b'b' | b'B' => NumState::Bin,
                        b'o' | b'O' => NumState::Oct,
                        other => {
                            offense = offense.or(Some((at, other)));
                            NumState::Error
                        }
                    }
                }
                NumState::Int => match b {
                    b'0'..=b'9' => {
                        self.cursor.advance();
                        NumState::Int
                    }
                    b'.' => {
                        self.cursor.advance();
                        NumState::Float
                    }
                    _ => break TokenKind::Int,
                },
                NumState::Float => {
                    if !b.is_ascii_digit() {
                        break TokenKind::Float;
                    }
                    self.cursor.advance();
                    NumState::Float
                }
                NumState::Hex | NumState::Bin | NumState::Oct => {
                    if !b.is_ascii_alphanumeric() {
                        if radix_digits == 0 {
                            // `0x` with nothing after the prefix
                            offense = offense.or(Some((literal_start, b'0')));
                        }
                        break state.radix_kind();
                    }
                    if !state.accepts(b) {
                        offense = offense.or(Some((self.cursor.location(), b)));
                    }
                    radix_digits += 1;
                    self.cursor.advance();
                    state
                }
                NumState::Error => {
                    if !b.is_ascii_digit() {
                        break TokenKind::MalformedNumber;
                    }
                    self.cursor.advance();
                    NumState::Error
                }
            };
        };

        match offense {
            Some((at, byte)) => {
                self.report(ScanErrorKind::MalformedNumber, at, byte);
                self.token(TokenKind::MalformedNumber, start)
            }
            None => self.token(kind, start),
        }
    }
}
