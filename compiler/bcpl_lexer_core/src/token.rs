//! Token model: a [`TokenKind`] plus a byte span into the source.
//!
//! Tokens never copy text. Use [`Token::text`] with the buffer the token
//! came from to get its bytes, or [`Token::display`] for log output.

use std::fmt;
use std::ops::Range;

use crate::Keyword;

/// Whitespace class of a whitespace run, taken from the run's first byte.
///
/// Covers the six bytes accepted by C `isspace` in the "C" locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Whitespace {
    Space,
    Tab,
    Newline,
    VerticalTab,
    FormFeed,
    CarriageReturn,
}

impl Whitespace {
    /// Classify a single byte.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b' ' => Some(Self::Space),
            b'\t' => Some(Self::Tab),
            b'\n' => Some(Self::Newline),
            0x0B => Some(Self::VerticalTab),
            0x0C => Some(Self::FormFeed),
            b'\r' => Some(Self::CarriageReturn),
            _ => None,
        }
    }
}

/// Returns `true` for any byte that can continue a whitespace run.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    Whitespace::from_byte(b).is_some()
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Identifiers & Literals ===
    Ident,
    Keyword(Keyword),
    /// Decimal integer (`42`).
    Int,
    /// Decimal with one fractional separator (`3.14`, `.5`, `1.`).
    Float,
    /// `0x1F`
    HexInt,
    /// `0b101`
    BinInt,
    /// `0o17`
    OctInt,
    /// Numeric literal with a leading zero or a digit outside its radix.
    MalformedNumber,
    /// Double-quoted string, delimiters included, escapes undecoded.
    String,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    /// `=`
    Assign,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    /// Lone `!` (negation).
    Bang,

    // === Delimiters ===
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,

    // === Trivia ===
    Whitespace(Whitespace),
    /// Line comment (`\n` included) or block comment.
    Comment,

    // === Errors & Control ===
    /// Unexpected byte, unterminated string, or unterminated block comment.
    Error,
    Eof,
}

impl TokenKind {
    /// Canonical upper-case name used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "IDENT",
            Self::Keyword(_) => "KEYWORD",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::HexInt => "HEX",
            Self::BinInt => "BIN",
            Self::OctInt => "OCT",
            Self::MalformedNumber => "MALFORMED_NUMBER",
            Self::String => "STRING",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Percent => "MOD",
            Self::Assign => "ASSIGN",
            Self::EqualEqual => "EQUAL",
            Self::BangEqual => "NOTEQ",
            Self::Less => "LT",
            Self::LessEqual => "LTE",
            Self::Greater => "GT",
            Self::GreaterEqual => "GTE",
            Self::PlusPlus => "INC",
            Self::MinusMinus => "DEC",
            Self::PlusEqual => "PLUS_EQ",
            Self::MinusEqual => "MINUS_EQ",
            Self::StarEqual => "MUL_EQ",
            Self::SlashEqual => "DIV_EQ",
            Self::Bang => "NEGATION",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::LeftBrace => "LBRACE",
            Self::RightBrace => "RBRACE",
            Self::Semicolon => "SEMICOL",
            Self::Whitespace(Whitespace::Space) => "DELIM_S",
            Self::Whitespace(Whitespace::Tab) => "DELIM_T",
            Self::Whitespace(Whitespace::Newline) => "DELIM_N",
            Self::Whitespace(Whitespace::VerticalTab) => "DELIM_V",
            Self::Whitespace(Whitespace::FormFeed) => "DELIM_F",
            Self::Whitespace(Whitespace::CarriageReturn) => "DELIM_R",
            Self::Comment => "COMMENT",
            Self::Error => "ERR",
            Self::Eof => "EOF",
        }
    }

    /// Fixed source text for tokens that always have the same spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::Bang => "!",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Semicolon => ";",
            _ => return None,
        };
        Some(text)
    }

    /// Whitespace or comment.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace(_) | Self::Comment)
    }

    /// Token produced for malformed input.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::MalformedNumber)
    }
}

/// A classified span of source bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first byte.
    pub start: u32,
    /// Length in bytes. Zero only for [`TokenKind::Eof`].
    pub len: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, start: u32, len: u32) -> Self {
        Self { kind, start, len }
    }

    /// Byte offset one past the last byte.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// The token's bytes within `source`.
    ///
    /// `source` must be the buffer the token was scanned from.
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        &source[self.range()]
    }

    /// Render as `NAME "text"` for logs and test output.
    pub fn display<'s>(&self, source: &'s [u8]) -> TokenDisplay<'s> {
        TokenDisplay {
            kind: self.kind,
            text: self.text(source),
        }
    }
}

/// [`fmt::Display`] adapter returned by [`Token::display`].
///
/// Non-printable bytes are escaped, so whitespace and error tokens stay
/// readable on one line.
#[derive(Clone, Copy, Debug)]
pub struct TokenDisplay<'s> {
    kind: TokenKind,
    text: &'s [u8],
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            return f.write_str("EOF");
        }
        write!(f, "{} \"{}\"", self.kind.name(), self.text.escape_ascii())
    }
}
