//! Keyword classification for identifier-shaped spans.
//!
//! BCPL reserves a short, fixed list of upper-case words. Instead of a
//! generated perfect hash, [`classify`] dispatches on the first byte (and
//! the second or third byte where two keywords share a first letter) to
//! pick at most one candidate, then confirms it with a full length-and-byte
//! comparison. The lookup is O(1) and never accepts a mere prefix:
//! `LETTUCE` stays an identifier.
//!
//! Keywords are case-sensitive. `let` and `Let` are identifiers.

/// Reserved BCPL words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Be,
    If,
    Unless,
    While,
    Until,
    Do,
    Return,
    Break,
    Loop,
    Switch,
    Case,
    Default,
    Global,
    Static,
    Manifest,
    Goto,
    Resultis,
    Valof,
    Writef,
    Test,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 21] = [
        Keyword::Let,
        Keyword::Be,
        Keyword::If,
        Keyword::Unless,
        Keyword::While,
        Keyword::Until,
        Keyword::Do,
        Keyword::Return,
        Keyword::Break,
        Keyword::Loop,
        Keyword::Switch,
        Keyword::Case,
        Keyword::Default,
        Keyword::Global,
        Keyword::Static,
        Keyword::Manifest,
        Keyword::Goto,
        Keyword::Resultis,
        Keyword::Valof,
        Keyword::Writef,
        Keyword::Test,
    ];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "LET",
            Keyword::Be => "BE",
            Keyword::If => "IF",
            Keyword::Unless => "UNLESS",
            Keyword::While => "WHILE",
            Keyword::Until => "UNTIL",
            Keyword::Do => "DO",
            Keyword::Return => "RETURN",
            Keyword::Break => "BREAK",
            Keyword::Loop => "LOOP",
            Keyword::Switch => "SWITCH",
            Keyword::Case => "CASE",
            Keyword::Default => "DEFAULT",
            Keyword::Global => "GLOBAL",
            Keyword::Static => "STATIC",
            Keyword::Manifest => "MANIFEST",
            Keyword::Goto => "GOTO",
            Keyword::Resultis => "RESULTIS",
            Keyword::Valof => "VALOF",
            Keyword::Writef => "WRITEF",
            Keyword::Test => "TEST",
        }
    }
}

/// Classify an identifier span as a keyword, or `None`.
///
/// The span is borrowed straight from the source buffer; nothing is copied.
#[inline]
pub fn classify(ident: &[u8]) -> Option<Keyword> {
    let second = ident.get(1).copied();
    let third = ident.get(2).copied();

    let candidate = match *ident.first()? {
        b'B' if second == Some(b'R') => Keyword::Break,
        b'B' => Keyword::Be,
        b'C' => Keyword::Case,
        b'D' if second == Some(b'E') => Keyword::Default,
        b'D' => Keyword::Do,
        b'G' if second == Some(b'O') => Keyword::Goto,
        b'G' => Keyword::Global,
        b'I' => Keyword::If,
        b'L' if second == Some(b'O') => Keyword::Loop,
        b'L' => Keyword::Let,
        b'M' => Keyword::Manifest,
        // RETURN / RESULTIS share "RE"
        b'R' if third == Some(b'S') => Keyword::Resultis,
        b'R' => Keyword::Return,
        b'S' if second == Some(b'W') => Keyword::Switch,
        b'S' => Keyword::Static,
        b'T' => Keyword::Test,
        // UNTIL / UNLESS share "UN"
        b'U' if third == Some(b'T') => Keyword::Until,
        b'U' => Keyword::Unless,
        b'V' => Keyword::Valof,
        b'W' if second == Some(b'R') => Keyword::Writef,
        b'W' => Keyword::While,
        _ => return None,
    };

    (candidate.as_str().as_bytes() == ident).then_some(candidate)
}
