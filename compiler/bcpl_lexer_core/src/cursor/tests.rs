use crate::{Location, SourceBuffer};

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = SourceBuffer::new("abc").cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.location(), Location::START);
}

#[test]
fn advance_returns_consumed_byte() {
    let mut cursor = SourceBuffer::new("abc").cursor();
    assert_eq!(cursor.advance(), b'a');
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn peek_looks_one_ahead() {
    let mut cursor = SourceBuffer::new("ab").cursor();
    assert_eq!(cursor.peek(), b'b');
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = SourceBuffer::new("hi").cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn advance_at_eof_is_idempotent() {
    let mut cursor = SourceBuffer::new("x\n").cursor();
    cursor.advance();
    cursor.advance();
    let before = cursor.location();
    for _ in 0..5 {
        assert_eq!(cursor.advance(), 0);
    }
    assert_eq!(cursor.location(), before);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn empty_source_is_eof() {
    let cursor = SourceBuffer::new("").cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = SourceBuffer::from_bytes(b"\0a").cursor();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'a');
}

// === Line / Column ===

#[test]
fn newline_resets_column() {
    let mut cursor = SourceBuffer::new("ab\ncd").cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (1, 3));
    cursor.advance(); // '\n'
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 2));
}

#[test]
fn carriage_return_is_an_ordinary_column() {
    let mut cursor = SourceBuffer::new("\r\n").cursor();
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
}

// === eat_while ===

#[test]
fn eat_while_stops_at_predicate() {
    let mut cursor = SourceBuffer::new("123abc").cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice_from(0), b"123");
}

#[test]
fn eat_while_stops_at_eof_even_if_pred_accepts_zero() {
    let mut cursor = SourceBuffer::new("aaa").cursor();
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

// === Bulk skips ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = SourceBuffer::new("// hi\nx").cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'\n');
    assert_eq!((cursor.line(), cursor.column()), (1, 6));
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let mut cursor = SourceBuffer::new("no newline").cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.column(), 11);
}

#[test]
fn skip_to_string_delim_counts_lines() {
    let mut cursor = SourceBuffer::new("ab\ncd\nef\"").cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 8);
    assert_eq!((cursor.line(), cursor.column()), (3, 3));
}

#[test]
fn skip_to_string_delim_finds_backslash() {
    let mut cursor = SourceBuffer::new(r#"ab\"c""#).cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_at_eof() {
    let mut cursor = SourceBuffer::new("abc").cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_block_end_consumes_closer() {
    let mut cursor = SourceBuffer::new("a\n*b*/c").cursor();
    assert!(cursor.eat_until_block_end());
    assert_eq!(cursor.current(), b'c');
    assert_eq!((cursor.line(), cursor.column()), (2, 5));
}

#[test]
fn eat_until_block_end_without_closer() {
    let mut cursor = SourceBuffer::new("abc */ ").cursor();
    cursor.advance();
    assert!(cursor.eat_until_block_end());
    let mut cursor = SourceBuffer::new("abc *").cursor();
    assert!(!cursor.eat_until_block_end());
    assert!(cursor.is_eof());
    assert_eq!(cursor.column(), 6);
}

#[test]
fn bulk_skip_matches_byte_by_byte_tracking() {
    let source = "x\n\nyy\nzzz";
    let mut fast = SourceBuffer::new(source).cursor();
    fast.eat_until_block_end();

    let mut slow = SourceBuffer::new(source).cursor();
    while !slow.is_eof() {
        slow.advance();
    }
    assert_eq!(fast.location(), slow.location());
}

// === Buffer access ===

#[test]
fn into_source_returns_buffer() {
    let mut cursor = SourceBuffer::owned(b"abc".to_vec()).cursor();
    cursor.advance();
    let buf = cursor.into_source();
    assert!(buf.is_owned());
    assert_eq!(buf.as_bytes(), b"abc");
}
