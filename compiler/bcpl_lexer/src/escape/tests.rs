use pretty_assertions::assert_eq;

use super::*;

fn decode(literal: &[u8]) -> (Result<Cow<'_, [u8]>, EscapeError>, Vec<EscapeError>) {
    let mut errors = Vec::new();
    let result = unescape_string(literal, 0, &mut errors);
    (result, errors)
}

#[test]
fn no_escapes_borrows() {
    let (result, errors) = decode(br#""hello world""#);
    assert_eq!(result, Ok(Cow::Borrowed(&b"hello world"[..])));
    assert!(matches!(result, Ok(Cow::Borrowed(_))));
    assert!(errors.is_empty());
}

#[test]
fn empty_literal() {
    let (result, errors) = decode(br#""""#);
    assert_eq!(result, Ok(Cow::Borrowed(&b""[..])));
    assert!(errors.is_empty());
}

#[test]
fn all_known_escapes() {
    let (result, errors) = decode(br#""\n\t\r\0\\\"\'""#);
    assert_eq!(result.as_deref(), Ok(&b"\n\t\r\0\\\"'"[..]));
    assert!(errors.is_empty());
}

#[test]
fn escapes_mixed_with_text() {
    let (result, errors) = decode(br#""value %n\n""#);
    assert_eq!(result.as_deref(), Ok(&b"value %n\n"[..]));
    assert!(matches!(result, Ok(Cow::Owned(_))));
    assert!(errors.is_empty());
}

#[test]
fn unknown_escape_passes_through() {
    let mut errors = Vec::new();
    let result = unescape_string(br#""a\qb""#, 10, &mut errors);
    assert_eq!(result.as_deref(), Ok(&br"a\qb"[..]));
    // quote at 10, 'a' at 11, '\' at 12
    assert_eq!(
        errors,
        vec![EscapeError::Unknown {
            offset: 12,
            escape: b'q'
        }]
    );
    assert_eq!(errors[0].to_string(), r"unknown escape `\q` at offset 12");
}

#[test]
fn dangling_backslash() {
    // The scanner never closes a string on an escaped quote, so this only
    // comes from hand-built input.
    let (result, errors) = decode(b"\"ab\\\"");
    assert_eq!(result.as_deref(), Ok(&b"ab\\"[..]));
    assert_eq!(errors, vec![EscapeError::Dangling { offset: 3 }]);
}

#[test]
fn escaped_backslash_before_dangling() {
    let (result, errors) = decode(b"\"a\\\\\\\"");
    assert_eq!(result.as_deref(), Ok(&b"a\\\\"[..]));
    assert_eq!(errors, vec![EscapeError::Dangling { offset: 4 }]);
}

#[test]
fn unquoted_input_is_rejected() {
    let mut errors = Vec::new();
    assert_eq!(
        unescape_string(b"abc", 0, &mut errors),
        Err(EscapeError::NotQuoted)
    );
    assert_eq!(
        unescape_string(b"\"", 0, &mut errors),
        Err(EscapeError::NotQuoted)
    );
    assert_eq!(
        unescape_string(b"\"abc", 0, &mut errors),
        Err(EscapeError::NotQuoted)
    );
    assert!(errors.is_empty());
}
