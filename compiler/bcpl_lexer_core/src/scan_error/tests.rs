use std::cell::RefCell;

use pretty_assertions::assert_eq;

use super::*;

fn at(offset: u32, line: u32, column: u32) -> Location {
    Location {
        offset,
        line,
        column,
    }
}

#[test]
fn messages_match_display() {
    for kind in [
        ScanErrorKind::MalformedNumber,
        ScanErrorKind::UnterminatedString,
        ScanErrorKind::UnterminatedComment,
        ScanErrorKind::UnexpectedCharacter,
    ] {
        assert_eq!(kind.to_string(), kind.message());
    }
}

#[test]
fn error_display_includes_position() {
    let err = ScanError::new(ScanErrorKind::UnexpectedCharacter, at(7, 2, 3), b'@');
    assert_eq!(err.to_string(), "2:3: unexpected character");
    assert_eq!(err.message(), "unexpected character");
    assert_eq!(err.offset, 7);
    assert_eq!(err.byte, b'@');
}

#[test]
fn reporter_counts_without_handler() {
    let mut reporter = ErrorReporter::default();
    assert!(!reporter.has_handler());
    reporter.report(ScanError::new(ScanErrorKind::MalformedNumber, at(0, 1, 1), b'0'));
    reporter.report(ScanError::new(ScanErrorKind::MalformedNumber, at(5, 1, 6), b'0'));
    assert_eq!(reporter.reported(), 2);
}

#[test]
fn reporter_forwards_to_handler() {
    let seen = RefCell::new(Vec::new());
    let mut reporter = ErrorReporter::default();
    reporter.set_handler(|err: &ScanError| seen.borrow_mut().push(err.kind));
    assert!(reporter.has_handler());

    reporter.report(ScanError::new(ScanErrorKind::UnterminatedString, at(0, 1, 1), b'"'));
    reporter.clear_handler();
    reporter.report(ScanError::new(ScanErrorKind::UnterminatedComment, at(0, 1, 1), b'/'));

    drop(reporter);
    assert_eq!(seen.into_inner(), vec![ScanErrorKind::UnterminatedString]);
}
