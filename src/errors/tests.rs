//! Unit tests for error construction, naming and reporting helpers.

use crate::{lexer::lexer::tokenize, parse, Position};

use super::errors::{Error, ErrorImpl, ErrorTip, LexError, ParseError};

#[test]
fn test_error_messages() {
    let cases: Vec<(ErrorImpl, &str)> = vec![
        (LexError::UnterminatedString.into(), "unterminated string literal"),
        (LexError::UnterminatedChar.into(), "unterminated character literal"),
        (
            LexError::InvalidCharLiteral {
                literal: "'ab'".to_string(),
            }
            .into(),
            "invalid character literal 'ab'",
        ),
        (
            LexError::UnknownCharacter { character: '@' }.into(),
            "unknown character '@'",
        ),
        (
            ParseError::ExpectedToken {
                expected: "`then`".to_string(),
                found: "`do`".to_string(),
            }
            .into(),
            "expected `then`, found `do`",
        ),
        (
            ParseError::UnexpectedEndOfInput {
                expected: "`end`".to_string(),
            }
            .into(),
            "unexpected end of input, expected `end`",
        ),
        (
            ParseError::InvalidListExpr {
                found: "`)`".to_string(),
            }
            .into(),
            "expected an expression in the list, found `)`",
        ),
        (
            ParseError::NestingTooDeep { limit: 256 }.into(),
            "nesting exceeds 256 levels",
        ),
    ];

    for (kind, message) in cases {
        let error = Error::new(kind, Position::null());
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_error_names() {
    let error = Error::new(LexError::UnterminatedChar, Position(3));
    assert_eq!(error.get_error_name(), "UnterminatedChar");
    assert!(error.is_lex_error());
    assert_eq!(error.get_position(), &Position(3));

    let error = Error::new(
        ParseError::UnexpectedEndOfInput {
            expected: "type".to_string(),
        },
        Position(0),
    );
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert!(!error.is_lex_error());
}

#[test]
fn test_semicolon_tip() {
    let error = parse("method f() begin x := 1 end;").unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_tip().to_string(), "did you miss a semicolon?");
}

#[test]
fn test_no_tip_for_unknown_character() {
    let error = tokenize("#").next().unwrap().unwrap_err();

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_other_expected_token_has_no_tip() {
    let error = parse("method f() begin if x do y; end;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::Parse(ParseError::ExpectedToken {
            expected: "`then`".to_string(),
            found: "`do`".to_string(),
        })
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_line_column() {
    let source = "method f()\nbegin\n\tx := 'ab';\nend;";
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidCharLiteral");
    // Columns count characters, the tab included.
    assert_eq!(error.line_column(source), (3, 7));
}

#[test]
fn test_line_column_at_end_of_input() {
    let source = "method f() begin\n  x := 1;";
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.line_column(source), (2, 10));
}

#[test]
fn test_nesting_too_deep_error() {
    let source = format!("method f() begin x := {}1; end;", "(".repeat(500));
    let error = parse(&source).unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(!error.is_lex_error());
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    // The statement, `x := ...` and its right side are open before the
    // first `(`, and each `(` opens one more level.
    assert_eq!(error.line_column(&source), (1, 277));
}
