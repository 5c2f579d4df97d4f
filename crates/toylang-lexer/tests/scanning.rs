use toylang_lexer::{KindNames, LexError, Scanner, Span, SpanError, TokenKind, tokenize};

/// Every token's text plus the skipped whitespace between tokens must give
/// back the source.
fn assert_round_trip(source: &str) {
    let mut rebuilt = String::new();
    let mut last_end = 0;
    for token in Scanner::new("<test>", source) {
        let gap = &source[last_end..token.span.start];
        assert!(
            gap.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n')),
            "non-whitespace gap {:?} in {:?}",
            gap,
            source
        );
        rebuilt.push_str(gap);
        rebuilt.push_str(token.raw(source).unwrap());
        last_end = token.span.end();
    }
    assert_eq!(last_end, source.len());
    assert_eq!(rebuilt, source);
}

#[test_log::test]
fn round_trip_reproduces_source() {
    for source in [
        "",
        "   ",
        "11 + 2 - 3.5 * 4.62",
        "let x\n\t'str' \"two\"\r\n 3. @ é",
        "1.2.3%%//",
        "nil true false _under score9",
        "'unterminated\nnext",
    ] {
        assert_round_trip(source);
    }
}

#[test_log::test]
fn sample_script_kinds() {
    let tokens = tokenize("<test_script>", "11 + 2 - 3.5 * 4.62").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Mult,
            TokenKind::Number,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[4].span, Span::new(9, 3, 1, 10));
}

#[test_log::test]
fn whitespace_only_input_is_eof_forever() {
    let mut scanner = Scanner::new("<test>", "\n\n \t \r\n");
    for _ in 0..3 {
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfFile);
    }
    assert_eq!(scanner.line(), 4);
    assert_eq!(scanner.column(), 1);
}

#[test_log::test]
fn tokenize_reports_first_error() {
    let err = tokenize("script.toy", "1 +\n  $ ?").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            file: "script.toy".to_string(),
            ch: '$',
            line: 2,
            column: 3,
        }
    );
    assert_eq!(err.to_string(), "script.toy:2:3: unexpected character '$'");
    assert_eq!((err.line(), err.column()), (2, 3));
}

#[test_log::test]
fn scanner_collects_every_error() {
    let source = "$ 1 'open";
    let mut scanner = Scanner::new("<test>", source);
    let errors: Vec<_> = scanner
        .by_ref()
        .filter(|t| t.kind == TokenKind::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(scanner.errors().len(), 2);
    assert!(matches!(
        scanner.errors()[1],
        LexError::UnterminatedString { line: 1, column: 5, .. }
    ));
    assert_eq!(errors[1].raw(source).unwrap(), "'open");
}

#[test_log::test]
fn stale_span_is_rejected() {
    let source = String::from("3.14159");
    let token = tokenize("<test>", &source).unwrap()[0];
    let shrunk = "3.1";
    assert_eq!(
        token.raw(shrunk),
        Err(SpanError::OutOfBounds {
            start: 0,
            end: 7,
            len: 3,
        })
    );
}

#[test_log::test]
fn kind_names_match_token_display() {
    let names = KindNames::new();
    for kind in TokenKind::ALL {
        assert_eq!(names.to_str(kind), kind.to_string());
        assert_eq!(names.to_kind(&kind.to_string(), TokenKind::Error), kind);
    }
    assert_eq!(names.to_kind("div", TokenKind::Error), TokenKind::Div);
    assert_eq!(names.to_kind("unknown", TokenKind::Error), TokenKind::Error);
}
