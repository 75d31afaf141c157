//! Integration tests for the tokenization boundary.
//!
//! These tests exercise the public `tokenize` entry point end-to-end,
//! from raw source text to the token sequence or rendered diagnostic.

use arith::lexer::{
    lexer::tokenize,
    tokens::{Token, TokenKind, TokenValue},
};

#[test]
fn test_tokenize_full_expression() {
    let source = "(1 + 2.5) * 3".to_string();
    let tokens = tokenize(source, Some("test.arith".to_string())).unwrap();

    let expected = vec![
        Token::new(TokenKind::LParen),
        Token::with_value(TokenKind::Int, TokenValue::Int(1)),
        Token::new(TokenKind::Plus),
        Token::with_value(TokenKind::Float, TokenValue::Float(2.5)),
        Token::new(TokenKind::RParen),
        Token::new(TokenKind::Mul),
        Token::with_value(TokenKind::Int, TokenValue::Int(3)),
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_tokenize_division_and_subtraction() {
    let source = "10 / 2 - 3".to_string();
    let tokens = tokenize(source, Some("test.arith".to_string())).unwrap();

    assert_eq!(tokens[0], Token::with_value(TokenKind::Int, TokenValue::Int(10)));
    assert_eq!(tokens[1], Token::new(TokenKind::Div));
    assert_eq!(tokens[2], Token::with_value(TokenKind::Int, TokenValue::Int(2)));
    assert_eq!(tokens[3], Token::new(TokenKind::Minus));
    assert_eq!(tokens[4], Token::with_value(TokenKind::Int, TokenValue::Int(3)));
}

#[test]
fn test_tokenize_unsupported_operator() {
    let source = "5 % 2".to_string();
    let result = tokenize(source, Some("test.arith".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "Illegal Character");
    assert!(error.to_string().contains("'%'"));
    assert!(error.to_string().contains("File: test.arith, Line: 1"));
}

#[test]
fn test_tokenize_multiline_source() {
    let source = "1 +\n2\n".to_string();
    let tokens = tokenize(source, Some("test.arith".to_string())).unwrap();

    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_error_on_later_line_reports_line_number() {
    let source = "1 + 2\n3 ? 4".to_string();
    let result = tokenize(source, Some("test.arith".to_string()));

    let error = result.unwrap_err();
    assert!(error.to_string().contains("'?'"));
    assert!(error.to_string().contains("Line: 2"));
}

#[test]
fn test_default_source_name_is_shell() {
    let source = "@".to_string();
    let result = tokenize(source, None);

    let error = result.unwrap_err();
    assert!(error.to_string().contains("File: shell"));
}

#[test]
fn test_token_display() {
    let source = "1 + 2.5".to_string();
    let tokens = tokenize(source, Some("test.arith".to_string())).unwrap();

    assert_eq!(tokens[0].to_string(), "Token(Int: 1)");
    assert_eq!(tokens[1].to_string(), "Token(Plus)");
    assert_eq!(tokens[2].to_string(), "Token(Float: 2.5)");
}
