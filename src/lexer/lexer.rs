use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::tokens::{Token, TokenKind, TokenValue, OPERATOR_LOOKUP};

/// The lexer state machine.
///
/// Owns the source as a char buffer, the live Position over it and the
/// tokens produced so far. The current character is whatever sits at
/// `pos.index`; `None` is the end-of-input sentinel, so an empty source
/// scans to an empty token sequence.
pub struct Lexer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    pos: Position,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let text = Rc::new(source);

        Lexer {
            chars: text.chars().collect(),
            tokens: vec![],
            pos: Position::start(file_name, text),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.pos.index).copied()
    }

    fn advance(&mut self) {
        if let Some(current) = self.current_char() {
            self.pos.advance(current);
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Scans a numeric literal: greedily consumes digits and at most one
    /// decimal point. A second dot ends the literal without being
    /// consumed, so it becomes the start of the next token.
    fn make_number(&mut self) -> Result<Token, Error> {
        let pos_start = self.pos.clone();
        let mut literal = String::new();
        let mut dot_count = 0;

        while let Some(current) = self.current_char() {
            if current == '.' {
                if dot_count == 1 {
                    break;
                }
                dot_count += 1;
                literal.push('.');
            } else if current.is_ascii_digit() {
                literal.push(current);
            } else {
                break;
            }

            self.advance();
        }

        let span = Span {
            start: pos_start,
            end: self.pos.clone(),
        };

        if dot_count == 0 {
            let value = literal
                .parse::<i64>()
                .map_err(|_| Error::new(ErrorImpl::MalformedNumber { literal: literal.clone() }, span))?;
            Ok(Token::with_value(TokenKind::Int, TokenValue::Int(value)))
        } else {
            let value = literal
                .parse::<f64>()
                .map_err(|_| Error::new(ErrorImpl::MalformedNumber { literal: literal.clone() }, span))?;
            Ok(Token::with_value(TokenKind::Float, TokenValue::Float(value)))
        }
    }
}

/// Tokenizes `source` into a left-to-right token sequence.
///
/// `file` names the source for diagnostics and defaults to "shell".
/// Scanning is all-or-nothing: the first unrecognized character aborts
/// the scan and the error is returned in place of any tokens.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(current) = lex.current_char() {
        if current.is_whitespace() {
            lex.advance();
        } else if let Some(kind) = OPERATOR_LOOKUP.get(&current) {
            lex.push(Token::new(*kind));
            lex.advance();
        } else if current.is_ascii_digit() {
            let token = lex.make_number()?;
            lex.push(token);
        } else {
            let pos_start = lex.pos.clone();
            lex.advance();
            return Err(Error::illegal_character(
                current,
                Span {
                    start: pos_start,
                    end: lex.pos.clone(),
                },
            ));
        }
    }

    Ok(lex.tokens)
}
