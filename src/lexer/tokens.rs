use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mul);
        map.insert('/', TokenKind::Div);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,

    Plus,
    Minus,
    Mul,
    Div,

    LParen,
    RParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload carried by numeric literal tokens. Operators and parens
/// carry none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Token {
        Token { kind, value: None }
    }

    pub fn with_value(kind: TokenKind, value: TokenValue) -> Token {
        Token {
            kind,
            value: Some(value),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(value) = &self.value {
            write!(f, "Token({}: {})", self.kind, value)
        } else {
            write!(f, "Token({})", self.kind)
        }
    }
}
