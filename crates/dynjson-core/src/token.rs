use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::Scalar;

/// One classified unit of JSON input, as produced by an external tokenizer.
///
/// Structural variants carry no payload; property names, comments and the
/// primitive kinds carry the raw value typed by the token layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    PropertyName(String),
    Comment(String),
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    Date(DateTime<Utc>),
    Bytes(Vec<u8>),
}

/// Fieldless mirror of [`Token`], used for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    PropertyName,
    Comment,
    String,
    Integer,
    Float,
    Bool,
    Null,
    Date,
    Bytes,
}

impl TokenKind {
    /// Whether this kind is one of the primitive scalar kinds.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::Null
                | TokenKind::Date
                | TokenKind::Bytes
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::ObjectStart => "object_start",
            TokenKind::ObjectEnd => "object_end",
            TokenKind::ArrayStart => "array_start",
            TokenKind::ArrayEnd => "array_end",
            TokenKind::PropertyName => "property_name",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Bool => "bool",
            TokenKind::Null => "null",
            TokenKind::Date => "date",
            TokenKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::ObjectStart => TokenKind::ObjectStart,
            Token::ObjectEnd => TokenKind::ObjectEnd,
            Token::ArrayStart => TokenKind::ArrayStart,
            Token::ArrayEnd => TokenKind::ArrayEnd,
            Token::PropertyName(_) => TokenKind::PropertyName,
            Token::Comment(_) => TokenKind::Comment,
            Token::String(_) => TokenKind::String,
            Token::Integer(_) => TokenKind::Integer,
            Token::Float(_) => TokenKind::Float,
            Token::Bool(_) => TokenKind::Bool,
            Token::Null => TokenKind::Null,
            Token::Date(_) => TokenKind::Date,
            Token::Bytes(_) => TokenKind::Bytes,
        }
    }

    /// The raw primitive carried by this token, if it is a primitive kind.
    /// The payload is passed through as-is; no coercion or reformatting.
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Token::String(s) => Some(Scalar::Str(s.clone())),
            Token::Integer(n) => Some(Scalar::Int(*n)),
            Token::Float(x) => Some(Scalar::Float(*x)),
            Token::Bool(b) => Some(Scalar::Bool(*b)),
            Token::Null => Some(Scalar::Null),
            Token::Date(d) => Some(Scalar::Date(*d)),
            Token::Bytes(b) => Some(Scalar::Bytes(b.clone())),
            _ => None,
        }
    }
}

/// Forward-only cursor over a token stream.
///
/// The cursor rests on a token; `advance` moves it to the next one and
/// reports whether one was available. Implementations never read backward.
/// After `advance` returns `true`, `current` returns `Some`.
pub trait TokenSource {
    fn advance(&mut self) -> bool;
    fn current(&self) -> Option<&Token>;
}

/// In-memory token stream; the cursor starts on the first token.
#[derive(Debug)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl TokenSource for TokenBuffer {
    fn advance(&mut self) -> bool {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
            true
        } else {
            self.pos = self.tokens.len();
            false
        }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
}
