use std::io::Write;

use tracing::trace;

use crate::descriptor::{Capability, Destination};
use crate::error::DecodeError;
use crate::token::{Token, TokenKind, TokenSource};
use crate::value::Value;

/// Converter decoding JSON token streams into dynamic bag values.
///
/// Read-only by contract: `can_write` reports `false` and `write` performs
/// no output. The outer dispatch layer is expected to consult `can_decode`
/// before routing a destination type here.
#[derive(Debug, Default)]
pub struct BagConverter;

impl BagConverter {
    pub fn new() -> Self {
        Self
    }

    /// True iff `dest` is a reference shape whose capability list matches
    /// exactly two of the two bag traits. Requiring both rejects plain
    /// mappings that are not also dynamic bags; those belong to other
    /// converters.
    pub fn can_decode(&self, dest: &Destination) -> bool {
        !dest.is_value_type()
            && dest
                .capabilities()
                .iter()
                .filter(|cap| {
                    matches!(cap, Capability::DynamicProvider | Capability::StringMapping)
                })
                .count()
                == 2
    }

    /// Decode one value from the stream. The cursor must rest on the first
    /// token of the value; nested values are consumed recursively.
    pub fn decode<S: TokenSource>(
        &self,
        tokens: &mut S,
        dest: &Destination,
    ) -> Result<Value, DecodeError> {
        decode_value(tokens, dest)
    }

    /// Writing is unsupported; callers must check this before `write`.
    pub fn can_write(&self) -> bool {
        false
    }

    /// Deliberate no-op: emits nothing to `sink`.
    pub fn write<W: Write>(&self, _sink: &mut W, _value: &Value) {}
}

/// Decode the value the cursor currently rests on, skipping leading
/// comments. Scalars are returned without advancing the cursor; the
/// advance-and-branch discipline belongs to the enclosing loop.
pub fn decode_value<S: TokenSource>(
    tokens: &mut S,
    dest: &Destination,
) -> Result<Value, DecodeError> {
    skip_comments(tokens)?;
    let Some(token) = tokens.current() else {
        return Err(DecodeError::UnexpectedEnd);
    };
    match token {
        Token::ObjectStart => decode_object(tokens, dest),
        Token::ArrayStart => decode_list(tokens, dest),
        other => match other.scalar() {
            Some(scalar) => Ok(Value::Scalar(scalar)),
            None => Err(DecodeError::UnexpectedToken(other.kind())),
        },
    }
}

/// Materialize an object: read property-name/value pairs until the matching
/// close marker. Tokens that cannot start a member are skipped; error
/// signaling for misplaced tokens is confined to [`decode_value`].
pub fn decode_object<S: TokenSource>(
    tokens: &mut S,
    dest: &Destination,
) -> Result<Value, DecodeError> {
    let mut bag = dest.new_bag();
    while tokens.advance() {
        let Some(token) = tokens.current() else {
            break;
        };
        match token {
            Token::PropertyName(name) => {
                let name = name.clone();
                if !tokens.advance() {
                    return Err(DecodeError::UnexpectedEnd);
                }
                let value = decode_value(tokens, dest)?;
                // last write wins for duplicate names
                bag.insert(name, value);
            }
            Token::Comment(_) => {}
            Token::ObjectEnd => {
                trace!(members = bag.len(), "object closed");
                return Ok(Value::Mapping(bag));
            }
            _ => {}
        }
    }
    Err(DecodeError::UnexpectedEnd)
}

/// Materialize an array: decode elements in arrival order until the
/// matching close marker.
pub fn decode_list<S: TokenSource>(
    tokens: &mut S,
    dest: &Destination,
) -> Result<Value, DecodeError> {
    let mut items = Vec::new();
    while tokens.advance() {
        let Some(kind) = tokens.current().map(Token::kind) else {
            break;
        };
        match kind {
            TokenKind::Comment => {}
            TokenKind::ArrayEnd => {
                trace!(elements = items.len(), "array closed");
                return Ok(Value::Sequence(items));
            }
            _ => items.push(decode_value(tokens, dest)?),
        }
    }
    Err(DecodeError::UnexpectedEnd)
}

fn skip_comments<S: TokenSource>(tokens: &mut S) -> Result<(), DecodeError> {
    while matches!(tokens.current().map(Token::kind), Some(TokenKind::Comment)) {
        if !tokens.advance() {
            return Err(DecodeError::UnexpectedEnd);
        }
    }
    Ok(())
}
