use thiserror::Error;

use crate::token::TokenKind;

/// Decoding failed; the current decode call is abandoned and no partial
/// value is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token stream ended before a structurally required token.
    #[error("unexpected end of token stream while decoding value")]
    UnexpectedEnd,
    /// The current token cannot be interpreted as the start of a value.
    #[error("unexpected token while decoding value: {0}")]
    UnexpectedToken(TokenKind),
}
