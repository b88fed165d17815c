//! dynjson-core: dynamic-value decoding of classified JSON token streams
//!
//! This crate focuses on a small, well-factored surface:
//! - Token model and forward-only stream cursor, fed by an external tokenizer
//! - Recursive decoder materializing mapping / sequence / scalar values
//! - Destination descriptors driving converter eligibility and bag construction
//! - Token-record interchange (JSONL) and JSON export for CLI use
//!
pub mod decode;
pub mod descriptor;
pub mod error;
pub mod records;
pub mod token;
pub mod value;

// Re-export the decoding surface
pub use decode::{BagConverter, decode_list, decode_object, decode_value};
pub use descriptor::{BagFactory, Capability, Destination};
pub use error::DecodeError;
pub use records::{RecordError, read_tokens, read_tokens_file};
pub use token::{Token, TokenBuffer, TokenKind, TokenSource};
pub use value::{Mapping, Scalar, Value};
