//! Shared primitives used across the Franca IDL front-end: byte spans,
//! line/column positions, and the lexical/syntactic error types.

mod error;
mod span;

pub use error::{LexError, ParseError};
pub use span::{LineIndex, Position, Span};
