//! HTML tokenizer module.
//!
//! Implements [§ 8.2.4 Tokenization](https://www.w3.org/TR/html5/syntax.html#tokenization)
//! of the W3C HTML5 recommendation, as a resumable state machine that
//! rewrites its input instead of producing tokens.

/// Rewrites applied to parse errors.
mod canonicalize;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// Tokenizer state machine implementation.
mod machine;
/// Tokenizer state identifiers.
mod state;

pub(crate) use machine::Tokenizer;
pub use machine::ParserState;
pub use state::{AttributeQuoteKind, StateId};
