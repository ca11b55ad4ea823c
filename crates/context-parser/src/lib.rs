//! Contextual HTML tokenizer for template escaping.
//!
//! # Scope
//!
//! This crate implements:
//! - **Input stream preprocessing** ([HTML5 § 8.2.2.5](https://www.w3.org/TR/html5/syntax.html#preprocessing-the-input-stream))
//!   - Newline normalization, control character and noncharacter replacement
//! - **Tokenizer state machine** ([HTML5 § 8.2.4](https://www.w3.org/TR/html5/syntax.html#tokenization))
//!   - All 68 tokenizer states, resumable across input chunks
//!   - Raw text, RCDATA and script data end tag matching
//! - **Canonicalization** of parse errors into markup every parser agrees on
//!   - Bogus comments rewritten as real comments
//!   - Attribute boundary and unquoted value hazards neutralized
//!   - Non-standard doctypes voided, legacy IE conditional comments voided
//!
//! The tokenizer does not build tokens or a tree. It re-emits the text it
//! was given, rewritten where necessary, and reports the state it ended in
//! so the caller can pick an escaping strategy for whatever comes next.
//!
//! # Example
//!
//! ```
//! use context_parser::{Configuration, ContextParser, StateId};
//!
//! let mut parser = ContextParser::new(Configuration::strict());
//! assert_eq!(parser.contextualize("<a href="), "<a href=");
//! assert_eq!(parser.current_state(), StateId::BeforeAttributeValue);
//! ```
//!
//! # Not Implemented
//!
//! - Character reference decoding
//! - Tree construction, foreign content insertion modes

/// Parser configuration switches.
pub mod config;
/// Error type for misuse of the parser API.
pub mod error;
/// The public parsing facade.
pub mod parser;
/// Input stream preprocessing.
pub mod preprocess;
/// The HTML5 tokenizer state machine and its canonicalization rules.
pub mod tokenizer;

pub use config::Configuration;
pub use error::{ContextError, Result};
pub use parser::ContextParser;
pub use tokenizer::{AttributeQuoteKind, ParserState, StateId};
