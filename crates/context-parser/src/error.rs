use thiserror::Error;

/// Errors raised by the parser API.
///
/// Malformed markup is never an error: every parse error is absorbed by the
/// tokenizer. This type only covers callers handing the parser something it
/// cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A persisted state id does not name any tokenizer state.
    #[error("{0} is not a tokenizer state id (valid ids are 1 to 68)")]
    InvalidState(u8),
}

/// Result type for parser operations.
pub type Result<T> = core::result::Result<T, ContextError>;
