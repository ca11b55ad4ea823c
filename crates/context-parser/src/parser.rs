use std::borrow::Cow;

use crate::config::Configuration;
use crate::error::Result;
use crate::preprocess::preprocess;
use crate::tokenizer::{ParserState, StateId, Tokenizer};

/// A streaming HTML5 context parser.
///
/// Feed it a document in chunks with [`contextualize`](Self::contextualize).
/// Each call returns the chunk rewritten according to the
/// [`Configuration`], and leaves the parser in the tokenizer state reached
/// at the end of the chunk. Concatenating the outputs of consecutive calls
/// gives the same result as one call on the concatenated input, as long as
/// no construct that needs lookahead (`<!--`, `<!doctype`, `<![CDATA[`,
/// `PUBLIC`, `SYSTEM`) is split across a chunk boundary.
///
/// ```
/// use context_parser::{Configuration, ContextParser, StateId};
///
/// let mut parser = ContextParser::new(Configuration::strict());
/// assert_eq!(parser.contextualize("<?php"), "<!--?php");
/// assert_eq!(parser.contextualize(" ?>"), " ?-->");
/// assert_eq!(parser.current_state(), StateId::Data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextParser {
    config: Configuration,
    state: ParserState,
}

impl ContextParser {
    /// Create a parser in the data state.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            state: ParserState::default(),
        }
    }

    /// Run the tokenizer over `chunk`, continuing from wherever the previous
    /// chunk left off, and return the rewritten text.
    ///
    /// Never fails: every parse error is recovered from.
    #[must_use = "the rewritten chunk is the only output of the parser"]
    pub fn contextualize(&mut self, chunk: &str) -> String {
        let input = if self.config.enable_input_pre_processing {
            let (normalized, ends_in_carriage_return) =
                preprocess(chunk, self.state.follows_carriage_return);
            self.state.follows_carriage_return = ends_in_carriage_return;
            Cow::Owned(normalized)
        } else {
            Cow::Borrowed(chunk)
        };

        log::trace!(
            "contextualizing {} bytes from {} state",
            input.len(),
            self.state.current
        );
        Tokenizer::new(&mut self.state, &self.config, &input).run()
    }

    /// The state the next chunk will be tokenized in.
    #[must_use]
    pub const fn current_state(&self) -> StateId {
        self.state.current
    }

    /// Force the tokenizer into `state`.
    ///
    /// Nothing else is reset: tag, attribute and comment buffers keep
    /// whatever they held.
    pub fn set_current_state(&mut self, state: StateId) {
        log::debug!("state forced from {} to {state}", self.state.current);
        self.state.current = state;
    }

    /// Force the tokenizer into the state with the given numeric id, as
    /// returned by [`StateId::id`].
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidState`](crate::ContextError::InvalidState)
    /// if `id` is not in `1..=68`. The current state is left unchanged.
    pub fn set_current_state_id(&mut self, id: u8) -> Result<()> {
        self.set_current_state(StateId::try_from(id)?);
        Ok(())
    }

    /// An independent copy of this parser.
    ///
    /// The copy continues from exactly the same point, and feeding either
    /// parser has no effect on the other.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// The configuration this parser was created with.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Everything the parser carries between chunks.
    #[must_use]
    pub const fn parser_state(&self) -> &ParserState {
        &self.state
    }
}
