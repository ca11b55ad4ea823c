//! Helper functions for the HTML tokenizer.
//!
//! [§ 8.2.4 Tokenization](https://www.w3.org/TR/html5/syntax.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Output emission, including output withheld across chunk boundaries
//! - Tag and attribute buffer bookkeeping
//! - Parse error reporting

use core::mem;

use strum_macros::Display;

use super::machine::Tokenizer;
use super::state::{AttributeQuoteKind, StateId};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the
    /// main loop.
    pub(super) const fn switch_to(&mut self, new_state: StateId) {
        self.state.current = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: StateId) {
        self.reconsume = true;
        self.state.current = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Consume the next input character"
    ///
    /// Returns None at the end of the chunk. The end of a chunk is not EOF:
    /// the state machine simply stops and resumes on the next chunk.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.current_pos).copied();
        if c.is_some() {
            self.current_pos += 1;
        }
        c
    }

    /// Step back over the character just consumed so that a lookahead can
    /// start from it.
    pub(super) const fn unconsume(&mut self) {
        self.current_pos = self.current_pos.saturating_sub(1);
    }

    /// "If the next few characters are..."
    ///
    /// Only the current chunk is visible; a match that would need characters
    /// from the next chunk fails.
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        let mut upcoming = self.input[self.current_pos..].iter();
        target.chars().all(|expected| upcoming.next() == Some(&expected))
    }

    /// "ASCII case-insensitive match for the word ..."
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        let mut upcoming = self.input[self.current_pos..].iter();
        target
            .chars()
            .all(|expected| upcoming.next().is_some_and(|c| c.eq_ignore_ascii_case(&expected)))
    }

    /// Consume `count` characters and return them as written in the input.
    /// Caller must have already verified the characters are present.
    pub(super) fn consume_characters(&mut self, count: usize) -> String {
        let end = (self.current_pos + count).min(self.input.len());
        let consumed = self.input[self.current_pos..end].iter().collect();
        self.current_pos = end;
        consumed
    }

    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    ///
    /// CR never reaches the tokenizer once the input stream is preprocessed;
    /// without preprocessing it is treated as whitespace as browsers do.
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// Emit the current input character unchanged.
    pub(super) fn emit(&mut self, c: char) {
        self.output.push(c);
    }

    /// Emit a run of characters unchanged.
    pub(super) fn emit_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Emit a `<` that may open a tag, remembering where it landed so a
    /// later rewrite can reach back to it.
    pub(super) fn emit_less_than_sign(&mut self) {
        self.tag_open_at = Some(self.output.len());
        self.emit('<');
    }

    /// Emit a `=` that separates an attribute name from its value.
    pub(super) fn emit_equals_sign(&mut self) {
        self.equals_at = Some(self.output.len());
        self.emit('=');
    }

    /// Hold back a character whose canonical form depends on the next one.
    ///
    /// Without canonicalization nothing is ever rewritten, so the character
    /// is emitted right away.
    pub(super) fn withhold(&mut self, c: char) {
        if self.canonicalize() {
            self.state.pending.push(c);
        } else {
            self.emit(c);
        }
    }

    /// Emit whatever was held back, unchanged.
    pub(super) fn flush_pending(&mut self) {
        self.output.push_str(&self.state.pending);
        self.state.pending.clear();
    }

    /// Whether parse errors are rewritten into their canonical form.
    pub(super) const fn canonicalize(&self) -> bool {
        self.config.enable_canonicalization
    }
}

// =============================================================================
// Tag and Attribute Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// "Create a new start tag token" / "Create a new end tag token"
    pub(super) fn start_tag_token(&mut self, is_end_tag: bool) {
        self.tag_open_at = None;
        self.state.tag_name.clear();
        self.state.is_end_tag = is_end_tag;
        self.state.attribute_name.clear();
        self.state.attribute_value.clear();
        self.state.attribute_quote = AttributeQuoteKind::default();
    }

    /// "Start a new attribute in the current tag token. Set that attribute's
    /// name to the current input character, and its value to the empty string."
    pub(super) fn start_attribute(&mut self, first: char) {
        self.state.attribute_name.clear();
        self.state.attribute_name.push(first.to_ascii_lowercase());
        self.state.attribute_value.clear();
        self.state.attribute_quote = AttributeQuoteKind::default();
    }

    /// "Emit the current tag token."
    ///
    /// Start tags of raw text, RCDATA, script and plaintext elements switch
    /// the tokenizer into the matching content state, the way the tree
    /// builder would. `<svg>` and `<math>` are counted so CDATA sections are
    /// only recognized inside them.
    pub(super) fn emit_tag(&mut self, self_closing: bool) {
        let name = mem::take(&mut self.state.tag_name);
        let next_state = if self.state.is_end_tag {
            if is_foreign_root(&name) {
                self.state.foreign_depth = self.state.foreign_depth.saturating_sub(1);
            }
            StateId::Data
        } else {
            if is_foreign_root(&name) && !self_closing {
                self.state.foreign_depth += 1;
            }
            let next_state = content_state_for(&name);
            self.state.last_start_tag_name = Some(name);
            next_state
        };

        self.state.is_end_tag = false;
        self.state.attribute_name.clear();
        self.state.attribute_value.clear();
        self.state.attribute_quote = AttributeQuoteKind::default();
        self.tag_open_at = None;
        self.equals_at = None;
        self.switch_to(next_state);
    }

    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted from
    /// this tokenizer, if any."
    pub(super) fn is_appropriate_end_tag(&self) -> bool {
        self.state.is_end_tag
            && self
                .state
                .last_start_tag_name
                .as_deref()
                .is_some_and(|last| last == self.state.tag_name)
    }
}

/// The content state a start tag switches the tokenizer into.
///
/// [§ 8.2.5.2 Parsing elements that contain only text](https://www.w3.org/TR/html5/syntax.html#parsing-elements-that-contain-only-text)
fn content_state_for(tag_name: &str) -> StateId {
    match tag_name {
        "title" | "textarea" => StateId::Rcdata,
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => StateId::Rawtext,
        "script" => StateId::ScriptData,
        "plaintext" => StateId::Plaintext,
        _ => StateId::Data,
    }
}

fn is_foreign_root(tag_name: &str) -> bool {
    matches!(tag_name, "svg" | "math")
}

// =============================================================================
// Error Handling
// =============================================================================

/// [§ 8.2.4 Tokenization](https://www.w3.org/TR/html5/syntax.html#tokenization)
///
/// Parse errors reported by the tokenizer, named after the WHATWG error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub(super) enum ParseError {
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    InvalidFirstCharacterOfTagName,
    MissingEndTagName,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedCharacterInAttributeName,
    UnexpectedCharacterInUnquotedAttributeValue,
    MissingAttributeValue,
    MissingWhitespaceBetweenAttributes,
    UnexpectedSolidusInTag,
    IncorrectlyOpenedComment,
    AbruptClosingOfEmptyComment,
    IncorrectlyClosedComment,
    UnexpectedCharacterInComment,
    MissingWhitespaceBeforeDoctypeName,
    MissingDoctypeName,
    InvalidCharacterSequenceAfterDoctypeName,
    MissingWhitespaceAfterDoctypeKeyword,
    MissingDoctypeIdentifier,
    MissingQuoteBeforeDoctypeIdentifier,
    AbruptDoctypeIdentifier,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
}

impl Tokenizer<'_> {
    /// Parse errors are not fatal: the tokenizer recovers (and, when
    /// canonicalizing, rewrites) and continues.
    pub(super) fn log_parse_error(&self, error: ParseError) {
        log::debug!(
            "parse error: {error} at offset {} in {} state",
            self.current_pos.saturating_sub(1),
            self.state.current
        );
    }
}
