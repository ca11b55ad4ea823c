//! The tokenizer state machine.
//!
//! [§ 8.2.4 Tokenization](https://www.w3.org/TR/html5/syntax.html#tokenization)
//!
//! Each `handle_*_state` method implements one state of the HTML5 tokenizer.
//! Instead of producing tokens, every consumed character is written back to
//! the output, possibly rewritten by the rules in
//! [`canonicalize`](super::canonicalize). Everything needed to resume on the
//! next chunk lives in [`ParserState`].

use super::canonicalize::unquoted_attribute_value_entity;
use super::helpers::ParseError;
use super::state::{AttributeQuoteKind, StateId};
use crate::config::Configuration;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Everything the tokenizer carries from one chunk to the next.
///
/// Cloning a `ParserState` gives a fully independent copy, which is how
/// [`ContextParser::fork`](crate::ContextParser::fork) is implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserState {
    pub(crate) current: StateId,
    pub(crate) tag_name: String,
    pub(crate) is_end_tag: bool,
    pub(crate) attribute_name: String,
    pub(crate) attribute_value: String,
    pub(crate) attribute_quote: AttributeQuoteKind,
    /// "The temporary buffer"
    pub(crate) temporary_buffer: String,
    pub(crate) last_start_tag_name: Option<String>,
    /// Comment text up to the first `>`.
    pub(crate) comment: String,
    pub(crate) comment_saw_greater_than: bool,
    /// Whether the open bogus comment was given a `<!--` opener, and so
    /// needs a `-->` closer.
    pub(crate) comment_wrapped: bool,
    /// Doctype text after its `<`, withheld until the doctype closes.
    pub(crate) doctype: String,
    /// A `/` or `!` withheld until the next character decides its fate.
    pub(crate) pending: String,
    /// Open `<svg>` and `<math>` elements.
    pub(crate) foreign_depth: usize,
    pub(crate) follows_carriage_return: bool,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            current: StateId::Data,
            tag_name: String::new(),
            is_end_tag: false,
            attribute_name: String::new(),
            attribute_value: String::new(),
            attribute_quote: AttributeQuoteKind::default(),
            temporary_buffer: String::new(),
            last_start_tag_name: None,
            comment: String::new(),
            comment_saw_greater_than: false,
            comment_wrapped: false,
            doctype: String::new(),
            pending: String::new(),
            foreign_depth: 0,
            follows_carriage_return: false,
        }
    }
}

impl ParserState {
    /// Name of the last start tag seen, lowercased.
    #[must_use]
    pub fn last_start_tag_name(&self) -> Option<&str> {
        self.last_start_tag_name.as_deref()
    }

    /// Name of the tag currently open, lowercased. Empty outside of tags.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Whether the tag currently open is an end tag.
    #[must_use]
    pub const fn is_end_tag(&self) -> bool {
        self.is_end_tag
    }

    /// Name of the attribute currently being read, lowercased.
    #[must_use]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    /// Value read so far for the current attribute.
    #[must_use]
    pub fn attribute_value(&self) -> &str {
        &self.attribute_value
    }

    /// How the current attribute value is quoted.
    #[must_use]
    pub const fn attribute_quote_kind(&self) -> AttributeQuoteKind {
        self.attribute_quote
    }
}

/// Runs the state machine over one chunk.
pub(crate) struct Tokenizer<'a> {
    pub(super) state: &'a mut ParserState,
    pub(super) config: &'a Configuration,
    pub(super) input: Vec<char>,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) reconsume: bool,
    pub(super) output: String,
    /// Byte offset in `output` of the `<` that may open a tag, if it was
    /// emitted from this chunk.
    pub(super) tag_open_at: Option<usize>,
    /// Byte offset in `output` of the `=` after an attribute name, if it was
    /// emitted from this chunk.
    pub(super) equals_at: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(state: &'a mut ParserState, config: &'a Configuration, input: &str) -> Self {
        Self {
            state,
            config,
            input: input.chars().collect(),
            current_pos: 0,
            current_input_character: None,
            reconsume: false,
            output: String::with_capacity(input.len()),
            tag_open_at: None,
            equals_at: None,
        }
    }

    /// Consume the whole chunk and return the rewritten text.
    pub(crate) fn run(mut self) -> String {
        loop {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            let Some(c) = self.current_input_character else {
                break;
            };
            self.step(c);
        }
        self.output
    }

    fn step(&mut self, c: char) {
        match self.state.current {
            StateId::Data => self.handle_data_state(c),
            StateId::CharacterReferenceInData => self.reconsume_in(StateId::Data),
            StateId::Rcdata => self.handle_rcdata_state(c),
            StateId::CharacterReferenceInRcdata => self.reconsume_in(StateId::Rcdata),
            StateId::Rawtext => self.handle_rawtext_state(c),
            StateId::ScriptData => self.handle_script_data_state(c),
            StateId::Plaintext => self.handle_plaintext_state(c),
            StateId::TagOpen => self.handle_tag_open_state(c),
            StateId::EndTagOpen => self.handle_end_tag_open_state(c),
            StateId::TagName => self.handle_tag_name_state(c),
            StateId::RcdataLessThanSign => {
                self.handle_text_less_than_sign_state(c, StateId::RcdataEndTagOpen, StateId::Rcdata);
            }
            StateId::RcdataEndTagOpen => {
                self.handle_text_end_tag_open_state(c, StateId::RcdataEndTagName, StateId::Rcdata);
            }
            StateId::RcdataEndTagName => self.handle_text_end_tag_name_state(c, StateId::Rcdata),
            StateId::RawtextLessThanSign => {
                self.handle_text_less_than_sign_state(
                    c,
                    StateId::RawtextEndTagOpen,
                    StateId::Rawtext,
                );
            }
            StateId::RawtextEndTagOpen => {
                self.handle_text_end_tag_open_state(c, StateId::RawtextEndTagName, StateId::Rawtext);
            }
            StateId::RawtextEndTagName => self.handle_text_end_tag_name_state(c, StateId::Rawtext),
            StateId::ScriptDataLessThanSign => self.handle_script_data_less_than_sign_state(c),
            StateId::ScriptDataEndTagOpen => self.handle_text_end_tag_open_state(
                c,
                StateId::ScriptDataEndTagName,
                StateId::ScriptData,
            ),
            StateId::ScriptDataEndTagName => {
                self.handle_text_end_tag_name_state(c, StateId::ScriptData);
            }
            StateId::ScriptDataEscapeStart => self.handle_script_data_escape_start_state(c),
            StateId::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state(c);
            }
            StateId::ScriptDataEscaped => self.handle_script_data_escaped_state(c),
            StateId::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(c),
            StateId::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state(c);
            }
            StateId::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state(c);
            }
            StateId::ScriptDataEscapedEndTagOpen => self.handle_text_end_tag_open_state(
                c,
                StateId::ScriptDataEscapedEndTagName,
                StateId::ScriptDataEscaped,
            ),
            StateId::ScriptDataEscapedEndTagName => {
                self.handle_text_end_tag_name_state(c, StateId::ScriptDataEscaped);
            }
            StateId::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_boundary_state(
                    c,
                    StateId::ScriptDataDoubleEscaped,
                    StateId::ScriptDataEscaped,
                );
            }
            StateId::ScriptDataDoubleEscaped => self.handle_script_data_double_escaped_state(c),
            StateId::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state(c);
            }
            StateId::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state(c);
            }
            StateId::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state(c);
            }
            StateId::ScriptDataDoubleEscapeEnd => {
                self.handle_script_data_double_escape_boundary_state(
                    c,
                    StateId::ScriptDataEscaped,
                    StateId::ScriptDataDoubleEscaped,
                );
            }
            StateId::BeforeAttributeName => self.handle_before_attribute_name_state(c),
            StateId::AttributeName => self.handle_attribute_name_state(c),
            StateId::AfterAttributeName => self.handle_after_attribute_name_state(c),
            StateId::BeforeAttributeValue => self.handle_before_attribute_value_state(c),
            StateId::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state(c, '"');
            }
            StateId::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state(c, '\'');
            }
            StateId::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(c),
            StateId::CharacterReferenceInAttributeValue => {
                self.reconsume_in(self.state.attribute_quote.value_state());
            }
            StateId::AfterAttributeValueQuoted => self.handle_after_attribute_value_quoted_state(c),
            StateId::SelfClosingStartTag => self.handle_self_closing_start_tag_state(c),
            StateId::BogusComment => self.handle_bogus_comment_state(c),
            StateId::MarkupDeclarationOpen => {
                self.unconsume();
                self.markup_declaration_open(true);
            }
            StateId::CommentStart => self.handle_comment_start_state(c),
            StateId::CommentStartDash => self.handle_comment_start_dash_state(c),
            StateId::Comment => self.handle_comment_state(c),
            StateId::CommentEndDash => self.handle_comment_end_dash_state(c),
            StateId::CommentEnd => self.handle_comment_end_state(c),
            StateId::CommentEndBang => self.handle_comment_end_bang_state(c),
            StateId::Doctype => self.handle_doctype_state(c),
            StateId::BeforeDoctypeName => self.handle_before_doctype_name_state(c),
            StateId::DoctypeName => self.handle_doctype_name_state(c),
            StateId::AfterDoctypeName => self.handle_after_doctype_name_state(c),
            StateId::AfterDoctypePublicKeyword => self.handle_after_doctype_keyword_state(
                c,
                StateId::BeforeDoctypePublicIdentifier,
                StateId::DoctypePublicIdentifierDoubleQuoted,
                StateId::DoctypePublicIdentifierSingleQuoted,
            ),
            StateId::BeforeDoctypePublicIdentifier => self.handle_before_doctype_identifier_state(
                c,
                StateId::DoctypePublicIdentifierDoubleQuoted,
                StateId::DoctypePublicIdentifierSingleQuoted,
            ),
            StateId::DoctypePublicIdentifierDoubleQuoted => self
                .handle_doctype_identifier_quoted_state(
                    c,
                    '"',
                    StateId::AfterDoctypePublicIdentifier,
                ),
            StateId::DoctypePublicIdentifierSingleQuoted => self
                .handle_doctype_identifier_quoted_state(
                    c,
                    '\'',
                    StateId::AfterDoctypePublicIdentifier,
                ),
            StateId::AfterDoctypePublicIdentifier => {
                self.handle_after_doctype_public_identifier_state(c);
            }
            StateId::BetweenDoctypePublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state(c);
            }
            StateId::AfterDoctypeSystemKeyword => self.handle_after_doctype_keyword_state(
                c,
                StateId::BeforeDoctypeSystemIdentifier,
                StateId::DoctypeSystemIdentifierDoubleQuoted,
                StateId::DoctypeSystemIdentifierSingleQuoted,
            ),
            StateId::BeforeDoctypeSystemIdentifier => self.handle_before_doctype_identifier_state(
                c,
                StateId::DoctypeSystemIdentifierDoubleQuoted,
                StateId::DoctypeSystemIdentifierSingleQuoted,
            ),
            StateId::DoctypeSystemIdentifierDoubleQuoted => self
                .handle_doctype_identifier_quoted_state(
                    c,
                    '"',
                    StateId::AfterDoctypeSystemIdentifier,
                ),
            StateId::DoctypeSystemIdentifierSingleQuoted => self
                .handle_doctype_identifier_quoted_state(
                    c,
                    '\'',
                    StateId::AfterDoctypeSystemIdentifier,
                ),
            StateId::AfterDoctypeSystemIdentifier => {
                self.handle_after_doctype_system_identifier_state(c);
            }
            StateId::BogusDoctype => self.handle_bogus_doctype_state(c),
            StateId::CdataSection => self.handle_cdata_section_state(c),
        }
    }

    /// Shared handling of U+0000 NULL in text-like states: "Parse error.
    /// Emit a U+FFFD REPLACEMENT CHARACTER character token."
    fn handle_null_in_text(&mut self) {
        self.log_parse_error(ParseError::UnexpectedNullCharacter);
        self.emit_replacement_character();
    }

    // =========================================================================
    // Text states
    // =========================================================================

    /// [§ 8.2.4.1 Data state](https://www.w3.org/TR/html5/syntax.html#data-state)
    fn handle_data_state(&mut self, c: char) {
        match c {
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            '<' => {
                self.emit_less_than_sign();
                self.switch_to(StateId::TagOpen);
            }
            // "U+0000 NULL - Parse error. Emit the current input character as
            // a character token."
            '\0' => self.handle_null_in_text(),
            // Character references are passed through undecoded.
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.3 RCDATA state](https://www.w3.org/TR/html5/syntax.html#rcdata-state)
    fn handle_rcdata_state(&mut self, c: char) {
        match c {
            '<' => {
                self.emit_less_than_sign();
                self.switch_to(StateId::RcdataLessThanSign);
            }
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.5 RAWTEXT state](https://www.w3.org/TR/html5/syntax.html#rawtext-state)
    fn handle_rawtext_state(&mut self, c: char) {
        match c {
            '<' => {
                self.emit_less_than_sign();
                self.switch_to(StateId::RawtextLessThanSign);
            }
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.6 Script data state](https://www.w3.org/TR/html5/syntax.html#script-data-state)
    fn handle_script_data_state(&mut self, c: char) {
        match c {
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataLessThanSign);
            }
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.7 PLAINTEXT state](https://www.w3.org/TR/html5/syntax.html#plaintext-state)
    fn handle_plaintext_state(&mut self, c: char) {
        if c == '\0' {
            self.handle_null_in_text();
        } else {
            self.emit(c);
        }
    }

    // =========================================================================
    // Tag states
    // =========================================================================

    /// [§ 8.2.4.8 Tag open state](https://www.w3.org/TR/html5/syntax.html#tag-open-state)
    fn handle_tag_open_state(&mut self, c: char) {
        match c {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration
            // open state."
            '!' => self.markup_declaration_open(false),
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            '/' => {
                self.emit('/');
                self.switch_to(StateId::EndTagOpen);
            }
            // "ASCII letter - Create a new start tag token, set its tag name
            // to the lowercase version of the current input character."
            c if c.is_ascii_alphabetic() => {
                self.start_tag_token(false);
                self.state.tag_name.push(c.to_ascii_lowercase());
                self.emit(c);
                self.switch_to(StateId::TagName);
            }
            // "U+003F QUESTION MARK (?) - Parse error. Switch to the bogus
            // comment state."
            '?' => {
                self.log_parse_error(ParseError::UnexpectedQuestionMarkInsteadOfTagName);
                self.begin_bogus_comment("!--?", "?");
                self.switch_to(StateId::BogusComment);
            }
            // "Anything else - Parse error. Switch to the data state. Emit a
            // U+003C LESS-THAN SIGN character token. Reconsume the current
            // input character."
            _ => {
                self.log_parse_error(ParseError::InvalidFirstCharacterOfTagName);
                self.escape_less_than_sign();
                self.reconsume_in(StateId::Data);
            }
        }
    }

    /// [§ 8.2.4.9 End tag open state](https://www.w3.org/TR/html5/syntax.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_alphabetic() => {
                self.start_tag_token(true);
                self.state.tag_name.push(c.to_ascii_lowercase());
                self.emit(c);
                self.switch_to(StateId::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>) - Parse error. Switch to the data
            // state."
            '>' => {
                self.log_parse_error(ParseError::MissingEndTagName);
                self.emit_missing_end_tag_name();
                self.switch_to(StateId::Data);
            }
            // "Anything else - Parse error. Switch to the bogus comment state."
            _ => {
                self.log_parse_error(ParseError::InvalidFirstCharacterOfTagName);
                self.wrap_end_tag_open_as_comment();
                self.reconsume_in(StateId::BogusComment);
            }
        }
    }

    /// [§ 8.2.4.10 Tag name state](https://www.w3.org/TR/html5/syntax.html#tag-name-state)
    fn handle_tag_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.emit(c);
                self.switch_to(StateId::BeforeAttributeName);
            }
            '/' => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            '\0' => {
                self.state.tag_name.push(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
            }
            _ => {
                self.state.tag_name.push(c.to_ascii_lowercase());
                self.emit(c);
            }
        }
    }

    /// [§ 8.2.4.11 RCDATA less-than sign state](https://www.w3.org/TR/html5/syntax.html#rcdata-less-than-sign-state)
    /// and [§ 8.2.4.14 RAWTEXT less-than sign state](https://www.w3.org/TR/html5/syntax.html#rawtext-less-than-sign-state)
    ///
    /// A `<` that does not start an end tag is plain text here, but not in
    /// every context the text might be moved to, so it is escaped.
    fn handle_text_less_than_sign_state(
        &mut self,
        c: char,
        end_tag_open: StateId,
        text_state: StateId,
    ) {
        if c == '/' {
            self.state.temporary_buffer.clear();
            self.emit('/');
            self.switch_to(end_tag_open);
        } else {
            self.escape_less_than_sign();
            self.reconsume_in(text_state);
        }
    }

    /// The RCDATA, RAWTEXT, script data and script data escaped end tag open
    /// states.
    ///
    /// "ASCII letter - Create a new end tag token. Reconsume the current
    /// input character in the end tag name state."
    fn handle_text_end_tag_open_state(&mut self, c: char, name_state: StateId, text_state: StateId) {
        if c.is_ascii_alphabetic() {
            self.start_tag_token(true);
            self.reconsume_in(name_state);
        } else {
            self.reconsume_in(text_state);
        }
    }

    /// The RCDATA, RAWTEXT, script data and script data escaped end tag name
    /// states.
    ///
    /// Only an appropriate end tag leaves the text state; anything else is
    /// text.
    fn handle_text_end_tag_name_state(&mut self, c: char, text_state: StateId) {
        match c {
            c if Self::is_whitespace_char(c) && self.is_appropriate_end_tag() => {
                self.emit(c);
                self.switch_to(StateId::BeforeAttributeName);
            }
            '/' if self.is_appropriate_end_tag() => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '>' if self.is_appropriate_end_tag() => {
                self.emit('>');
                self.emit_tag(false);
            }
            c if c.is_ascii_alphabetic() => {
                self.state.tag_name.push(c.to_ascii_lowercase());
                self.state.temporary_buffer.push(c);
                self.emit(c);
            }
            _ => {
                self.state.tag_name.clear();
                self.state.is_end_tag = false;
                self.reconsume_in(text_state);
            }
        }
    }

    // =========================================================================
    // Script data states
    // =========================================================================

    /// [§ 8.2.4.17 Script data less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-less-than-sign-state)
    fn handle_script_data_less_than_sign_state(&mut self, c: char) {
        match c {
            '/' => {
                self.state.temporary_buffer.clear();
                self.emit('/');
                self.switch_to(StateId::ScriptDataEndTagOpen);
            }
            '!' => {
                self.emit('!');
                self.switch_to(StateId::ScriptDataEscapeStart);
            }
            _ => self.reconsume_in(StateId::ScriptData),
        }
    }

    /// [§ 8.2.4.20 Script data escape start state](https://www.w3.org/TR/html5/syntax.html#script-data-escape-start-state)
    fn handle_script_data_escape_start_state(&mut self, c: char) {
        if c == '-' {
            self.emit('-');
            self.switch_to(StateId::ScriptDataEscapeStartDash);
        } else {
            self.reconsume_in(StateId::ScriptData);
        }
    }

    /// [§ 8.2.4.21 Script data escape start dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escape-start-dash-state)
    fn handle_script_data_escape_start_dash_state(&mut self, c: char) {
        if c == '-' {
            self.emit('-');
            self.switch_to(StateId::ScriptDataEscapedDashDash);
        } else {
            self.reconsume_in(StateId::ScriptData);
        }
    }

    /// [§ 8.2.4.22 Script data escaped state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-state)
    fn handle_script_data_escaped_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::ScriptDataEscapedDash);
            }
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataEscapedLessThanSign);
            }
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.23 Script data escaped dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-dash-state)
    fn handle_script_data_escaped_dash_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::ScriptDataEscapedDashDash);
            }
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataEscapedLessThanSign);
            }
            '\0' => {
                self.handle_null_in_text();
                self.switch_to(StateId::ScriptDataEscaped);
            }
            _ => {
                self.emit(c);
                self.switch_to(StateId::ScriptDataEscaped);
            }
        }
    }

    /// [§ 8.2.4.24 Script data escaped dash dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-dash-dash-state)
    fn handle_script_data_escaped_dash_dash_state(&mut self, c: char) {
        match c {
            '-' => self.emit('-'),
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataEscapedLessThanSign);
            }
            '>' => {
                self.emit('>');
                self.switch_to(StateId::ScriptData);
            }
            '\0' => {
                self.handle_null_in_text();
                self.switch_to(StateId::ScriptDataEscaped);
            }
            _ => {
                self.emit(c);
                self.switch_to(StateId::ScriptDataEscaped);
            }
        }
    }

    /// [§ 8.2.4.25 Script data escaped less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-less-than-sign-state)
    fn handle_script_data_escaped_less_than_sign_state(&mut self, c: char) {
        match c {
            '/' => {
                self.state.temporary_buffer.clear();
                self.emit('/');
                self.switch_to(StateId::ScriptDataEscapedEndTagOpen);
            }
            // "Set the temporary buffer to the empty string. Append the
            // lowercase version of the current input character to the
            // temporary buffer."
            c if c.is_ascii_alphabetic() => {
                self.state.temporary_buffer.clear();
                self.state.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit(c);
                self.switch_to(StateId::ScriptDataDoubleEscapeStart);
            }
            _ => self.reconsume_in(StateId::ScriptDataEscaped),
        }
    }

    /// [§ 8.2.4.28 Script data double escape start state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escape-start-state)
    /// and [§ 8.2.4.33 Script data double escape end state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escape-end-state)
    ///
    /// "If the temporary buffer is the string "script", then switch to the
    /// `on_script` state. Otherwise, switch to the `otherwise` state."
    fn handle_script_data_double_escape_boundary_state(
        &mut self,
        c: char,
        on_script: StateId,
        otherwise: StateId,
    ) {
        match c {
            c if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                self.emit(c);
                if self.state.temporary_buffer == "script" {
                    self.switch_to(on_script);
                } else {
                    self.switch_to(otherwise);
                }
            }
            c if c.is_ascii_alphabetic() => {
                self.state.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit(c);
            }
            _ => self.reconsume_in(otherwise),
        }
    }

    /// [§ 8.2.4.29 Script data double escaped state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-state)
    fn handle_script_data_double_escaped_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::ScriptDataDoubleEscapedDash);
            }
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataDoubleEscapedLessThanSign);
            }
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.30 Script data double escaped dash state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-dash-state)
    fn handle_script_data_double_escaped_dash_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::ScriptDataDoubleEscapedDashDash);
            }
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataDoubleEscapedLessThanSign);
            }
            '\0' => {
                self.handle_null_in_text();
                self.switch_to(StateId::ScriptDataDoubleEscaped);
            }
            _ => {
                self.emit(c);
                self.switch_to(StateId::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 8.2.4.31 Script data double escaped dash dash state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-dash-dash-state)
    fn handle_script_data_double_escaped_dash_dash_state(&mut self, c: char) {
        match c {
            '-' => self.emit('-'),
            '<' => {
                self.emit('<');
                self.switch_to(StateId::ScriptDataDoubleEscapedLessThanSign);
            }
            '>' => {
                self.emit('>');
                self.switch_to(StateId::ScriptData);
            }
            '\0' => {
                self.handle_null_in_text();
                self.switch_to(StateId::ScriptDataDoubleEscaped);
            }
            _ => {
                self.emit(c);
                self.switch_to(StateId::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 8.2.4.32 Script data double escaped less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-less-than-sign-state)
    fn handle_script_data_double_escaped_less_than_sign_state(&mut self, c: char) {
        if c == '/' {
            self.state.temporary_buffer.clear();
            self.emit('/');
            self.switch_to(StateId::ScriptDataDoubleEscapeEnd);
        } else {
            self.reconsume_in(StateId::ScriptDataDoubleEscaped);
        }
    }

    // =========================================================================
    // Attribute states
    // =========================================================================

    /// [§ 8.2.4.34 Before attribute name state](https://www.w3.org/TR/html5/syntax.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.emit(c),
            '/' => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            '\0' => {
                self.start_attribute(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
                self.switch_to(StateId::AttributeName);
            }
            // "U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('), U+003C
            // LESS-THAN SIGN (<), U+003D EQUALS SIGN (=) - Parse error. Treat
            // it as per the "anything else" entry below."
            '"' | '\'' | '<' | '=' => {
                self.log_parse_error(if c == '=' {
                    ParseError::UnexpectedEqualsSignBeforeAttributeName
                } else {
                    ParseError::UnexpectedCharacterInAttributeName
                });
                if self.canonicalize() {
                    self.trace_dropped(c);
                } else {
                    self.start_attribute(c);
                    self.emit(c);
                    self.switch_to(StateId::AttributeName);
                }
            }
            _ => {
                self.start_attribute(c);
                self.emit(c);
                self.switch_to(StateId::AttributeName);
            }
        }
    }

    /// [§ 8.2.4.35 Attribute name state](https://www.w3.org/TR/html5/syntax.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.emit(c);
                self.switch_to(StateId::AfterAttributeName);
            }
            '/' => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '=' => {
                self.emit_equals_sign();
                self.switch_to(StateId::BeforeAttributeValue);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            '\0' => {
                self.state.attribute_name.push(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
            }
            '"' | '\'' | '<' => {
                self.log_parse_error(ParseError::UnexpectedCharacterInAttributeName);
                if self.canonicalize() {
                    self.trace_dropped(c);
                } else {
                    self.state.attribute_name.push(c);
                    self.emit(c);
                }
            }
            _ => {
                self.state.attribute_name.push(c.to_ascii_lowercase());
                self.emit(c);
            }
        }
    }

    /// [§ 8.2.4.36 After attribute name state](https://www.w3.org/TR/html5/syntax.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.emit(c),
            '/' => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '=' => {
                self.emit_equals_sign();
                self.switch_to(StateId::BeforeAttributeValue);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            '\0' => {
                self.start_attribute(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
                self.switch_to(StateId::AttributeName);
            }
            '"' | '\'' | '<' => {
                self.log_parse_error(ParseError::UnexpectedCharacterInAttributeName);
                if self.canonicalize() {
                    self.trace_dropped(c);
                } else {
                    self.start_attribute(c);
                    self.emit(c);
                    self.switch_to(StateId::AttributeName);
                }
            }
            _ => {
                self.start_attribute(c);
                self.emit(c);
                self.switch_to(StateId::AttributeName);
            }
        }
    }

    /// [§ 8.2.4.37 Before attribute value state](https://www.w3.org/TR/html5/syntax.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.emit(c),
            '"' => {
                self.emit('"');
                self.state.attribute_quote = AttributeQuoteKind::Double;
                self.switch_to(StateId::AttributeValueDoubleQuoted);
            }
            '\'' => {
                self.emit('\'');
                self.state.attribute_quote = AttributeQuoteKind::Single;
                self.switch_to(StateId::AttributeValueSingleQuoted);
            }
            // "U+003E GREATER-THAN SIGN (>) - Parse error. Switch to the data
            // state. Emit the current tag token."
            '>' => {
                self.log_parse_error(ParseError::MissingAttributeValue);
                self.drop_dangling_equals_sign();
                self.emit('>');
                self.emit_tag(false);
            }
            // Everything else, including NULL and the characters that are a
            // parse error here, starts an unquoted value and is handled there.
            _ => {
                self.state.attribute_quote = AttributeQuoteKind::Unquoted;
                self.reconsume_in(StateId::AttributeValueUnquoted);
            }
        }
    }

    /// [§ 8.2.4.38 Attribute value (double-quoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-double-quoted-state)
    /// and [§ 8.2.4.39 Attribute value (single-quoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-single-quoted-state)
    fn handle_attribute_value_quoted_state(&mut self, c: char, quote: char) {
        match c {
            c if c == quote => {
                self.emit(c);
                self.switch_to(StateId::AfterAttributeValueQuoted);
            }
            '\0' => {
                self.state.attribute_value.push(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
            }
            _ => {
                self.state.attribute_value.push(c);
                self.emit(c);
            }
        }
    }

    /// [§ 8.2.4.40 Attribute value (unquoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-unquoted-state)
    fn handle_attribute_value_unquoted_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.emit(c);
                self.switch_to(StateId::BeforeAttributeName);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            '\0' => {
                self.state.attribute_value.push(REPLACEMENT_CHARACTER);
                self.handle_null_in_text();
            }
            _ => {
                self.state.attribute_value.push(c);
                // "U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('), U+003C
                // LESS-THAN SIGN (<), U+003D EQUALS SIGN (=), U+0060 GRAVE
                // ACCENT (`) - Parse error."
                if let Some(entity) = unquoted_attribute_value_entity(c) {
                    self.log_parse_error(ParseError::UnexpectedCharacterInUnquotedAttributeValue);
                    self.emit_corrected(c, entity);
                } else {
                    self.emit(c);
                }
            }
        }
    }

    /// [§ 8.2.4.42 After attribute value (quoted) state](https://www.w3.org/TR/html5/syntax.html#after-attribute-value-quoted-state)
    fn handle_after_attribute_value_quoted_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.emit(c);
                self.switch_to(StateId::BeforeAttributeName);
            }
            '/' => {
                self.withhold('/');
                self.switch_to(StateId::SelfClosingStartTag);
            }
            '>' => {
                self.emit('>');
                self.emit_tag(false);
            }
            // "Anything else - Parse error. Reconsume the character in the
            // before attribute name state."
            _ => {
                self.log_parse_error(ParseError::MissingWhitespaceBetweenAttributes);
                self.insert_missing_whitespace();
                self.reconsume_in(StateId::BeforeAttributeName);
            }
        }
    }

    /// [§ 8.2.4.43 Self-closing start tag state](https://www.w3.org/TR/html5/syntax.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self, c: char) {
        if c == '>' {
            self.flush_pending();
            self.emit('>');
            self.emit_tag(true);
        } else {
            self.log_parse_error(ParseError::UnexpectedSolidusInTag);
            self.replace_stray_solidus();
            self.reconsume_in(StateId::BeforeAttributeName);
        }
    }

    // =========================================================================
    // Comment states
    // =========================================================================

    /// [§ 8.2.4.44 Bogus comment state](https://www.w3.org/TR/html5/syntax.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self, c: char) {
        match c {
            '>' => self.close_bogus_comment(),
            '\0' => self.handle_null_in_text(),
            _ => self.emit(c),
        }
    }

    /// [§ 8.2.4.45 Markup declaration open state](https://www.w3.org/TR/html5/syntax.html#markup-declaration-open-state)
    ///
    /// Entered with the `!` either just consumed (`bang_emitted` false) or
    /// already written out by an earlier chunk. Lookahead is limited to the
    /// current chunk.
    fn markup_declaration_open(&mut self, bang_emitted: bool) {
        let bang = if bang_emitted { "" } else { "!" };

        // "If the next two characters are both U+002D HYPHEN-MINUS characters
        // (-), consume those two characters, create a comment token whose
        // data is the empty string, and switch to the comment start state."
        if self.next_few_characters_are("--") {
            let dashes = self.consume_characters(2);
            self.emit_str(bang);
            self.emit_str(&dashes);
            self.end_comment();
            self.switch_to(StateId::CommentStart);
        }
        // "Otherwise, if the next seven characters are an ASCII
        // case-insensitive match for the word "DOCTYPE", then consume those
        // characters and switch to the DOCTYPE state."
        else if self.next_few_characters_are_case_insensitive("DOCTYPE") {
            let keyword = self.consume_characters(7);
            self.state.doctype.clear();
            if self.canonicalize() {
                self.state.doctype.push_str(bang);
                self.state.doctype.push_str(&keyword);
            } else {
                self.emit_str(bang);
                self.emit_str(&keyword);
            }
            self.switch_to(StateId::Doctype);
        }
        // "Otherwise, if there is an adjusted current node and it is not an
        // element in the HTML namespace and the next seven characters are a
        // case-sensitive match for the string "[CDATA[", then consume those
        // characters and switch to the CDATA section state."
        else if self.state.foreign_depth > 0 && self.next_few_characters_are("[CDATA[") {
            let marker = self.consume_characters(7);
            self.emit_str(bang);
            self.emit_str(&marker);
            self.state.temporary_buffer.clear();
            self.switch_to(StateId::CdataSection);
        }
        // "Otherwise, this is a parse error. Switch to the bogus comment
        // state."
        else {
            self.log_parse_error(ParseError::IncorrectlyOpenedComment);
            self.begin_bogus_comment(if bang_emitted { "--" } else { "!--!" }, bang);
            self.switch_to(StateId::BogusComment);
        }
    }

    /// [§ 8.2.4.46 Comment start state](https://www.w3.org/TR/html5/syntax.html#comment-start-state)
    fn handle_comment_start_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::CommentStartDash);
            }
            '\0' => {
                self.append_to_comment("\u{FFFD}");
                self.handle_null_in_text();
                self.switch_to(StateId::Comment);
            }
            // "U+003E GREATER-THAN SIGN (>) - Parse error. Switch to the data
            // state. Emit the comment token."
            '>' => {
                self.log_parse_error(ParseError::AbruptClosingOfEmptyComment);
                self.emit_corrected('>', "-->");
                self.end_comment();
                self.switch_to(StateId::Data);
            }
            _ => self.reconsume_in(StateId::Comment),
        }
    }

    /// [§ 8.2.4.47 Comment start dash state](https://www.w3.org/TR/html5/syntax.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::CommentEnd);
            }
            '\0' => {
                self.append_to_comment("-\u{FFFD}");
                self.handle_null_in_text();
                self.switch_to(StateId::Comment);
            }
            '>' => {
                self.log_parse_error(ParseError::AbruptClosingOfEmptyComment);
                self.emit_corrected('>', "->");
                self.end_comment();
                self.switch_to(StateId::Data);
            }
            _ => {
                self.append_to_comment("-");
                self.reconsume_in(StateId::Comment);
            }
        }
    }

    /// [§ 8.2.4.48 Comment state](https://www.w3.org/TR/html5/syntax.html#comment-state)
    fn handle_comment_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::CommentEndDash);
            }
            '\0' => {
                self.append_to_comment("\u{FFFD}");
                self.handle_null_in_text();
            }
            '>' => self.emit_comment_greater_than_sign(),
            _ => {
                let mut buf = [0; 4];
                self.append_to_comment(c.encode_utf8(&mut buf));
                self.emit(c);
            }
        }
    }

    /// [§ 8.2.4.49 Comment end dash state](https://www.w3.org/TR/html5/syntax.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self, c: char) {
        match c {
            '-' => {
                self.emit('-');
                self.switch_to(StateId::CommentEnd);
            }
            '\0' => {
                self.append_to_comment("-\u{FFFD}");
                self.handle_null_in_text();
                self.switch_to(StateId::Comment);
            }
            _ => {
                self.append_to_comment("-");
                self.reconsume_in(StateId::Comment);
            }
        }
    }

    /// [§ 8.2.4.50 Comment end state](https://www.w3.org/TR/html5/syntax.html#comment-end-state)
    fn handle_comment_end_state(&mut self, c: char) {
        match c {
            '>' => {
                self.emit('>');
                self.end_comment();
                self.switch_to(StateId::Data);
            }
            '\0' => {
                self.append_to_comment("--\u{FFFD}");
                self.handle_null_in_text();
                self.switch_to(StateId::Comment);
            }
            // "U+0021 EXCLAMATION MARK (!) - Parse error. Switch to the
            // comment end bang state."
            '!' => {
                self.log_parse_error(ParseError::IncorrectlyClosedComment);
                self.withhold('!');
                self.switch_to(StateId::CommentEndBang);
            }
            // "U+002D HYPHEN-MINUS (-) - Parse error. Append a "-" (U+002D)
            // character to the comment token's data."
            '-' => {
                self.log_parse_error(ParseError::UnexpectedCharacterInComment);
                self.append_to_comment("-");
                self.emit('-');
            }
            _ => {
                self.log_parse_error(ParseError::UnexpectedCharacterInComment);
                self.append_to_comment("--");
                self.reconsume_in(StateId::Comment);
            }
        }
    }

    /// [§ 8.2.4.51 Comment end bang state](https://www.w3.org/TR/html5/syntax.html#comment-end-bang-state)
    fn handle_comment_end_bang_state(&mut self, c: char) {
        match c {
            '-' => {
                self.flush_pending();
                self.append_to_comment("--!");
                self.emit('-');
                self.switch_to(StateId::CommentEndDash);
            }
            '>' => {
                self.drop_comment_end_bang();
                self.emit('>');
                self.end_comment();
                self.switch_to(StateId::Data);
            }
            '\0' => {
                self.flush_pending();
                self.append_to_comment("--!\u{FFFD}");
                self.handle_null_in_text();
                self.switch_to(StateId::Comment);
            }
            _ => {
                self.flush_pending();
                self.append_to_comment("--!");
                self.reconsume_in(StateId::Comment);
            }
        }
    }

    // =========================================================================
    // DOCTYPE states
    // =========================================================================

    /// [§ 8.2.4.52 DOCTYPE state](https://www.w3.org/TR/html5/syntax.html#doctype-state)
    fn handle_doctype_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.append_to_doctype(c);
                self.switch_to(StateId::BeforeDoctypeName);
            }
            '>' => self.emit_doctype(),
            _ => {
                self.log_parse_error(ParseError::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(StateId::BeforeDoctypeName);
            }
        }
    }

    /// [§ 8.2.4.53 Before DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#before-doctype-name-state)
    fn handle_before_doctype_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.append_to_doctype(c),
            '>' => {
                self.log_parse_error(ParseError::MissingDoctypeName);
                self.emit_doctype();
            }
            _ => {
                self.append_to_doctype(c);
                self.switch_to(StateId::DoctypeName);
            }
        }
    }

    /// [§ 8.2.4.54 DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#doctype-name-state)
    fn handle_doctype_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.append_to_doctype(c);
                self.switch_to(StateId::AfterDoctypeName);
            }
            '>' => self.emit_doctype(),
            _ => self.append_to_doctype(c),
        }
    }

    /// [§ 8.2.4.55 After DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#after-doctype-name-state)
    fn handle_after_doctype_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.append_to_doctype(c),
            '>' => self.emit_doctype(),
            // "If the six characters starting from the current input character
            // are an ASCII case-insensitive match for the word "PUBLIC", then
            // consume those characters and switch to the after DOCTYPE public
            // keyword state."
            'p' | 'P' if self.next_few_characters_are_case_insensitive("UBLIC") => {
                self.append_doctype_keyword(c);
                self.switch_to(StateId::AfterDoctypePublicKeyword);
            }
            's' | 'S' if self.next_few_characters_are_case_insensitive("YSTEM") => {
                self.append_doctype_keyword(c);
                self.switch_to(StateId::AfterDoctypeSystemKeyword);
            }
            _ => {
                self.log_parse_error(ParseError::InvalidCharacterSequenceAfterDoctypeName);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    fn append_doctype_keyword(&mut self, first: char) {
        self.append_to_doctype(first);
        for c in self.consume_characters(5).chars() {
            self.append_to_doctype(c);
        }
    }

    /// [§ 8.2.4.56 After DOCTYPE public keyword state](https://www.w3.org/TR/html5/syntax.html#after-doctype-public-keyword-state)
    /// and [§ 8.2.4.62 After DOCTYPE system keyword state](https://www.w3.org/TR/html5/syntax.html#after-doctype-system-keyword-state)
    fn handle_after_doctype_keyword_state(
        &mut self,
        c: char,
        before_identifier: StateId,
        double_quoted: StateId,
        single_quoted: StateId,
    ) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.append_to_doctype(c);
                self.switch_to(before_identifier);
            }
            '"' | '\'' => {
                self.log_parse_error(ParseError::MissingWhitespaceAfterDoctypeKeyword);
                self.open_doctype_identifier(c, double_quoted, single_quoted);
            }
            '>' => {
                self.log_parse_error(ParseError::MissingDoctypeIdentifier);
                self.emit_doctype();
            }
            _ => {
                self.log_parse_error(ParseError::MissingQuoteBeforeDoctypeIdentifier);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    /// [§ 8.2.4.57 Before DOCTYPE public identifier state](https://www.w3.org/TR/html5/syntax.html#before-doctype-public-identifier-state)
    /// and [§ 8.2.4.63 Before DOCTYPE system identifier state](https://www.w3.org/TR/html5/syntax.html#before-doctype-system-identifier-state)
    fn handle_before_doctype_identifier_state(
        &mut self,
        c: char,
        double_quoted: StateId,
        single_quoted: StateId,
    ) {
        match c {
            c if Self::is_whitespace_char(c) => self.append_to_doctype(c),
            '"' | '\'' => self.open_doctype_identifier(c, double_quoted, single_quoted),
            '>' => {
                self.log_parse_error(ParseError::MissingDoctypeIdentifier);
                self.emit_doctype();
            }
            _ => {
                self.log_parse_error(ParseError::MissingQuoteBeforeDoctypeIdentifier);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    fn open_doctype_identifier(&mut self, quote: char, double_quoted: StateId, single_quoted: StateId) {
        self.append_to_doctype(quote);
        self.switch_to(if quote == '"' { double_quoted } else { single_quoted });
    }

    /// The four quoted DOCTYPE public and system identifier states, starting
    /// at [§ 8.2.4.58](https://www.w3.org/TR/html5/syntax.html#doctype-public-identifier-double-quoted-state).
    fn handle_doctype_identifier_quoted_state(&mut self, c: char, quote: char, after: StateId) {
        match c {
            c if c == quote => {
                self.append_to_doctype(c);
                self.switch_to(after);
            }
            '>' => {
                self.log_parse_error(ParseError::AbruptDoctypeIdentifier);
                self.emit_doctype();
            }
            _ => self.append_to_doctype(c),
        }
    }

    /// [§ 8.2.4.60 After DOCTYPE public identifier state](https://www.w3.org/TR/html5/syntax.html#after-doctype-public-identifier-state)
    fn handle_after_doctype_public_identifier_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.append_to_doctype(c);
                self.switch_to(StateId::BetweenDoctypePublicAndSystemIdentifiers);
            }
            '>' => self.emit_doctype(),
            '"' | '\'' => {
                self.log_parse_error(ParseError::MissingWhitespaceAfterDoctypeKeyword);
                self.open_doctype_identifier(
                    c,
                    StateId::DoctypeSystemIdentifierDoubleQuoted,
                    StateId::DoctypeSystemIdentifierSingleQuoted,
                );
            }
            _ => {
                self.log_parse_error(ParseError::MissingQuoteBeforeDoctypeIdentifier);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    /// [§ 8.2.4.61 Between DOCTYPE public and system identifiers state](https://www.w3.org/TR/html5/syntax.html#between-doctype-public-and-system-identifiers-state)
    fn handle_between_doctype_public_and_system_identifiers_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.append_to_doctype(c),
            '>' => self.emit_doctype(),
            '"' | '\'' => self.open_doctype_identifier(
                c,
                StateId::DoctypeSystemIdentifierDoubleQuoted,
                StateId::DoctypeSystemIdentifierSingleQuoted,
            ),
            _ => {
                self.log_parse_error(ParseError::MissingQuoteBeforeDoctypeIdentifier);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    /// [§ 8.2.4.66 After DOCTYPE system identifier state](https://www.w3.org/TR/html5/syntax.html#after-doctype-system-identifier-state)
    fn handle_after_doctype_system_identifier_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => self.append_to_doctype(c),
            '>' => self.emit_doctype(),
            _ => {
                self.log_parse_error(ParseError::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.append_to_doctype(c);
                self.switch_to(StateId::BogusDoctype);
            }
        }
    }

    /// [§ 8.2.4.67 Bogus DOCTYPE state](https://www.w3.org/TR/html5/syntax.html#bogus-doctype-state)
    fn handle_bogus_doctype_state(&mut self, c: char) {
        if c == '>' {
            self.emit_doctype();
        } else {
            self.append_to_doctype(c);
        }
    }

    // =========================================================================
    // CDATA
    // =========================================================================

    /// [§ 8.2.4.68 CDATA section state](https://www.w3.org/TR/html5/syntax.html#cdata-section-state)
    ///
    /// The temporary buffer holds the trailing `]` characters seen so far.
    fn handle_cdata_section_state(&mut self, c: char) {
        match c {
            '>' if self.state.temporary_buffer == "]]" => {
                self.emit('>');
                self.state.temporary_buffer.clear();
                self.switch_to(StateId::Data);
            }
            ']' => {
                self.state.temporary_buffer.push(']');
                if self.state.temporary_buffer.len() > 2 {
                    let _ = self.state.temporary_buffer.remove(0);
                }
                self.emit(']');
            }
            '\0' => {
                self.state.temporary_buffer.clear();
                self.emit_replacement_character();
            }
            _ => {
                self.state.temporary_buffer.clear();
                self.emit(c);
            }
        }
    }
}
