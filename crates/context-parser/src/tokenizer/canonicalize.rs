//! Canonicalization of parse errors.
//!
//! Every rewrite here turns markup that browsers recover from in different
//! ways into markup they all read the same way. Each one is a no-op unless
//! [`Configuration::enable_canonicalization`](crate::Configuration) is set,
//! except the conditional comment rule which has its own switch.
//!
//! Rewrites that reach back into text already emitted (the `<` of a tag
//! opener, the `=` before a missing attribute value) only apply when that
//! text was emitted from the current chunk.

use core::mem;

use log::trace;

use super::helpers::ParseError;
use super::machine::Tokenizer;
use super::state::StateId;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

impl Tokenizer<'_> {
    /// Emit `canonical` in place of `original`.
    pub(super) fn emit_corrected(&mut self, original: char, canonical: &str) {
        if self.canonicalize() {
            trace!("rewriting {original:?} as {canonical:?} in {} state", self.state.current);
            self.emit_str(canonical);
        } else {
            self.emit(original);
        }
    }

    /// U+0000 NULL becomes U+FFFD REPLACEMENT CHARACTER.
    pub(super) fn emit_replacement_character(&mut self) {
        if self.canonicalize() {
            self.emit(REPLACEMENT_CHARACTER);
        } else {
            self.emit('\0');
        }
    }

    /// Record a character the caller leaves out of the output because
    /// different parsers would read it differently.
    pub(super) fn trace_dropped(&self, c: char) {
        trace!("dropping {c:?} in {} state", self.state.current);
    }

    /// A `<` that did not open a tag is re-emitted as `&lt;`.
    pub(super) fn escape_less_than_sign(&mut self) {
        if !self.canonicalize() {
            return;
        }
        if let Some(at) = self.tag_open_at.take() {
            trace!("escaping stray '<' at output offset {at}");
            self.output.replace_range(at..=at, "&lt;");
        }
    }

    /// `</` followed by something other than a tag name opens a bogus comment:
    /// the already emitted `</` becomes `<!--/`.
    pub(super) fn wrap_end_tag_open_as_comment(&mut self) {
        self.state.comment_wrapped = false;
        if !self.canonicalize() {
            return;
        }
        if let Some(at) = self.tag_open_at.take() {
            self.output.insert_str(at + 1, "!--");
            self.state.comment_wrapped = true;
        }
    }

    /// `</>` is dropped by browsers; it becomes the empty comment `<!--/-->`.
    pub(super) fn emit_missing_end_tag_name(&mut self) {
        let tag_open_at = if self.canonicalize() { self.tag_open_at.take() } else { None };
        if let Some(at) = tag_open_at {
            self.output.insert_str(at + 1, "!--");
            self.emit_str("-->");
        } else {
            self.emit('>');
        }
    }

    /// Open a bogus comment right after its `<`.
    ///
    /// When canonicalizing the opener is written as `wrapper`, a real comment
    /// opener, and the comment is closed with `-->` later on. Otherwise the
    /// `original` characters are passed through.
    pub(super) fn begin_bogus_comment(&mut self, wrapper: &str, original: &str) {
        let wrapped = self.canonicalize();
        self.emit_str(if wrapped { wrapper } else { original });
        self.state.comment_wrapped = wrapped;
    }

    /// "U+003E GREATER-THAN SIGN (>) - Switch to the data state."
    pub(super) fn close_bogus_comment(&mut self) {
        if mem::take(&mut self.state.comment_wrapped) {
            self.emit_str("-->");
        } else {
            self.emit('>');
        }
        self.switch_to(StateId::Data);
    }

    /// `<a href=>` becomes `<a href>`.
    pub(super) fn drop_dangling_equals_sign(&mut self) {
        if !self.canonicalize() {
            return;
        }
        if let Some(at) = self.equals_at.take() {
            let _ = self.output.remove(at);
        }
    }

    /// `<a href="x"title>` becomes `<a href="x" title>`.
    pub(super) fn insert_missing_whitespace(&mut self) {
        if self.canonicalize() {
            self.emit(' ');
        }
    }

    /// A `/` that turned out not to close the tag becomes a space.
    pub(super) fn replace_stray_solidus(&mut self) {
        if self.canonicalize() && !self.state.pending.is_empty() {
            trace!("replacing stray {:?} with a space", self.state.pending);
            self.state.pending.clear();
            self.emit(' ');
        }
    }

    /// `--!>` becomes `-->`.
    pub(super) fn drop_comment_end_bang(&mut self) {
        if !self.state.pending.is_empty() {
            trace!("dropping {:?} before comment end", self.state.pending);
            self.state.pending.clear();
        }
    }

    /// Collect comment text up to its first `>`, which is all the
    /// conditional comment check needs.
    pub(super) fn append_to_comment(&mut self, text: &str) {
        if !self.state.comment_saw_greater_than {
            self.state.comment.push_str(text);
        }
    }

    /// The `>` of `<!--[if IE]>` closes the conditional comment marker in
    /// legacy Internet Explorer. A space in front of it breaks the marker.
    pub(super) fn emit_comment_greater_than_sign(&mut self) {
        if self.config.enable_voiding_ie_conditional_comments
            && !self.state.comment_saw_greater_than
            && is_conditional_comment_opener(&self.state.comment)
        {
            trace!("voiding conditional comment {:?}", self.state.comment);
            self.emit_str(" >");
        } else {
            self.emit('>');
        }
        self.state.comment_saw_greater_than = true;
        self.state.comment.clear();
    }

    /// Reset comment tracking once a comment is closed.
    pub(super) fn end_comment(&mut self) {
        self.state.comment.clear();
        self.state.comment_saw_greater_than = false;
        self.state.comment_wrapped = false;
    }

    /// Doctype characters are held back until the doctype closes so it can
    /// be judged as a whole.
    pub(super) fn append_to_doctype(&mut self, c: char) {
        let c = if c == '\0' {
            self.log_parse_error(ParseError::UnexpectedNullCharacter);
            if self.canonicalize() { REPLACEMENT_CHARACTER } else { c }
        } else {
            c
        };
        if self.canonicalize() {
            self.state.doctype.push(c);
        } else {
            self.emit(c);
        }
    }

    /// "U+003E GREATER-THAN SIGN (>) - Switch to the data state. Emit the
    /// current DOCTYPE token."
    ///
    /// Only `<!doctype html>` survives canonicalization. Anything else is
    /// kept as a comment and followed by the standard doctype, so that every
    /// parser ends up in no-quirks mode.
    pub(super) fn emit_doctype(&mut self) {
        let doctype = mem::take(&mut self.state.doctype);
        if !self.canonicalize() {
            self.emit('>');
        } else if is_standards_doctype(&doctype) {
            self.emit_str(&doctype);
            self.emit('>');
        } else {
            trace!("voiding doctype {doctype:?}");
            self.emit_str(if doctype.starts_with('!') { "!--" } else { "--" });
            self.emit_str(&doctype);
            self.emit_str("--><!doctype html>");
        }
        self.switch_to(StateId::Data);
    }
}

/// Entity replacements for characters that end or confuse an unquoted
/// attribute value.
pub(super) const fn unquoted_attribute_value_entity(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '<' => Some("&lt;"),
        '=' => Some("&#61;"),
        '`' => Some("&#96;"),
        _ => None,
    }
}

/// `[if` then whitespace, ending in `]`: the text between `<!--` and `>` of
/// a downlevel-hidden conditional comment.
fn is_conditional_comment_opener(text: &str) -> bool {
    let Some(condition) = text.get(..3) else {
        return false;
    };
    condition.eq_ignore_ascii_case("[if")
        && text[3..].starts_with(|c: char| c.is_ascii_whitespace())
        && text.ends_with(']')
}

fn is_standards_doctype(doctype: &str) -> bool {
    doctype
        .strip_prefix('!')
        .is_some_and(|rest| rest.eq_ignore_ascii_case("doctype html"))
}
