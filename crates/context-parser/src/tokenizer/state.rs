use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{Display, EnumIter, FromRepr};

use crate::error::ContextError;

/// [§ 8.2.4 Tokenization](https://www.w3.org/TR/html5/syntax.html#tokenization)
///
/// The tokenizer state machine. Each state corresponds to a subsection of
/// § 8.2.4 and its discriminant is that subsection's number, so ids are
/// stable and can be persisted (for example in a compiled template) and
/// restored with [`StateId::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum StateId {
    /// [§ 8.2.4.1 Data state](https://www.w3.org/TR/html5/syntax.html#data-state)
    Data = 1,
    /// [§ 8.2.4.2 Character reference in data state](https://www.w3.org/TR/html5/syntax.html#character-reference-in-data-state)
    CharacterReferenceInData = 2,
    /// [§ 8.2.4.3 RCDATA state](https://www.w3.org/TR/html5/syntax.html#rcdata-state)
    Rcdata = 3,
    /// [§ 8.2.4.4 Character reference in RCDATA state](https://www.w3.org/TR/html5/syntax.html#character-reference-in-rcdata-state)
    CharacterReferenceInRcdata = 4,
    /// [§ 8.2.4.5 RAWTEXT state](https://www.w3.org/TR/html5/syntax.html#rawtext-state)
    Rawtext = 5,
    /// [§ 8.2.4.6 Script data state](https://www.w3.org/TR/html5/syntax.html#script-data-state)
    ScriptData = 6,
    /// [§ 8.2.4.7 PLAINTEXT state](https://www.w3.org/TR/html5/syntax.html#plaintext-state)
    Plaintext = 7,
    /// [§ 8.2.4.8 Tag open state](https://www.w3.org/TR/html5/syntax.html#tag-open-state)
    TagOpen = 8,
    /// [§ 8.2.4.9 End tag open state](https://www.w3.org/TR/html5/syntax.html#end-tag-open-state)
    EndTagOpen = 9,
    /// [§ 8.2.4.10 Tag name state](https://www.w3.org/TR/html5/syntax.html#tag-name-state)
    TagName = 10,
    /// [§ 8.2.4.11 RCDATA less-than sign state](https://www.w3.org/TR/html5/syntax.html#rcdata-less-than-sign-state)
    RcdataLessThanSign = 11,
    /// [§ 8.2.4.12 RCDATA end tag open state](https://www.w3.org/TR/html5/syntax.html#rcdata-end-tag-open-state)
    RcdataEndTagOpen = 12,
    /// [§ 8.2.4.13 RCDATA end tag name state](https://www.w3.org/TR/html5/syntax.html#rcdata-end-tag-name-state)
    RcdataEndTagName = 13,
    /// [§ 8.2.4.14 RAWTEXT less-than sign state](https://www.w3.org/TR/html5/syntax.html#rawtext-less-than-sign-state)
    RawtextLessThanSign = 14,
    /// [§ 8.2.4.15 RAWTEXT end tag open state](https://www.w3.org/TR/html5/syntax.html#rawtext-end-tag-open-state)
    RawtextEndTagOpen = 15,
    /// [§ 8.2.4.16 RAWTEXT end tag name state](https://www.w3.org/TR/html5/syntax.html#rawtext-end-tag-name-state)
    RawtextEndTagName = 16,
    /// [§ 8.2.4.17 Script data less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-less-than-sign-state)
    ScriptDataLessThanSign = 17,
    /// [§ 8.2.4.18 Script data end tag open state](https://www.w3.org/TR/html5/syntax.html#script-data-end-tag-open-state)
    ScriptDataEndTagOpen = 18,
    /// [§ 8.2.4.19 Script data end tag name state](https://www.w3.org/TR/html5/syntax.html#script-data-end-tag-name-state)
    ScriptDataEndTagName = 19,
    /// [§ 8.2.4.20 Script data escape start state](https://www.w3.org/TR/html5/syntax.html#script-data-escape-start-state)
    ScriptDataEscapeStart = 20,
    /// [§ 8.2.4.21 Script data escape start dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escape-start-dash-state)
    ScriptDataEscapeStartDash = 21,
    /// [§ 8.2.4.22 Script data escaped state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-state)
    ScriptDataEscaped = 22,
    /// [§ 8.2.4.23 Script data escaped dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-dash-state)
    ScriptDataEscapedDash = 23,
    /// [§ 8.2.4.24 Script data escaped dash dash state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-dash-dash-state)
    ScriptDataEscapedDashDash = 24,
    /// [§ 8.2.4.25 Script data escaped less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-less-than-sign-state)
    ScriptDataEscapedLessThanSign = 25,
    /// [§ 8.2.4.26 Script data escaped end tag open state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-end-tag-open-state)
    ScriptDataEscapedEndTagOpen = 26,
    /// [§ 8.2.4.27 Script data escaped end tag name state](https://www.w3.org/TR/html5/syntax.html#script-data-escaped-end-tag-name-state)
    ScriptDataEscapedEndTagName = 27,
    /// [§ 8.2.4.28 Script data double escape start state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escape-start-state)
    ScriptDataDoubleEscapeStart = 28,
    /// [§ 8.2.4.29 Script data double escaped state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-state)
    ScriptDataDoubleEscaped = 29,
    /// [§ 8.2.4.30 Script data double escaped dash state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-dash-state)
    ScriptDataDoubleEscapedDash = 30,
    /// [§ 8.2.4.31 Script data double escaped dash dash state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-dash-dash-state)
    ScriptDataDoubleEscapedDashDash = 31,
    /// [§ 8.2.4.32 Script data double escaped less-than sign state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escaped-less-than-sign-state)
    ScriptDataDoubleEscapedLessThanSign = 32,
    /// [§ 8.2.4.33 Script data double escape end state](https://www.w3.org/TR/html5/syntax.html#script-data-double-escape-end-state)
    ScriptDataDoubleEscapeEnd = 33,
    /// [§ 8.2.4.34 Before attribute name state](https://www.w3.org/TR/html5/syntax.html#before-attribute-name-state)
    BeforeAttributeName = 34,
    /// [§ 8.2.4.35 Attribute name state](https://www.w3.org/TR/html5/syntax.html#attribute-name-state)
    AttributeName = 35,
    /// [§ 8.2.4.36 After attribute name state](https://www.w3.org/TR/html5/syntax.html#after-attribute-name-state)
    AfterAttributeName = 36,
    /// [§ 8.2.4.37 Before attribute value state](https://www.w3.org/TR/html5/syntax.html#before-attribute-value-state)
    BeforeAttributeValue = 37,
    /// [§ 8.2.4.38 Attribute value (double-quoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted = 38,
    /// [§ 8.2.4.39 Attribute value (single-quoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted = 39,
    /// [§ 8.2.4.40 Attribute value (unquoted) state](https://www.w3.org/TR/html5/syntax.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted = 40,
    /// [§ 8.2.4.41 Character reference in attribute value state](https://www.w3.org/TR/html5/syntax.html#character-reference-in-attribute-value-state)
    CharacterReferenceInAttributeValue = 41,
    /// [§ 8.2.4.42 After attribute value (quoted) state](https://www.w3.org/TR/html5/syntax.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted = 42,
    /// [§ 8.2.4.43 Self-closing start tag state](https://www.w3.org/TR/html5/syntax.html#self-closing-start-tag-state)
    SelfClosingStartTag = 43,
    /// [§ 8.2.4.44 Bogus comment state](https://www.w3.org/TR/html5/syntax.html#bogus-comment-state)
    BogusComment = 44,
    /// [§ 8.2.4.45 Markup declaration open state](https://www.w3.org/TR/html5/syntax.html#markup-declaration-open-state)
    MarkupDeclarationOpen = 45,
    /// [§ 8.2.4.46 Comment start state](https://www.w3.org/TR/html5/syntax.html#comment-start-state)
    CommentStart = 46,
    /// [§ 8.2.4.47 Comment start dash state](https://www.w3.org/TR/html5/syntax.html#comment-start-dash-state)
    CommentStartDash = 47,
    /// [§ 8.2.4.48 Comment state](https://www.w3.org/TR/html5/syntax.html#comment-state)
    Comment = 48,
    /// [§ 8.2.4.49 Comment end dash state](https://www.w3.org/TR/html5/syntax.html#comment-end-dash-state)
    CommentEndDash = 49,
    /// [§ 8.2.4.50 Comment end state](https://www.w3.org/TR/html5/syntax.html#comment-end-state)
    CommentEnd = 50,
    /// [§ 8.2.4.51 Comment end bang state](https://www.w3.org/TR/html5/syntax.html#comment-end-bang-state)
    CommentEndBang = 51,
    /// [§ 8.2.4.52 DOCTYPE state](https://www.w3.org/TR/html5/syntax.html#doctype-state)
    Doctype = 52,
    /// [§ 8.2.4.53 Before DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#before-doctype-name-state)
    BeforeDoctypeName = 53,
    /// [§ 8.2.4.54 DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#doctype-name-state)
    DoctypeName = 54,
    /// [§ 8.2.4.55 After DOCTYPE name state](https://www.w3.org/TR/html5/syntax.html#after-doctype-name-state)
    AfterDoctypeName = 55,
    /// [§ 8.2.4.56 After DOCTYPE public keyword state](https://www.w3.org/TR/html5/syntax.html#after-doctype-public-keyword-state)
    AfterDoctypePublicKeyword = 56,
    /// [§ 8.2.4.57 Before DOCTYPE public identifier state](https://www.w3.org/TR/html5/syntax.html#before-doctype-public-identifier-state)
    BeforeDoctypePublicIdentifier = 57,
    /// [§ 8.2.4.58 DOCTYPE public identifier (double-quoted) state](https://www.w3.org/TR/html5/syntax.html#doctype-public-identifier-(double-quoted)-state)
    DoctypePublicIdentifierDoubleQuoted = 58,
    /// [§ 8.2.4.59 DOCTYPE public identifier (single-quoted) state](https://www.w3.org/TR/html5/syntax.html#doctype-public-identifier-(single-quoted)-state)
    DoctypePublicIdentifierSingleQuoted = 59,
    /// [§ 8.2.4.60 After DOCTYPE public identifier state](https://www.w3.org/TR/html5/syntax.html#after-doctype-public-identifier-state)
    AfterDoctypePublicIdentifier = 60,
    /// [§ 8.2.4.61 Between DOCTYPE public and system identifiers state](https://www.w3.org/TR/html5/syntax.html#between-doctype-public-and-system-identifiers-state)
    BetweenDoctypePublicAndSystemIdentifiers = 61,
    /// [§ 8.2.4.62 After DOCTYPE system keyword state](https://www.w3.org/TR/html5/syntax.html#after-doctype-system-keyword-state)
    AfterDoctypeSystemKeyword = 62,
    /// [§ 8.2.4.63 Before DOCTYPE system identifier state](https://www.w3.org/TR/html5/syntax.html#before-doctype-system-identifier-state)
    BeforeDoctypeSystemIdentifier = 63,
    /// [§ 8.2.4.64 DOCTYPE system identifier (double-quoted) state](https://www.w3.org/TR/html5/syntax.html#doctype-system-identifier-(double-quoted)-state)
    DoctypeSystemIdentifierDoubleQuoted = 64,
    /// [§ 8.2.4.65 DOCTYPE system identifier (single-quoted) state](https://www.w3.org/TR/html5/syntax.html#doctype-system-identifier-(single-quoted)-state)
    DoctypeSystemIdentifierSingleQuoted = 65,
    /// [§ 8.2.4.66 After DOCTYPE system identifier state](https://www.w3.org/TR/html5/syntax.html#after-doctype-system-identifier-state)
    AfterDoctypeSystemIdentifier = 66,
    /// [§ 8.2.4.67 Bogus DOCTYPE state](https://www.w3.org/TR/html5/syntax.html#bogus-doctype-state)
    BogusDoctype = 67,
    /// [§ 8.2.4.68 CDATA section state](https://www.w3.org/TR/html5/syntax.html#cdata-section-state)
    CdataSection = 68,
}

impl StateId {
    /// The numeric id of this state.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Whether the state is inside a start or end tag, i.e. between the tag
    /// name and the closing `>`.
    #[must_use]
    pub const fn is_in_tag(self) -> bool {
        matches!(
            self,
            Self::TagName
                | Self::BeforeAttributeName
                | Self::AttributeName
                | Self::AfterAttributeName
                | Self::BeforeAttributeValue
                | Self::AttributeValueDoubleQuoted
                | Self::AttributeValueSingleQuoted
                | Self::AttributeValueUnquoted
                | Self::CharacterReferenceInAttributeValue
                | Self::AfterAttributeValueQuoted
                | Self::SelfClosingStartTag
        )
    }

    /// Whether the state belongs to a comment, including bogus comments.
    #[must_use]
    pub const fn is_in_comment(self) -> bool {
        matches!(
            self,
            Self::BogusComment
                | Self::CommentStart
                | Self::CommentStartDash
                | Self::Comment
                | Self::CommentEndDash
                | Self::CommentEnd
                | Self::CommentEndBang
        )
    }

    /// Whether the state belongs to a DOCTYPE declaration.
    #[must_use]
    pub const fn is_in_doctype(self) -> bool {
        let id = self as u8;
        id >= Self::Doctype as u8 && id <= Self::BogusDoctype as u8
    }
}

impl TryFrom<u8> for StateId {
    type Error = ContextError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or(ContextError::InvalidState(id))
    }
}

impl From<StateId> for u8 {
    fn from(state: StateId) -> Self {
        state.id()
    }
}

impl Serialize for StateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for StateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u8::deserialize(deserializer)?;
        Self::try_from(id).map_err(de::Error::custom)
    }
}

/// Quoting of the attribute value currently being tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttributeQuoteKind {
    /// No quotes: either an unquoted value or no value in progress.
    #[default]
    Unquoted,
    /// `name="value"`
    Double,
    /// `name='value'`
    Single,
}

impl AttributeQuoteKind {
    /// The attribute value state matching this quoting.
    #[must_use]
    pub const fn value_state(self) -> StateId {
        match self {
            Self::Unquoted => StateId::AttributeValueUnquoted,
            Self::Double => StateId::AttributeValueDoubleQuoted,
            Self::Single => StateId::AttributeValueSingleQuoted,
        }
    }
}
