use serde::{Deserialize, Serialize};

/// Switches for the transform families applied by [`ContextParser`](crate::ContextParser).
///
/// Every switch defaults to off. With all three off the parser only tracks
/// state and returns its input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Normalize newlines and replace control characters and noncharacters
    /// before tokenizing.
    pub enable_input_pre_processing: bool,
    /// Rewrite parse errors into their canonical, unambiguous form.
    pub enable_canonicalization: bool,
    /// Break the `<!--[if ...]>` marker of legacy IE conditional comments.
    #[serde(rename = "enableVoidingIEConditionalComments")]
    pub enable_voiding_ie_conditional_comments: bool,
}

impl Configuration {
    /// A configuration with every transform enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enable_input_pre_processing: true,
            enable_canonicalization: true,
            enable_voiding_ie_conditional_comments: true,
        }
    }

    /// Toggle input stream preprocessing.
    #[must_use]
    pub const fn with_input_pre_processing(mut self, enabled: bool) -> Self {
        self.enable_input_pre_processing = enabled;
        self
    }

    /// Toggle parse error canonicalization.
    #[must_use]
    pub const fn with_canonicalization(mut self, enabled: bool) -> Self {
        self.enable_canonicalization = enabled;
        self
    }

    /// Toggle voiding of IE conditional comments.
    #[must_use]
    pub const fn with_voiding_ie_conditional_comments(mut self, enabled: bool) -> Self {
        self.enable_voiding_ie_conditional_comments = enabled;
        self
    }
}
