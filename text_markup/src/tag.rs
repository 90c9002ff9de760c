// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use attributed_text::TextRange;
use hashbrown::HashMap;

/// A parsed markup tag, such as `<a href="/q/rust" class="former">`.
///
/// The name is kept exactly as written; comparisons against it ignore ASCII case.
/// Attribute keys are stored lowercased, values verbatim (with character references
/// decoded). A repeated attribute keeps its last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: HashMap<String, String>,
    closing: bool,
}

impl Tag {
    /// Creates a tag with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
            closing: false,
        }
    }

    /// Adds an attribute, replacing any previous value for the same key.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert_attribute(key, value.into());
        self
    }

    /// Marks this tag as self-closing (`<name/>`).
    #[must_use]
    pub fn self_closing(mut self) -> Self {
        self.closing = true;
        self
    }

    pub(crate) fn insert_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_ascii_lowercase(), value);
    }

    /// The tag name as written in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this tag's name equals `name`, ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns `true` for self-closing occurrences such as `<img/>`.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Looks up an attribute value, ignoring ASCII case in `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.attributes.get(key) {
            return Some(value);
        }
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// All attributes of this tag, keyed by lowercased name.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

/// A tag occurrence resolved against the stripped text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagInfo {
    /// The opening tag, including its attributes.
    pub tag: Tag,
    /// The span of stripped text between the opening and closing tag.
    ///
    /// Empty for self-closing tags and for containers with no text.
    pub range: TextRange,
    /// Nesting depth; tags at the root are level 0.
    pub level: usize,
}
