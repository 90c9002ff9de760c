// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;

use crate::Tag;

/// Which side of an element a [`TagTransformer`] applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagPosition {
    /// Opening tags (`<li>`) and self-closing tags (`<br/>`).
    Start,
    /// Closing tags (`</li>`).
    End,
}

/// The literal text a transformer writes in place of a tag.
#[derive(Clone, Debug)]
pub enum Replacement {
    /// Fixed text.
    Text(Cow<'static, str>),
    /// Text computed from the tag, for example from one of its attributes.
    Computed(fn(&Tag) -> String),
}

/// Rewrites a recognized tag occurrence into literal text during tokenizing.
///
/// A rewritten occurrence stops being markup: it is not pushed on the open tag stack,
/// produces no [`TagInfo`](crate::TagInfo), and a rewritten closing tag closes nothing.
///
/// ```
/// use text_markup::{TagPosition, TagTransformer, tokenize};
///
/// let bullet = TagTransformer::text("li", TagPosition::Start, "• ");
/// let out = tokenize("<li>one", &[bullet]);
/// assert_eq!(out.text, "• one");
/// ```
#[derive(Clone, Debug)]
pub struct TagTransformer {
    name: Cow<'static, str>,
    position: TagPosition,
    replacement: Replacement,
}

impl TagTransformer {
    /// Rewrites `<br>` and `<br/>` into a newline.
    pub const LINE_BREAK: Self = Self {
        name: Cow::Borrowed("br"),
        position: TagPosition::Start,
        replacement: Replacement::Text(Cow::Borrowed("\n")),
    };

    /// Creates a transformer that writes fixed `text` for tags named `name`.
    pub fn text(
        name: impl Into<Cow<'static, str>>,
        position: TagPosition,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            replacement: Replacement::Text(text.into()),
        }
    }

    /// Creates a transformer that computes its text from the matched tag.
    pub fn computed(
        name: impl Into<Cow<'static, str>>,
        position: TagPosition,
        replace: fn(&Tag) -> String,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            replacement: Replacement::Computed(replace),
        }
    }

    /// The tag name this transformer matches, ignoring ASCII case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag side this transformer matches.
    pub fn position(&self) -> TagPosition {
        self.position
    }

    /// Returns `true` if this transformer applies to `name` at `position`.
    pub fn matches(&self, name: &str, position: TagPosition) -> bool {
        self.position == position && self.name.eq_ignore_ascii_case(name)
    }

    /// Produces the literal text for `tag`.
    pub fn replace<'a>(&'a self, tag: &Tag) -> Cow<'a, str> {
        match &self.replacement {
            Replacement::Text(text) => Cow::Borrowed(text.as_ref()),
            Replacement::Computed(f) => Cow::Owned(f(tag)),
        }
    }
}

/// The transformers applied when none are given explicitly.
pub const DEFAULT_TRANSFORMERS: &[TagTransformer] = &[TagTransformer::LINE_BREAK];

/// Returns the first transformer in `transformers` matching `name` at `position`.
pub(crate) fn find<'t>(
    transformers: &'t [TagTransformer],
    name: &str,
    position: TagPosition,
) -> Option<&'t TagTransformer> {
    transformers.iter().find(|t| t.matches(name, position))
}
