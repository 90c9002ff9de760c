// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{AttributeKey, AttributeMap, AttributeValue, Color, Font, StateKey};

/// A named, per-state set of visual attributes.
///
/// Styles are values: builder methods consume and return `self`, and [`Style::merged`]
/// returns a new style, leaving both operands untouched.
///
/// The name is used to bind a style to tags of the same name (see
/// [`TagStyles`](crate::TagStyles)); it plays no part in resolution.
///
/// ## Example
///
/// ```
/// use styled_text::style::{AttributeKey, AttributeValue, Color, StateKey, Style};
///
/// let link = Style::new()
///     .foreground_color(Color::BLUE, StateKey::Normal)
///     .foreground_color(Color::BROWN, StateKey::Highlighted)
///     .background_color(Color::ORANGE, StateKey::Highlighted)
///     .underline(true, StateKey::Normal);
///
/// // Highlighted falls back to normal for keys it doesn't set.
/// let highlighted = link.attributes(&StateKey::Highlighted);
/// assert_eq!(
///     highlighted.get(&AttributeKey::ForegroundColor),
///     Some(&AttributeValue::Color(Color::BROWN))
/// );
/// assert_eq!(highlighted.get(&AttributeKey::Underline), Some(&AttributeValue::Bool(true)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    name: Option<Arc<str>>,
    states: BTreeMap<StateKey, AttributeMap>,
}

impl Style {
    /// Creates an unnamed style with no attributes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style with no attributes, bound to tags called `name`.
    #[inline]
    pub fn named_new(name: impl Into<Arc<str>>) -> Self {
        Self::new().named(name)
    }

    /// Returns this style bound to tags called `name`.
    #[must_use]
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The tag name this style is bound to.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The attributes stored for `state` alone, without the normal fallback.
    pub fn state(&self, state: &StateKey) -> Option<&AttributeMap> {
        self.states.get(state)
    }

    /// Iterates over the states that carry attributes.
    pub fn states(&self) -> impl Iterator<Item = (&StateKey, &AttributeMap)> {
        self.states.iter().filter(|(_, map)| !map.is_empty())
    }

    /// The effective attributes for `state`.
    ///
    /// For [`StateKey::Normal`] these are the normal attributes. Any other state overlays
    /// its own attributes on top of the normal ones.
    pub fn attributes(&self, state: &StateKey) -> AttributeMap {
        let normal = self.states.get(&StateKey::Normal);
        if *state == StateKey::Normal {
            return normal.cloned().unwrap_or_default();
        }
        match (normal, self.states.get(state)) {
            (Some(normal), Some(own)) => normal.overlaid(own),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => AttributeMap::new(),
        }
    }

    /// Returns `true` if this style has no effect in `state`.
    pub fn is_empty_for(&self, state: &StateKey) -> bool {
        let empty = |s: &StateKey| self.states.get(s).is_none_or(AttributeMap::is_empty);
        empty(&StateKey::Normal) && empty(state)
    }

    /// Returns `true` if this style has no attributes in any state.
    pub fn is_empty(&self) -> bool {
        self.states.values().all(AttributeMap::is_empty)
    }

    /// Overlays `other` on this style, per state, and returns the result.
    ///
    /// On shared keys `other` wins. The name of `self` is kept, or taken from `other`
    /// when `self` has none.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut states = self.states.clone();
        for (state, map) in &other.states {
            states.entry(state.clone()).or_default().overlay(map);
        }
        Self {
            name: self.name.clone().or_else(|| other.name.clone()),
            states,
        }
    }

    /// Sets `key` to `value` in `state`.
    #[must_use]
    pub fn attribute(
        mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
        state: StateKey,
    ) -> Self {
        self.states.entry(state).or_default().insert(key, value);
        self
    }

    /// Sets every attribute of `attributes` in `state`.
    #[must_use]
    pub fn attributes_for(mut self, attributes: &AttributeMap, state: StateKey) -> Self {
        self.states.entry(state).or_default().overlay(attributes);
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn font(self, font: Font, state: StateKey) -> Self {
        self.attribute(AttributeKey::Font, font, state)
    }

    /// Sets the text color.
    #[must_use]
    pub fn foreground_color(self, color: Color, state: StateKey) -> Self {
        self.attribute(AttributeKey::ForegroundColor, color, state)
    }

    /// Sets the color behind the glyphs.
    #[must_use]
    pub fn background_color(self, color: Color, state: StateKey) -> Self {
        self.attribute(AttributeKey::BackgroundColor, color, state)
    }

    /// Turns underlining on or off.
    #[must_use]
    pub fn underline(self, underline: bool, state: StateKey) -> Self {
        self.attribute(AttributeKey::Underline, underline, state)
    }

    /// Sets the underline color.
    #[must_use]
    pub fn underline_color(self, color: Color, state: StateKey) -> Self {
        self.attribute(AttributeKey::UnderlineColor, color, state)
    }

    /// Turns strikethrough on or off.
    #[must_use]
    pub fn strikethrough(self, strikethrough: bool, state: StateKey) -> Self {
        self.attribute(AttributeKey::Strikethrough, strikethrough, state)
    }

    /// Sets the strikethrough color.
    #[must_use]
    pub fn strikethrough_color(self, color: Color, state: StateKey) -> Self {
        self.attribute(AttributeKey::StrikethroughColor, color, state)
    }

    /// Sets the outline color.
    #[must_use]
    pub fn stroke_color(self, color: Color, state: StateKey) -> Self {
        self.attribute(AttributeKey::StrokeColor, color, state)
    }

    /// Sets the outline width.
    #[must_use]
    pub fn stroke_width(self, width: f32, state: StateKey) -> Self {
        self.attribute(AttributeKey::StrokeWidth, width, state)
    }

    /// Sets extra space after each character.
    #[must_use]
    pub fn kern(self, kern: f32, state: StateKey) -> Self {
        self.attribute(AttributeKey::Kern, kern, state)
    }

    /// Sets the vertical offset from the baseline.
    #[must_use]
    pub fn baseline_offset(self, offset: f32, state: StateKey) -> Self {
        self.attribute(AttributeKey::BaselineOffset, offset, state)
    }

    /// Sets the synthetic skew.
    #[must_use]
    pub fn obliqueness(self, obliqueness: f32, state: StateKey) -> Self {
        self.attribute(AttributeKey::Obliqueness, obliqueness, state)
    }

    /// Sets the horizontal expansion.
    #[must_use]
    pub fn expansion(self, expansion: f32, state: StateKey) -> Self {
        self.attribute(AttributeKey::Expansion, expansion, state)
    }

    /// Sets the link target.
    #[must_use]
    pub fn link(self, target: impl Into<Arc<str>>, state: StateKey) -> Self {
        self.attribute(AttributeKey::Link, AttributeValue::Text(target.into()), state)
    }
}
