// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::Arc;

use super::AttributeValue;

/// The name of a visual attribute.
///
/// The built-in keys cover what text renderers commonly support. Anything else can be
/// carried as [`AttributeKey::Custom`], which a renderer is free to ignore.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// The [`Font`](super::Font) to draw with.
    Font,
    /// Text color.
    ForegroundColor,
    /// Color behind the glyphs.
    BackgroundColor,
    /// Underline on/off.
    Underline,
    /// Underline color, defaults to the foreground color.
    UnderlineColor,
    /// Strikethrough on/off.
    Strikethrough,
    /// Strikethrough color, defaults to the foreground color.
    StrikethroughColor,
    /// Outline color.
    StrokeColor,
    /// Outline width in percent of the font size.
    StrokeWidth,
    /// Extra space after each character, in points.
    Kern,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Synthetic skew.
    Obliqueness,
    /// Log of the horizontal expansion factor.
    Expansion,
    /// Link target.
    Link,
    /// An application-defined attribute.
    Custom(Arc<str>),
}

impl AttributeKey {
    /// Creates an application-defined key.
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }
}

/// An ordered map of visual attributes.
///
/// Iteration is in [`AttributeKey`] order, so two maps with the same entries always
/// compare and print the same way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of attributes set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The value for `key`, if set.
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is set.
    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(key, value.into())
    }

    /// Returns this map with `key` set.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Unsets `key`, returning its value.
    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, AttributeKey, AttributeValue> {
        self.entries.iter()
    }

    /// Sets every attribute of `other` on this map; `other` wins on shared keys.
    pub fn overlay(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy of this map with `other` overlaid.
    #[must_use]
    pub fn overlaid(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.overlay(other);
        out
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = btree_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<AttributeValue>> FromIterator<(AttributeKey, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl<V: Into<AttributeValue>> Extend<(AttributeKey, V)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (AttributeKey, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k, v.into())));
    }
}
