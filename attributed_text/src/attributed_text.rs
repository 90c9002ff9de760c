// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Error, TextRange, TextStorage};

/// Text plus a list of attribute spans, kept in the order they were applied.
///
/// Spans may overlap freely; [`AttributeSegmentsWorkspace`](crate::AttributeSegmentsWorkspace)
/// turns them into non-overlapping segments.
#[derive(Clone, Debug)]
pub struct AttributedText<T, Attr> {
    text: T,
    char_len: usize,
    spans: Vec<(TextRange, Attr)>,
}

impl<T: TextStorage, Attr> AttributedText<T, Attr> {
    /// Wraps `text` with no spans.
    pub fn new(text: T) -> Self {
        Self::with_capacity(text, 0)
    }

    /// Wraps `text` with room for `capacity` spans.
    pub fn with_capacity(text: T, capacity: usize) -> Self {
        Self {
            char_len: text.char_len(),
            text,
            spans: Vec::with_capacity(capacity),
        }
    }

    /// The wrapped text.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Adds a span over an already validated `range`.
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        debug_assert!(
            range.end() <= self.char_len,
            "{range:?} does not fit a text of {} characters",
            self.char_len
        );
        self.spans.push((range, attribute));
    }

    /// Validates a character `range` against the text, then adds a span over it.
    pub fn apply_attribute_chars(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
    ) -> Result<(), Error> {
        let range = TextRange::with_len(self.char_len, range)?;
        self.spans.push((range, attribute));
        Ok(())
    }

    /// Spans in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (TextRange, &Attr)> {
        self.spans.iter().map(|(range, attr)| (*range, attr))
    }

    /// Number of spans applied so far.
    pub fn attributes_len(&self) -> usize {
        self.spans.len()
    }

    /// The span applied `id`-th. Ids come from the segmentation workspace.
    pub(crate) fn span(&self, id: usize) -> (TextRange, &Attr) {
        let (range, attr) = &self.spans[id];
        (*range, attr)
    }
}
