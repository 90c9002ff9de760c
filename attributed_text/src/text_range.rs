// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Error, ErrorKind, TextStorage};

/// A half-open range of character (Unicode scalar value) indices.
///
/// A range built with [`TextRange::with_len`] satisfies `start <= end <= char_len` for the
/// text it was checked against. Nothing ties the range to that text afterwards, so callers
/// keep each range with its own text.
///
/// Renderers that work in UTF-8 convert with [`TextRange::byte_range`].
///
/// ```
/// use attributed_text::TextRange;
///
/// let text = "#地方#";
/// let range = TextRange::with_len(4, 1..3).unwrap();
/// assert_eq!(range.byte_range(&text), Some(1..7));
/// assert!(TextRange::with_len(4, 1..5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Checks `range` against a text of `char_len` characters.
    pub fn with_len(char_len: usize, range: Range<usize>) -> Result<Self, Error> {
        let Range { start, end } = range;
        if start > end {
            Err(Error::new(ErrorKind::InvalidRange, start, end, char_len))
        } else if end > char_len {
            Err(Error::new(ErrorKind::InvalidBounds, start, end, char_len))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Builds a range the caller already knows to be valid.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// First character index.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// One past the last character index.
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` if the range covers no characters.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the character at `index` is covered.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Widens the range by `before` characters on the left and `after` on the right.
    ///
    /// Returns `None` instead of clamping when the result would leave `0..char_len`.
    #[must_use]
    pub fn expand(self, before: usize, after: usize, char_len: usize) -> Option<Self> {
        let start = self.start.checked_sub(before)?;
        let end = self.end.checked_add(after).filter(|&end| end <= char_len)?;
        Some(Self { start, end })
    }

    /// The range as plain character indices.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }

    /// The UTF-8 byte range of these characters in `text`, if they fit.
    pub fn byte_range<T: TextStorage>(self, text: &T) -> Option<Range<usize>> {
        Some(text.byte_offset(self.start)?..text.byte_offset(self.end)?)
    }
}
