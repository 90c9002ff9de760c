// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting overlapping spans into contiguous segments.
//!
//! Every span start and end is a cut point, together with `0` and the text length. Between two
//! neighboring cuts the set of covering spans is constant; [`AttributeSegments`] yields those
//! pieces left to right and exposes the covering spans in application order.

use alloc::vec::Vec;

use crate::{AttributedText, TextRange, TextStorage};

/// A span entering or leaving the active set at a cut point.
#[derive(Clone, Copy, Debug)]
struct Edge {
    at: usize,
    span: usize,
    opens: bool,
}

/// Buffers reused across segmentation runs.
#[derive(Clone, Debug, Default)]
pub struct AttributeSegmentsWorkspace {
    cuts: Vec<usize>,
    edges: Vec<Edge>,
    active: Vec<usize>,
}

impl AttributeSegmentsWorkspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts segmenting `attributed`, reusing this workspace's buffers.
    pub fn segments<'w, 'a, T: TextStorage, Attr>(
        &'w mut self,
        attributed: &'a AttributedText<T, Attr>,
    ) -> AttributeSegments<'w, 'a, T, Attr> {
        self.cuts.clear();
        self.edges.clear();
        self.active.clear();

        self.cuts.extend([0, attributed.len()]);
        for (span, (range, _)) in attributed.attributes_iter().enumerate() {
            self.cuts.extend([range.start(), range.end()]);
            // Empty spans still cut, but never cover anything.
            if !range.is_empty() {
                self.edges.push(Edge {
                    at: range.start(),
                    span,
                    opens: true,
                });
                self.edges.push(Edge {
                    at: range.end(),
                    span,
                    opens: false,
                });
            }
        }
        self.cuts.sort_unstable();
        self.cuts.dedup();
        self.edges.sort_unstable_by_key(|edge| edge.at);

        AttributeSegments {
            attributed,
            workspace: self,
            next_cut: 0,
            next_edge: 0,
        }
    }
}

/// Iterator over the non-empty, non-overlapping segments of an [`AttributedText`].
///
/// ```
/// use attributed_text::{AttributeSegmentsWorkspace, AttributedText, TextRange};
///
/// let mut text = AttributedText::new("@ann #rust#");
/// text.apply_attribute(TextRange::new_unchecked(0, 4), "mention");
/// text.apply_attribute(TextRange::new_unchecked(0, 11), "base");
///
/// let mut workspace = AttributeSegmentsWorkspace::new();
/// let mut segments = workspace.segments(&text);
/// assert_eq!(segments.next().map(TextRange::as_range), Some(0..4));
/// let names: Vec<_> = segments.active_spans().iter().map(|(_, name)| *name).collect();
/// assert_eq!(names, ["mention", "base"]);
/// assert_eq!(segments.next().map(TextRange::as_range), Some(4..11));
/// assert_eq!(segments.active_spans().len(), 1);
/// ```
#[derive(Debug)]
pub struct AttributeSegments<'w, 'a, T, Attr> {
    attributed: &'a AttributedText<T, Attr>,
    workspace: &'w mut AttributeSegmentsWorkspace,
    next_cut: usize,
    next_edge: usize,
}

impl<'a, T: TextStorage, Attr> AttributeSegments<'_, 'a, T, Attr> {
    /// Spans covering the segment last returned by `next`, in application order.
    ///
    /// Empty before the first segment and after the last one.
    pub fn active_spans(&self) -> ActiveSpans<'_, 'a, T, Attr> {
        ActiveSpans {
            ids: &self.workspace.active,
            attributed: self.attributed,
        }
    }

    /// Moves the active set to what covers position `at`.
    fn cross(&mut self, at: usize) {
        let workspace = &mut *self.workspace;
        while let Some(edge) = workspace
            .edges
            .get(self.next_edge)
            .copied()
            .filter(|edge| edge.at <= at)
        {
            let slot = workspace.active.binary_search(&edge.span);
            match (edge.opens, slot) {
                (true, Err(ix)) => workspace.active.insert(ix, edge.span),
                (false, Ok(ix)) => {
                    workspace.active.remove(ix);
                }
                _ => {}
            }
            self.next_edge += 1;
        }
    }
}

impl<T: TextStorage, Attr> Iterator for AttributeSegments<'_, '_, T, Attr> {
    type Item = TextRange;

    fn next(&mut self) -> Option<TextRange> {
        let (start, end) = match self.workspace.cuts.get(self.next_cut..self.next_cut + 2) {
            Some(&[start, end]) => (start, end),
            _ => {
                self.workspace.active.clear();
                return None;
            }
        };
        self.cross(start);
        self.next_cut += 1;
        Some(TextRange::new_unchecked(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len();
        (left, Some(left))
    }
}

impl<T: TextStorage, Attr> ExactSizeIterator for AttributeSegments<'_, '_, T, Attr> {
    fn len(&self) -> usize {
        self.workspace.cuts.len().saturating_sub(self.next_cut + 1)
    }
}

/// The spans covering one segment.
#[derive(Debug)]
pub struct ActiveSpans<'s, 'a, T, Attr> {
    ids: &'s [usize],
    attributed: &'a AttributedText<T, Attr>,
}

impl<'a, T: TextStorage, Attr> ActiveSpans<'_, 'a, T, Attr> {
    /// Covering spans in application order; reverse it for last-applied first.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (TextRange, &'a Attr)> + ExactSizeIterator + '_ {
        let attributed = self.attributed;
        self.ids.iter().map(move |&id| attributed.span(id))
    }

    /// Number of covering spans.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing covers the segment.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
