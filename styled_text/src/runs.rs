// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::TextRange;

use crate::style::AttributeMap;

/// The effective attributes for a contiguous range of text in one state.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRun {
    /// The character range in the stripped text.
    pub range: TextRange,
    /// The attributes to paint the range with.
    pub attributes: AttributeMap,
}

/// An iterator adapter that merges adjacent runs with equal attributes.
///
/// Runs are merged only when they touch (`previous.range.end() == next.range.start()`).
#[derive(Clone, Debug)]
pub struct CoalescedRuns<I: Iterator<Item = ResolvedRun>> {
    inner: I,
    pending: Option<ResolvedRun>,
}

impl<I: Iterator<Item = ResolvedRun>> CoalescedRuns<I> {
    /// Wraps an iterator of runs ordered by position.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pending: None,
        }
    }
}

impl<I: Iterator<Item = ResolvedRun>> Iterator for CoalescedRuns<I> {
    type Item = ResolvedRun;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        loop {
            match self.inner.next() {
                None => break,
                Some(next_run) => {
                    if next_run.range.start() == run.range.end()
                        && next_run.attributes == run.attributes
                    {
                        run.range = TextRange::new_unchecked(run.range.start(), next_run.range.end());
                        continue;
                    }
                    self.pending = Some(next_run);
                    break;
                }
            }
        }

        Some(run)
    }
}
