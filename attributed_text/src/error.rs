// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A character range that could not be turned into a [`TextRange`](crate::TextRange).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` is the character length of the text the range was checked against."
)]
impl Error {
    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
        }
    }

    /// What was wrong with the range.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Start of the rejected range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Character length of the text the range was checked against.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            start,
            end,
            len,
        } = self;
        match kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "character range {start}..{end} out of bounds for {len} characters"
            ),
            ErrorKind::InvalidRange => write!(f, "character range {start}..{end}: start > end"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An endpoint was past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,
}
