// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use text_detectors::PatternError;

/// Errors returned by [`StyledText`](crate::StyledText) operations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A range did not fit the text.
    Range(attributed_text::Error),
    /// A regular expression failed to compile.
    Pattern(PatternError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "invalid detection range: {err}"),
            Self::Pattern(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Pattern(err) => Some(err),
        }
    }
}

impl From<attributed_text::Error> for Error {
    fn from(err: attributed_text::Error) -> Self {
        Self::Range(err)
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}
