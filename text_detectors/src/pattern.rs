// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use attributed_text::TextRange;
use regex::{Regex, RegexBuilder};

/// Flags controlling how a pattern is compiled.
///
/// The default matches case-sensitively with Unicode-aware classes, which is also what
/// [`Regex::new`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegexOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries instead of only at the ends of the text.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Whitespace in the pattern is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
    /// Classes such as `\w` and `\d` are Unicode-aware.
    pub unicode: bool,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
        }
    }
}

impl RegexOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`RegexOptions::case_insensitive`].
    #[must_use]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Sets [`RegexOptions::multi_line`].
    #[must_use]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Sets [`RegexOptions::dot_matches_new_line`].
    #[must_use]
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Sets [`RegexOptions::ignore_whitespace`].
    #[must_use]
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Sets [`RegexOptions::unicode`].
    #[must_use]
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }
}

/// A pattern that could not be compiled.
///
/// This is distinct from a pattern that compiled and simply matched nothing, which
/// yields an empty list of ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    /// The pattern as given by the caller.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The underlying compilation error.
    pub fn regex_error(&self) -> &regex::Error {
        &self.source
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern `{}`: {}", self.pattern, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Compiles `pattern` with `options`.
pub fn compile(pattern: &str, options: RegexOptions) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .multi_line(options.multi_line)
        .dot_matches_new_line(options.dot_matches_new_line)
        .ignore_whitespace(options.ignore_whitespace)
        .unicode(options.unicode)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Compiles `pattern` and returns the character ranges of all its matches in `text`.
///
/// ```
/// use text_detectors::{RegexOptions, detect_regex};
///
/// let ranges = detect_regex("ab 地方 ab", "ab", RegexOptions::new()).unwrap();
/// let ranges: Vec<_> = ranges.iter().map(|r| r.as_range()).collect();
/// assert_eq!(ranges, [0..2, 6..8]);
///
/// assert!(detect_regex("ab", "(", RegexOptions::new()).is_err());
/// ```
pub fn detect_regex(
    text: &str,
    pattern: &str,
    options: RegexOptions,
) -> Result<Vec<TextRange>, PatternError> {
    let regex = compile(pattern, options)?;
    Ok(detect_matches(text, &regex))
}

/// Returns the character ranges of all non-empty matches of `regex` in `text`.
pub fn detect_matches(text: &str, regex: &Regex) -> Vec<TextRange> {
    let mut cursor = CharCursor::new(text);
    let ranges: Vec<_> = regex
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| cursor.char_range(m.range()))
        .collect();
    log::trace!("pattern `{}` matched {} time(s)", regex.as_str(), ranges.len());
    ranges
}

/// Converts ascending UTF-8 byte offsets into character indices in one forward pass.
#[derive(Debug)]
pub(crate) struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    char: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            char: 0,
        }
    }

    /// The character index of `byte`, which must be a char boundary.
    pub(crate) fn char_index(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            // Offsets went backwards; restart from the beginning.
            self.byte = 0;
            self.char = 0;
        }
        self.char += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.char
    }

    /// Converts a byte range whose endpoints are on char boundaries.
    pub(crate) fn char_range(&mut self, range: Range<usize>) -> TextRange {
        let start = self.char_index(range.start);
        let end = self.char_index(range.end);
        TextRange::new_unchecked(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(text: &str, pattern: &str, options: RegexOptions) -> Vec<Range<usize>> {
        detect_regex(text, pattern, options)
            .unwrap()
            .into_iter()
            .map(TextRange::as_range)
            .collect()
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        assert!(ranges("hello", "xyz", RegexOptions::new()).is_empty());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = detect_regex("hello", "([a-", RegexOptions::new()).unwrap_err();
        assert_eq!(err.pattern(), "([a-");
        assert!(err.to_string().starts_with("invalid pattern `([a-`"));
    }

    #[test]
    fn options_are_applied() {
        assert_eq!(ranges("Foo foo", "foo", RegexOptions::new()), [4..7]);
        assert_eq!(
            ranges("Foo foo", "foo", RegexOptions::new().case_insensitive(true)),
            [0..3, 4..7]
        );
        assert_eq!(
            ranges("a\nb", "^b", RegexOptions::new().multi_line(true)),
            [2..3]
        );
        assert!(ranges("a\nb", "^b", RegexOptions::new()).is_empty());
        assert_eq!(
            ranges("a\nb", "a.b", RegexOptions::new().dot_matches_new_line(true)),
            [0..3]
        );
        assert_eq!(
            ranges("ab", "a b # spaced", RegexOptions::new().ignore_whitespace(true)),
            [0..2]
        );
    }

    #[test]
    fn ranges_are_characters() {
        assert_eq!(
            ranges("#哈哈哈哈#你好呀#", "#[^#]+#", RegexOptions::new()),
            [0..6]
        );
        assert_eq!(ranges("谁来看书 book", r"\w+", RegexOptions::new()), [0..4, 5..9]);
    }

    #[test]
    fn empty_matches_are_skipped() {
        assert!(ranges("abc", "x*", RegexOptions::new()).is_empty());
    }

    #[test]
    fn cursor_handles_backwards_offsets() {
        let mut cursor = CharCursor::new("地方ab");
        assert_eq!(cursor.char_index(6), 2);
        assert_eq!(cursor.char_index(3), 1);
        assert_eq!(cursor.char_index(8), 4);
    }
}
