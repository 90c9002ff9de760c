// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::sync::Arc;

use attributed_text::{TextRange, TextStorage};
use once_cell::sync::OnceCell;
use text_detectors::{CheckingKind, CheckingTypes, Regex, RegexOptions};

use crate::detection::{Detection, DetectionType};
use crate::error::Error;
use crate::resolve::resolve_runs;
use crate::runs::ResolvedRun;
use crate::style::{AttributeMap, StateKey, Style};

/// Stripped text, a base style, and the detections styling it.
///
/// A `StyledText` never changes once built. The `style_*` methods consume it and return a
/// new aggregate with more detections (or a different base style), so they chain:
///
/// ```
/// use styled_text::style::{Color, Font, StateKey, Style};
/// use styled_text::{RegexOptions, StyleMarkupExt};
///
/// let mention = Style::new().foreground_color(Color::BLUE, StateKey::Normal);
/// let text = "ping @alice and @bob"
///     .styled()
///     .style_regex(r"@\w+", RegexOptions::new(), &mention)
///     .unwrap()
///     .style_all(&Style::new().font(Font::system(14.0), StateKey::Normal));
///
/// assert_eq!(text.detections().len(), 2);
/// assert_eq!(text.resolve(&StateKey::Normal).len(), 4);
/// ```
///
/// Resolved output for the built-in states is computed on first request and cached for
/// the lifetime of the value.
#[derive(Clone, Debug)]
pub struct StyledText {
    string: Arc<str>,
    char_len: usize,
    base_style: Style,
    detections: Vec<Detection>,
    resolved: [OnceCell<Arc<[ResolvedRun]>>; 4],
}

impl StyledText {
    /// Creates an aggregate, validating every detection range against `string`.
    pub fn new(
        string: impl Into<Arc<str>>,
        detections: Vec<Detection>,
        base_style: Style,
    ) -> Result<Self, Error> {
        let string = string.into();
        let char_len = string.char_len();
        for detection in &detections {
            TextRange::with_len(char_len, detection.range.as_range())?;
        }
        Ok(Self::from_parts(string, char_len, detections, base_style))
    }

    /// Creates an aggregate with no detections and an empty base style.
    pub fn plain(string: impl Into<Arc<str>>) -> Self {
        let string = string.into();
        let char_len = string.char_len();
        Self::from_parts(string, char_len, Vec::new(), Style::new())
    }

    /// Creates an aggregate from text that already carries attributes.
    ///
    /// Each run becomes a [`DetectionType::Range`] detection at [`Detection::MAX_LEVEL`]
    /// whose normal state holds the run's attributes.
    pub fn from_runs<I>(string: impl Into<Arc<str>>, runs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Range<usize>, AttributeMap)>,
    {
        let string = string.into();
        let char_len = string.char_len();
        let detections = runs
            .into_iter()
            .map(|(range, attributes)| -> Result<Detection, Error> {
                let range = TextRange::with_len(char_len, range)?;
                let style = Style::new().attributes_for(&attributes, StateKey::Normal);
                Ok(Detection::new(
                    DetectionType::Range,
                    style,
                    range,
                    Detection::MAX_LEVEL,
                ))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self::from_parts(string, char_len, detections, Style::new()))
    }

    /// Assembles an aggregate whose detection ranges are already known to fit.
    pub(crate) fn from_parts(
        string: Arc<str>,
        char_len: usize,
        detections: Vec<Detection>,
        base_style: Style,
    ) -> Self {
        debug_assert!(
            detections.iter().all(|d| d.range.end() <= char_len),
            "detection ranges must fit the text"
        );
        Self {
            string,
            char_len,
            base_style,
            detections,
            resolved: core::array::from_fn(|_| OnceCell::new()),
        }
    }

    fn with_detections(self, added: impl IntoIterator<Item = Detection>) -> Self {
        let Self {
            string,
            char_len,
            base_style,
            mut detections,
            ..
        } = self;
        detections.extend(added);
        Self::from_parts(string, char_len, detections, base_style)
    }

    /// The stripped text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The length of the text, in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// The style applied under every detection.
    #[inline]
    pub fn base_style(&self) -> &Style {
        &self.base_style
    }

    /// The detections, in the order they were added.
    #[inline]
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// The detections in the order resolution applies them: by level, then by insertion.
    pub fn application_order(&self) -> impl DoubleEndedIterator<Item = &Detection> {
        let mut order: Vec<&Detection> = self.detections.iter().collect();
        order.sort_by_key(|d| d.level);
        order.into_iter()
    }

    /// Merges `style` into the base style.
    #[must_use]
    pub fn style_all(self, style: &Style) -> Self {
        let base_style = self.base_style.merged(style);
        Self::from_parts(self.string, self.char_len, self.detections, base_style)
    }

    /// Styles every match of `pattern`.
    ///
    /// Fails with [`Error::Pattern`] if the pattern does not compile. A pattern that simply
    /// doesn't match returns the aggregate unchanged.
    pub fn style_regex(
        self,
        pattern: &str,
        options: RegexOptions,
        style: &Style,
    ) -> Result<Self, Error> {
        let regex = text_detectors::compile(pattern, options)?;
        Ok(self.style_matches(&regex, style))
    }

    /// Styles every match of an already compiled `regex`.
    #[must_use]
    pub fn style_matches(self, regex: &Regex, style: &Style) -> Self {
        let pattern = regex.as_str();
        let added: Vec<_> = text_detectors::detect_matches(&self.string, regex)
            .into_iter()
            .map(|range| {
                Detection::new(
                    DetectionType::Regex(pattern.into()),
                    style.clone(),
                    range,
                    Detection::MAX_LEVEL,
                )
            })
            .collect();
        self.with_detections(added)
    }

    /// Styles links, phone numbers or dates, as selected by `types`.
    #[must_use]
    pub fn style_checking(self, types: CheckingTypes, style: &Style) -> Self {
        let added: Vec<_> = text_detectors::detect_checking(&self.string, types)
            .into_iter()
            .map(|found| {
                Detection::new(
                    DetectionType::TextChecking {
                        text: found.text,
                        kind: found.kind,
                    },
                    style.clone(),
                    found.range,
                    Detection::MAX_LEVEL,
                )
            })
            .collect();
        self.with_detections(added)
    }

    /// Styles phone numbers.
    #[must_use]
    pub fn style_phone_numbers(self, style: &Style) -> Self {
        let added: Vec<_> =
            text_detectors::detect_checking(&self.string, CheckingTypes::PHONE_NUMBER)
                .into_iter()
                .map(|found| {
                    Detection::new(
                        DetectionType::PhoneNumber(found.text),
                        style.clone(),
                        found.range,
                        Detection::MAX_LEVEL,
                    )
                })
                .collect();
        self.with_detections(added)
    }

    /// Styles bare web and e-mail addresses.
    #[must_use]
    pub fn style_links(self, style: &Style) -> Self {
        let added: Vec<_> = text_detectors::detect_checking(&self.string, CheckingTypes::LINK)
            .into_iter()
            .filter(|found| found.kind == CheckingKind::Link)
            .filter_map(|found| {
                let url = found.link_url()?;
                Some(Detection::new(
                    DetectionType::Link(url),
                    style.clone(),
                    found.range,
                    Detection::MAX_LEVEL,
                ))
            })
            .collect();
        self.with_detections(added)
    }

    /// Styles an explicit character `range`.
    pub fn style_range(self, range: Range<usize>, style: &Style) -> Result<Self, Error> {
        let range = TextRange::with_len(self.char_len, range)?;
        let detection = Detection::new(
            DetectionType::Range,
            style.clone(),
            range,
            Detection::MAX_LEVEL,
        );
        Ok(self.with_detections([detection]))
    }

    /// The runs to paint for `state`.
    ///
    /// Results for the [built-in states](StateKey::BUILT_IN) are cached; custom states are
    /// resolved on every call.
    pub fn resolve(&self, state: &StateKey) -> Arc<[ResolvedRun]> {
        let Some(slot) = state.built_in_index() else {
            return self.resolve_uncached(state).into();
        };
        self.resolved[slot]
            .get_or_init(|| {
                log::debug!("resolving {:?} for {} detection(s)", state, self.detections.len());
                self.resolve_uncached(state).into()
            })
            .clone()
    }

    /// The runs to paint for `state`, bypassing the cache.
    pub fn resolve_uncached(&self, state: &StateKey) -> Vec<ResolvedRun> {
        resolve_runs(self, state)
    }

    /// The topmost detection covering the character at `index`.
    ///
    /// "Topmost" follows resolution order: the detection applied last wins.
    pub fn detection_at(&self, index: usize) -> Option<&Detection> {
        self.application_order()
            .rev()
            .find(|d| d.range.contains(index))
    }

    /// Every detection covering the character at `index`, in application order.
    pub fn detections_at(&self, index: usize) -> impl Iterator<Item = &Detection> {
        self.application_order()
            .filter(move |d| d.range.contains(index))
    }

    /// The text covered by `range`, or `None` if it doesn't fit.
    pub fn text_for(&self, range: TextRange) -> Option<&str> {
        self.string.get(self.byte_range(range)?)
    }

    /// The UTF-8 byte range of `range`, for renderers that index by byte.
    pub fn byte_range(&self, range: TextRange) -> Option<Range<usize>> {
        range.byte_range(&self.as_str())
    }
}

impl PartialEq for StyledText {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
            && self.base_style == other.base_style
            && self.detections == other.detections
    }
}
