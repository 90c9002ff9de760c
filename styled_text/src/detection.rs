// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::TextRange;
use text_detectors::CheckingKind;
use text_markup::Tag;
use url::Url;

use crate::style::Style;

/// What a [`Detection`] was classified as.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionType {
    /// A markup tag.
    Tag(Tag),
    /// A `#topic#` anchor: the display text and the (percent-encoded) search path.
    Hashtag {
        /// The text between the markers.
        text: String,
        /// The anchor's `href`, starting with `/q/`.
        url: String,
    },
    /// An `@name` anchor.
    Mention {
        /// The name, without the leading marker.
        text: String,
        /// The profile address.
        url: Url,
    },
    /// A link, either an anchor or a bare address in the text.
    Link(Url),
    /// A match of the contained regular expression.
    Regex(String),
    /// A phone number, as written.
    PhoneNumber(String),
    /// Data found by [`detect_checking`](text_detectors::detect_checking).
    TextChecking {
        /// The matched text.
        text: String,
        /// What was found.
        kind: CheckingKind,
    },
    /// An explicitly styled range.
    Range,
}

/// A classified, styled range of a [`StyledText`](crate::StyledText).
///
/// `level` orders application: lower levels are applied first, so higher levels win on
/// overlap. Tags use their nesting depth; detections added explicitly or by a pattern use
/// [`Detection::MAX_LEVEL`] so they always land on top.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// The classification.
    pub kind: DetectionType,
    /// The style applied over [`Detection::range`].
    pub style: Style,
    /// Character range in the stripped text.
    pub range: TextRange,
    /// Application order.
    pub level: usize,
}

impl Detection {
    /// The level of detections that should apply after every tag.
    pub const MAX_LEVEL: usize = usize::MAX;

    /// Creates a detection.
    pub fn new(kind: DetectionType, style: Style, range: TextRange, level: usize) -> Self {
        Self {
            kind,
            style,
            range,
            level,
        }
    }

    /// The address this detection points to, if it has one.
    ///
    /// Tag detections answer with their `href` when it is an absolute URL.
    pub fn url(&self) -> Option<Url> {
        match &self.kind {
            DetectionType::Mention { url, .. } | DetectionType::Link(url) => Some(url.clone()),
            DetectionType::Tag(tag) if tag.is("a") => {
                tag.attribute("href").and_then(|href| Url::parse(href).ok())
            }
            _ => None,
        }
    }
}
