// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-classification of anchor tags into hashtags, mentions and links.
//!
//! Status-update markup wraps these in `a` tags and relies on marker characters outside
//! the tag: `@<a class="former" href="…">name</a>` for a mention and
//! `#<a href="/q/…">topic</a>#` for a hashtag. Their detections are widened to cover the
//! markers.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use text_markup::{DEFAULT_TRANSFORMERS, TagInfo, Tokenized, tokenize};
use url::{ParseError, Url};

use crate::detection::{Detection, DetectionType};
use crate::style::Style;
use crate::text::StyledText;

/// Bytes escaped in an `href` before it is parsed.
///
/// Existing escapes (`%`), fragments (`#`) and IPv6 brackets are left alone.
const HREF: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Path prefix of hashtag search links.
const HASHTAG_PREFIX: &str = "/q/";

/// `class` of anchors that mention a user.
const MENTION_CLASS: &str = "former";

/// The styles [`style_semantic`](crate::StyleMarkupExt::style_semantic) applies.
///
/// Relative `href`s only parse when a [`base_url`](SemanticStyles::base_url) is set;
/// without one, a relative anchor can still be a hashtag but never a mention or a link.
#[derive(Clone, Debug, Default)]
pub struct SemanticStyles {
    /// Style for `#topic#` hashtags, markers included.
    pub hashtag: Style,
    /// Style for `@name` mentions, marker included.
    pub mention: Style,
    /// Style for anchor links and bare addresses.
    pub link: Style,
    /// Address relative `href`s are resolved against.
    pub base_url: Option<Url>,
}

impl SemanticStyles {
    /// Creates a set of styles with no base URL.
    pub fn new(hashtag: Style, mention: Style, link: Style) -> Self {
        Self {
            hashtag,
            mention,
            link,
            base_url: None,
        }
    }

    /// Uses `style` for hashtags, mentions and links alike.
    pub fn uniform(style: Style) -> Self {
        Self::new(style.clone(), style.clone(), style)
    }

    /// Sets the address relative `href`s are resolved against.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn parse(&self, href: &str) -> Option<Url> {
        match Url::parse(href) {
            Ok(url) => Some(url),
            Err(ParseError::RelativeUrlWithoutBase) => {
                self.base_url.as_ref()?.join(href).ok()
            }
            Err(_) => None,
        }
    }
}

pub(crate) fn classify(input: &str, styles: &SemanticStyles) -> StyledText {
    let Tokenized { text, tags } = tokenize(input, DEFAULT_TRANSFORMERS);
    let char_len = text.chars().count();
    let detections: Vec<_> = tags
        .iter()
        .filter_map(|info| classify_anchor(&text, char_len, info, styles))
        .collect();
    log::debug!(
        "{} of {} tag(s) classified as hashtags, mentions or links",
        detections.len(),
        tags.len()
    );
    StyledText::from_parts(text.into(), char_len, detections, Style::new())
        .style_links(&styles.link)
}

fn classify_anchor(
    text: &str,
    char_len: usize,
    info: &TagInfo,
    styles: &SemanticStyles,
) -> Option<Detection> {
    if !info.tag.is("a") {
        return None;
    }
    let href = utf8_percent_encode(info.tag.attribute("href")?, HREF).to_string();
    let display = || -> String {
        info.range
            .byte_range(&text)
            .and_then(|bytes| text.get(bytes))
            .unwrap_or_default()
            .into()
    };

    if info.tag.attribute("class") == Some(MENTION_CLASS) {
        if let Some(url) = styles.parse(&href) {
            let name = display();
            let Some(range) = info.range.expand(1, 0, char_len) else {
                log::warn!(
                    "dropping mention `{name}` at {:?}: no marker character before it",
                    info.range
                );
                return None;
            };
            let kind = DetectionType::Mention { text: name, url };
            return Some(Detection::new(kind, styles.mention.clone(), range, info.level));
        }
    }

    if href.starts_with(HASHTAG_PREFIX) {
        let topic = display();
        let Some(range) = info.range.expand(1, 1, char_len) else {
            log::warn!(
                "dropping hashtag `{topic}` at {:?}: no marker characters around it",
                info.range
            );
            return None;
        };
        let kind = DetectionType::Hashtag { text: topic, url: href };
        return Some(Detection::new(kind, styles.hashtag.clone(), range, info.level));
    }

    match styles.parse(&href) {
        Some(url) => Some(Detection::new(
            DetectionType::Link(url),
            styles.link.clone(),
            info.range,
            info.level,
        )),
        None => {
            log::trace!("ignoring anchor with unusable href `{href}`");
            None
        }
    }
}
