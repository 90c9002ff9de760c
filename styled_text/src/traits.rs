// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::markup::TagStyles;
use crate::semantic::{SemanticStyles, classify};
use crate::text::StyledText;

/// Extension trait that starts a [`StyledText`] from a string.
pub trait StyleMarkupExt {
    /// The string as-is, with no detections and an empty base style.
    ///
    /// Markup is not interpreted.
    fn styled(&self) -> StyledText;

    /// Strips markup and turns every tag into a detection styled by `styles`.
    fn style_tags(&self, styles: &TagStyles) -> StyledText;

    /// Strips markup, classifies anchors as hashtags, mentions and links, and detects bare
    /// links in the remaining text.
    ///
    /// ```
    /// use styled_text::style::{Color, StateKey, Style};
    /// use styled_text::{DetectionType, SemanticStyles, StyleMarkupExt};
    ///
    /// let link = Style::new().foreground_color(Color::BLUE, StateKey::Normal);
    /// let text = r#"hi @<a href="https://example.com/ann" class="former">ann</a>!"#
    ///     .style_semantic(&SemanticStyles::uniform(link));
    ///
    /// assert_eq!(text.as_str(), "hi @ann!");
    /// let mention = &text.detections()[0];
    /// assert!(matches!(&mention.kind, DetectionType::Mention { text, .. } if text == "ann"));
    /// assert_eq!(text.text_for(mention.range), Some("@ann"));
    /// ```
    fn style_semantic(&self, styles: &SemanticStyles) -> StyledText;
}

impl StyleMarkupExt for str {
    fn styled(&self) -> StyledText {
        StyledText::plain(self)
    }

    fn style_tags(&self, styles: &TagStyles) -> StyledText {
        styles.apply(self)
    }

    fn style_semantic(&self, styles: &SemanticStyles) -> StyledText {
        classify(self, styles)
    }
}
