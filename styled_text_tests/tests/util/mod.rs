// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared styles and helpers.

use std::ops::Range;

use styled_text::style::{Color, Font, StateKey, Style};
use styled_text::{DetectionType, SemanticStyles, StyledText};

/// Styles that make every semantic kind distinguishable in resolved output.
pub(crate) fn semantic_styles() -> SemanticStyles {
    SemanticStyles::new(
        Style::new()
            .foreground_color(Color::ORANGE, StateKey::Normal)
            .foreground_color(Color::BROWN, StateKey::Highlighted),
        Style::new().foreground_color(Color::RED, StateKey::Normal),
        Style::new()
            .foreground_color(Color::BLUE, StateKey::Normal)
            .underline(true, StateKey::Normal),
    )
}

pub(crate) fn bold() -> Style {
    Style::named_new("b").font(Font::bold_system(14.0), StateKey::Normal)
}

/// A short label for a detection kind.
pub(crate) fn kind_name(kind: &DetectionType) -> &'static str {
    match kind {
        DetectionType::Tag(_) => "tag",
        DetectionType::Hashtag { .. } => "hashtag",
        DetectionType::Mention { .. } => "mention",
        DetectionType::Link(_) => "link",
        DetectionType::Regex(_) => "regex",
        DetectionType::PhoneNumber(_) => "phone",
        DetectionType::TextChecking { .. } => "checking",
        DetectionType::Range => "range",
    }
}

/// Every detection as `(kind, character range, covered text)`.
pub(crate) fn summary(text: &StyledText) -> Vec<(&'static str, Range<usize>, String)> {
    text.detections()
        .iter()
        .map(|d| {
            (
                kind_name(&d.kind),
                d.range.as_range(),
                text.text_for(d.range).unwrap_or_default().to_owned(),
            )
        })
        .collect()
}

/// Asserts the stripped text contains no markup.
pub(crate) fn assert_stripped(text: &StyledText) {
    let s = text.as_str();
    assert!(
        !s.contains("<a") && !s.contains("</"),
        "markup left in stripped text: {s:?}"
    );
}
