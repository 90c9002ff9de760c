// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::sync::Arc;

use proptest::prelude::*;

use crate::style::{AttributeKey, AttributeMap, AttributeValue, Color, Font, StateKey, Style};
use crate::{
    CheckingKind, CheckingTypes, Detection, DetectionType, Error, RegexOptions, StyleMarkupExt,
    StyledText, TagStyles, TextRange,
};

/// Reference implementation of run resolution.
///
/// This intentionally uses the simplest (and slowest) algorithm: for each boundary segment, scan
/// all detections that overlap it in application order and overlay their attributes on the base.
/// It exists to assert that the sweep-line in `resolve` preserves identical semantics.
fn reference_runs(text: &StyledText, state: &StateKey) -> Vec<(Range<usize>, AttributeMap)> {
    let mut boundaries = vec![0, text.len()];
    for detection in text.detections() {
        boundaries.push(detection.range.start());
        boundaries.push(detection.range.end());
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    let base = text.base_style().attributes(state);
    let mut out: Vec<(Range<usize>, AttributeMap)> = Vec::new();
    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let mut attributes = base.clone();
        for detection in text.application_order() {
            if detection.range.start() < end && detection.range.end() > start {
                attributes.overlay(&detection.style.attributes(state));
            }
        }
        match out.last_mut() {
            Some((last_range, last_attributes))
                if last_range.end == start && *last_attributes == attributes =>
            {
                last_range.end = end;
            }
            _ => out.push((start..end, attributes)),
        }
    }
    out
}

fn runs(text: &StyledText, state: &StateKey) -> Vec<(Range<usize>, AttributeMap)> {
    text.resolve(state)
        .iter()
        .map(|run| (run.range.as_range(), run.attributes.clone()))
        .collect()
}

fn color(color: Color) -> Style {
    Style::new().foreground_color(color, StateKey::Normal)
}

fn foreground(attributes: &AttributeMap) -> Option<Color> {
    attributes
        .get(&AttributeKey::ForegroundColor)
        .and_then(AttributeValue::as_color)
}

fn tag_styles() -> TagStyles {
    TagStyles::from_styles([
        Style::named_new("b")
            .font(Font::bold_system(14.0), StateKey::Normal)
            .foreground_color(Color::BLACK, StateKey::Highlighted),
        Style::named_new("i").foreground_color(Color::RED, StateKey::Normal),
        Style::named_new("a")
            .underline(true, StateKey::Normal)
            .background_color(Color::ORANGE, StateKey::Highlighted),
    ])
}

#[test]
fn resolution_matches_reference() {
    let texts = [
        "<b>bold <i>both</i></b> plain <a>link <b>strong</b></a>".style_tags(&tag_styles()),
        "<i>a<i>b<i>c</i></i></i><br>tail <b></b>!"
            .style_tags(&tag_styles())
            .style_all(&Style::new().font(Font::system(12.0), StateKey::Normal)),
        "call 555-123-4567 or see www.example.com, <b>2024-03-15</b>"
            .style_tags(&tag_styles())
            .style_checking(CheckingTypes::all(), &color(Color::BLUE))
            .style_regex("[0-9]+", RegexOptions::new(), &color(Color::GRAY))
            .unwrap()
            .style_range(2..9, &Style::new().kern(1.0, StateKey::Highlighted))
            .unwrap(),
        "".styled(),
        "plain".styled().style_all(&color(Color::WHITE)),
    ];

    let states = [
        StateKey::Normal,
        StateKey::Highlighted,
        StateKey::Disabled,
        StateKey::Selected,
        StateKey::custom("dragging"),
    ];
    for text in &texts {
        for state in &states {
            assert_eq!(
                runs(text, state),
                reference_runs(text, state),
                "{:?} in {state:?}",
                text.as_str()
            );
        }
    }
}

fn nested_markup() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(
        &[
            "<b>", "</b>", "<i>", "</i>", "<a>", "</a>", "<u>", "<br>", "<", "&amp;", "x", "yz",
            "日本", " ",
        ][..],
    );
    prop::collection::vec(piece, 0..20).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn resolution_matches_reference_for_any_markup(
        input in nested_markup(),
        extra in (0_usize..12, 0_usize..12),
    ) {
        let mut text = input
            .style_tags(&tag_styles())
            .style_regex("y", RegexOptions::new(), &color(Color::GRAY))
            .unwrap();
        let (start, end) = (extra.0.min(extra.1), extra.0.max(extra.1));
        if end <= text.len() {
            text = text
                .style_range(start..end, &Style::new().kern(2.0, StateKey::Selected))
                .unwrap();
        }
        for state in [StateKey::Normal, StateKey::Highlighted, StateKey::Selected] {
            let fast: Vec<_> = text
                .resolve_uncached(&state)
                .into_iter()
                .map(|run| (run.range.as_range(), run.attributes))
                .collect();
            prop_assert_eq!(&fast, &reference_runs(&text, &state));
            prop_assert_eq!(runs(&text, &state), fast);
        }
    }
}

#[test]
fn runs_cover_the_text_without_gaps() {
    let text = "<b>ab</b>c<i>de</i>".style_tags(&tag_styles());
    let ranges: Vec<_> = runs(&text, &StateKey::Normal)
        .into_iter()
        .map(|(range, _)| range)
        .collect();
    assert_eq!(ranges, [0..2, 2..3, 3..5]);
}

#[test]
fn deeper_tags_apply_last() {
    let text = "<b>a<i>b</i>c</b>".style_tags(&TagStyles::from_styles([
        Style::named_new("b").foreground_color(Color::BLACK, StateKey::Normal),
        Style::named_new("i").foreground_color(Color::RED, StateKey::Normal),
    ]));
    let colors: Vec<_> = runs(&text, &StateKey::Normal)
        .iter()
        .map(|(range, attributes)| (range.clone(), foreground(attributes)))
        .collect();
    assert_eq!(
        colors,
        [
            (0..1, Some(Color::BLACK)),
            (1..2, Some(Color::RED)),
            (2..3, Some(Color::BLACK))
        ]
    );
}

#[test]
fn level_decides_order_before_insertion() {
    let range = TextRange::new_unchecked(0, 3);
    // The inner detection is inserted first but still applies after the outer one.
    let text = StyledText::new(
        "abc",
        vec![
            Detection::new(DetectionType::Range, color(Color::RED), range, 1),
            Detection::new(DetectionType::Range, color(Color::BLUE), range, 0),
        ],
        Style::new(),
    )
    .unwrap();
    let resolved = text.resolve(&StateKey::Normal);
    assert_eq!(resolved.len(), 1);
    assert_eq!(foreground(&resolved[0].attributes), Some(Color::RED));
}

#[test]
fn explicit_detections_override_tags() {
    let text = "<i>abc</i>"
        .style_tags(&tag_styles())
        .style_range(1..2, &color(Color::BLUE))
        .unwrap();
    let colors: Vec<_> = runs(&text, &StateKey::Normal)
        .iter()
        .map(|(_, attributes)| foreground(attributes))
        .collect();
    assert_eq!(
        colors,
        [Some(Color::RED), Some(Color::BLUE), Some(Color::RED)]
    );
}

#[test]
fn detections_override_the_base_style() {
    let text = "<i>ab</i>cd"
        .style_tags(&tag_styles())
        .style_all(&color(Color::GRAY).underline(true, StateKey::Normal));
    let resolved = runs(&text, &StateKey::Normal);
    assert_eq!(resolved.len(), 2);
    assert_eq!(foreground(&resolved[0].1), Some(Color::RED));
    assert_eq!(foreground(&resolved[1].1), Some(Color::GRAY));
    // Keys the detection doesn't set come from the base.
    assert_eq!(
        resolved[0].1.get(&AttributeKey::Underline),
        Some(&AttributeValue::Bool(true))
    );
}

#[test]
fn states_fall_back_to_normal() {
    let text = "<a>go</a> on".style_tags(&tag_styles());

    let highlighted = runs(&text, &StateKey::Highlighted);
    assert_eq!(highlighted[0].0, 0..2);
    assert_eq!(
        highlighted[0].1.get(&AttributeKey::BackgroundColor),
        Some(&AttributeValue::Color(Color::ORANGE))
    );
    assert_eq!(
        highlighted[0].1.get(&AttributeKey::Underline),
        Some(&AttributeValue::Bool(true))
    );

    // A state nothing mentions looks like normal.
    assert_eq!(
        runs(&text, &StateKey::custom("pressed")),
        runs(&text, &StateKey::Normal)
    );
    assert_eq!(
        runs(&text, &StateKey::Disabled),
        runs(&text, &StateKey::Normal)
    );
}

#[test]
fn resolution_is_cached_per_state() {
    let text = "<b>x</b>y".style_tags(&tag_styles());
    let first = text.resolve(&StateKey::Highlighted);
    let second = text.resolve(&StateKey::Highlighted);
    assert!(Arc::ptr_eq(&first, &second), "built-in states are cached");
    assert_eq!(&*first, text.resolve_uncached(&StateKey::Highlighted).as_slice());

    let custom = StateKey::custom("hover");
    assert_eq!(text.resolve(&custom), text.resolve(&custom));
}

#[test]
fn clones_resolve_the_same() {
    let text = "<b>x</b>y".style_tags(&tag_styles());
    let before = text.resolve(&StateKey::Normal);
    let copy = text.clone();
    assert_eq!(copy, text);
    assert_eq!(copy.resolve(&StateKey::Normal), before);
}

#[test]
fn empty_text_has_no_runs() {
    let text = "".styled().style_all(&color(Color::RED));
    assert!(text.is_empty());
    assert!(text.resolve(&StateKey::Normal).is_empty());
    assert!(text.detection_at(0).is_none());
}

#[test]
fn unstyled_text_is_one_run() {
    let text = "just text".styled();
    let resolved = text.resolve(&StateKey::Normal);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].range.as_range(), 0..9);
    assert!(resolved[0].attributes.is_empty());
}

#[test]
fn style_all_merges_in_order() {
    let a = color(Color::RED).underline(true, StateKey::Normal);
    let b = color(Color::BLUE).kern(2.0, StateKey::Selected);
    let chained = "x".styled().style_all(&a).style_all(&b);
    let once = "x".styled().style_all(&a.merged(&b));
    assert_eq!(chained, once);
    assert_eq!(
        foreground(&chained.base_style().attributes(&StateKey::Normal)),
        Some(Color::BLUE)
    );
}

#[test]
fn style_range_checks_bounds() {
    let text = "héllo".styled();
    assert!(matches!(
        text.clone().style_range(2..9, &Style::new()),
        Err(Error::Range(_))
    ));
    assert!(matches!(
        text.clone().style_range(3..2, &Style::new()),
        Err(Error::Range(_))
    ));

    let styled = text.style_range(1..5, &color(Color::RED)).unwrap();
    assert_eq!(styled.detections().len(), 1);
    assert_eq!(styled.detections()[0].level, Detection::MAX_LEVEL);
    assert_eq!(styled.text_for(styled.detections()[0].range), Some("éllo"));
}

#[test]
fn style_regex_reports_bad_patterns() {
    let err = "abc".styled().style_regex("(", RegexOptions::new(), &Style::new());
    match err {
        Err(Error::Pattern(err)) => assert_eq!(err.pattern(), "("),
        other => panic!("expected a pattern error, got {other:?}"),
    }
}

#[test]
fn style_regex_without_matches_is_a_no_op() {
    let text = "<b>abc</b>".style_tags(&tag_styles());
    let same = text
        .clone()
        .style_regex("[0-9]+", RegexOptions::new(), &color(Color::RED))
        .unwrap();
    assert_eq!(same, text);
}

#[test]
fn style_regex_uses_character_ranges() {
    let text = "価格 42 円, 7 円"
        .styled()
        .style_regex(r"\d+", RegexOptions::new(), &color(Color::RED))
        .unwrap();
    let ranges: Vec<_> = text
        .detections()
        .iter()
        .map(|d| d.range.as_range())
        .collect();
    assert_eq!(ranges, [3..5, 9..10]);
    assert!(
        text.detections()
            .iter()
            .all(|d| d.kind == DetectionType::Regex(r"\d+".into()))
    );
}

#[test]
fn style_regex_honors_options() {
    let text = "Rust rust RUST"
        .styled()
        .style_regex(
            "rust",
            RegexOptions::new().case_insensitive(true),
            &Style::new(),
        )
        .unwrap();
    assert_eq!(text.detections().len(), 3);
}

#[test]
fn checking_detections_keep_their_kind() {
    let text = "see www.example.com or call 555-123-4567"
        .styled()
        .style_checking(CheckingTypes::all(), &color(Color::BLUE));
    let kinds: Vec<_> = text
        .detections()
        .iter()
        .map(|d| match &d.kind {
            DetectionType::TextChecking { kind, .. } => *kind,
            other => panic!("unexpected detection {other:?}"),
        })
        .collect();
    assert_eq!(kinds, [CheckingKind::Link, CheckingKind::PhoneNumber]);
}

#[test]
fn phone_numbers_and_links() {
    let text = "call 555-123-4567 or https://example.com"
        .styled()
        .style_phone_numbers(&color(Color::RED))
        .style_links(&color(Color::BLUE));
    let detections = text.detections();
    assert_eq!(detections.len(), 2);
    assert_eq!(
        detections[0].kind,
        DetectionType::PhoneNumber("555-123-4567".into())
    );
    assert_eq!(detections[0].range.as_range(), 5..17);
    assert_eq!(
        detections[1].url().map(|url| url.to_string()),
        Some("https://example.com/".into())
    );
}

#[test]
fn from_runs_keeps_existing_attributes() {
    let bold = AttributeMap::new().with(AttributeKey::Font, Font::bold_system(12.0));
    let text = StyledText::from_runs("hello world", [(0..5, bold.clone())]).unwrap();
    assert_eq!(text.detections()[0].kind, DetectionType::Range);

    let resolved = text.resolve(&StateKey::Normal);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].attributes, bold);
    assert!(resolved[1].attributes.is_empty());

    assert!(StyledText::from_runs("hi", [(0..3, bold)]).is_err());
}

#[test]
fn new_validates_detection_ranges() {
    let detection = Detection::new(
        DetectionType::Range,
        Style::new(),
        TextRange::new_unchecked(0, 4),
        0,
    );
    assert!(matches!(
        StyledText::new("abc", vec![detection], Style::new()),
        Err(Error::Range(_))
    ));
}

#[test]
fn detection_at_prefers_the_topmost() {
    let text = "<b>one <i>two</i></b>"
        .style_tags(&tag_styles())
        .style_range(5..6, &color(Color::BLUE))
        .unwrap();

    let tag_name = |d: &Detection| match &d.kind {
        DetectionType::Tag(tag) => tag.name().to_owned(),
        other => format!("{other:?}"),
    };
    assert_eq!(text.detection_at(0).map(tag_name).as_deref(), Some("b"));
    assert_eq!(text.detection_at(4).map(tag_name).as_deref(), Some("i"));
    assert_eq!(
        text.detection_at(5).map(|d| d.kind.clone()),
        Some(DetectionType::Range)
    );
    assert!(text.detection_at(7).is_none());

    let all: Vec<_> = text.detections_at(5).map(|d| d.level).collect();
    assert_eq!(all, [0, 1, Detection::MAX_LEVEL]);
}

#[test]
fn unbound_tags_are_hit_testable() {
    let text = "a <span id=\"x\">b</span> c".style_tags(&tag_styles());
    assert_eq!(text.as_str(), "a b c");
    let hit = text.detection_at(2).unwrap();
    assert!(hit.style.is_empty());
    match &hit.kind {
        DetectionType::Tag(tag) => assert_eq!(tag.attribute("id"), Some("x")),
        other => panic!("unexpected detection {other:?}"),
    }
    // An empty style doesn't split runs.
    assert_eq!(text.resolve(&StateKey::Normal).len(), 1);
}

#[test]
fn text_without_tags_round_trips() {
    let input = "no markup, just 5 > 3 & done";
    let text = input.style_tags(&tag_styles());
    assert_eq!(text.as_str(), input);
    assert!(text.detections().is_empty());
}

#[test]
fn tag_styles_match_without_case_and_first_wins() {
    let styles = TagStyles::new()
        .with_style(Style::named_new("B").foreground_color(Color::RED, StateKey::Normal))
        .with_style(Style::named_new("b").foreground_color(Color::BLUE, StateKey::Normal))
        .with_style(Style::new().foreground_color(Color::GRAY, StateKey::Normal));
    let text = "<b>x</b>".style_tags(&styles);
    assert_eq!(
        foreground(&text.resolve(&StateKey::Normal)[0].attributes),
        Some(Color::RED)
    );
}

#[test]
fn tuner_sees_each_tag() {
    let styles = TagStyles::from_styles([Style::named_new("a").underline(true, StateKey::Normal)])
        .with_tuner(|style, tag| match tag.attribute("href") {
            Some(href) => style.clone().link(href, StateKey::Normal),
            None => style.clone(),
        });
    let text = r#"<a href="https://a.test">one</a> <a>two</a>"#.style_tags(&styles);
    let resolved = text.resolve(&StateKey::Normal);
    assert_eq!(
        resolved[0].attributes.get(&AttributeKey::Link),
        Some(&AttributeValue::from("https://a.test"))
    );
    let last = resolved.last().unwrap();
    assert_eq!(last.range.as_range(), 4..7);
    assert!(!last.attributes.contains_key(&AttributeKey::Link));
    assert_eq!(
        text.detections()[0].url().map(|url| url.to_string()),
        Some("https://a.test/".into())
    );
}

#[test]
fn byte_ranges_for_renderers() {
    let text = "<b>日本</b>語".style_tags(&tag_styles());
    let range = text.detections()[0].range;
    assert_eq!(range.as_range(), 0..2);
    assert_eq!(text.byte_range(range), Some(0..6));
    assert_eq!(text.text_for(range), Some("日本"));
    assert_eq!(text.text_for(TextRange::new_unchecked(2, 9)), None);
}

#[test]
fn styled_text_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StyledText>();
    assert_send_sync::<TagStyles>();
}
