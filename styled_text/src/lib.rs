// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text built from tag markup and pattern detectors.
//!
//! - [`style`] defines per-state visual attributes and the mergeable [`Style`](style::Style).
//! - [`attributed_text`] provides character ranges and span segmentation.
//! - [`text_markup`] strips tags; [`text_detectors`] finds regex matches, links, phone numbers
//!   and dates.
//! - `styled_text` combines them:
//!   - [`StyledText`]: stripped text, a base style and a list of [`Detection`]s
//!   - [`StyleMarkupExt`]: entry points from `&str` (`styled`, `style_tags`, `style_semantic`)
//!   - resolution of a [`StyledText`] into [`ResolvedRun`]s for one [`StateKey`](style::StateKey)
//!   - hit testing with [`StyledText::detection_at`]
//!
//! ## Scope
//!
//! This crate produces data for a renderer; it does not draw, lay out text or deliver input
//! events. A renderer turns each [`ResolvedRun`] into its own styled-string representation,
//! and a host control translates pointer positions into character indices before calling
//! [`StyledText::detection_at`].
//!
//! ## Indices
//!
//! All ranges are **character** (Unicode scalar value) indices into the stripped text.
//! [`StyledText::byte_range`] converts for renderers that index by UTF-8 byte.
//!
//! ## Overlaps
//!
//! Detections are applied in level order: tags by nesting depth, outer first, and explicitly
//! added detections ([`Detection::MAX_LEVEL`]) last. Equal levels apply in insertion order.
//! Later detections win on shared attribute keys.
//!
//! ## Example: Styled tags
//!
//! ```
//! use styled_text::style::{AttributeKey, AttributeValue, Font, StateKey, Style};
//! use styled_text::{StyleMarkupExt, TagStyles};
//!
//! let bold = Style::named_new("b").font(Font::bold_system(14.0), StateKey::Normal);
//! let text = "hi <b>there</b>!".style_tags(&TagStyles::from_styles([bold]));
//!
//! let runs = text.resolve(&StateKey::Normal);
//! let ranges: Vec<_> = runs.iter().map(|run| run.range.as_range()).collect();
//! assert_eq!(ranges, [0..3, 3..8, 8..9]);
//! assert_eq!(
//!     runs[1].attributes.get(&AttributeKey::Font),
//!     Some(&AttributeValue::Font(Font::bold_system(14.0)))
//! );
//! ```
//!
//! ## Example: Hit testing
//!
//! ```
//! use styled_text::style::{Color, StateKey, Style};
//! use styled_text::{DetectionType, SemanticStyles, StyleMarkupExt};
//!
//! let link = Style::new().foreground_color(Color::BLUE, StateKey::Normal);
//! let text = r#"#<a href="/q/rust">rust</a># see https://www.rust-lang.org"#
//!     .style_semantic(&SemanticStyles::uniform(link));
//!
//! let hit = text.detection_at(2).unwrap();
//! assert!(matches!(&hit.kind, DetectionType::Hashtag { text, .. } if text == "rust"));
//! assert!(matches!(text.detection_at(20).unwrap().kind, DetectionType::Link(_)));
//! assert!(text.detection_at(8).is_none());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod style;

mod detection;
mod error;
mod markup;
mod resolve;
mod runs;
mod semantic;
mod text;
mod traits;

#[cfg(test)]
mod tests;

pub use detection::{Detection, DetectionType};
pub use error::Error;
pub use markup::{StyleTuner, TagStyles};
pub use runs::{CoalescedRuns, ResolvedRun};
pub use semantic::SemanticStyles;
pub use text::StyledText;
pub use traits::StyleMarkupExt;

pub use attributed_text::TextRange;
pub use text_detectors::{CheckingKind, CheckingTypes, Regex, RegexOptions};
pub use text_markup::{Tag, TagPosition, TagTransformer};
pub use url::Url;
