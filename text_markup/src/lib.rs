// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Markup turns a string with lightweight HTML-like tags into plain text plus a list
//! of tag occurrences located in that plain text.
//!
//! - [`tokenize`] is the entry point. It never fails: malformed markup degrades to literal text.
//! - [`Tag`] and [`TagInfo`] describe what was found; [`TagInfo::range`] is a character range
//!   in the stripped text and [`TagInfo::level`] is the nesting depth.
//! - [`TagTransformer`] rewrites selected tags into literal text, such as `<br>` into a newline
//!   ([`TagTransformer::LINE_BREAK`]).
//!
//! ## Example
//!
//! ```
//! use text_markup::{DEFAULT_TRANSFORMERS, tokenize};
//!
//! let out = tokenize(r#"#<a href="/q/rust">rust</a># is <b>fun</b>"#, DEFAULT_TRANSFORMERS);
//! assert_eq!(out.text, "#rust# is fun");
//!
//! let anchor = &out.tags[0];
//! assert!(anchor.tag.is("a"));
//! assert_eq!(anchor.tag.attribute("href"), Some("/q/rust"));
//! assert_eq!(anchor.range.as_range(), 1..5);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod entity;
mod tag;
mod tokenizer;
mod transform;

pub use crate::tag::{Tag, TagInfo};
pub use crate::tokenizer::{Tokenized, tokenize};
pub use crate::transform::{DEFAULT_TRANSFORMERS, Replacement, TagPosition, TagTransformer};
