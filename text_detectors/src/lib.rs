// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Detectors scans plain text and reports what it finds as character ranges.
//!
//! - [`detect_regex`] and [`detect_matches`] report the matches of a regular expression,
//!   configured with [`RegexOptions`]. A pattern that fails to compile is a [`PatternError`],
//!   never an empty result.
//! - [`detect_checking`] finds links, phone numbers and dates, selected with [`CheckingTypes`].
//!
//! Ranges are [`TextRange`](attributed_text::TextRange)s of Unicode scalar values, so they
//! can be applied directly to an [`AttributedText`](attributed_text::AttributedText) built
//! from the same string.
//!
//! ```
//! use text_detectors::{CheckingTypes, RegexOptions, detect_checking, detect_regex};
//!
//! let text = "#rust is at https://www.rust-lang.org";
//! let tags = detect_regex(text, r"#\w+", RegexOptions::new()).unwrap();
//! assert_eq!(tags[0].as_range(), 0..5);
//!
//! let links = detect_checking(text, CheckingTypes::LINK);
//! assert_eq!(links[0].text, "https://www.rust-lang.org");
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

mod checking;
mod pattern;

pub use crate::checking::{CheckingKind, CheckingMatch, CheckingTypes, detect_checking};
pub use crate::pattern::{PatternError, RegexOptions, compile, detect_matches, detect_regex};

pub use regex::Regex;
pub use url::Url;
