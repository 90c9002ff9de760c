// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `styled_text`.
//!
//! - The `util` module contains shared styles and helpers for inspecting detections.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so the helpers can be shared.
//! - Tests are grouped by topic: `markup` for tag styling, `semantic` for hashtags, mentions
//!   and links, `detectors` for regex and data detection, `tweets` for whole status
//!   updates, and `properties` for generated input. Name tests with the topic first
//!   (`semantic_mention_…`).

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
