// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state visual attribute vocabulary.
//!
//! This module defines:
//! - A closed set of attribute keys plus an escape hatch for custom ones ([`AttributeKey`])
//! - The values they carry ([`AttributeValue`], [`Color`], [`Font`])
//! - Interaction states ([`StateKey`]) and the per-state [`Style`] built from them
//!
//! It is intentionally independent of any renderer. Turning an [`AttributeMap`] into a
//! platform's styled-string representation is the renderer's job.

mod attributes;
mod declarations;
mod state;
mod values;

pub use attributes::{AttributeKey, AttributeMap};
pub use declarations::Style;
pub use state::StateKey;
pub use values::{AttributeValue, Color, Font};
