// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection→attribute resolution for [`StyledText`].
//!
//! Resolution for one [`StateKey`] works in four steps:
//! - the base style's attributes cover the whole text
//! - detections are stable-sorted by level, so tags apply outer to inner and explicit
//!   detections apply last
//! - the text is split into segments where the set of covering detections is constant
//!   ([`AttributeSegmentsWorkspace`]), and each segment overlays its detections in order
//! - touching segments with equal attributes are merged ([`CoalescedRuns`])
//!
//! The result is a pure function of the aggregate and the state.


use attributed_text::{AttributeSegmentsWorkspace, AttributedText};

use crate::runs::{CoalescedRuns, ResolvedRun};
use crate::style::StateKey;
use crate::text::StyledText;

pub(crate) fn resolve_runs(styled: &StyledText, state: &StateKey) -> Vec<ResolvedRun> {
    let base = styled.base_style().attributes(state);

    let mut attributed = AttributedText::with_capacity(styled.as_str(), styled.detections().len());
    for detection in styled.application_order() {
        if detection.style.is_empty_for(state) {
            continue;
        }
        attributed.apply_attribute(detection.range, detection.style.attributes(state));
    }

    let mut workspace = AttributeSegmentsWorkspace::new();
    let mut segments = workspace.segments(&attributed);
    let mut runs = Vec::with_capacity(segments.len());
    while let Some(range) = segments.next() {
        let mut attributes = base.clone();
        for (_, overlay) in segments.active_spans().iter() {
            attributes.overlay(overlay);
        }
        runs.push(ResolvedRun { range, attributes });
    }

    let runs: Vec<_> = CoalescedRuns::new(runs.into_iter()).collect();
    log::trace!(
        "resolved {} run(s) for {:?} from {} span(s)",
        runs.len(),
        state,
        attributed.attributes_len()
    );
    runs
}
