// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

/// The interaction state a set of attributes applies to.
///
/// Every state except [`StateKey::Normal`] only stores what differs from normal; see
/// [`Style::attributes`](super::Style::attributes).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKey {
    /// At rest.
    #[default]
    Normal,
    /// While pressed or hovered.
    Highlighted,
    /// While the host control is disabled.
    Disabled,
    /// While selected.
    Selected,
    /// An application-defined state.
    Custom(Arc<str>),
}

impl StateKey {
    /// The states every renderer is expected to understand.
    pub const BUILT_IN: [Self; 4] = [
        Self::Normal,
        Self::Highlighted,
        Self::Disabled,
        Self::Selected,
    ];

    /// Creates an application-defined state.
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }

    /// Position in [`StateKey::BUILT_IN`], `None` for custom states.
    pub(crate) fn built_in_index(&self) -> Option<usize> {
        match self {
            Self::Normal => Some(0),
            Self::Highlighted => Some(1),
            Self::Disabled => Some(2),
            Self::Selected => Some(3),
            Self::Custom(_) => None,
        }
    }
}
