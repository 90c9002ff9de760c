// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// Text that can be wrapped by an [`AttributedText`](crate::AttributedText).
///
/// Spans count characters, so storage has to map character indices to UTF-8 offsets.
pub trait TextStorage {
    /// Length in Unicode scalar values.
    fn char_len(&self) -> usize;

    /// Byte offset where character `char_index` starts.
    ///
    /// `char_len()` maps to the byte length; anything past it is `None`.
    fn byte_offset(&self, char_index: usize) -> Option<usize>;
}

impl TextStorage for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        match self.char_indices().nth(char_index) {
            Some((offset, _)) => Some(offset),
            None => (self.chars().count() == char_index).then_some(self.len()),
        }
    }
}

macro_rules! forward_to_str {
    ($($ty:ty),*) => {$(
        impl TextStorage for $ty {
            fn char_len(&self) -> usize {
                <str as TextStorage>::char_len(self)
            }

            fn byte_offset(&self, char_index: usize) -> Option<usize> {
                <str as TextStorage>::byte_offset(self, char_index)
            }
        }
    )*};
}

forward_to_str!(String, &str, Arc<str>);
