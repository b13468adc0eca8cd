// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported when a navigation session cannot be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The start index is outside `[0, len)`, or the item list is empty.
    #[error("start index {index} is out of range for {len} item(s)")]
    InvalidIndex {
        /// Requested start index.
        index: usize,
        /// Number of items offered; `0` for an empty list.
        len: usize,
    },
}
