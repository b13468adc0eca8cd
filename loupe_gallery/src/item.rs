// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// One image the viewer can display.
///
/// Items are immutable once loaded. The surrounding gallery owns the
/// canonical list; navigation refers to items by index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewableItem {
    /// Where the display layer loads the image from (a URL or path).
    #[cfg_attr(feature = "serde", serde(alias = "src"))]
    pub source_ref: String,
    /// Short title, also used as the image's alternative text.
    #[cfg_attr(feature = "serde", serde(alias = "alt"))]
    pub title: String,
    /// Longer caption shown under the image.
    #[cfg_attr(feature = "serde", serde(default))]
    pub caption: String,
}

impl ViewableItem {
    /// Creates an item from its three text fields.
    #[must_use]
    pub fn new(
        source_ref: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            source_ref: source_ref.into(),
            title: title.into(),
            caption: caption.into(),
        }
    }

    /// Returns `true` if the title or caption contains `lowercase_query`.
    ///
    /// The query must already be lowercased; comparison lowercases the
    /// item's own fields.
    #[must_use]
    pub fn matches_lowercase(&self, lowercase_query: &str) -> bool {
        self.title.to_lowercase().contains(lowercase_query)
            || self.caption.to_lowercase().contains(lowercase_query)
    }
}
