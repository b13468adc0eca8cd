// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::ViewableItem;

/// The full, unfiltered item list of one gallery category.
///
/// A grid shows [`Catalog::filter`] results; clicking a grid cell opens the
/// viewer on that filtered list at the clicked index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ViewableItem>,
}

impl Catalog {
    /// Wraps a loaded item list.
    #[must_use]
    pub fn new(items: Vec<ViewableItem>) -> Self {
        Self { items }
    }

    /// Returns all items in load order.
    #[must_use]
    pub fn items(&self) -> &[ViewableItem] {
        &self.items
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items whose title or caption contains `query`,
    /// ignoring case, in catalog order.
    ///
    /// A query that is empty after trimming matches everything.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<ViewableItem> {
        let query = query.trim();
        if query.is_empty() {
            return self.items.clone();
        }
        let lowercase = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&lowercase))
            .cloned()
            .collect()
    }
}

impl FromIterator<ViewableItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = ViewableItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ViewableItem::new("a.jpg", "Harbor at Dawn", "Boats in fog"),
            ViewableItem::new("b.jpg", "Dunes", "Wind ripples"),
            ViewableItem::new("c.jpg", "Old Town", "HARBOR lights"),
        ])
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let c = catalog();
        assert_eq!(c.filter(""), c.items());
        assert_eq!(c.filter("   "), c.items());
    }

    #[test]
    fn query_matches_title_or_caption_ignoring_case() {
        let hits = catalog().filter("harbor");
        let titles: Vec<_> = hits.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Harbor at Dawn", "Old Town"]);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(catalog().filter("  dunes ").len(), 1);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(catalog().filter("portrait").is_empty());
    }
}
