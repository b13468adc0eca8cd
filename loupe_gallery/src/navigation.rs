// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::NavigationError;

/// Indices of the items directly before and after the active one, in that
/// order, omitting any that do not exist.
pub type AdjacentIndices = SmallVec<[usize; 2]>;

/// Ordered item list with a clamped active index.
///
/// A `NavigationState` only exists while a viewer is open: [`open`] refuses
/// an empty list, so `active_index() < item_count()` always holds. Closing a
/// viewer drops the state.
///
/// Moves never wrap. [`next`], [`prev`] and [`jump_to`] return `true` only
/// when the active index actually changed; callers reset their transform and
/// swap displayed content in that case.
///
/// [`open`]: NavigationState::open
/// [`next`]: NavigationState::next
/// [`prev`]: NavigationState::prev
/// [`jump_to`]: NavigationState::jump_to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState<T> {
    items: Vec<T>,
    active: usize,
}

impl<T> NavigationState<T> {
    /// Opens navigation over `items` starting at `start_index`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] if `items` is empty or
    /// `start_index >= items.len()`.
    pub fn open(items: Vec<T>, start_index: usize) -> Result<Self, NavigationError> {
        if start_index >= items.len() {
            return Err(NavigationError::InvalidIndex {
                index: start_index,
                len: items.len(),
            });
        }
        Ok(Self {
            items,
            active: start_index,
        })
    }

    /// Returns all items in navigation order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of navigable items; always at least one.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the item currently displayed.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The item currently displayed.
    #[must_use]
    pub fn active_item(&self) -> &T {
        &self.items[self.active]
    }

    /// Returns `true` at the first item.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    /// Returns `true` at the last item.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.active + 1 == self.items.len()
    }

    /// Advances to the next item. No-op at the last item.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.active += 1;
        true
    }

    /// Steps back to the previous item. No-op at the first item.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.active -= 1;
        true
    }

    /// Moves to `index`, clamped to the last item.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let index = index.min(self.items.len() - 1);
        if index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Indices worth prefetching around the active item.
    #[must_use]
    pub fn adjacent_indices(&self) -> AdjacentIndices {
        let mut out = AdjacentIndices::new();
        if !self.is_first() {
            out.push(self.active - 1);
        }
        if !self.is_last() {
            out.push(self.active + 1);
        }
        out
    }

    /// One-based position of the active item, for a `3 / 10` counter.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            current: self.active + 1,
            total: self.items.len(),
        }
    }
}

/// One-based position within a navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// One-based index of the active item.
    pub current: usize,
    /// Total number of items.
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}
