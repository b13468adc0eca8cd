// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for the fingers currently touching the surface.
//!
//! Touch platforms report start/move/end per finger, identified by an id that
//! is stable for the finger's lifetime. [`ActiveTouches`] keeps the latest
//! position of each finger in arrival order, so the first finger down is the
//! primary one and the first two define a pinch.

use kurbo::Point;
use smallvec::SmallVec;

/// Platform identifier of one finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TouchId(pub u64);

/// Fingers currently down, in the order they landed.
#[derive(Clone, Debug, Default)]
pub struct ActiveTouches {
    touches: SmallVec<[(TouchId, Point); 4]>,
}

impl ActiveTouches {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finger landing at `position`.
    ///
    /// A repeated start for a known id updates its position in place.
    pub fn start(&mut self, id: TouchId, position: Point) {
        match self.slot_mut(id) {
            Some(slot) => *slot = position,
            None => self.touches.push((id, position)),
        }
    }

    /// Updates a finger's position. Returns `false` for unknown ids.
    pub fn move_to(&mut self, id: TouchId, position: Point) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    /// Removes a finger, returning its last known position.
    pub fn end(&mut self, id: TouchId) -> Option<Point> {
        let index = self.touches.iter().position(|(t, _)| *t == id)?;
        Some(self.touches.remove(index).1)
    }

    /// Number of fingers down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Returns `true` if no finger is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// The earliest finger still down.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().map(|(_, p)| *p)
    }

    /// The two earliest fingers still down.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.touches.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Forgets every finger.
    pub fn clear(&mut self) {
        self.touches.clear();
    }

    fn slot_mut(&mut self, id: TouchId) -> Option<&mut Point> {
        self.touches
            .iter_mut()
            .find(|(t, _)| *t == id)
            .map(|(_, p)| p)
    }
}
