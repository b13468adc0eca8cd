// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: keep the grabbed content point under the pointer.
//!
//! ## Usage
//!
//! 1) On press, call [`DragSession::start`] with the pointer position and the
//!    pan offset at that moment. The session stores the anchor
//!    `pointer - offset`.
//! 2) On each move, [`DragSession::offset_at`] returns the new pan offset
//!    `pointer - anchor`. Setting the offset (rather than accumulating deltas)
//!    means dropped move events never cause drift.
//! 3) On release, call [`DragSession::end`].

use kurbo::{Point, Vec2};

/// Anchor of an in-progress pan drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    anchor: Option<Vec2>,
}

impl DragSession {
    /// Starts a drag at `pointer` while the content is panned by `offset`.
    ///
    /// Starting again while active re-anchors the session.
    pub fn start(&mut self, pointer: Point, offset: Vec2) {
        self.anchor = Some(pointer.to_vec2() - offset);
    }

    /// Pan offset that keeps the grabbed point under `pointer`.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn offset_at(&self, pointer: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| pointer.to_vec2() - anchor)
    }

    /// Ends the drag. Safe to call when no drag is active.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_not_dragging() {
        let drag = DragSession::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn anchor_accounts_for_existing_offset() {
        let mut drag = DragSession::default();
        drag.start(Point::new(10.0, 20.0), Vec2::new(4.0, -6.0));
        // Anchor is (6, 26): moving the pointer 6 right adds 6 to the offset.
        assert_eq!(drag.offset_at(Point::new(16.0, 20.0)), Some(Vec2::new(10.0, -6.0)));
    }

    #[test]
    fn offset_follows_pointer_without_drift() {
        let mut drag = DragSession::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);

        // Intermediate moves do not influence the final offset.
        let _ = drag.offset_at(Point::new(3.0, 1.0));
        let _ = drag.offset_at(Point::new(7.0, 9.0));
        assert_eq!(drag.offset_at(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
    }

    #[test]
    fn returning_to_start_restores_original_offset() {
        let mut drag = DragSession::default();
        let offset = Vec2::new(-40.0, 12.5);
        let start = Point::new(200.0, 150.0);
        drag.start(start, offset);

        assert_eq!(drag.offset_at(start), Some(offset));
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = DragSession::default();
        drag.end();
        drag.start(Point::new(1.0, 1.0), Vec2::ZERO);
        drag.end();
        drag.end();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn restart_reanchors() {
        let mut drag = DragSession::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        drag.start(Point::new(50.0, 60.0), Vec2::new(10.0, 10.0));

        assert_eq!(drag.offset_at(Point::new(55.0, 65.0)), Some(Vec2::new(15.0, 15.0)));
    }
}
