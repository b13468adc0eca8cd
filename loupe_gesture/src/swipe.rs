// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracking: horizontal travel between touch start and touch end.
//!
//! The tracker only measures; whether the travel is long enough to navigate
//! (and whether navigation is allowed at the current zoom) is decided by the
//! caller.

use kurbo::Point;

/// Start point of a single-finger swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    /// Records where the finger went down.
    pub fn begin(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Ends the swipe at `position`, returning horizontal travel.
    ///
    /// Positive values mean the finger moved right. Returns `None` if no
    /// swipe was started.
    pub fn finish(&mut self, position: Point) -> Option<f64> {
        self.start.take().map(|start| position.x - start.x)
    }

    /// Drops the swipe without measuring it.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Returns `true` while a swipe is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
