// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-aligned render coalescing.
//!
//! Gesture input can arrive faster than the display refreshes. A
//! [`FrameCoalescer`] sits between the transform engine and the renderer and
//! guarantees:
//!
//! - at most one frame callback is outstanding ([`FrameCoalescer::submit`]
//!   returns `true` only when the caller must schedule one);
//! - submissions within a frame overwrite each other (last write wins);
//! - a frame whose pending state equals the last applied state renders
//!   nothing.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_view::frame::FrameCoalescer;
//! use loupe_view::{Layout, TransformEngine, ZoomPolicy};
//!
//! let layout = Layout::centered(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
//! let mut engine = TransformEngine::new(ZoomPolicy::default(), layout);
//! let mut frames = FrameCoalescer::new();
//!
//! engine.zoom_in();
//! assert!(frames.submit(engine.state())); // schedule a frame callback
//! engine.begin_drag(Point::new(10.0, 10.0));
//! engine.continue_drag(Point::new(20.0, 10.0));
//! assert!(!frames.submit(engine.state())); // already scheduled
//!
//! // The frame callback fires: only the latest state is rendered.
//! let rendered = frames.on_frame().unwrap();
//! assert_eq!(rendered, engine.state());
//! assert!(frames.on_frame().is_none());
//! ```

use crate::state::TransformState;

/// Single-flight, last-write-wins render scheduler state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: Option<TransformState>,
    scheduled: bool,
    last_applied: Option<TransformState>,
}

impl FrameCoalescer {
    /// Creates a coalescer with nothing pending and nothing applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `state` for the next frame.
    ///
    /// Returns `true` when no frame callback is outstanding, meaning the
    /// caller must schedule exactly one now.
    pub fn submit(&mut self, state: TransformState) -> bool {
        self.pending = Some(state);
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Handles the frame callback.
    ///
    /// Returns the state to render, or `None` when nothing is pending or the
    /// pending state matches what was last applied.
    pub fn on_frame(&mut self) -> Option<TransformState> {
        self.scheduled = false;
        let pending = self.pending.take()?;
        if self.last_applied == Some(pending) {
            return None;
        }
        self.last_applied = Some(pending);
        Some(pending)
    }

    /// Drops any pending state.
    ///
    /// Returns `true` if a frame callback was outstanding; the caller should
    /// cancel it with its scheduler.
    pub fn cancel(&mut self) -> bool {
        self.pending = None;
        core::mem::take(&mut self.scheduled)
    }

    /// Forgets the last applied state so the next frame renders even if it
    /// is unchanged, for example after the display layer swapped content.
    pub fn forget_applied(&mut self) {
        self.last_applied = None;
    }

    /// Returns `true` while a frame callback is outstanding.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// State waiting for the next frame, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TransformState> {
        self.pending
    }

    /// Last state handed to the renderer, if any.
    #[must_use]
    pub fn last_applied(&self) -> Option<TransformState> {
        self.last_applied
    }
}
