// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use loupe_gesture::drag::DragSession;
use loupe_gesture::pinch::{PinchSession, midpoint};

use crate::layout::Layout;
use crate::policy::{MIN_SCALE, ZoomPolicy};
use crate::state::{RenderTransform, TransformState};

/// Navigation the engine asks its owner to perform.
///
/// The engine never changes which item is shown; it only reports that a
/// gesture or key asked for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    /// Show the next item.
    Next,
    /// Show the previous item.
    Prev,
    /// Close the viewer.
    Close,
}

/// Zoom/pan state machine for one displayed item.
///
/// `TransformEngine` owns a [`TransformState`] and the gesture sessions that
/// feed it. Every zooming operation (pinch, wheel, double tap, keys) keeps a
/// focal screen point pinned: the content point under it before the change is
/// under it after the change. With `c` the content point under focal point
/// `p`:
///
/// ```text
/// c       = (p - offset0 - centering(s0)) / s0
/// offset1 = p - centering(s1) - c * s1
/// ```
///
/// where `centering` comes from the [`Layout`]. When a change lands on
/// [`MIN_SCALE`] the offset snaps to zero instead, so content at rest is
/// always centered.
///
/// Inputs are clamped, never rejected. Gesture calls without a matching
/// `begin_*` are no-ops. Mutating methods return `true` when the state
/// changed, which is the caller's cue to schedule a render.
#[derive(Clone, Debug)]
pub struct TransformEngine {
    policy: ZoomPolicy,
    layout: Layout,
    state: TransformState,
    drag: DragSession,
    pinch: Option<PinchSession>,
    content_to_screen: Affine,
    screen_to_content: Affine,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(ZoomPolicy::default(), Layout::default())
    }
}

impl TransformEngine {
    /// Creates an engine at rest.
    #[must_use]
    pub fn new(policy: ZoomPolicy, layout: Layout) -> Self {
        let mut engine = Self {
            policy: policy.normalized(),
            layout,
            state: TransformState::REST,
            drag: DragSession::default(),
            pinch: None,
            content_to_screen: Affine::IDENTITY,
            screen_to_content: Affine::IDENTITY,
        };
        engine.rebuild_transforms();
        engine
    }

    /// Current zoom policy.
    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        self.policy
    }

    /// Replaces the zoom policy and re-clamps the current scale into it,
    /// pinning the layout origin.
    pub fn set_policy(&mut self, policy: ZoomPolicy) -> bool {
        self.policy = policy.normalized();
        self.zoom_about(self.layout.origin(), self.state.scale())
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Sets the content/container geometry, for example after a resize.
    ///
    /// Scale and offset are kept as they are.
    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.rebuild_transforms();
    }

    /// Current transform state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.state.offset()
    }

    /// Returns `true` above [`MIN_SCALE`].
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.is_zoomed()
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Value for the display layer.
    #[must_use]
    pub fn render_transform(&self) -> RenderTransform {
        self.state.render_transform()
    }

    /// Maps content space into screen space under the current state.
    #[must_use]
    pub fn content_to_screen_transform(&self) -> Affine {
        self.content_to_screen
    }

    /// Converts a screen point into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        self.screen_to_content * pt
    }

    /// Converts a content point into screen space.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        self.content_to_screen * pt
    }

    /// Starts a pan drag at `pointer`.
    ///
    /// Only starts while zoomed; returns whether a session is now active.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.state.is_zoomed() {
            self.drag.end();
            return false;
        }
        self.drag.start(pointer, self.state.offset());
        true
    }

    /// Moves the drag so the grabbed content point follows `pointer`.
    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        if !self.state.is_zoomed() {
            return false;
        }
        match self.drag.offset_at(pointer) {
            Some(offset) => self.apply(self.state.scale(), offset),
            None => false,
        }
    }

    /// Ends the drag. Idempotent.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Starts a pinch with fingers at `a` and `b`.
    ///
    /// Any drag in progress ends. Returns `false` (and starts nothing) when
    /// the fingers coincide.
    pub fn begin_pinch(&mut self, a: Point, b: Point) -> bool {
        self.drag.end();
        let pinned = self.screen_to_content(midpoint(a, b));
        self.pinch = PinchSession::begin(a, b, self.state.scale(), pinned);
        self.pinch.is_some()
    }

    /// Zooms by the finger spread relative to pinch start, keeping the
    /// content point first under the pinch center under the current center.
    pub fn continue_pinch(&mut self, a: Point, b: Point) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        // A malformed sample leaves the pinch where it was.
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let scale = self.policy.clamp_scale(pinch.target_scale(a, b));
        let offset = self.pinned_offset(scale, midpoint(a, b), pinch.pinned());
        self.apply(scale, offset)
    }

    /// Ends the pinch. Idempotent.
    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Toggles between rest and the double-tap scale.
    ///
    /// Zooming in pins `pointer`; zooming out resets.
    pub fn double_tap(&mut self, pointer: Point) -> bool {
        if self.state.is_zoomed() {
            self.reset()
        } else {
            self.zoom_about(pointer, self.policy.double_tap_scale)
        }
    }

    /// Steps the zoom by one wheel notch about `pointer`.
    ///
    /// Negative `delta` (wheel away from the user) zooms in, positive zooms
    /// out, zero does nothing.
    pub fn wheel(&mut self, delta: f64, pointer: Point) -> bool {
        if delta == 0.0 || delta.is_nan() {
            return false;
        }
        let step = if delta < 0.0 {
            self.policy.wheel_step
        } else {
            -self.policy.wheel_step
        };
        self.zoom_about(pointer, self.state.scale() + step)
    }

    /// Zooms in by one key step about the layout origin.
    pub fn zoom_in(&mut self) -> bool {
        let target = self.state.scale() + self.policy.key_step;
        self.zoom_about(self.layout.origin(), target)
    }

    /// Zooms out by one key step about the layout origin.
    pub fn zoom_out(&mut self) -> bool {
        let target = self.state.scale() - self.policy.key_step;
        self.zoom_about(self.layout.origin(), target)
    }

    /// Zooms to `scale` (clamped), pinning `focal`.
    pub fn zoom_to(&mut self, scale: f64, focal: Point) -> bool {
        self.zoom_about(focal, scale)
    }

    /// Interprets horizontal swipe travel while not zoomed.
    ///
    /// Travel beyond `threshold` to the right asks for the previous item,
    /// to the left for the next one. Zoomed content never swipes.
    #[must_use]
    pub fn swipe(&self, delta_x: f64, threshold: f64) -> Option<NavRequest> {
        if self.state.is_zoomed() {
            return None;
        }
        let threshold = threshold.abs();
        if delta_x > threshold {
            Some(NavRequest::Prev)
        } else if delta_x < -threshold {
            Some(NavRequest::Next)
        } else {
            None
        }
    }

    /// Returns to rest and drops any gesture session.
    pub fn reset(&mut self) -> bool {
        self.cancel_gestures();
        self.apply(MIN_SCALE, Vec2::ZERO)
    }

    /// Drops drag and pinch sessions without touching the transform.
    pub fn cancel_gestures(&mut self) {
        self.drag.end();
        self.pinch = None;
    }

    /// Snapshot of the engine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        TransformDebugInfo {
            state: self.state,
            layout: self.layout,
            policy: self.policy,
            dragging: self.drag.is_dragging(),
            pinching: self.pinch.is_some(),
        }
    }

    fn zoom_about(&mut self, focal: Point, scale: f64) -> bool {
        if scale.is_nan() || !focal.is_finite() {
            return false;
        }
        let scale = self.policy.clamp_scale(scale);
        if scale == self.state.scale() {
            return false;
        }
        let pinned = self.screen_to_content(focal);
        let offset = self.pinned_offset(scale, focal, pinned);
        self.apply(scale, offset)
    }

    /// Offset that puts content point `pinned` under screen point `focal` at
    /// `scale`.
    fn pinned_offset(&self, scale: f64, focal: Point, pinned: Point) -> Vec2 {
        focal.to_vec2() - self.layout.centering(scale) - pinned.to_vec2() * scale
    }

    fn apply(&mut self, scale: f64, offset: Vec2) -> bool {
        let scale = self.policy.clamp_scale(scale);
        let offset = if offset.is_finite() {
            offset
        } else {
            self.state.offset()
        };
        let next = TransformState::from_clamped(scale, offset);
        if next == self.state {
            return false;
        }
        self.state = next;
        if !next.is_zoomed() {
            self.drag.end();
        }
        self.rebuild_transforms();
        true
    }

    fn rebuild_transforms(&mut self) {
        let scale = self.state.scale();
        // Content → screen: scale, then move by centering term plus pan.
        let translation = self.layout.centering(scale) + self.state.offset();
        self.content_to_screen = Affine::translate(translation) * Affine::scale(scale);
        self.screen_to_content = self.content_to_screen.inverse();
    }
}

/// Debug snapshot of a [`TransformEngine`].
#[derive(Clone, Copy, Debug)]
pub struct TransformDebugInfo {
    /// Current transform state.
    pub state: TransformState,
    /// Current layout.
    pub layout: Layout,
    /// Active zoom policy.
    pub policy: ZoomPolicy,
    /// Whether a drag session is active.
    pub dragging: bool,
    /// Whether a pinch session is active.
    pub pinching: bool,
}
