// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Point;
use loupe_gallery::{NavigationError, NavigationState, ViewableItem};
use loupe_gesture::swipe::SwipeTracker;
use loupe_gesture::tap::{TapKind, TapRecognizer};
use loupe_gesture::touches::{ActiveTouches, TouchId};
use loupe_view::frame::FrameCoalescer;
use loupe_view::{Layout, NavRequest, TransformEngine, TransformState};
use tracing::{debug, trace, warn};

use crate::config::ViewerConfig;
use crate::event::{ViewerEvent, ViewerKey};
use crate::host::ViewerHost;

bitflags! {
    /// What an operation changed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The transform state changed; a render is scheduled.
        const TRANSFORM = 1 << 0;
        /// The displayed item changed (or was first shown).
        const CONTENT = 1 << 1;
        /// The viewer closed.
        const CLOSED = 1 << 2;
    }
}

/// Errors returned by [`Viewer`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The viewer could not be opened on the given items.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// A full-screen viewer: navigation over an item list plus zoom/pan of the
/// active item.
///
/// The viewer is either closed or open on a non-empty item list. While open
/// it routes input to a [`TransformEngine`], coalesces every resulting state
/// change into at most one pending frame, and tells its [`ViewerHost`] what
/// to display. Changing the active item always resets the transform.
///
/// All methods run to completion and never block; the host drives rendering
/// by calling [`Viewer::on_animation_frame`] when a requested frame fires.
#[derive(Debug)]
pub struct Viewer<H> {
    host: H,
    config: ViewerConfig,
    nav: Option<NavigationState<ViewableItem>>,
    engine: TransformEngine,
    frames: FrameCoalescer,
    touches: ActiveTouches,
    swipe: SwipeTracker,
    taps: TapRecognizer,
}

impl<H: ViewerHost> Viewer<H> {
    /// Creates a closed viewer.
    pub fn new(config: ViewerConfig, host: H) -> Self {
        let config = config.normalized();
        Self {
            host,
            config,
            nav: None,
            engine: TransformEngine::new(config.zoom, Layout::default()),
            frames: FrameCoalescer::new(),
            touches: ActiveTouches::new(),
            swipe: SwipeTracker::default(),
            taps: TapRecognizer::new(config.double_tap),
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the viewer and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Active configuration.
    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    /// Replaces the configuration at runtime.
    ///
    /// A lower zoom limit zooms the current item out about the layout
    /// origin; a pending first tap is forgotten.
    pub fn set_config(&mut self, config: ViewerConfig) -> Changes {
        self.config = config.normalized();
        self.taps.set_config(self.config.double_tap);
        let changed = self.engine.set_policy(self.config.zoom);
        self.after_transform(changed)
    }

    /// Returns `true` while open.
    pub fn is_open(&self) -> bool {
        self.nav.is_some()
    }

    /// Navigation state while open.
    pub fn navigation(&self) -> Option<&NavigationState<ViewableItem>> {
        self.nav.as_ref()
    }

    /// Current transform state of the active item.
    pub fn transform(&self) -> TransformState {
        self.engine.state()
    }

    /// The transform engine, for coordinate queries.
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Sets container/content geometry directly.
    pub fn set_layout(&mut self, layout: Layout) {
        self.engine.set_layout(layout);
    }

    /// Opens the viewer on `items` at `start_index`.
    ///
    /// Reopening while open replaces the session. On error the viewer is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Navigation`] if `items` is empty or
    /// `start_index` is out of range.
    pub fn open(
        &mut self,
        items: Vec<ViewableItem>,
        start_index: usize,
    ) -> Result<Changes, ViewerError> {
        let nav = NavigationState::open(items, start_index)?;
        debug!(
            index = nav.active_index(),
            total = nav.item_count(),
            "viewer opened"
        );
        self.nav = Some(nav);
        Ok(self.enter_item())
    }

    /// Closes the viewer. Idempotent.
    ///
    /// Cancels any pending frame, drops gesture state and resets the
    /// transform so the next open starts at rest.
    pub fn close(&mut self) -> Changes {
        if self.nav.take().is_none() {
            return Changes::empty();
        }
        if self.frames.cancel() {
            self.host.cancel_frame();
        }
        self.clear_gestures();
        self.engine.reset();
        self.frames.forget_applied();
        debug!("viewer closed");
        self.host.closed();
        Changes::CLOSED
    }

    /// Shows the next item, if there is one.
    pub fn next(&mut self) -> Changes {
        self.navigate(NavigationState::next)
    }

    /// Shows the previous item, if there is one.
    pub fn prev(&mut self) -> Changes {
        self.navigate(NavigationState::prev)
    }

    /// Shows the item at `index`, clamped to the last item.
    pub fn jump_to(&mut self, index: usize) -> Changes {
        self.navigate(|nav| nav.jump_to(index))
    }

    /// Carries out a navigation request from a gesture or key.
    pub fn request(&mut self, request: NavRequest) -> Changes {
        match request {
            NavRequest::Next => self.next(),
            NavRequest::Prev => self.prev(),
            NavRequest::Close => self.close(),
        }
    }

    /// Routes one input event. Events other than resizes are ignored while
    /// closed.
    pub fn handle(&mut self, event: ViewerEvent) -> Changes {
        if let ViewerEvent::Resize { container, natural } = event {
            self.engine.set_layout(Layout::contain(container, natural));
            return Changes::empty();
        }
        if !self.is_open() {
            trace!(?event, "ignoring input while closed");
            return Changes::empty();
        }
        match event {
            ViewerEvent::PointerDown { position } => {
                if !self.engine.begin_drag(position) {
                    trace!("pointer down at rest; no drag");
                }
                Changes::empty()
            }
            ViewerEvent::PointerMove { position } => {
                let changed = self.engine.continue_drag(position);
                self.after_transform(changed)
            }
            ViewerEvent::PointerUp => {
                self.engine.end_drag();
                Changes::empty()
            }
            ViewerEvent::TouchStart { id, position } => self.touch_start(id, position),
            ViewerEvent::TouchMove { id, position } => self.touch_move(id, position),
            ViewerEvent::TouchEnd { id, position } => self.touch_end(id, position),
            ViewerEvent::TouchCancel => {
                self.clear_gestures();
                Changes::empty()
            }
            ViewerEvent::Wheel { delta_y, position } => {
                let changed = self.engine.wheel(delta_y, position);
                self.after_transform(changed)
            }
            ViewerEvent::Tap { position, time_ms } => match self.taps.on_tap(position, time_ms) {
                TapKind::Double => {
                    let changed = self.engine.double_tap(position);
                    self.after_transform(changed)
                }
                TapKind::Single => Changes::empty(),
            },
            ViewerEvent::Key { key } => self.key(key),
            ViewerEvent::Resize { .. } => Changes::empty(),
        }
    }

    /// Frame callback: applies the latest pending transform, if it differs
    /// from the last one applied. Returns whether the host was asked to
    /// render.
    pub fn on_animation_frame(&mut self) -> bool {
        match self.frames.on_frame() {
            Some(state) => {
                self.host.apply_transform(state.render_transform());
                true
            }
            None => false,
        }
    }

    /// Records that loading the image at `index` failed.
    ///
    /// Navigation and transform state are unaffected.
    pub fn report_load_failure(&mut self, index: usize, reason: &str) {
        let source = self
            .nav
            .as_ref()
            .and_then(|nav| nav.items().get(index))
            .map(|item| item.source_ref.as_str())
            .unwrap_or("<unknown>");
        warn!(index, source, reason, "image failed to load");
    }

    fn key(&mut self, key: ViewerKey) -> Changes {
        match key {
            ViewerKey::ArrowLeft => self.request(NavRequest::Prev),
            ViewerKey::ArrowRight => self.request(NavRequest::Next),
            ViewerKey::Escape => self.request(NavRequest::Close),
            ViewerKey::ZoomIn => {
                let changed = self.engine.zoom_in();
                self.after_transform(changed)
            }
            ViewerKey::ZoomOut => {
                let changed = self.engine.zoom_out();
                self.after_transform(changed)
            }
            ViewerKey::ZoomReset => {
                let changed = self.engine.reset();
                self.after_transform(changed)
            }
        }
    }

    fn touch_start(&mut self, id: TouchId, position: Point) -> Changes {
        self.touches.start(id, position);
        match self.touches.len() {
            1 => {
                self.swipe.begin(position);
                self.engine.begin_drag(position);
            }
            2 => {
                // A second finger turns any swipe or drag into a pinch.
                self.swipe.cancel();
                if let Some((a, b)) = self.touches.pair() {
                    self.engine.begin_pinch(a, b);
                }
            }
            _ => {}
        }
        Changes::empty()
    }

    fn touch_move(&mut self, id: TouchId, position: Point) -> Changes {
        if !self.touches.move_to(id, position) {
            trace!(?id, "move for unknown touch");
            return Changes::empty();
        }
        if self.touches.len() >= 2 && !self.engine.is_pinching() {
            // Fingers that landed on top of each other start the pinch once
            // they have spread apart.
            if let Some((a, b)) = self.touches.pair() {
                self.engine.begin_pinch(a, b);
            }
        }
        let changed = if self.engine.is_pinching() {
            match self.touches.pair() {
                Some((a, b)) => self.engine.continue_pinch(a, b),
                None => false,
            }
        } else {
            match self.touches.primary() {
                Some(primary) if self.touches.len() == 1 => self.engine.continue_drag(primary),
                _ => false,
            }
        };
        self.after_transform(changed)
    }

    fn touch_end(&mut self, id: TouchId, position: Point) -> Changes {
        self.touches.move_to(id, position);
        if self.touches.end(id).is_none() {
            trace!(?id, "end for unknown touch");
            return Changes::empty();
        }
        match self.touches.len() {
            0 => {
                self.engine.end_drag();
                self.engine.end_pinch();
                let request = self
                    .swipe
                    .finish(position)
                    .and_then(|dx| self.engine.swipe(dx, self.config.swipe_threshold));
                match request {
                    Some(request) => {
                        debug!(?request, "swipe");
                        self.request(request)
                    }
                    None => Changes::empty(),
                }
            }
            1 => {
                // Pinch down to one finger: keep panning with the one left.
                self.engine.end_pinch();
                if let Some(primary) = self.touches.primary() {
                    self.engine.begin_drag(primary);
                }
                Changes::empty()
            }
            _ => {
                if let Some((a, b)) = self.touches.pair() {
                    self.engine.begin_pinch(a, b);
                }
                Changes::empty()
            }
        }
    }

    fn navigate(
        &mut self,
        step: impl FnOnce(&mut NavigationState<ViewableItem>) -> bool,
    ) -> Changes {
        let Some(nav) = self.nav.as_mut() else {
            trace!("navigation while closed");
            return Changes::empty();
        };
        if !step(nav) {
            return Changes::empty();
        }
        debug!(index = nav.active_index(), "navigated");
        self.enter_item()
    }

    /// Resets the transform for a newly active item, swaps content and
    /// schedules a render of the rest transform.
    fn enter_item(&mut self) -> Changes {
        self.clear_gestures();
        let reset = self.engine.reset();
        if let Some(nav) = &self.nav {
            self.host
                .show_item(nav.active_index(), nav.position(), nav.active_item());
            for index in nav.adjacent_indices() {
                self.host.prefetch(index, &nav.items()[index]);
            }
        }
        // New content must receive the rest transform even if the previous
        // item was already at rest.
        self.frames.forget_applied();
        self.schedule_render();
        if reset {
            Changes::CONTENT | Changes::TRANSFORM
        } else {
            Changes::CONTENT
        }
    }

    fn after_transform(&mut self, changed: bool) -> Changes {
        if !changed {
            return Changes::empty();
        }
        trace!(engine = ?self.engine.debug_info(), "transform changed");
        self.schedule_render();
        Changes::TRANSFORM
    }

    fn schedule_render(&mut self) {
        if self.frames.submit(self.engine.state()) {
            self.host.request_frame();
        }
    }

    fn clear_gestures(&mut self) {
        self.engine.cancel_gestures();
        self.touches.clear();
        self.swipe.cancel();
        self.taps.reset();
    }
}
