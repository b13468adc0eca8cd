// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: the zoom/pan transform engine of a full-screen image viewer.
//!
//! This crate provides a small, headless model of one displayed item's
//! transform. It focuses on:
//! - Zoom and pan state ([`TransformState`]) with hard invariants: scale stays
//!   within `[MIN_SCALE, max_scale]`, and content at rest is never panned.
//! - Interpreting drag, pinch, wheel, double-tap and key zoom input through
//!   [`TransformEngine`], keeping the gesture's focal point pinned.
//! - Coalescing state changes into at most one render per display frame
//!   ([`frame::FrameCoalescer`]).
//!
//! It does **not** render, schedule frames, or decide which item is shown.
//! Callers are expected to:
//! - Describe container and content geometry with a [`Layout`].
//! - Route pointer/touch/wheel input into the engine.
//! - Forward [`NavRequest`]s to their navigation state and call
//!   [`TransformEngine::reset`] when the displayed item changes.
//! - Apply each coalesced [`RenderTransform`] to the display layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_view::{Layout, TransformEngine, ZoomPolicy};
//!
//! // 800x600 container showing a 600x400 image, centered.
//! let layout = Layout::centered(Size::new(800.0, 600.0), Size::new(600.0, 400.0));
//! let mut engine = TransformEngine::new(ZoomPolicy::default(), layout);
//!
//! // Wheel towards the screen over (100, 100): zoom in one notch.
//! let p = Point::new(100.0, 100.0);
//! let before = engine.screen_to_content(p);
//! engine.wheel(-1.0, p);
//!
//! // The same content point is still under the pointer.
//! let after = engine.screen_to_content(p);
//! assert!((after - before).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation.
//! - Pan is not clamped to the content bounds: a zoomed image can be dragged
//!   freely, and returning to scale 1 recenters it.
//! - Zoom limits and step sizes are data ([`ZoomPolicy`]), defaulting to
//!   [`MAX_SCALE`], [`WHEEL_STEP`], [`KEY_STEP`] and [`DOUBLE_TAP_SCALE`].
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
pub mod frame;
mod layout;
mod policy;
mod state;

pub use engine::{NavRequest, TransformDebugInfo, TransformEngine};
pub use layout::Layout;
pub use policy::{DOUBLE_TAP_SCALE, KEY_STEP, MAX_SCALE, MIN_SCALE, WHEEL_STEP, ZoomPolicy};
pub use state::{RenderTransform, TransformState};
