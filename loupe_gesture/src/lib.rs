// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: short-lived state for pointer and touch interactions.
//!
//! Each module tracks exactly the reference values one interaction needs to
//! turn raw positions into deltas. None of them mutates a transform; the
//! `loupe_view` engine owns zoom and pan and consults these sessions.
//!
//! - [`drag`]: anchor a pointer against the current pan offset.
//! - [`pinch`]: reference distance, scale and center of a two-finger pinch.
//! - [`tap`]: recognize a double tap from tap times and positions.
//! - [`swipe`]: measure horizontal travel of a single-finger swipe.
//! - [`touches`]: the set of fingers currently down, in arrival order.
//!
//! Sessions are tolerant of out-of-order input: updating a session that was
//! never started yields `None` instead of an error, because platforms do not
//! guarantee event ordering across pointer and touch streams.
//!
//! ## Drag example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::drag::DragSession;
//!
//! let mut drag = DragSession::default();
//! // Content is already panned by (20, 0) when the pointer goes down.
//! drag.start(Point::new(100.0, 100.0), Vec2::new(20.0, 0.0));
//!
//! let offset = drag.offset_at(Point::new(130.0, 90.0)).unwrap();
//! assert_eq!(offset, Vec2::new(50.0, -10.0));
//! ```
//!
//! ## Double tap example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::tap::{TapConfig, TapKind, TapRecognizer};
//!
//! let mut taps = TapRecognizer::new(TapConfig::default());
//! assert_eq!(taps.on_tap(Point::new(10.0, 10.0), 1_000), TapKind::Single);
//! assert_eq!(taps.on_tap(Point::new(12.0, 11.0), 1_180), TapKind::Double);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

pub mod drag;
pub mod pinch;
pub mod swipe;
pub mod tap;
pub mod touches;
