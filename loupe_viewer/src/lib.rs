// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewer: the full-screen viewer of a photo gallery.
//!
//! This crate wires the headless Loupe crates into one state machine:
//!
//! - [`loupe_gallery`] supplies the item list and clamped navigation.
//! - [`loupe_view`] turns gestures into a zoom/pan transform and coalesces
//!   renders to one per frame.
//! - [`loupe_gesture`] tracks touches, swipes and double taps.
//!
//! A [`Viewer`] is driven by named [`ViewerEvent`]s and talks to its
//! environment only through the [`ViewerHost`] trait: requesting and
//! cancelling animation frames, applying transforms, swapping content and
//! prefetching neighbors. Its tunables live in a serde-loadable
//! [`ViewerConfig`]. Diagnostics are emitted with `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_gallery::{Position, ViewableItem};
//! use loupe_view::RenderTransform;
//! use loupe_viewer::{Viewer, ViewerConfig, ViewerEvent, ViewerHost, ViewerKey};
//!
//! #[derive(Debug, Default)]
//! struct Host {
//!     frame_requested: bool,
//!     applied: Vec<RenderTransform>,
//!     shown: Vec<usize>,
//! }
//!
//! impl ViewerHost for Host {
//!     fn request_frame(&mut self) {
//!         self.frame_requested = true;
//!     }
//!     fn apply_transform(&mut self, transform: RenderTransform) {
//!         self.applied.push(transform);
//!     }
//!     fn show_item(&mut self, index: usize, _: Position, _: &ViewableItem) {
//!         self.shown.push(index);
//!     }
//! }
//!
//! let items = vec![
//!     ViewableItem::new("a.jpg", "A", ""),
//!     ViewableItem::new("b.jpg", "B", ""),
//! ];
//! let mut viewer = Viewer::new(ViewerConfig::default(), Host::default());
//! viewer.handle(ViewerEvent::Resize {
//!     container: Size::new(800.0, 600.0),
//!     natural: Size::new(1600.0, 1200.0),
//! });
//! viewer.open(items, 0).unwrap();
//!
//! viewer.handle(ViewerEvent::Wheel { delta_y: -1.0, position: Point::new(100.0, 100.0) });
//! assert!(viewer.transform().is_zoomed());
//!
//! // Navigating resets the zoom.
//! viewer.handle(ViewerEvent::Key { key: ViewerKey::ArrowRight });
//! assert!(viewer.transform().is_at_rest());
//!
//! // One frame fires: the host renders once, with the latest state.
//! assert!(viewer.on_animation_frame());
//! let host = viewer.into_host();
//! assert_eq!(host.shown, [0, 1]);
//! assert_eq!(host.applied.len(), 1);
//! assert_eq!(host.applied[0].scale, 1.0);
//! ```

mod config;
mod event;
mod host;
mod viewer;

pub use config::{ConfigError, SWIPE_THRESHOLD, ViewerConfig};
pub use event::{ViewerEvent, ViewerKey};
pub use host::ViewerHost;
pub use viewer::{Changes, Viewer, ViewerError};

pub use loupe_gallery;
pub use loupe_gesture;
pub use loupe_view;
