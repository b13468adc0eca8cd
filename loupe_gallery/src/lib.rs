// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gallery: the item list a full-screen viewer walks through.
//!
//! This crate holds the small amount of state a viewer needs about *what* it
//! is showing, independent of *how* it is shown:
//!
//! - [`ViewableItem`]: an immutable `{ source_ref, title, caption }` record.
//! - [`Catalog`]: the full item list of a category, with case-insensitive
//!   query filtering that produces the list the viewer navigates.
//! - [`NavigationState`]: an ordered item list plus an active index, with
//!   clamped (non-wrapping) next/prev/jump operations.
//!
//! It does not load images or know about transforms. The viewer crate resets
//! its transform whenever [`NavigationState`] reports that the active index
//! moved.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_gallery::{Catalog, NavigationState, ViewableItem};
//!
//! let catalog = Catalog::new(vec![
//!     ViewableItem::new("img/harbor.jpg", "Harbor", "Morning fog"),
//!     ViewableItem::new("img/dunes.jpg", "Dunes", "Late light"),
//!     ViewableItem::new("img/fog.jpg", "Pines", "Fog in the valley"),
//! ]);
//!
//! let items = catalog.filter("fog");
//! assert_eq!(items.len(), 2);
//!
//! let mut nav = NavigationState::open(items, 0).unwrap();
//! assert!(!nav.prev());
//! assert!(nav.next());
//! assert_eq!(nav.position().to_string(), "2 / 2");
//! assert!(!nav.next());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod catalog;
mod error;
mod item;
mod navigation;

pub use catalog::Catalog;
pub use error::NavigationError;
pub use item::ViewableItem;
pub use navigation::{AdjacentIndices, NavigationState, Position};
