// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gallery::{Position, ViewableItem};
use loupe_view::RenderTransform;

/// The display side of a [`crate::Viewer`].
///
/// A browser host maps these onto `requestAnimationFrame`,
/// `cancelAnimationFrame`, a CSS transform on the image wrapper, and the
/// image/title/caption/counter elements. Hosts must not call back into the
/// viewer from inside these methods; frame callbacks are delivered later via
/// [`crate::Viewer::on_animation_frame`].
pub trait ViewerHost {
    /// Schedules one call to [`crate::Viewer::on_animation_frame`] on the next
    /// display frame.
    ///
    /// The viewer never requests a second frame while one is outstanding.
    fn request_frame(&mut self);

    /// Cancels the outstanding frame callback, if the platform can.
    ///
    /// A callback that fires anyway is harmless: it renders nothing.
    fn cancel_frame(&mut self) {}

    /// Applies a transform to the displayed content layer.
    fn apply_transform(&mut self, transform: RenderTransform);

    /// Swaps the displayed content to `item`.
    fn show_item(&mut self, index: usize, position: Position, item: &ViewableItem);

    /// Starts a fire-and-forget load of a neighboring item.
    ///
    /// Failures should be reported through
    /// [`crate::Viewer::report_load_failure`] and never retried.
    fn prefetch(&mut self, index: usize, item: &ViewableItem) {
        let _ = (index, item);
    }

    /// The viewer closed; hide the overlay and restore page scrolling.
    fn closed(&mut self) {}
}
