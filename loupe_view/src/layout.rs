// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Geometry of the displayed content inside its container.
///
/// All coordinates use one convention:
///
/// - **Screen space** is container-relative: the container's top-left corner
///   is the origin, y grows downward. Pointer and touch positions are
///   expected in this space.
/// - **Content space** is measured from the content box's top-left corner at
///   its unscaled, laid-out size.
///
/// The display layer applies `translate(offset) scale(s)` about
/// [`Layout::origin`] (the CSS `transform-origin`). A content point `c`
/// therefore lands on screen at `centering(s) + offset + c * s`, where
/// [`Layout::centering`] folds the content box position and the transform
/// origin into one term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    content_rect: Rect,
    origin: Point,
}

impl Default for Layout {
    /// Content box at the container origin with zero size; screen and content
    /// space coincide at scale 1.
    fn default() -> Self {
        Self::new(Rect::ZERO, Point::ORIGIN)
    }
}

impl Layout {
    /// Creates a layout from an unscaled content box and a transform origin,
    /// both in screen space.
    #[must_use]
    pub fn new(content_rect: Rect, origin: Point) -> Self {
        Self {
            content_rect: content_rect.abs(),
            origin,
        }
    }

    /// Content of size `content` centered in a container of size `container`,
    /// scaling about the content center.
    #[must_use]
    pub fn centered(container: Size, content: Size) -> Self {
        let center = container.to_rect().center();
        let content_rect = Rect::from_center_size(center, content);
        Self::new(content_rect, center)
    }

    /// Content with natural size `natural` shrunk to fit `container`
    /// (preserving aspect ratio, never enlarged) and centered.
    ///
    /// Degenerate sizes produce a zero-size content box at the container
    /// center.
    #[must_use]
    pub fn contain(container: Size, natural: Size) -> Self {
        if natural.width <= 0.0 || natural.height <= 0.0 {
            return Self::centered(container, Size::ZERO);
        }
        let sx = container.width / natural.width;
        let sy = container.height / natural.height;
        let fit = sx.min(sy).clamp(0.0, 1.0);
        Self::centered(container, natural * fit)
    }

    /// Unscaled content box in screen space.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    /// Transform origin in screen space.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Screen position of the content origin at `scale` with zero pan.
    ///
    /// Scaling by `s` about `origin` moves the content box's top-left corner
    /// to `origin * (1 - s) + content_rect.origin() * s`.
    #[must_use]
    pub fn centering(&self, scale: f64) -> Vec2 {
        self.origin.to_vec2() * (1.0 - scale) + self.content_rect.origin().to_vec2() * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_places_content_and_origin_at_container_center() {
        let layout = Layout::centered(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        assert_eq!(layout.content_rect(), Rect::new(200.0, 150.0, 600.0, 450.0));
        assert_eq!(layout.origin(), Point::new(400.0, 300.0));
    }

    #[test]
    fn centering_keeps_origin_fixed_under_scale() {
        let layout = Layout::centered(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        // The content center (200, 150) must stay at the container center.
        for scale in [1.0, 1.5, 2.0, 3.0] {
            let screen = layout.centering(scale) + Vec2::new(200.0, 150.0) * scale;
            assert!((screen.x - 400.0).abs() < 1e-9);
            assert!((screen.y - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn contain_shrinks_but_never_enlarges() {
        let big = Layout::contain(Size::new(800.0, 600.0), Size::new(4000.0, 2000.0));
        assert_eq!(big.content_rect().size(), Size::new(800.0, 400.0));

        let small = Layout::contain(Size::new(800.0, 600.0), Size::new(200.0, 100.0));
        assert_eq!(small.content_rect().size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn contain_with_degenerate_natural_size() {
        let layout = Layout::contain(Size::new(800.0, 600.0), Size::new(0.0, 10.0));
        assert_eq!(layout.content_rect().size(), Size::ZERO);
        assert_eq!(layout.origin(), Point::new(400.0, 300.0));
    }
}
