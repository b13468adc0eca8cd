// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::policy::MIN_SCALE;

/// Zoom and pan of the displayed content.
///
/// Only [`crate::TransformEngine`] produces non-rest values, and it upholds:
///
/// - `MIN_SCALE <= scale <= max_scale`,
/// - `is_zoomed() == (scale > MIN_SCALE)`,
/// - `scale == MIN_SCALE` implies `offset == Vec2::ZERO`.
///
/// Equality compares all fields; the frame coalescer relies on it to skip
/// redundant renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    scale: f64,
    offset: Vec2,
    is_zoomed: bool,
}

impl TransformState {
    /// Unzoomed, unpanned.
    pub const REST: Self = Self {
        scale: MIN_SCALE,
        offset: Vec2::ZERO,
        is_zoomed: false,
    };

    /// Builds a state from an already clamped scale, forcing the rest
    /// invariant at [`MIN_SCALE`].
    pub(crate) fn from_clamped(scale: f64, offset: Vec2) -> Self {
        if scale > MIN_SCALE {
            Self {
                scale,
                offset,
                is_zoomed: true,
            }
        } else {
            Self::REST
        }
    }

    /// Uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pan offset in screen units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns `true` when the scale is above [`MIN_SCALE`].
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    /// Returns `true` for [`TransformState::REST`].
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }

    /// The values a display layer applies as `translate(x, y) scale(s)`.
    #[must_use]
    pub fn render_transform(&self) -> RenderTransform {
        RenderTransform {
            translate_x: self.offset.x,
            translate_y: self.offset.y,
            scale: self.scale,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::REST
    }
}

/// Render-ready 2D transform: translate, then uniform scale about the layout
/// origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderTransform {
    /// Horizontal translation in screen units.
    pub translate_x: f64,
    /// Vertical translation in screen units.
    pub translate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_scale_forces_rest() {
        let state = TransformState::from_clamped(MIN_SCALE, Vec2::new(30.0, -4.0));
        assert!(state.is_at_rest());
        assert!(!state.is_zoomed());
    }

    #[test]
    fn zoomed_state_keeps_offset() {
        let state = TransformState::from_clamped(2.0, Vec2::new(30.0, -4.0));
        assert!(state.is_zoomed());
        assert_eq!(
            state.render_transform(),
            RenderTransform {
                translate_x: 30.0,
                translate_y: -4.0,
                scale: 2.0,
            }
        );
    }
}
