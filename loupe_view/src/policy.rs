// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scale at rest. Content is never shown smaller than its laid-out size.
pub const MIN_SCALE: f64 = 1.0;

/// Default upper zoom limit.
pub const MAX_SCALE: f64 = 3.0;

/// Default scale change per wheel notch.
pub const WHEEL_STEP: f64 = 0.2;

/// Default scale change per zoom key press.
pub const KEY_STEP: f64 = 0.5;

/// Default scale a double tap zooms to.
pub const DOUBLE_TAP_SCALE: f64 = 2.0;

/// Computed scales this close to a limit land exactly on it.
///
/// Repeated `+ 0.2` / `- 0.2` steps drift by a few ulps; without snapping a
/// zoom-out could stop at `1.0000000000000002` and leave a residual pan.
const SNAP_EPSILON: f64 = 1e-9;

/// Zoom limits and step sizes.
///
/// This is consulted by every scale change in [`crate::TransformEngine`].
/// Construct through [`ZoomPolicy::normalized`] (or rely on the engine, which
/// normalizes on [`crate::TransformEngine::set_policy`]) so that
/// `MIN_SCALE <= double_tap_scale <= max_scale` and both steps are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomPolicy {
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale change per wheel notch.
    pub wheel_step: f64,
    /// Scale change per zoom-in/zoom-out key press.
    pub key_step: f64,
    /// Scale a double tap at rest zooms to.
    pub double_tap_scale: f64,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            max_scale: MAX_SCALE,
            wheel_step: WHEEL_STEP,
            key_step: KEY_STEP,
            double_tap_scale: DOUBLE_TAP_SCALE,
        }
    }
}

impl ZoomPolicy {
    /// Returns a copy with out-of-range or non-finite fields repaired.
    ///
    /// - `max_scale` below [`MIN_SCALE`] is raised to it; a non-finite value
    ///   falls back to [`MAX_SCALE`].
    /// - Steps are made positive; zero or non-finite steps fall back to their
    ///   defaults.
    /// - `double_tap_scale` is clamped into `[MIN_SCALE, max_scale]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let max_scale = if self.max_scale.is_finite() {
            self.max_scale.max(MIN_SCALE)
        } else {
            MAX_SCALE
        };
        let step = |value: f64, fallback: f64| {
            let value = value.abs();
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let double_tap_scale = if self.double_tap_scale.is_finite() {
            self.double_tap_scale.clamp(MIN_SCALE, max_scale)
        } else {
            DOUBLE_TAP_SCALE.clamp(MIN_SCALE, max_scale)
        };
        Self {
            max_scale,
            wheel_step: step(self.wheel_step, WHEEL_STEP),
            key_step: step(self.key_step, KEY_STEP),
            double_tap_scale,
        }
    }

    /// Clamps `scale` into `[MIN_SCALE, max_scale]`, snapping near-limits.
    ///
    /// `NaN` maps to [`MIN_SCALE`].
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return MIN_SCALE;
        }
        let max_scale = self.max_scale.max(MIN_SCALE);
        let scale = scale.clamp(MIN_SCALE, max_scale);
        if scale - MIN_SCALE < SNAP_EPSILON {
            MIN_SCALE
        } else if max_scale - scale < SNAP_EPSILON {
            max_scale
        } else {
            scale
        }
    }
}
