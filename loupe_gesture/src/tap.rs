// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from a stream of single taps.
//!
//! Two taps form a double tap when the second arrives strictly later than the
//! first, within [`TapConfig::window_ms`], and within
//! [`TapConfig::max_distance`] of it. A recognized double tap consumes both
//! taps, so a third quick tap starts a new pair instead of toggling again.

use kurbo::Point;

/// Timing and distance tolerances for double-tap recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TapConfig {
    /// Maximum time between the two taps, in milliseconds.
    pub window_ms: u64,
    /// Maximum distance between the two taps, in screen units.
    pub max_distance: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            window_ms: 300,
            max_distance: 40.0,
        }
    }
}

/// Classification of one tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    /// A lone tap, or the first of a possible pair.
    Single,
    /// The second tap of a pair.
    Double,
}

/// Pairs taps into double taps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    last: Option<(Point, u64)>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self { config, last: None }
    }

    /// Returns the active tolerances.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Replaces the tolerances and forgets any pending first tap.
    pub fn set_config(&mut self, config: TapConfig) {
        self.config = config;
        self.last = None;
    }

    /// Feeds a tap at `position` and monotonic time `time_ms`.
    pub fn on_tap(&mut self, position: Point, time_ms: u64) -> TapKind {
        if let Some((last_pos, last_time)) = self.last {
            let elapsed = time_ms.saturating_sub(last_time);
            let close_in_time = time_ms > last_time && elapsed < self.config.window_ms;
            let close_in_space = (position - last_pos).hypot() <= self.config.max_distance;
            if close_in_time && close_in_space {
                self.last = None;
                return TapKind::Double;
            }
        }
        self.last = Some((position, time_ms));
        TapKind::Single
    }

    /// Forgets any pending first tap.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> TapRecognizer {
        TapRecognizer::new(TapConfig::default())
    }

    #[test]
    fn quick_nearby_taps_make_a_double() {
        let mut taps = recognizer();
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 10), TapKind::Single);
        assert_eq!(taps.on_tap(Point::new(5.0, 5.0), 250), TapKind::Double);
    }

    #[test]
    fn slow_second_tap_is_single() {
        let mut taps = recognizer();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 300), TapKind::Single);
        // The slow tap becomes the new first tap.
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 400), TapKind::Double);
    }

    #[test]
    fn same_timestamp_is_not_a_double() {
        let mut taps = recognizer();
        taps.on_tap(Point::new(0.0, 0.0), 100);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 100), TapKind::Single);
    }

    #[test]
    fn distant_second_tap_is_single() {
        let mut taps = recognizer();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_tap(Point::new(100.0, 0.0), 50), TapKind::Single);
    }

    #[test]
    fn third_tap_starts_a_new_pair() {
        let mut taps = recognizer();
        taps.on_tap(Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 100), TapKind::Double);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 200), TapKind::Single);
    }

    #[test]
    fn clock_going_backwards_is_single() {
        let mut taps = recognizer();
        taps.on_tap(Point::new(0.0, 0.0), 500);
        assert_eq!(taps.on_tap(Point::new(0.0, 0.0), 400), TapKind::Single);
    }
}
