// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session: reference values captured when a second finger lands.
//!
//! A pinch compares every later finger pair against the pair recorded at
//! [`PinchSession::begin`], not against the previous move. The ratio
//! `current_distance / reference_distance` is therefore exact for any
//! sequence of moves, and rounding does not accumulate.
//!
//! The session also carries an opaque `pinned` content-space point: the zoom
//! engine records which content point sat under the pinch center at the
//! start, and keeps that point under the (moving) center afterwards.

use kurbo::Point;

/// Distances below this are treated as both fingers on the same spot.
const MIN_REFERENCE_DISTANCE: f64 = 1e-6;

/// Reference values for an in-progress two-finger pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    reference_distance: f64,
    reference_scale: f64,
    reference_center: Point,
    pinned: Point,
}

impl PinchSession {
    /// Captures a pinch starting with fingers at `a` and `b`.
    ///
    /// `scale` is the zoom at pinch start and `pinned` the content-space point
    /// under the midpoint of `a` and `b`. Returns `None` when the fingers are
    /// too close together to define a ratio.
    #[must_use]
    pub fn begin(a: Point, b: Point, scale: f64, pinned: Point) -> Option<Self> {
        let reference_distance = distance(a, b);
        if reference_distance.is_nan() || reference_distance < MIN_REFERENCE_DISTANCE {
            return None;
        }
        Some(Self {
            reference_distance,
            reference_scale: scale,
            reference_center: midpoint(a, b),
            pinned,
        })
    }

    /// Distance between the fingers at pinch start.
    #[must_use]
    pub fn reference_distance(&self) -> f64 {
        self.reference_distance
    }

    /// Zoom scale at pinch start.
    #[must_use]
    pub fn reference_scale(&self) -> f64 {
        self.reference_scale
    }

    /// Midpoint of the fingers at pinch start, in screen space.
    #[must_use]
    pub fn reference_center(&self) -> Point {
        self.reference_center
    }

    /// Content-space point that stays under the pinch center.
    #[must_use]
    pub fn pinned(&self) -> Point {
        self.pinned
    }

    /// Spread ratio of the finger pair `a`, `b` relative to pinch start.
    #[must_use]
    pub fn ratio(&self, a: Point, b: Point) -> f64 {
        distance(a, b) / self.reference_distance
    }

    /// Unclamped scale the finger pair `a`, `b` asks for.
    #[must_use]
    pub fn target_scale(&self, a: Point, b: Point) -> f64 {
        self.reference_scale * self.ratio(a, b)
    }
}

/// Euclidean distance between two screen points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Midpoint of two screen points.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_records_distance_center_and_scale() {
        let pinch =
            PinchSession::begin(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 1.5, Point::ORIGIN)
                .unwrap();
        assert_eq!(pinch.reference_distance(), 50.0);
        assert_eq!(pinch.reference_center(), Point::new(15.0, 20.0));
        assert_eq!(pinch.reference_scale(), 1.5);
    }

    #[test]
    fn coincident_fingers_do_not_start_a_pinch() {
        let p = Point::new(12.0, 12.0);
        assert!(PinchSession::begin(p, p, 1.0, Point::ORIGIN).is_none());
    }

    #[test]
    fn nan_positions_do_not_start_a_pinch() {
        let p = Point::new(f64::NAN, 0.0);
        assert!(PinchSession::begin(p, Point::ORIGIN, 1.0, Point::ORIGIN).is_none());
    }

    #[test]
    fn ratio_is_relative_to_start_not_previous_move() {
        let pinch =
            PinchSession::begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.0, Point::ORIGIN)
                .unwrap();

        assert_eq!(pinch.ratio(Point::new(0.0, 0.0), Point::new(150.0, 0.0)), 1.5);
        // The same pair yields the same ratio regardless of what came before.
        assert_eq!(pinch.ratio(Point::new(0.0, 0.0), Point::new(150.0, 0.0)), 1.5);
        assert_eq!(pinch.target_scale(Point::new(0.0, 0.0), Point::new(200.0, 0.0)), 2.0);
    }

    #[test]
    fn translation_of_both_fingers_keeps_ratio() {
        let pinch =
            PinchSession::begin(Point::new(0.0, 0.0), Point::new(0.0, 80.0), 2.0, Point::ORIGIN)
                .unwrap();
        let ratio = pinch.ratio(Point::new(40.0, 10.0), Point::new(40.0, 90.0));
        assert!((ratio - 1.0).abs() < 1e-12);
    }
}
