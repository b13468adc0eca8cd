// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `loupe_view::TransformEngine`.
//!
//! These drive the engine with arbitrary gesture sequences and check the
//! invariants every renderer relies on: bounded scale, no residual pan at
//! rest, and pinned focal points.

use kurbo::{Point, Size, Vec2};
use loupe_view::frame::FrameCoalescer;
use loupe_view::{Layout, MAX_SCALE, MIN_SCALE, TransformEngine, TransformState, ZoomPolicy};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn layout() -> Layout {
    Layout::centered(Size::new(1024.0, 768.0), Size::new(900.0, 600.0))
}

fn engine() -> TransformEngine {
    TransformEngine::new(ZoomPolicy::default(), layout())
}

fn assert_invariants(engine: &TransformEngine) {
    let state = engine.state();
    assert!(
        (MIN_SCALE..=MAX_SCALE).contains(&state.scale()),
        "scale {} out of range",
        state.scale()
    );
    assert_eq!(state.is_zoomed(), state.scale() > MIN_SCALE);
    if state.scale() == MIN_SCALE {
        assert_eq!(state.offset(), Vec2::ZERO, "residual pan at rest");
    }
}

fn assert_pinned(engine: &TransformEngine, screen: Point, content: Point) {
    let now = engine.screen_to_content(screen);
    assert!(
        (now - content).hypot() < TOLERANCE,
        "content under {screen:?} moved from {content:?} to {now:?}"
    );
}

#[derive(Clone, Debug)]
enum Op {
    Wheel(f64, Point),
    DoubleTap(Point),
    Pinch(Point, Point, Point, Point),
    Drag(Point, Point),
    ZoomIn,
    ZoomOut,
    Reset,
}

fn point() -> impl Strategy<Value = Point> {
    (-200.0..1200.0_f64, -200.0..1000.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3.0..3.0_f64, point()).prop_map(|(d, p)| Op::Wheel(d, p)),
        point().prop_map(Op::DoubleTap),
        (point(), point(), point(), point()).prop_map(|(a, b, c, d)| Op::Pinch(a, b, c, d)),
        (point(), point()).prop_map(|(a, b)| Op::Drag(a, b)),
        Just(Op::ZoomIn),
        Just(Op::ZoomOut),
        Just(Op::Reset),
    ]
}

fn run(engine: &mut TransformEngine, op: &Op) {
    match *op {
        Op::Wheel(delta, p) => {
            engine.wheel(delta, p);
        }
        Op::DoubleTap(p) => {
            engine.double_tap(p);
        }
        Op::Pinch(a, b, c, d) => {
            engine.begin_pinch(a, b);
            engine.continue_pinch(c, d);
            engine.end_pinch();
        }
        Op::Drag(from, to) => {
            engine.begin_drag(from);
            engine.continue_drag(to);
            engine.end_drag();
        }
        Op::ZoomIn => {
            engine.zoom_in();
        }
        Op::ZoomOut => {
            engine.zoom_out();
        }
        Op::Reset => {
            engine.reset();
        }
    }
}

proptest! {
    #[test]
    fn scale_stays_bounded_for_any_sequence(ops in prop::collection::vec(op(), 1..40)) {
        let mut e = engine();
        for op in &ops {
            run(&mut e, op);
            assert_invariants(&e);
        }
    }

    #[test]
    fn wheel_pins_pointer_from_any_zoomed_state(
        start in 1.0..3.0_f64,
        focal in point(),
        p in point(),
        delta in prop_oneof![Just(-1.0_f64), Just(1.0_f64)],
    ) {
        let mut e = engine();
        e.zoom_to(start, focal);
        let content = e.screen_to_content(p);
        e.wheel(delta, p);
        if e.scale() > MIN_SCALE {
            assert_pinned(&e, p, content);
        }
    }

    #[test]
    fn pinch_keeps_start_content_under_moving_center(
        a in point(),
        b in point(),
        shift in (-100.0..100.0_f64, -100.0..100.0_f64),
        spread in 1.0..2.5_f64,
    ) {
        prop_assume!((b - a).hypot() > 1.0);
        let mut e = engine();
        let center = a.midpoint(b);
        let content = e.screen_to_content(center);
        prop_assert!(e.begin_pinch(a, b));

        // Spread both fingers about the center, then translate the pair.
        let shift = Vec2::new(shift.0, shift.1);
        let a2 = center + (a - center) * spread + shift;
        let b2 = center + (b - center) * spread + shift;
        e.continue_pinch(a2, b2);

        if e.scale() > MIN_SCALE && e.scale() < MAX_SCALE {
            assert_pinned(&e, center + shift, content);
        }
        assert_invariants(&e);
    }
}

#[test]
fn wheel_zoom_in_pins_focal_point_from_rest() {
    let mut e = engine();
    let p = Point::new(100.0, 100.0);
    let content = e.screen_to_content(p);

    assert!(e.wheel(-1.0, p));
    assert!(e.scale() > MIN_SCALE);
    assert_pinned(&e, p, content);
}

#[test]
fn wheel_out_from_1_2_rests_exactly() {
    let mut e = engine();
    e.zoom_to(1.2, Point::new(37.0, 412.0));
    assert!(e.offset() != Vec2::ZERO);

    assert!(e.wheel(1.0, Point::new(900.0, 10.0)));
    assert_eq!(e.state(), TransformState::REST);
}

#[test]
fn repeated_wheel_steps_return_to_rest() {
    let mut e = engine();
    let p = Point::new(640.0, 200.0);
    for _ in 0..12 {
        e.wheel(-1.0, p);
    }
    assert_eq!(e.scale(), MAX_SCALE);
    for _ in 0..12 {
        e.wheel(1.0, Point::new(12.0, 700.0));
    }
    assert_eq!(e.state(), TransformState::REST);
}

#[test]
fn double_tap_toggles_between_two_and_rest() {
    let mut e = engine();
    e.double_tap(Point::new(321.0, 123.0));
    assert_eq!(e.scale(), 2.0);
    assert!(e.is_zoomed());

    e.double_tap(Point::new(5.0, 5.0));
    assert_eq!(e.scale(), 1.0);
    assert_eq!(e.offset(), Vec2::ZERO);
}

#[test]
fn three_drags_in_one_frame_render_once_with_last_offset() {
    let mut e = engine();
    let mut frames = FrameCoalescer::new();
    let mut callbacks_requested = 0;
    let mut renders = Vec::new();

    e.zoom_in();
    if frames.submit(e.state()) {
        callbacks_requested += 1;
    }
    if let Some(state) = frames.on_frame() {
        renders.push(state);
    }

    e.begin_drag(Point::new(0.0, 0.0));
    for x in [10.0, 20.0, 30.0] {
        e.continue_drag(Point::new(x, 5.0));
        if frames.submit(e.state()) {
            callbacks_requested += 1;
        }
    }
    if let Some(state) = frames.on_frame() {
        renders.push(state);
    }

    assert_eq!(callbacks_requested, 2);
    assert_eq!(renders.len(), 2);
    assert_eq!(renders[1].offset(), Vec2::new(30.0, 5.0));
}
