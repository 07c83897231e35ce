//! Tests for swept-circle queries, segment proximity, and arena
//! boundaries.

use glam::DVec2;

use sparkswarm_core::constants::{ARENA_MARGIN, CORRIDOR_WIDTH_FRACTION};
use sparkswarm_core::enums::ArenaKind;

use crate::arena::Arena;
use crate::segment::{closest_point_on_segment, closest_points_between_segments, Segment};
use crate::sweep::{swept_circle_hit_t, swept_circle_segment_toi};

const EPS: f64 = 1e-9;

fn v(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

// ---- Swept circle vs. circle ----

#[test]
fn test_swept_circle_direct_hit_fraction() {
    // Mover closes 10 units on a circle whose surface is 5 units away.
    let t = swept_circle_hit_t(v(0.0, 0.0), v(10.0, 0.0), v(8.0, 0.0), 3.0).unwrap();
    assert!((t - 0.5).abs() < EPS, "expected t=0.5, got {t}");
}

#[test]
fn test_swept_circle_starting_overlap_is_immediate() {
    let t = swept_circle_hit_t(v(1.0, 0.0), v(5.0, 0.0), v(0.0, 0.0), 3.0).unwrap();
    assert_eq!(t, 0.0);
}

#[test]
fn test_swept_circle_zero_displacement_never_hits() {
    // Even while overlapping, a degenerate sweep reports no hit.
    assert!(swept_circle_hit_t(v(0.0, 0.0), DVec2::ZERO, v(0.0, 0.0), 3.0).is_none());
}

#[test]
fn test_swept_circle_miss() {
    assert!(swept_circle_hit_t(v(0.0, 10.0), v(20.0, 0.0), v(10.0, 0.0), 3.0).is_none());
}

#[test]
fn test_swept_circle_moving_away() {
    assert!(swept_circle_hit_t(v(10.0, 0.0), v(10.0, 0.0), v(0.0, 0.0), 3.0).is_none());
}

#[test]
fn test_swept_circle_no_tunneling_at_high_speed() {
    // Displacement 100x the combined radius, straight through the circle.
    let t = swept_circle_hit_t(v(-150.0, 0.0), v(300.0, 0.0), v(0.0, 0.0), 3.0).unwrap();
    assert!(t > 0.0 && t < 1.0);
    let contact = v(-150.0, 0.0) + v(300.0, 0.0) * t;
    assert!((contact.length() - 3.0).abs() < 1e-6);
}

// ---- Segment proximity ----

#[test]
fn test_closest_point_interior_and_clamped() {
    let a = v(0.0, 0.0);
    let b = v(10.0, 0.0);
    assert_eq!(closest_point_on_segment(v(5.0, 3.0), a, b), v(5.0, 0.0));
    assert_eq!(closest_point_on_segment(v(-4.0, 2.0), a, b), a);
    assert_eq!(closest_point_on_segment(v(14.0, -2.0), a, b), b);
}

#[test]
fn test_closest_point_zero_length_segment() {
    let a = v(3.0, 3.0);
    assert_eq!(closest_point_on_segment(v(7.0, 9.0), a, a), a);
}

#[test]
fn test_segments_crossing_touch() {
    let (p, q) = closest_points_between_segments(
        v(-5.0, 0.0),
        v(5.0, 0.0),
        v(0.0, -5.0),
        v(0.0, 5.0),
    );
    assert!(p.distance(q) < EPS);
    assert!(p.distance(v(0.0, 0.0)) < EPS);
}

#[test]
fn test_segments_parallel_degeneracy() {
    // Parallel, offset by 2: the determinant collapses and one
    // parameter is pinned; the reported distance must still be 2.
    let (p, q) = closest_points_between_segments(
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(2.0, 2.0),
        v(12.0, 2.0),
    );
    assert!((p.distance(q) - 2.0).abs() < EPS);
}

#[test]
fn test_segments_both_degenerate() {
    let (p, q) = closest_points_between_segments(
        v(1.0, 1.0),
        v(1.0, 1.0),
        v(4.0, 5.0),
        v(4.0, 5.0),
    );
    assert_eq!(p, v(1.0, 1.0));
    assert_eq!(q, v(4.0, 5.0));
}

// ---- Swept circle vs. capsule ----

#[test]
fn test_capsule_face_hit_time_and_normal() {
    // Horizontal wall at y=10, mover descending from y=0 over 20 units.
    let imp = swept_circle_segment_toi(v(5.0, 0.0), v(0.0, 20.0), v(0.0, 10.0), v(10.0, 10.0), 1.0)
        .unwrap();
    assert!((imp.t - 0.45).abs() < EPS, "t was {}", imp.t);
    // Normal points back toward the approaching mover.
    assert!(imp.normal.distance(v(0.0, -1.0)) < EPS);
}

#[test]
fn test_capsule_endpoint_cap_hit() {
    // Approaching the right endpoint end-on: only the cap can trigger.
    let imp = swept_circle_segment_toi(
        v(15.0, 10.0),
        v(-10.0, 0.0),
        v(0.0, 10.0),
        v(10.0, 10.0),
        1.0,
    )
    .unwrap();
    assert!((imp.t - 0.4).abs() < EPS, "t was {}", imp.t);
    assert!(imp.normal.distance(v(1.0, 0.0)) < EPS);
}

#[test]
fn test_capsule_zero_length_segment_is_cap() {
    let a = v(5.0, 5.0);
    let imp = swept_circle_segment_toi(v(0.0, 5.0), v(10.0, 0.0), a, a, 1.0).unwrap();
    assert!((imp.t - 0.4).abs() < EPS);
    assert!(imp.normal.distance(v(-1.0, 0.0)) < EPS);
}

#[test]
fn test_capsule_start_inside_strip_is_immediate() {
    let imp = swept_circle_segment_toi(
        v(5.0, 10.5),
        v(0.0, 5.0),
        v(0.0, 10.0),
        v(10.0, 10.0),
        1.0,
    )
    .unwrap();
    assert_eq!(imp.t, 0.0);
}

#[test]
fn test_capsule_parallel_pass_misses() {
    // Flying parallel to the wall, 5 units off a 1-unit capsule.
    assert!(swept_circle_segment_toi(
        v(0.0, 5.0),
        v(10.0, 0.0),
        v(0.0, 10.0),
        v(10.0, 10.0),
        1.0
    )
    .is_none());
}

#[test]
fn test_capsule_zero_displacement() {
    assert!(
        swept_circle_segment_toi(v(5.0, 9.5), DVec2::ZERO, v(0.0, 10.0), v(10.0, 10.0), 1.0)
            .is_none()
    );
}

// ---- Arena: circle ----

#[test]
fn test_circle_arena_clamps_to_boundary() {
    let arena = Arena::build(ArenaKind::Circle, 800.0, 600.0);
    let (center, radius) = match arena {
        Arena::Circle { center, radius } => (center, radius),
        _ => unreachable!(),
    };

    assert!(arena.collide_circle(center, 4.0).is_none());

    let outside = center + v(radius, 0.0);
    let contact = arena.collide_circle(outside, 4.0).unwrap();
    assert!(contact.normal.distance(v(-1.0, 0.0)) < EPS);
    assert!((contact.corrected.distance(center) - (radius - 4.0)).abs() < EPS);
}

// ---- Arena: square ----

#[test]
fn test_square_arena_single_edge() {
    let arena = Arena::build(ArenaKind::Square, 800.0, 600.0);
    let contact = arena
        .collide_circle(v(ARENA_MARGIN + 1.0, 300.0), 4.0)
        .unwrap();
    assert!(contact.normal.distance(v(1.0, 0.0)) < EPS);
    assert!((contact.corrected.x - (ARENA_MARGIN + 4.0)).abs() < EPS);
}

#[test]
fn test_square_arena_corner_combines_normals() {
    let arena = Arena::build(ArenaKind::Square, 800.0, 600.0);
    let contact = arena
        .collide_circle(v(ARENA_MARGIN + 1.0, ARENA_MARGIN + 1.0), 4.0)
        .unwrap();
    let expected = v(1.0, 1.0).normalize();
    assert!(contact.normal.distance(expected) < EPS);
    assert!((contact.corrected.x - (ARENA_MARGIN + 4.0)).abs() < EPS);
    assert!((contact.corrected.y - (ARENA_MARGIN + 4.0)).abs() < EPS);
}

// ---- Arena: T-junction ----

#[test]
fn test_t_junction_has_exactly_one_gap() {
    let arena = Arena::build(ArenaKind::Corridor, 800.0, 600.0);
    let (segments, junction) = match &arena {
        Arena::TJunction {
            segments, junction, ..
        } => (segments, junction),
        _ => unreachable!(),
    };

    let cw = 600.0_f64.min(800.0) * CORRIDOR_WIDTH_FRACTION;
    assert!((junction.length() - cw).abs() < EPS);

    // No wall crosses the junction mouth: every segment keeps at least
    // half the corridor width from its midpoint.
    let mouth = (junction.a + junction.b) * 0.5;
    for seg in segments {
        let dist = mouth.distance(seg.closest_point(mouth));
        assert!(
            dist >= cw * 0.5 - EPS,
            "segment {seg:?} blocks the junction (dist {dist})"
        );
    }
}

#[test]
fn test_t_junction_stem_to_bar_path_is_clear() {
    let arena = Arena::build(ArenaKind::Corridor, 800.0, 600.0);
    let from = arena.caster_spawn();
    let to = arena.target_spawn();
    let d = to - from;

    for seg in arena.segments() {
        assert!(
            swept_circle_segment_toi(from, d, seg.a, seg.b, 4.0).is_none(),
            "straight stem-to-bar path should clear all walls, hit {seg:?}"
        );
    }
}

#[test]
fn test_t_junction_wall_blocks_overshoot() {
    // Continue past the bar's center to the top wall: must collide.
    let arena = Arena::build(ArenaKind::Corridor, 800.0, 600.0);
    let from = arena.caster_spawn();
    let d = v(0.0, -(from.y - ARENA_MARGIN) - 10.0);

    let mut earliest: Option<f64> = None;
    for seg in arena.segments() {
        if let Some(imp) = swept_circle_segment_toi(from, d, seg.a, seg.b, 4.0) {
            earliest = Some(earliest.map_or(imp.t, |t: f64| t.min(imp.t)));
        }
    }
    assert!(earliest.is_some(), "top wall should stop the overshoot");
}

#[test]
fn test_t_junction_discrete_query_repositions() {
    let arena = Arena::build(ArenaKind::Corridor, 800.0, 600.0);
    let (stem_left_x, mid_y) = match &arena {
        Arena::TJunction { junction, .. } => (junction.a.x, 400.0),
        _ => unreachable!(),
    };

    // Overlapping the stem's left wall from inside the corridor.
    let pos = v(stem_left_x + 2.0, mid_y);
    let contact = arena.collide_circle(pos, 4.0).unwrap();
    assert!(contact.normal.distance(v(1.0, 0.0)) < EPS);
    assert!((contact.corrected.x - (stem_left_x + 4.0)).abs() < EPS);
}

#[test]
fn test_analytic_arenas_expose_no_segments() {
    assert!(Arena::build(ArenaKind::Circle, 800.0, 600.0)
        .segments()
        .is_empty());
    assert!(Arena::build(ArenaKind::Square, 800.0, 600.0)
        .segments()
        .is_empty());
}
