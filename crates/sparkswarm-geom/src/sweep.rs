//! Swept-circle collision queries.
//!
//! Time-of-impact is expressed as a fraction t in [0, 1] of the given
//! displacement. A mover that starts overlapping reports t = 0, so an
//! externally placed projectile (branch spawn inside the target) can
//! never tunnel out undetected.

use glam::DVec2;

/// Threshold below which a squared displacement counts as "not moving".
const EPS_SQ: f64 = 1e-12;

/// Contact against a capsule: time of impact and outward unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentImpact {
    /// Fraction of the displacement at first contact.
    pub t: f64,
    /// Unit normal pointing from the capsule surface toward the mover.
    pub normal: DVec2,
}

/// Smallest t in [0, 1] at which a circle moving from `p0` by `d` first
/// touches a stationary circle of combined radius `combined_r` centered
/// at `c`. Starting overlap returns `Some(0.0)`. Zero displacement
/// returns `None`.
pub fn swept_circle_hit_t(p0: DVec2, d: DVec2, c: DVec2, combined_r: f64) -> Option<f64> {
    let a = d.length_squared();
    if a < EPS_SQ {
        return None;
    }

    let m = p0 - c;
    let cc = m.length_squared() - combined_r * combined_r;
    if cc <= 0.0 {
        return Some(0.0);
    }

    let b = m.dot(d);
    if b >= 0.0 {
        // Moving away from the circle while outside it.
        return None;
    }

    let disc = b * b - a * cc;
    if disc < 0.0 {
        return None;
    }

    let t = (-b - disc.sqrt()) / a;
    if (0.0..=1.0).contains(&t) {
        Some(t)
    } else {
        None
    }
}

/// Exact time of impact of a circle of radius `r` moving from `p0` by
/// `d` against the capsule formed by thickening segment `a`-`b` by `r`.
///
/// Candidates are entry into the offset strip (filtered to the span of
/// the segment) and entry into either endpoint cap; the smallest valid
/// t wins. A zero-length segment reduces to a cap test at `a`.
pub fn swept_circle_segment_toi(
    p0: DVec2,
    d: DVec2,
    a: DVec2,
    b: DVec2,
    r: f64,
) -> Option<SegmentImpact> {
    if d.length_squared() < EPS_SQ {
        return None;
    }

    let e = b - a;
    let len_sq = e.length_squared();
    if len_sq < EPS_SQ {
        return cap_impact(p0, d, a, r);
    }

    let mut best: Option<SegmentImpact> = None;

    // Face candidate: crossing of the offset line on the mover's side.
    let n = e.perp() / len_sq.sqrt();
    let dist0 = (p0 - a).dot(n);
    let approach = d.dot(n);

    if dist0.abs() >= r {
        // Outside the strip; the face is only hittable while closing.
        let side = dist0.signum();
        if approach * side < 0.0 {
            let t = (side * r - dist0) / approach;
            if (0.0..=1.0).contains(&t) {
                let hit = p0 + d * t;
                let s = (hit - a).dot(e) / len_sq;
                if (0.0..=1.0).contains(&s) {
                    best = Some(SegmentImpact { t, normal: n * side });
                }
            }
        }
    } else {
        // Already inside the strip: immediate face contact if the start
        // projects onto the segment span.
        let s = (p0 - a).dot(e) / len_sq;
        if (0.0..=1.0).contains(&s) {
            let side = if dist0 != 0.0 { dist0.signum() } else { 1.0 };
            best = Some(SegmentImpact {
                t: 0.0,
                normal: n * side,
            });
        }
    }

    // Endpoint caps.
    for cap in [a, b] {
        if let Some(imp) = cap_impact(p0, d, cap, r) {
            if best.map_or(true, |prev| imp.t < prev.t) {
                best = Some(imp);
            }
        }
    }

    best
}

/// Swept-circle impact against a single endpoint cap.
fn cap_impact(p0: DVec2, d: DVec2, center: DVec2, r: f64) -> Option<SegmentImpact> {
    let t = swept_circle_hit_t(p0, d, center, r)?;
    let contact = p0 + d * t;
    let away = contact - center;
    let normal = if away.length_squared() < EPS_SQ {
        // Mover centered on the cap; fall back to opposing the motion.
        -d.normalize()
    } else {
        away.normalize()
    };
    Some(SegmentImpact { t, normal })
}
