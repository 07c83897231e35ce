//! Line segments and clamped-parametric proximity queries.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Threshold below which a squared length is treated as degenerate.
const EPS_SQ: f64 = 1e-12;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
}

impl Segment {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Closest point on this segment to `p`.
    pub fn closest_point(&self, p: DVec2) -> DVec2 {
        closest_point_on_segment(p, self.a, self.b)
    }
}

/// Closest point on segment `a`-`b` to point `p`.
/// A zero-length segment returns `a`.
pub fn closest_point_on_segment(p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let e = b - a;
    let len_sq = e.length_squared();
    if len_sq < EPS_SQ {
        return a;
    }
    let t = ((p - a).dot(e) / len_sq).clamp(0.0, 1.0);
    a + e * t
}

/// Closest points between segments `a1`-`a2` and `b1`-`b2`, returned as
/// (point on first, point on second).
///
/// The parallel case (near-zero determinant) is handled by pinning the
/// first parameter and re-solving the second against it.
pub fn closest_points_between_segments(
    a1: DVec2,
    a2: DVec2,
    b1: DVec2,
    b2: DVec2,
) -> (DVec2, DVec2) {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let r = a1 - b1;

    let len1_sq = d1.length_squared();
    let len2_sq = d2.length_squared();

    // Degenerate segments reduce to point-segment queries.
    if len1_sq < EPS_SQ && len2_sq < EPS_SQ {
        return (a1, b1);
    }
    if len1_sq < EPS_SQ {
        return (a1, closest_point_on_segment(a1, b1, b2));
    }
    if len2_sq < EPS_SQ {
        return (closest_point_on_segment(b1, a1, a2), b1);
    }

    let f = d2.dot(r);
    let c = d1.dot(r);
    let b = d1.dot(d2);
    let denom = len1_sq * len2_sq - b * b;

    // Near-parallel: pin s, then re-solve t below.
    let mut s = if denom.abs() > EPS_SQ {
        ((b * f - c * len2_sq) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut t = (b * s + f) / len2_sq;

    // Clamp t, then recompute s against the clamped t.
    if t < 0.0 {
        t = 0.0;
        s = (-c / len1_sq).clamp(0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = ((b - c) / len1_sq).clamp(0.0, 1.0);
    }

    (a1 + d1 * s, b1 + d2 * t)
}
