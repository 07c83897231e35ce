//! Arena boundary variants.
//!
//! An arena is immutable once built for a given canvas size and kind;
//! switching kind or resizing the canvas rebuilds it. Coordinates are
//! canvas-style: x grows right, y grows down, origin at the top left.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use sparkswarm_core::constants::{ARENA_MARGIN, CORRIDOR_WIDTH_FRACTION};
use sparkswarm_core::enums::ArenaKind;

use crate::segment::Segment;

/// Result of a boundary collision query against a moving circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the wall into the arena interior.
    pub normal: DVec2,
    /// Position with the circle pushed back inside the boundary.
    pub corrected: DVec2,
}

/// A bounded arena. One collision query; no other behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Arena {
    Circle {
        center: DVec2,
        radius: f64,
    },
    Square {
        min: DVec2,
        max: DVec2,
    },
    /// Hollow T-corridor: a horizontal bar along the top joined by a
    /// vertical stem from below. The segment set leaves exactly one
    /// gap, `junction`, where the stem meets the bar.
    TJunction {
        segments: Vec<Segment>,
        /// The open junction span (not a wall; kept for diagnostics).
        junction: Segment,
        /// Spawn point inside the stem.
        spawn_stem: DVec2,
        /// Spawn point inside the bar.
        spawn_bar: DVec2,
    },
}

impl Arena {
    /// Build an arena of the given kind inscribed in a canvas.
    pub fn build(kind: ArenaKind, canvas_width: f64, canvas_height: f64) -> Self {
        let w = canvas_width.max(4.0 * ARENA_MARGIN);
        let h = canvas_height.max(4.0 * ARENA_MARGIN);
        match kind {
            ArenaKind::Circle => Arena::Circle {
                center: DVec2::new(w * 0.5, h * 0.5),
                radius: w.min(h) * 0.5 - ARENA_MARGIN,
            },
            ArenaKind::Square => Arena::Square {
                min: DVec2::new(ARENA_MARGIN, ARENA_MARGIN),
                max: DVec2::new(w - ARENA_MARGIN, h - ARENA_MARGIN),
            },
            ArenaKind::Corridor => build_t_junction(w, h),
        }
    }

    pub fn kind(&self) -> ArenaKind {
        match self {
            Arena::Circle { .. } => ArenaKind::Circle,
            Arena::Square { .. } => ArenaKind::Square,
            Arena::TJunction { .. } => ArenaKind::Corridor,
        }
    }

    /// Wall segments for swept terrain queries. Empty for the analytic
    /// boundaries (circle, square), which use the discrete query only.
    pub fn segments(&self) -> &[Segment] {
        match self {
            Arena::TJunction { segments, .. } => segments,
            _ => &[],
        }
    }

    /// Where the caster sits after a reset.
    pub fn caster_spawn(&self) -> DVec2 {
        match self {
            Arena::Circle { center, radius } => *center - DVec2::new(radius * 0.5, 0.0),
            Arena::Square { min, max } => DVec2::new(
                min.x + (max.x - min.x) * 0.25,
                min.y + (max.y - min.y) * 0.5,
            ),
            Arena::TJunction { spawn_stem, .. } => *spawn_stem,
        }
    }

    /// Where the target sits after a reset.
    pub fn target_spawn(&self) -> DVec2 {
        match self {
            Arena::Circle { center, radius } => *center + DVec2::new(radius * 0.4, 0.0),
            Arena::Square { min, max } => DVec2::new(
                min.x + (max.x - min.x) * 0.75,
                min.y + (max.y - min.y) * 0.5,
            ),
            Arena::TJunction { spawn_bar, .. } => *spawn_bar,
        }
    }

    /// Discrete collision query for a circle of radius `r` at `pos`.
    ///
    /// Returns the inward normal and a corrected position, or `None`
    /// when the circle is clear of the boundary.
    pub fn collide_circle(&self, pos: DVec2, r: f64) -> Option<Contact> {
        match self {
            Arena::Circle { center, radius } => {
                let limit = (radius - r).max(0.0);
                let off = pos - *center;
                let dist = off.length();
                if dist <= limit {
                    return None;
                }
                let out = if dist > 1e-9 { off / dist } else { DVec2::X };
                Some(Contact {
                    normal: -out,
                    corrected: *center + out * limit,
                })
            }
            Arena::Square { min, max } => {
                let mut normal = DVec2::ZERO;
                let mut corrected = pos;
                if pos.x - r < min.x {
                    normal += DVec2::X;
                    corrected.x = min.x + r;
                }
                if pos.x + r > max.x {
                    normal -= DVec2::X;
                    corrected.x = max.x - r;
                }
                if pos.y - r < min.y {
                    normal += DVec2::Y;
                    corrected.y = min.y + r;
                }
                if pos.y + r > max.y {
                    normal -= DVec2::Y;
                    corrected.y = max.y - r;
                }
                if normal == DVec2::ZERO {
                    return None;
                }
                // Simultaneous edge contacts combine into one normal.
                Some(Contact {
                    normal: normal.normalize(),
                    corrected,
                })
            }
            Arena::TJunction { segments, .. } => {
                let mut best: Option<(f64, DVec2)> = None;
                for seg in segments {
                    let cp = seg.closest_point(pos);
                    let dist = pos.distance(cp);
                    if dist < r && best.map_or(true, |(d, _)| dist < d) {
                        best = Some((dist, cp));
                    }
                }
                let (dist, cp) = best?;
                let normal = if dist > 1e-9 {
                    (pos - cp) / dist
                } else {
                    DVec2::X
                };
                Some(Contact {
                    normal,
                    corrected: cp + normal * r,
                })
            }
        }
    }
}

/// Lay out the T-junction walls: bar along the top, stem dropping from
/// the bar's bottom wall to the canvas bottom. The bar's bottom wall is
/// split around the stem mouth, which is the single open junction.
fn build_t_junction(w: f64, h: f64) -> Arena {
    let m = ARENA_MARGIN;
    let cw = w.min(h) * CORRIDOR_WIDTH_FRACTION;
    let cx = w * 0.5;

    let bar_top = m;
    let bar_bottom = m + cw;
    let bar_left = m;
    let bar_right = w - m;
    let stem_left = cx - cw * 0.5;
    let stem_right = cx + cw * 0.5;
    let stem_bottom = h - m;

    let p = DVec2::new;
    let segments = vec![
        // Bar outline.
        Segment::new(p(bar_left, bar_top), p(bar_right, bar_top)),
        Segment::new(p(bar_left, bar_top), p(bar_left, bar_bottom)),
        Segment::new(p(bar_right, bar_top), p(bar_right, bar_bottom)),
        // Bar bottom wall, split around the stem mouth.
        Segment::new(p(bar_left, bar_bottom), p(stem_left, bar_bottom)),
        Segment::new(p(stem_right, bar_bottom), p(bar_right, bar_bottom)),
        // Stem walls and bottom cap.
        Segment::new(p(stem_left, bar_bottom), p(stem_left, stem_bottom)),
        Segment::new(p(stem_right, bar_bottom), p(stem_right, stem_bottom)),
        Segment::new(p(stem_left, stem_bottom), p(stem_right, stem_bottom)),
    ];

    Arena::TJunction {
        segments,
        junction: Segment::new(p(stem_left, bar_bottom), p(stem_right, bar_bottom)),
        spawn_stem: p(cx, stem_bottom - cw * 0.6),
        spawn_bar: p(cx, bar_top + cw * 0.5),
    }
}
