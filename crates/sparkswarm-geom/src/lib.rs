//! Geometry for SPARKSWARM.
//!
//! Swept-circle collision queries, segment proximity helpers, and the
//! arena boundary variants. Everything here is pure; no simulation
//! state.

pub use sparkswarm_core as core;

pub mod arena;
pub mod segment;
pub mod sweep;

pub use arena::{Arena, Contact};
pub use segment::{closest_point_on_segment, closest_points_between_segments, Segment};
pub use sweep::{swept_circle_hit_t, swept_circle_segment_toi, SegmentImpact};

#[cfg(test)]
mod tests;
