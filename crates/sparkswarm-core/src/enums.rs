//! Shared enumerations.

use serde::{Deserialize, Serialize};

/// Arena boundary variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArenaKind {
    /// Circular boundary inscribed in the canvas.
    #[default]
    Circle,
    /// Axis-aligned rectangular boundary.
    Square,
    /// Hollow T-shaped corridor with one open junction.
    Corridor,
}

/// Shape of a cast's initial heading distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastShape {
    /// Headings uniform over the full circle.
    #[default]
    Circular,
    /// Headings uniform within facing ± cone half-angle.
    Cone,
}

/// Which branch fired on a registered hit (reported in events/metrics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    Split,
    Pierce,
    Fork,
    Chain,
    /// No branch was eligible; the projectile was absorbed.
    Absorb,
}
