//! Tunable simulation settings.
//!
//! `SimSettings` is the configuration snapshot handed to the kernel each
//! tick. The external UI collaborator owns validation and clamping; the
//! kernel treats the snapshot as read-only and never mutates it.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TARGET_RADIUS;
use crate::enums::{ArenaKind, CastShape};
use crate::types::UNLIMITED_DURATION;

/// All tunable parameters, immutable per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Arena boundary variant.
    pub arena: ArenaKind,
    /// Damage credited per registered hit.
    pub avg_hit: f64,
    /// Projectile speed multiplier (1.0 = base speed).
    pub speed_multiplier: f64,
    /// Projectiles emitted per cast.
    pub projectile_count: u32,
    /// Casts per second. Zero or negative disables emission.
    pub cast_rate: f64,
    /// Projectile lifetime in seconds; negative means unlimited.
    pub duration_secs: f64,
    /// Initial heading distribution of a cast.
    pub cast_shape: CastShape,
    /// Facing angle for cone casts (radians).
    pub facing: f64,
    /// Cone half-angle (radians).
    pub cone_half_angle: f64,
    /// Pierce budget per projectile.
    pub pierce: u32,
    /// Fork budget per projectile.
    pub fork: u32,
    /// Chain budget per projectile.
    pub chain: u32,
    /// Split capacity per projectile (consumed at most once).
    pub split: u32,
    /// Chance of a third fork child along the unforked direction (percent, 0-100).
    pub fork_extra_chance_pct: f64,
    /// Target collision radius.
    pub target_radius: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            arena: ArenaKind::Circle,
            avg_hit: 100.0,
            speed_multiplier: 1.0,
            projectile_count: 8,
            cast_rate: 1.5,
            duration_secs: 4.0,
            cast_shape: CastShape::Circular,
            facing: 0.0,
            cone_half_angle: std::f64::consts::FRAC_PI_4,
            pierce: 0,
            fork: 0,
            chain: 0,
            split: 0,
            fork_extra_chance_pct: 25.0,
            target_radius: DEFAULT_TARGET_RADIUS,
        }
    }
}

impl SimSettings {
    /// Seconds between casts, or `None` when emission is disabled.
    pub fn cast_interval(&self) -> Option<f64> {
        if self.cast_rate > 0.0 {
            Some(1.0 / self.cast_rate)
        } else {
            None
        }
    }

    /// Settings with unlimited projectile lifetime.
    pub fn with_unlimited_duration(mut self) -> Self {
        self.duration_secs = UNLIMITED_DURATION;
        self
    }
}

/// Configuration for constructing a new simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Canvas width the arena is built against (world units).
    pub canvas_width: f64,
    /// Canvas height the arena is built against (world units).
    pub canvas_height: f64,
    /// Initial settings snapshot.
    pub settings: SimSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas_width: crate::constants::DEFAULT_CANVAS_WIDTH,
            canvas_height: crate::constants::DEFAULT_CANVAS_HEIGHT,
            settings: SimSettings::default(),
        }
    }
}
