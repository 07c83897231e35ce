//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems own the behavior.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// World position component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Marks the singleton caster entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Caster;

/// The singleton target ("boss") entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Stable target identifier, part of the cooldown ledger key.
    pub id: u32,
    /// Collision radius (mutable via settings).
    pub radius: f64,
}

/// Projectile state. Velocity is derived from `heading` and `speed`;
/// the heading is mutated only by the Wander model and wall reflection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Cast this projectile (or its ancestor) was emitted from.
    pub cast_id: u64,
    /// Current heading angle (radians).
    pub heading: f64,
    /// Scalar speed (world units per second).
    pub speed: f64,
    /// Simulation time at spawn.
    pub spawned_at: f64,
    /// Lifetime in seconds; negative means unlimited.
    pub duration_secs: f64,
    /// Remaining pierce budget. Never negative.
    pub pierce_remaining: u32,
    /// Remaining fork budget. Never negative.
    pub fork_remaining: u32,
    /// Remaining chain budget. Never negative.
    pub chain_remaining: u32,
    /// Split capacity; consumed at most once.
    pub split_capacity: u32,
    /// Set once this projectile's lineage has split.
    pub has_split: bool,
}

impl Projectile {
    /// Age in seconds at the given simulation time.
    pub fn age(&self, now: f64) -> f64 {
        now - self.spawned_at
    }

    /// Whether this projectile has outlived its duration.
    pub fn is_expired(&self, now: f64) -> bool {
        !crate::types::is_unlimited(self.duration_secs) && self.age(now) > self.duration_secs
    }

    /// Velocity vector derived from heading and speed.
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin()) * self.speed
    }
}
