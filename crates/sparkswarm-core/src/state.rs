//! Snapshot view types polled by the host once per frame.
//!
//! Views are plain serializable data. Building them never mutates
//! kernel state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::SimTime;

/// Complete per-tick snapshot of the kernel's observable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub caster: CasterView,
    pub target: TargetView,
    pub projectiles: Vec<ProjectileView>,
    pub stats: StatsView,
}

/// Caster display state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CasterView {
    pub position: DVec2,
    pub radius: f64,
}

/// Target display state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub position: DVec2,
    pub radius: f64,
}

/// One live projectile, as the renderer sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub radius: f64,
    pub cast_id: u64,
    /// True while this projectile's cast is cooldown-gated against
    /// the target (used for render tinting).
    pub cooldown_active: bool,
}

/// Cumulative and trailing-window hit statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub total_hits: u64,
    pub total_damage: f64,
    /// Registered hits per second over the trailing window.
    pub hit_rate: f64,
    /// Damage per second over the trailing window.
    pub dps: f64,
    pub live_projectiles: u32,
    /// Percentage of live projectiles whose cast is currently gated.
    pub cooldown_active_pct: f64,
}
