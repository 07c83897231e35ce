//! Commands the host may queue against the engine.
//!
//! Commands are drained at the next tick boundary, never applied
//! mid-tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::SimSettings;

/// A host command, queued and processed at tick boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimCommand {
    /// Begin casting. Already-live projectiles are unaffected.
    Start,
    /// Stop casting. Already-live projectiles continue simulating.
    Stop,
    /// Clear all projectiles, counters, cooldowns and the cast-id counter.
    Reset,
    /// Replace the settings snapshot (takes effect next tick).
    ApplySettings(SimSettings),
    /// Drag-reposition the caster.
    MoveCaster(DVec2),
    /// Drag-reposition the target.
    MoveTarget(DVec2),
}
