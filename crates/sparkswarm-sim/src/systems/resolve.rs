//! Hit-resolution branching: Split, Pierce, Fork, Chain.
//!
//! Called only for a *registered* hit (the cooldown ledger has already
//! gated and recorded it). Exactly one branch fires per hit, in fixed
//! priority order; the order and exclusivity determine both visual
//! behavior and aggregate DPS and must not change.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::components::Projectile;
use sparkswarm_core::constants::{FORK_ANGLE, PIERCE_EXIT_EPS};
use sparkswarm_core::enums::BranchKind;
use sparkswarm_core::types::is_unlimited;

use crate::world_setup::ProjectileSeed;

/// What the registered hit did to the projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Projectile survives at the given position (pierce).
    Kept { position: DVec2 },
    /// Projectile was absorbed or replaced by children.
    Removed,
}

/// Inputs describing the contact being resolved.
#[derive(Debug, Clone, Copy)]
pub struct HitContext {
    /// Projectile center at first contact.
    pub contact: DVec2,
    /// Unit normal from the target center toward the contact.
    pub outward: DVec2,
    /// Target center.
    pub target_pos: DVec2,
    /// Target radius plus projectile radius.
    pub combined_r: f64,
    /// Chance of a third fork child, percent.
    pub fork_extra_chance_pct: f64,
    /// Simulation time of the hit.
    pub now: f64,
}

/// Fire exactly one branch for a registered hit.
pub fn resolve_branch(
    proj: &mut Projectile,
    ctx: &HitContext,
    rng: &mut ChaCha8Rng,
    spawns: &mut Vec<ProjectileSeed>,
) -> (BranchKind, HitOutcome) {
    // 1. Split: once per lineage, highest priority.
    if !proj.has_split && proj.split_capacity > 0 {
        let count = proj.split_capacity;
        for i in 0..count {
            let heading = proj.heading + std::f64::consts::TAU * i as f64 / count as f64;
            spawns.push(ProjectileSeed {
                position: ctx.contact,
                heading,
                speed: proj.speed,
                cast_id: proj.cast_id,
                duration_secs: child_duration(proj, ctx.now),
                pierce: proj.pierce_remaining,
                fork: proj.fork_remaining,
                chain: proj.chain_remaining,
                // A split child cannot re-split.
                split_capacity: 0,
                has_split: true,
            });
        }
        return (BranchKind::Split, HitOutcome::Removed);
    }

    // 2. Pierce: continue through, nudged outside the target.
    if proj.pierce_remaining > 0 {
        proj.pierce_remaining -= 1;
        let position = ctx.target_pos + ctx.outward * (ctx.combined_r + PIERCE_EXIT_EPS);
        return (BranchKind::Pierce, HitOutcome::Kept { position });
    }

    // 3. Fork: two children off the current velocity direction, with a
    // configured chance of a third straight ahead.
    if proj.fork_remaining > 0 {
        let child = |heading: f64| ProjectileSeed {
            position: ctx.contact,
            heading,
            speed: proj.speed,
            cast_id: proj.cast_id,
            duration_secs: child_duration(proj, ctx.now),
            pierce: proj.pierce_remaining,
            fork: proj.fork_remaining - 1,
            chain: proj.chain_remaining,
            split_capacity: proj.split_capacity,
            has_split: proj.has_split,
        };
        spawns.push(child(proj.heading - FORK_ANGLE));
        spawns.push(child(proj.heading + FORK_ANGLE));

        let extra_chance = (ctx.fork_extra_chance_pct / 100.0).clamp(0.0, 1.0);
        if rng.gen_bool(extra_chance) {
            spawns.push(child(proj.heading));
        }
        return (BranchKind::Fork, HitOutcome::Removed);
    }

    // 4. Chain: no eligible secondary target in the single-target
    // configuration, so the projectile is absorbed.
    if proj.chain_remaining > 0 {
        return (BranchKind::Chain, HitOutcome::Removed);
    }

    // 5. Nothing eligible.
    (BranchKind::Absorb, HitOutcome::Removed)
}

/// Children inherit the parent's remaining lifetime: duration reduced
/// by the parent's age. Clamped at zero so a near-expired parent never
/// yields the negative "unlimited" sentinel.
fn child_duration(proj: &Projectile, now: f64) -> f64 {
    if is_unlimited(proj.duration_secs) {
        proj.duration_secs
    } else {
        (proj.duration_secs - proj.age(now)).max(0.0)
    }
}
