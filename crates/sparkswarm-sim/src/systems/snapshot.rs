//! Snapshot system: builds the complete `SimSnapshot` the host polls.
//!
//! Read-only over the world and kernel state.

use hecs::World;

use sparkswarm_core::components::{Caster, Position, Projectile, Target};
use sparkswarm_core::constants::{CASTER_RADIUS, PROJECTILE_RADIUS};
use sparkswarm_core::state::{CasterView, ProjectileView, SimSnapshot, StatsView, TargetView};
use sparkswarm_core::types::SimTime;

use crate::cooldown::CooldownLedger;
use crate::metrics::HitStats;

/// Build a complete snapshot of the current simulation state.
pub fn build(
    world: &World,
    time: &SimTime,
    running: bool,
    cooldowns: &CooldownLedger,
    stats: &HitStats,
) -> SimSnapshot {
    let now = time.elapsed_secs;
    let target = build_target(world);

    let mut projectiles = Vec::new();
    let mut gated = 0u32;
    for (_entity, (pos, proj)) in world.query::<(&Position, &Projectile)>().iter() {
        let cooldown_active = cooldowns.is_active(proj.cast_id, target.0, now);
        if cooldown_active {
            gated += 1;
        }
        projectiles.push(ProjectileView {
            position: pos.0,
            radius: PROJECTILE_RADIUS,
            cast_id: proj.cast_id,
            cooldown_active,
        });
    }
    projectiles.sort_by_key(|p| p.cast_id);

    let live = projectiles.len() as u32;
    let cooldown_active_pct = if live > 0 {
        100.0 * gated as f64 / live as f64
    } else {
        0.0
    };

    SimSnapshot {
        time: *time,
        running,
        caster: build_caster(world),
        target: target.1,
        projectiles,
        stats: StatsView {
            total_hits: stats.total_hits,
            total_damage: stats.total_damage,
            hit_rate: stats.hit_rate(now),
            dps: stats.dps(now),
            live_projectiles: live,
            cooldown_active_pct,
        },
    }
}

fn build_caster(world: &World) -> CasterView {
    world
        .query::<(&Caster, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| CasterView {
            position: pos.0,
            radius: CASTER_RADIUS,
        })
        .unwrap_or_default()
}

fn build_target(world: &World) -> (u32, TargetView) {
    world
        .query::<(&Target, &Position)>()
        .iter()
        .next()
        .map(|(_, (target, pos))| {
            (
                target.id,
                TargetView {
                    position: pos.0,
                    radius: target.radius,
                },
            )
        })
        .unwrap_or_default()
}
