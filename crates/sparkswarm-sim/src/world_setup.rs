//! Entity spawn factories for setting up the simulation world.

use glam::DVec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::components::{Caster, Position, Projectile, Target};
use sparkswarm_geom::Arena;

use crate::wander::Wander;

/// The single target's stable id, part of the cooldown ledger key.
pub const TARGET_ID: u32 = 0;

/// Everything needed to materialize a projectile. Branch resolutions
/// buffer these instead of spawning mid-iteration.
#[derive(Debug, Clone)]
pub struct ProjectileSeed {
    pub position: DVec2,
    pub heading: f64,
    pub speed: f64,
    pub cast_id: u64,
    /// Lifetime in seconds; negative means unlimited.
    pub duration_secs: f64,
    pub pierce: u32,
    pub fork: u32,
    pub chain: u32,
    pub split_capacity: u32,
    pub has_split: bool,
}

/// Spawn the singleton caster and target at the arena's spawn points.
pub fn setup_entities(world: &mut World, arena: &Arena, target_radius: f64) {
    world.spawn((Caster, Position(arena.caster_spawn())));
    world.spawn((
        Target {
            id: TARGET_ID,
            radius: target_radius,
        },
        Position(arena.target_spawn()),
    ));
}

/// Materialize a buffered projectile seed with a fresh wander instance.
pub fn spawn_projectile(
    world: &mut World,
    seed: ProjectileSeed,
    now: f64,
    rng: &mut ChaCha8Rng,
) -> hecs::Entity {
    let wander = Wander::new(rng);
    spawn_with_wander(world, seed, now, wander)
}

/// Spawn with an explicit wander instance (tests use `Wander::inert`).
pub fn spawn_with_wander(
    world: &mut World,
    seed: ProjectileSeed,
    now: f64,
    wander: Wander,
) -> hecs::Entity {
    world.spawn((
        Position(seed.position),
        Projectile {
            cast_id: seed.cast_id,
            heading: seed.heading,
            speed: seed.speed,
            spawned_at: now,
            duration_secs: seed.duration_secs,
            pierce_remaining: seed.pierce,
            fork_remaining: seed.fork,
            chain_remaining: seed.chain,
            split_capacity: seed.split_capacity,
            has_split: seed.has_split,
        },
        wander,
    ))
}
