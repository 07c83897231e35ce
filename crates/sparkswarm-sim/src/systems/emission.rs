//! Cast emission: scheduled batches of projectiles from the caster.
//!
//! Each cast gets a freshly allocated cast id shared by all of its
//! projectiles and, through branching, all of their descendants.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::config::SimSettings;
use sparkswarm_core::constants::{BASE_PROJECTILE_SPEED, DT};
use sparkswarm_core::enums::CastShape;

use crate::world_setup::{self, ProjectileSeed};

/// Accumulate elapsed time against the cast interval and emit any due
/// casts. A non-positive cast rate disables emission entirely.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    settings: &SimSettings,
    caster_pos: DVec2,
    cast_timer: &mut f64,
    next_cast_id: &mut u64,
    now: f64,
) {
    let Some(interval) = settings.cast_interval() else {
        return;
    };

    *cast_timer -= DT;
    while *cast_timer <= 0.0 {
        emit_cast(world, rng, settings, caster_pos, next_cast_id, now);
        *cast_timer += interval;
    }
}

/// Emit one full cast of `projectile_count` projectiles.
fn emit_cast(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    settings: &SimSettings,
    caster_pos: DVec2,
    next_cast_id: &mut u64,
    now: f64,
) {
    let cast_id = *next_cast_id;
    *next_cast_id += 1;

    let speed = BASE_PROJECTILE_SPEED * settings.speed_multiplier;

    for _ in 0..settings.projectile_count {
        let heading = sample_heading(rng, settings);
        let seed = ProjectileSeed {
            position: caster_pos,
            heading,
            speed,
            cast_id,
            duration_secs: settings.duration_secs,
            pierce: settings.pierce,
            fork: settings.fork,
            chain: settings.chain,
            split_capacity: settings.split,
            has_split: false,
        };
        world_setup::spawn_projectile(world, seed, now, rng);
    }
}

/// Initial heading for one projectile of a cast.
fn sample_heading(rng: &mut ChaCha8Rng, settings: &SimSettings) -> f64 {
    match settings.cast_shape {
        CastShape::Circular => rng.gen::<f64>() * std::f64::consts::TAU,
        CastShape::Cone => {
            // Symmetric draw avoids an empty-range panic at half-angle 0.
            let offset = (rng.gen::<f64>() * 2.0 - 1.0) * settings.cone_half_angle;
            settings.facing + offset
        }
    }
}
