//! Cleanup system: expiry by duration plus the survivor rebuild.
//!
//! Hit resolution and expiry both push into the shared despawn buffer;
//! draining it here, after iteration, is what makes mid-tick removal
//! safe without iterator invalidation.

use hecs::{Entity, World};

use sparkswarm_core::components::Projectile;

/// Collect projectiles whose age strictly exceeds their duration, then
/// despawn everything accumulated in the buffer this tick.
pub fn run(world: &mut World, now: f64, despawn_buffer: &mut Vec<Entity>) {
    for (entity, proj) in world.query_mut::<&Projectile>() {
        if proj.is_expired(now) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        // A projectile can be both hit-removed and expired; the second
        // despawn is a harmless no-op.
        let _ = world.despawn(entity);
    }
}
