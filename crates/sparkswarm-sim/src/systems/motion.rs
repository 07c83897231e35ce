//! Sub-stepped CCD motion: Wander heading update, swept-circle target
//! detection, hit resolution dispatch, and terrain reflection.
//!
//! The tick is split into enough equal substeps that no substep covers
//! more than `CCD_MAX_STEP`, and within each substep the target is
//! tested along the swept path before the move is committed, so even
//! extreme per-frame displacements cannot tunnel through the target.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::components::{Position, Projectile};
use sparkswarm_core::config::SimSettings;
use sparkswarm_core::constants::{CCD_MAX_STEP, DT, PROJECTILE_RADIUS};
use sparkswarm_geom::{swept_circle_hit_t, swept_circle_segment_toi, Arena, SegmentImpact};

use crate::cooldown::CooldownLedger;
use crate::metrics::HitStats;
use crate::systems::resolve::{self, HitContext, HitOutcome};
use crate::wander::Wander;
use crate::world_setup::ProjectileSeed;

/// Separation restored between a reflected projectile and the wall.
const WALL_EXIT_EPS: f64 = 1e-3;

/// Read-only context shared by every projectile this tick.
pub struct MotionCtx<'a> {
    pub arena: &'a Arena,
    pub settings: &'a SimSettings,
    pub target_id: u32,
    pub target_pos: DVec2,
    pub target_radius: f64,
    /// Simulation time at the start of this tick.
    pub now: f64,
}

/// Advance every live projectile by one fixed timestep.
pub fn run(
    world: &mut World,
    ctx: &MotionCtx,
    rng: &mut ChaCha8Rng,
    cooldowns: &mut CooldownLedger,
    stats: &mut HitStats,
    spawn_buffer: &mut Vec<ProjectileSeed>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let combined_r = ctx.target_radius + PROJECTILE_RADIUS;

    for (entity, (pos, proj, wander)) in
        world.query_mut::<(&mut Position, &mut Projectile, &mut Wander)>()
    {
        proj.heading = wander.step(proj.heading, DT, rng);
        let mut vel = proj.velocity();

        let travel = vel.length() * DT;
        let substeps = (travel / CCD_MAX_STEP).ceil().max(1.0) as u32;
        let sub_dt = DT / substeps as f64;

        'substeps: for _ in 0..substeps {
            let start = pos.0;
            let d = vel * sub_dt;
            let mut end = start + d;

            // Target first: swept test along the full substep path.
            if let Some(t) = swept_circle_hit_t(start, d, ctx.target_pos, combined_r) {
                let contact = start + d * t;
                if !cooldowns.try_register(proj.cast_id, ctx.target_id, ctx.now) {
                    // Gated: the hit does not register and the
                    // projectile passes through unaffected.
                } else {
                    stats.record(ctx.now, ctx.settings.avg_hit);
                    let hit_ctx = HitContext {
                        contact,
                        outward: outward_normal(contact, ctx.target_pos, d),
                        target_pos: ctx.target_pos,
                        combined_r,
                        fork_extra_chance_pct: ctx.settings.fork_extra_chance_pct,
                        now: ctx.now,
                    };
                    match resolve::resolve_branch(proj, &hit_ctx, rng, spawn_buffer).1 {
                        HitOutcome::Removed => {
                            pos.0 = contact;
                            despawn_buffer.push(entity);
                            break 'substeps;
                        }
                        HitOutcome::Kept { position } => {
                            // Pierce: resume from the exit point and
                            // consume the remaining substep fraction.
                            end = position + d * (1.0 - t);
                        }
                    }
                }
            }

            // Terrain second. The swept capsule path is authoritative
            // for segment walls; the discrete query corrects the rest.
            let applied = end - start;
            if let Some(imp) = earliest_wall_impact(ctx.arena, start, applied) {
                // Lift slightly off the wall so the next substep's
                // swept query doesn't re-trigger at t = 0.
                pos.0 = start + applied * imp.t + imp.normal * WALL_EXIT_EPS;
                vel = reflect(vel, imp.normal);
                proj.heading = vel.y.atan2(vel.x);
            } else {
                pos.0 = end;
                if let Some(contact) = ctx.arena.collide_circle(pos.0, PROJECTILE_RADIUS) {
                    pos.0 = contact.corrected;
                    vel = reflect(vel, contact.normal);
                    proj.heading = vel.y.atan2(vel.x);
                }
            }
        }
    }
}

/// Earliest swept impact against any wall segment of the arena.
/// Returns `None` for arenas without segment walls.
fn earliest_wall_impact(arena: &Arena, start: DVec2, d: DVec2) -> Option<SegmentImpact> {
    let mut best: Option<SegmentImpact> = None;
    for seg in arena.segments() {
        if let Some(imp) = swept_circle_segment_toi(start, d, seg.a, seg.b, PROJECTILE_RADIUS) {
            if best.map_or(true, |prev| imp.t < prev.t) {
                best = Some(imp);
            }
        }
    }
    best
}

/// Mirror `v` about the contact normal: v' = v - 2(v.n)n.
fn reflect(v: DVec2, n: DVec2) -> DVec2 {
    v - 2.0 * v.dot(n) * n
}

/// Unit normal from the target center toward the contact point, with a
/// safe fallback when the contact is degenerate (spawned dead-center).
fn outward_normal(contact: DVec2, target_pos: DVec2, d: DVec2) -> DVec2 {
    (contact - target_pos)
        .try_normalize()
        .or_else(|| d.try_normalize().map(|dir| -dir))
        .unwrap_or(DVec2::X)
}
