//! Simulation engine — the core of the kernel.
//!
//! `SimEngine` owns the hecs ECS world, the cooldown ledger, the hit
//! statistics, and the seeded RNG. It processes host commands at tick
//! boundaries, runs all systems at a fixed timestep, and produces
//! `SimSnapshot`s. Completely headless, enabling deterministic tests
//! driven by synthetic time.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::commands::SimCommand;
use sparkswarm_core::components::{Caster, Position, Projectile, Target};
use sparkswarm_core::config::{SimConfig, SimSettings};
use sparkswarm_core::constants::{DEFAULT_TARGET_RADIUS, DT, MAX_FRAME_DT};
use sparkswarm_core::state::SimSnapshot;
use sparkswarm_core::types::SimTime;
use sparkswarm_geom::Arena;

use crate::cooldown::CooldownLedger;
use crate::metrics::HitStats;
use crate::systems;
use crate::systems::motion::MotionCtx;
use crate::world_setup::{self, ProjectileSeed};

/// The simulation engine. Owns the ECS world and all kernel state.
pub struct SimEngine {
    world: World,
    arena: Arena,
    time: SimTime,
    running: bool,
    settings: SimSettings,
    canvas: (f64, f64),
    seed: u64,
    rng: ChaCha8Rng,
    next_cast_id: u64,
    cast_timer: f64,
    cooldowns: CooldownLedger,
    stats: HitStats,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    spawn_buffer: Vec<ProjectileSeed>,
    frame_accumulator: f64,
}

impl SimEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let arena = Arena::build(
            config.settings.arena,
            config.canvas_width,
            config.canvas_height,
        );
        let mut world = World::new();
        world_setup::setup_entities(&mut world, &arena, config.settings.target_radius);

        Self {
            world,
            arena,
            time: SimTime::default(),
            running: false,
            canvas: (config.canvas_width, config.canvas_height),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            settings: config.settings,
            next_cast_id: 0,
            cast_timer: 0.0,
            cooldowns: CooldownLedger::default(),
            stats: HitStats::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            spawn_buffer: Vec::new(),
            frame_accumulator: 0.0,
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Consume one wall-clock frame delta and run as many fixed steps
    /// as it covers. The delta is clamped so a stalled host drops the
    /// excess instead of queueing a catch-up burst.
    pub fn advance(&mut self, frame_dt: f64) -> SimSnapshot {
        self.frame_accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        while self.frame_accumulator >= DT {
            self.frame_accumulator -= DT;
            self.step();
        }
        self.snapshot()
    }

    /// Advance exactly one fixed step and return the snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.step();
        self.snapshot()
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.running,
            &self.cooldowns,
            &self.stats,
        )
    }

    /// Rebuild the arena for a new canvas size; caster and target move
    /// to the fresh spawn points.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas = (width, height);
        self.rebuild_arena();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    /// Spawn a wander-free projectile (deterministic trajectory tests).
    #[cfg(test)]
    pub fn spawn_straight_projectile(&mut self, seed: ProjectileSeed) -> Entity {
        world_setup::spawn_with_wander(
            &mut self.world,
            seed,
            self.time.elapsed_secs,
            crate::wander::Wander::inert(),
        )
    }

    #[cfg(test)]
    pub fn stats(&self) -> &HitStats {
        &self.stats
    }

    #[cfg(test)]
    pub fn cooldowns(&self) -> &CooldownLedger {
        &self.cooldowns
    }

    /// One fixed step: commands, emission, motion, cleanup, spawning.
    fn step(&mut self) {
        self.process_commands();

        let now = self.time.elapsed_secs;
        let (target_id, target_pos, target_radius) = self.target_info();
        let caster_pos = self.caster_position();

        if self.running {
            systems::emission::run(
                &mut self.world,
                &mut self.rng,
                &self.settings,
                caster_pos,
                &mut self.cast_timer,
                &mut self.next_cast_id,
                now,
            );
        }

        let ctx = MotionCtx {
            arena: &self.arena,
            settings: &self.settings,
            target_id,
            target_pos,
            target_radius,
            now,
        };
        systems::motion::run(
            &mut self.world,
            &ctx,
            &mut self.rng,
            &mut self.cooldowns,
            &mut self.stats,
            &mut self.spawn_buffer,
            &mut self.despawn_buffer,
        );

        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer);

        // Children spawned by branch resolutions join the live set now,
        // after iteration, which is what makes mid-tick spawning safe.
        for seed in self.spawn_buffer.drain(..) {
            world_setup::spawn_projectile(&mut self.world, seed, now, &mut self.rng);
        }

        self.time.advance();
        self.stats.prune(self.time.elapsed_secs);
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Start => {
                if !self.running {
                    self.running = true;
                    // First cast fires on the next tick.
                    self.cast_timer = 0.0;
                }
            }
            SimCommand::Stop => {
                self.running = false;
            }
            SimCommand::Reset => {
                self.reset();
            }
            SimCommand::ApplySettings(settings) => {
                let arena_changed = settings.arena != self.settings.arena;
                self.settings = settings;
                for (_entity, target) in self.world.query_mut::<&mut Target>() {
                    target.radius = self.settings.target_radius;
                }
                if arena_changed {
                    self.rebuild_arena();
                }
            }
            SimCommand::MoveCaster(position) => {
                for (_entity, (_caster, pos)) in
                    self.world.query_mut::<(&Caster, &mut Position)>()
                {
                    pos.0 = position;
                }
            }
            SimCommand::MoveTarget(position) => {
                for (_entity, (_target, pos)) in
                    self.world.query_mut::<(&Target, &mut Position)>()
                {
                    pos.0 = position;
                }
            }
        }
    }

    /// Clear all projectiles, counters, cooldowns and the cast-id
    /// counter; reseed the RNG so a reset run replays identically.
    fn reset(&mut self) {
        let projectiles: Vec<Entity> = self
            .world
            .query_mut::<&Projectile>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in projectiles {
            let _ = self.world.despawn(entity);
        }

        self.time = SimTime::default();
        self.running = false;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.next_cast_id = 0;
        self.cast_timer = 0.0;
        self.cooldowns.clear();
        self.stats.reset();
        self.frame_accumulator = 0.0;
        self.place_entities_at_spawns();
    }

    fn rebuild_arena(&mut self) {
        self.arena = Arena::build(self.settings.arena, self.canvas.0, self.canvas.1);
        self.place_entities_at_spawns();
    }

    fn place_entities_at_spawns(&mut self) {
        let caster_spawn = self.arena.caster_spawn();
        let target_spawn = self.arena.target_spawn();
        for (_entity, (_caster, pos)) in self.world.query_mut::<(&Caster, &mut Position)>() {
            pos.0 = caster_spawn;
        }
        for (_entity, (_target, pos)) in self.world.query_mut::<(&Target, &mut Position)>() {
            pos.0 = target_spawn;
        }
    }

    fn target_info(&self) -> (u32, DVec2, f64) {
        self.world
            .query::<(&Target, &Position)>()
            .iter()
            .next()
            .map(|(_, (target, pos))| (target.id, pos.0, target.radius))
            .unwrap_or((world_setup::TARGET_ID, DVec2::ZERO, DEFAULT_TARGET_RADIUS))
    }

    fn caster_position(&self) -> DVec2 {
        self.world
            .query::<(&Caster, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, pos))| pos.0)
            .unwrap_or_default()
    }
}
