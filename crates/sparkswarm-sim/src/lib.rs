//! Simulation kernel for SPARKSWARM.
//!
//! Owns the hecs ECS world, runs the fixed-timestep projectile
//! systems, and produces `SimSnapshot`s for the host to poll.

pub mod cooldown;
pub mod engine;
pub mod metrics;
pub mod systems;
pub mod wander;
pub mod world_setup;

pub use engine::SimEngine;
pub use sparkswarm_core as core;
pub use sparkswarm_geom as geom;
