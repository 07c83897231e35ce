//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod emission;
pub mod motion;
pub mod resolve;
pub mod snapshot;
