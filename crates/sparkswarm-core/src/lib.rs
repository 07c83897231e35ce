//! Core types and definitions for the SPARKSWARM simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, settings, snapshot views, and constants.
//! It has no dependency on any runtime framework or host.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
