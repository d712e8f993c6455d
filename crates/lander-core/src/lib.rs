//! Lander Core - Foundational types for the lander game
//!
//! This crate provides the types that all other lander crates depend on:
//! - `Vec2`, `Pose` - Planar spatial types in physics units
//! - `LanderConfig` - TOML configuration with per-section defaults
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{
    AssetConfig, ClockConfig, LanderConfig, RocketConfig, SolverConfig, ViewConfig, WorldConfig,
};
pub use error::{LanderError, Result};
pub use types::{Pose, Vec2};
