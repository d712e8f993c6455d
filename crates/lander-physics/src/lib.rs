//! Lander Physics - Rigid-body integration
//!
//! Provides physics for the lander game:
//! - `PhysicsEngine` - the narrow interface the game loop drives
//! - `RapierWorld` - `PhysicsEngine` backed by Rapier 2D
//! - `Actor` - a controlled body and the impulses its control flags produce

pub mod actor;
pub mod engine;
pub mod world;

pub use actor::{control_impulses, Actor, Impulse};
pub use engine::{BodyDef, BodyKind, Material, PhysicsEngine, WorldDef};
pub use world::RapierWorld;
