//! The physics engine interface consumed by the game loop

use lander_core::{Pose, Vec2};

/// Global world settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldDef {
    /// Acceleration applied to every dynamic body, y pointing down
    pub gravity: Vec2,
    /// Let resting bodies sleep
    pub allow_sleep: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    Dynamic,
}

/// Surface and mass properties of a body's shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

/// An axis-aligned box body, in physics units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub kind: BodyKind,
    /// Center of the box
    pub position: Vec2,
    pub half_extents: Vec2,
    pub material: Material,
}

/// What the game needs from a rigid-body engine
pub trait PhysicsEngine {
    type Body: Copy + std::fmt::Debug;

    /// Add a body with a single box collider
    fn create_body(&mut self, def: &BodyDef) -> Self::Body;

    /// Current position and orientation
    fn pose(&self, body: Self::Body) -> Option<Pose>;

    /// Center of mass in world coordinates
    fn world_center(&self, body: Self::Body) -> Option<Vec2>;

    /// Apply an impulse at a world point. Returns false if the body is unknown.
    fn apply_impulse(&mut self, body: Self::Body, impulse: Vec2, point: Vec2) -> bool;

    /// Advance the simulation by `dt` seconds with fixed solver budgets
    fn step(&mut self, dt: f64, velocity_iterations: usize, position_iterations: usize);
}
