//! Controlled actors and the impulses their control flags produce
//!
//! Per tick, for one actor:
//! - thrust pushes along the nose direction `(sin θ, -cos θ)` at the center of mass
//! - turning pushes sideways at a lever point above the center of mass,
//!   `(height / 2 + 1)` pixels up, converted to physics units
//! - left pushes `-turn_impulse` along x, right `+turn_impulse`; holding both
//!   applies both, a couple that mostly cancels translation

use crate::engine::PhysicsEngine;
use lander_core::{Pose, Vec2};
use lander_runtime::ControlState;

/// An impulse applied at a world point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub vector: Vec2,
    pub point: Vec2,
}

/// Impulses for one tick of `control` on a body at `pose` with center of mass `center`.
///
/// `scale` is pixels per physics unit.
pub fn control_impulses(
    control: &ControlState,
    pose: Pose,
    center: Vec2,
    scale: f32,
) -> Vec<Impulse> {
    let mut impulses = Vec::with_capacity(3);

    if control.thrusting() {
        impulses.push(Impulse {
            vector: pose.forward() * control.thrust(),
            point: center,
        });
    }

    if control.is_turning() {
        let lever = center + Vec2::UP * ((control.height() / 2.0 + 1.0) / scale);
        if control.turning_left() {
            impulses.push(Impulse {
                vector: Vec2::new(-control.turn_impulse(), 0.0),
                point: lever,
            });
        }
        if control.turning_right() {
            impulses.push(Impulse {
                vector: Vec2::new(control.turn_impulse(), 0.0),
                point: lever,
            });
        }
    }

    impulses
}

/// A physics body steered by its own control state
#[derive(Debug, Clone)]
pub struct Actor<B> {
    body: B,
    control: ControlState,
}

impl<B: Copy + std::fmt::Debug> Actor<B> {
    pub fn new(body: B, control: ControlState) -> Self {
        Self { body, control }
    }

    pub fn body(&self) -> B {
        self.body
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut ControlState {
        &mut self.control
    }

    /// Current pose, if the engine still knows the body
    pub fn pose<E: PhysicsEngine<Body = B>>(&self, engine: &E) -> Option<Pose> {
        engine.pose(self.body)
    }

    /// Apply this tick's impulses to the body and return them
    pub fn apply_controls<E: PhysicsEngine<Body = B>>(
        &self,
        engine: &mut E,
        scale: f32,
    ) -> Vec<Impulse> {
        if !self.control.any_active() {
            return Vec::new();
        }
        let (Some(pose), Some(center)) = (engine.pose(self.body), engine.world_center(self.body))
        else {
            log::warn!("actor body {:?} missing from physics world", self.body);
            return Vec::new();
        };

        let impulses = control_impulses(&self.control, pose, center, scale);
        for impulse in &impulses {
            engine.apply_impulse(self.body, impulse.vector, impulse.point);
        }
        impulses
    }
}
