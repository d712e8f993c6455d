//! Physics world wrapping Rapier 2D

use crate::engine::{BodyDef, BodyKind, PhysicsEngine, WorldDef};
use lander_core::{Pose, Vec2};
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

/// Wraps Rapier's physics pipeline and body/collider sets
pub struct RapierWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
    allow_sleep: bool,
}

impl RapierWorld {
    pub fn new(def: &WorldDef) -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![def.gravity.x, def.gravity.y],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            allow_sleep: def.allow_sleep,
        }
    }

    /// Linear velocity of a body, in units per second
    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set
            .get(handle)
            .map(|b| Vec2::new(b.linvel().x, b.linvel().y))
    }

    /// Angular velocity of a body, in radians per second
    pub fn angular_velocity(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.rigid_body_set.get(handle).map(|b| b.angvel())
    }
}

impl PhysicsEngine for RapierWorld {
    type Body = RigidBodyHandle;

    fn create_body(&mut self, def: &BodyDef) -> RigidBodyHandle {
        let builder = match def.kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Static => RigidBodyBuilder::fixed(),
        };
        let body = builder
            .translation(vector![def.position.x, def.position.y])
            .can_sleep(self.allow_sleep)
            .build();
        let handle = self.rigid_body_set.insert(body);

        let collider = ColliderBuilder::cuboid(def.half_extents.x, def.half_extents.y)
            .density(def.material.density)
            .friction(def.material.friction)
            .restitution(def.material.restitution)
            .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        // Mass is otherwise only refreshed on the next step; impulses may arrive first
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.recompute_mass_properties_from_colliders(&self.collider_set);
        }

        log::debug!(
            "created {:?} body at ({:.2}, {:.2})",
            def.kind,
            def.position.x,
            def.position.y
        );
        handle
    }

    fn pose(&self, body: RigidBodyHandle) -> Option<Pose> {
        self.rigid_body_set.get(body).map(|b| {
            let t = b.translation();
            Pose::new(Vec2::new(t.x, t.y), b.rotation().angle())
        })
    }

    fn world_center(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(body).map(|b| {
            let c = b.center_of_mass();
            Vec2::new(c.x, c.y)
        })
    }

    fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vec2, point: Vec2) -> bool {
        let Some(b) = self.rigid_body_set.get_mut(body) else {
            return false;
        };
        b.apply_impulse_at_point(vector![impulse.x, impulse.y], point![point.x, point.y], true);
        true
    }

    fn step(&mut self, dt: f64, velocity_iterations: usize, position_iterations: usize) {
        self.integration_parameters.dt = dt as Real;
        self.integration_parameters.num_solver_iterations =
            NonZeroUsize::new(velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters.num_internal_stabilization_iterations = position_iterations;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }
}
