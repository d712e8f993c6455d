//! Per-frame orchestration: update, then a load-gated render
//!
//! Each frame runs, in order:
//! 1. drain asset completions into the loader's counters
//! 2. advance the simulation clock to the frame timestamp
//! 3. turn the rocket's control flags into impulses
//! 4. sync the thrust cue with whether any control is held
//! 5. step the physics engine, if the clock produced a step
//!
//! and then renders: always a clear, and the scene only once every
//! registered asset has arrived. The loop never stops by itself; the owner
//! calls [`GameLoop::stop`] and checks [`GameLoop::is_running`].

use crate::render::{ground_tiles, rocket_sprite, DrawCommand, Renderer};
use crate::scene::{Scene, ROCKET_IMAGE, TILES_IMAGE};
use lander_asset::{AssetHost, ResourceLoader};
use lander_audio::{AudioCue, CuePlayer};
use lander_core::{LanderConfig, Pose, RocketConfig, SolverConfig, ViewConfig};
use lander_physics::{Actor, PhysicsEngine};
use lander_runtime::{InputController, SimulationClock, StepDecision};
use std::time::Duration;
use winit::keyboard::KeyCode;

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub step: StepDecision,
    /// Whether the scene was drawn
    pub ready: bool,
    /// Rocket pose after the step
    pub pose: Option<Pose>,
}

pub struct GameLoop<E: PhysicsEngine, H: AssetHost> {
    engine: E,
    loader: ResourceLoader<H>,
    clock: SimulationClock,
    input: InputController,
    rocket: Actor<E::Body>,
    thrust_cue: Option<AudioCue<Box<dyn CuePlayer>>>,
    solver: SolverConfig,
    view: ViewConfig,
    rocket_config: RocketConfig,
    running: bool,
}

impl<E: PhysicsEngine, H: AssetHost> GameLoop<E, H> {
    pub fn new(config: &LanderConfig, scene: Scene<E, H>) -> Self {
        Self {
            engine: scene.engine,
            loader: scene.loader,
            clock: SimulationClock::new(config.clock.min_step),
            input: InputController::new(),
            rocket: scene.rocket,
            thrust_cue: None,
            solver: config.solver.clone(),
            view: config.view.clone(),
            rocket_config: config.rocket.clone(),
            running: true,
        }
    }

    /// Attach the looped sound that plays while any control is held
    pub fn set_thrust_cue(&mut self, player: Box<dyn CuePlayer>) {
        self.thrust_cue = Some(AudioCue::new(player));
    }

    /// Forward a key press to the rocket's controls. Returns true if bound.
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        self.input.key_down(key, self.rocket.control_mut())
    }

    /// Forward a key release to the rocket's controls. Returns true if bound.
    pub fn key_up(&mut self, key: KeyCode) -> bool {
        self.input.key_up(key, self.rocket.control_mut())
    }

    /// The update phase for a frame at `now`
    pub fn update(&mut self, now: Duration) -> StepDecision {
        self.loader.poll_completions();

        let step = self.clock.advance(now);

        self.rocket.apply_controls(&mut self.engine, self.view.scale);

        if let Some(cue) = &mut self.thrust_cue {
            cue.update(self.rocket.control().any_active());
        }

        if let StepDecision::Step(dt) = step {
            self.engine.step(
                dt,
                self.solver.velocity_iterations,
                self.solver.position_iterations,
            );
        }

        step
    }

    /// The render phase. Returns whether the scene was drawn.
    pub fn render(&self, renderer: &mut dyn Renderer) -> bool {
        renderer.draw(DrawCommand::Clear);

        if !self.loader.is_fully_loaded() {
            return false;
        }

        for tile in ground_tiles(&self.view, TILES_IMAGE) {
            renderer.draw(tile);
        }
        if let Some(pose) = self.pose() {
            renderer.draw(rocket_sprite(
                &self.view,
                &self.rocket_config,
                pose,
                ROCKET_IMAGE,
            ));
        }
        true
    }

    /// Update then render one frame
    pub fn frame(&mut self, now: Duration, renderer: &mut dyn Renderer) -> FrameReport {
        let step = self.update(now);
        let ready = self.render(renderer);
        FrameReport {
            step,
            ready,
            pose: self.pose(),
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "stopping after {} steps, {:.2}s simulated",
                self.clock.steps,
                self.clock.total_time
            );
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current rocket pose
    pub fn pose(&self) -> Option<Pose> {
        self.rocket.pose(&self.engine)
    }

    pub fn rocket(&self) -> &Actor<E::Body> {
        &self.rocket
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn loader(&self) -> &ResourceLoader<H> {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut ResourceLoader<H> {
        &mut self.loader
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_cue_playing(&self) -> bool {
        self.thrust_cue.as_ref().is_some_and(|cue| cue.is_playing())
    }
}
