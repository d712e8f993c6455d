//! Player application implementing winit ApplicationHandler
//!
//! Owns the window and drives the game loop from redraw requests. Drawing
//! goes to a [`LogRenderer`]; the window title reports load progress and
//! then the rocket's pose.

use crate::game_loop::{FrameReport, GameLoop};
use crate::render::LogRenderer;
use lander_asset::{AssetHost, ResourceLoader};
use lander_physics::PhysicsEngine;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const TITLE: &str = "Lander";

pub struct PlayerApp<E: PhysicsEngine, H: AssetHost> {
    pub game: GameLoop<E, H>,
    window: Option<Arc<Window>>,
    renderer: LogRenderer,
    started: Instant,
    size: (u32, u32),
    title: String,
}

impl<E: PhysicsEngine, H: AssetHost> PlayerApp<E, H> {
    pub fn new(game: GameLoop<E, H>, size: (u32, u32)) -> Self {
        Self {
            game,
            window: None,
            renderer: LogRenderer::new(),
            started: Instant::now(),
            size,
            title: String::new(),
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1))
            .with_resizable(false);

        match event_loop.create_window(window_attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.shutdown(event_loop);
            }
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.game.stop();
        event_loop.exit();
    }

    fn tick(&mut self) {
        let report = self.game.frame(self.started.elapsed(), &mut self.renderer);

        let title = window_title(&report, self.game.loader());
        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }
}

/// Loading progress until the scene is ready, then the rocket pose
fn window_title<H: AssetHost>(report: &FrameReport, loader: &ResourceLoader<H>) -> String {
    if !report.ready {
        let images = loader.image_progress();
        let sounds = loader.audio_progress();
        return format!(
            "{TITLE} - loading {}/{} images, {}/{} sounds",
            images.loaded, images.total, sounds.loaded, sounds.total
        );
    }
    match report.pose {
        Some(pose) => format!(
            "{TITLE} - x {:.1} y {:.1} angle {:.0}°",
            pose.position.x,
            pose.position.y,
            pose.angle.to_degrees()
        ),
        None => TITLE.to_string(),
    }
}

impl<E: PhysicsEngine, H: AssetHost> ApplicationHandler for PlayerApp<E, H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => {
                        if key_code == KeyCode::Escape {
                            self.shutdown(event_loop);
                            return;
                        }
                        self.game.key_down(key_code);
                    }
                    ElementState::Released => {
                        self.game.key_up(key_code);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if self.game.is_running() {
                    self.tick();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.game.is_running() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_asset::ManualHost;
    use lander_core::{Pose, Vec2};
    use lander_runtime::StepDecision;

    fn loader() -> ResourceLoader<ManualHost> {
        let mut loader = ResourceLoader::new(ManualHost::new());
        loader.register_image("rocket", "images/rocket.png").unwrap();
        loader.register_audio("thrust", "sound/rocket").unwrap();
        loader
    }

    #[test]
    fn test_title_shows_progress() {
        let mut loader = loader();
        loader.host().complete_image("images/rocket.png");
        loader.poll_completions();

        let report = FrameReport {
            step: StepDecision::Skip,
            ready: false,
            pose: None,
        };
        assert_eq!(
            window_title(&report, &loader),
            "Lander - loading 1/1 images, 0/1 sounds"
        );
    }

    #[test]
    fn test_title_shows_pose() {
        let report = FrameReport {
            step: StepDecision::Step(0.1),
            ready: true,
            pose: Some(Pose::new(Vec2::new(12.0, 130.5), 0.0)),
        };
        assert_eq!(
            window_title(&report, &loader()),
            "Lander - x 12.0 y 130.5 angle 0°"
        );
    }
}
