//! Lander Player - the game loop and its front ends
//!
//! - `GameLoop` - per-frame update and load-gated render
//! - `Scene` - floor, rocket, and asset registration from a `LanderConfig`
//! - `Renderer` / `DrawCommand` - what a frame would draw
//! - `PlayerApp` - winit window driving the loop from redraws
//! - `HeadlessRun` - scripted runs with synthetic timestamps

mod game_loop;
pub mod headless;
pub mod logging;
mod player_app;
pub mod render;
pub mod scene;

pub use game_loop::{FrameReport, GameLoop};
pub use headless::{HeadlessRun, KeyHold};
pub use logging::init_logging;
pub use player_app::PlayerApp;
pub use render::{DrawCommand, LogRenderer, Renderer, TileRect};
pub use scene::Scene;
