//! Draw commands for one frame
//!
//! Pixels are someone else's job: the game produces a list of commands and
//! a [`Renderer`] consumes them. A frame is a clear, then (once every asset
//! has arrived) the ground tile row and the rocket sprite.

use lander_core::{Pose, RocketConfig, Vec2, ViewConfig};

/// A source rectangle on a sprite sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface with the background
    Clear,
    /// Copy `source` from the sheet image `sheet` to the top-left corner `dest`
    Tile {
        sheet: &'static str,
        source: TileRect,
        dest: Vec2,
    },
    /// Draw `image` translated to `center`, rotated by `angle` radians, with
    /// its top-left corner at `offset` from the center
    Sprite {
        image: &'static str,
        center: Vec2,
        angle: f32,
        offset: Vec2,
    },
}

/// Consumer of draw commands
pub trait Renderer {
    fn draw(&mut self, command: DrawCommand);
}

/// Collects commands, mostly for inspection in tests
impl Renderer for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Renderer that only traces what it would draw
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    commands: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames started (clears seen)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn commands(&self) -> u64 {
        self.commands
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, command: DrawCommand) {
        if command == DrawCommand::Clear {
            self.frames += 1;
        }
        self.commands += 1;
        log::trace!("frame {}: {:?}", self.frames, command);
    }
}

/// The ground row: the sheet cell at `(tile, 0)` copied into every column
/// of the bottom tile row
pub fn ground_tiles(view: &ViewConfig, sheet: &'static str) -> Vec<DrawCommand> {
    let tile = view.tile_size;
    let source = TileRect {
        x: tile,
        y: 0,
        width: tile,
        height: tile,
    };
    let row_y = view.ground_top();

    (0..view.tiles_x())
        .map(|x| DrawCommand::Tile {
            sheet,
            source,
            dest: Vec2::new((x * tile) as f32, row_y),
        })
        .collect()
}

/// The rocket sprite at `pose`, converted from physics units to pixels
pub fn rocket_sprite(
    view: &ViewConfig,
    rocket: &RocketConfig,
    pose: Pose,
    image: &'static str,
) -> DrawCommand {
    DrawCommand::Sprite {
        image,
        center: pose.position * view.scale,
        angle: pose.angle,
        offset: Vec2::new(-(rocket.width / 2.0).ceil(), -(rocket.height / 2.0).ceil()),
    }
}
