//! Game configuration
//!
//! Every section and field is optional; missing values fall back to the
//! tuning the game ships with. `LANDER_ASSET_ROOT` overrides `assets.root`.

use crate::{LanderError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that replaces `[assets] root`
pub const ASSET_ROOT_ENV: &str = "LANDER_ASSET_ROOT";

/// Simulation clock tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Smallest timestep handed to the physics engine, in seconds
    #[serde(default = "default_min_step")]
    pub min_step: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            min_step: default_min_step(),
        }
    }
}

fn default_min_step() -> f64 {
    2.0 / 60.0
}

/// Constraint solver iteration budgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_velocity_iterations")]
    pub velocity_iterations: usize,
    #[serde(default = "default_position_iterations")]
    pub position_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            velocity_iterations: default_velocity_iterations(),
            position_iterations: default_position_iterations(),
        }
    }
}

fn default_velocity_iterations() -> usize {
    8
}
fn default_position_iterations() -> usize {
    3
}

/// Physics world settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Global acceleration in units/s², y pointing down
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 2],
    #[serde(default = "default_true")]
    pub allow_sleep: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            allow_sleep: true,
        }
    }
}

impl WorldConfig {
    pub fn gravity(&self) -> Vec2 {
        Vec2::from_array(self.gravity)
    }
}

fn default_gravity() -> [f32; 2] {
    // Lunar surface gravity
    [0.0, 1.62519]
}
fn default_true() -> bool {
    true
}

/// Viewport and terrain tiling, in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_view_width")]
    pub width: u32,
    #[serde(default = "default_view_height")]
    pub height: u32,
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Pixels per physics unit
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_view_width(),
            height: default_view_height(),
            tile_size: default_tile_size(),
            scale: default_scale(),
        }
    }
}

impl ViewConfig {
    /// Number of whole tile columns that fit the view
    pub fn tiles_x(&self) -> u32 {
        self.width / self.tile_size
    }

    /// Number of whole tile rows that fit the view
    pub fn tiles_y(&self) -> u32 {
        self.height / self.tile_size
    }

    /// Top edge of the ground tile row, in pixels
    pub fn ground_top(&self) -> f32 {
        (self.tiles_y().saturating_sub(1) * self.tile_size) as f32
    }
}

fn default_view_width() -> u32 {
    800
}
fn default_view_height() -> u32 {
    600
}
fn default_tile_size() -> u32 {
    32
}
fn default_scale() -> f32 {
    4.0
}

/// The controlled rocket: sprite size, tuning, and material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketConfig {
    /// Sprite width in pixels
    #[serde(default = "default_rocket_width")]
    pub width: f32,
    /// Sprite height in pixels
    #[serde(default = "default_rocket_height")]
    pub height: f32,
    #[serde(default = "default_thrust")]
    pub thrust: f32,
    #[serde(default = "default_turn_impulse")]
    pub turn_impulse: f32,
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default = "default_restitution")]
    pub restitution: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            width: default_rocket_width(),
            height: default_rocket_height(),
            thrust: default_thrust(),
            turn_impulse: default_turn_impulse(),
            density: default_density(),
            friction: default_friction(),
            restitution: default_restitution(),
        }
    }
}

fn default_rocket_width() -> f32 {
    11.0
}
fn default_rocket_height() -> f32 {
    30.0
}
fn default_thrust() -> f32 {
    3.0
}
fn default_turn_impulse() -> f32 {
    0.5
}
fn default_density() -> f32 {
    1.0
}
fn default_friction() -> f32 {
    0.5
}
fn default_restitution() -> f32 {
    0.2
}

/// Asset locations, relative to `root`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_asset_root")]
    pub root: PathBuf,
    #[serde(default = "default_rocket_image")]
    pub rocket_image: String,
    #[serde(default = "default_tiles_image")]
    pub tiles_image: String,
    /// Audio path without extension; the detected codec's extension is appended
    #[serde(default = "default_thrust_sound")]
    pub thrust_sound: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
            rocket_image: default_rocket_image(),
            tiles_image: default_tiles_image(),
            thrust_sound: default_thrust_sound(),
        }
    }
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}
fn default_rocket_image() -> String {
    "images/rocket.png".to_string()
}
fn default_tiles_image() -> String {
    "images/platformer-tiles.png".to_string()
}
fn default_thrust_sound() -> String {
    "sound/rocket".to_string()
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanderConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub rocket: RocketConfig,
    #[serde(default)]
    pub assets: AssetConfig,
}

impl LanderConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LanderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, apply environment overrides, and validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: LanderConfig = toml::from_str(&content).map_err(|e| {
            LanderError::TomlParseError(format!("{}: {}", path.display(), e))
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var(ASSET_ROOT_ENV) {
            if !root.is_empty() {
                self.assets.root = PathBuf::from(root);
            }
        }
    }

    /// Reject values the loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.clock.min_step > 0.0) {
            return Err(LanderError::ConfigError(format!(
                "clock.min_step must be positive, got {}",
                self.clock.min_step
            )));
        }
        if self.solver.velocity_iterations == 0 || self.solver.position_iterations == 0 {
            return Err(LanderError::ConfigError(
                "solver iteration counts must be at least 1".into(),
            ));
        }
        if !(self.view.scale > 0.0) {
            return Err(LanderError::ConfigError(format!(
                "view.scale must be positive, got {}",
                self.view.scale
            )));
        }
        if self.view.tile_size == 0 {
            return Err(LanderError::ConfigError(
                "view.tile_size must be positive".into(),
            ));
        }
        if self.view.tiles_x() == 0 || self.view.tiles_y() == 0 {
            return Err(LanderError::ConfigError(format!(
                "view {}x{} is smaller than one {}px tile",
                self.view.width, self.view.height, self.view.tile_size
            )));
        }
        if !(self.rocket.width > 0.0 && self.rocket.height > 0.0) {
            return Err(LanderError::ConfigError(
                "rocket dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_tuning() {
        let config = LanderConfig::default();
        assert!((config.clock.min_step - 1.0 / 30.0).abs() < 1e-12);
        assert_eq!(config.solver.velocity_iterations, 8);
        assert_eq!(config.solver.position_iterations, 3);
        assert_eq!(config.world.gravity(), Vec2::new(0.0, 1.62519));
        assert_eq!(config.rocket.width, 11.0);
        assert_eq!(config.rocket.height, 30.0);
        assert_eq!(config.rocket.thrust, 3.0);
        assert_eq!(config.rocket.turn_impulse, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = LanderConfig::from_toml_str("").unwrap();
        assert_eq!(config.view.width, 800);
        assert_eq!(config.view.tile_size, 32);
    }

    #[test]
    fn test_partial_section() {
        let config = LanderConfig::from_toml_str(
            r#"
[rocket]
thrust = 5.0

[view]
width = 320
"#,
        )
        .unwrap();
        assert_eq!(config.rocket.thrust, 5.0);
        assert_eq!(config.rocket.turn_impulse, 0.5);
        assert_eq!(config.view.width, 320);
        assert_eq!(config.view.height, 600);
    }

    #[test]
    fn test_tile_grid() {
        let view = ViewConfig {
            width: 100,
            height: 70,
            tile_size: 32,
            scale: 4.0,
        };
        assert_eq!(view.tiles_x(), 3);
        assert_eq!(view.tiles_y(), 2);
        assert_eq!(view.ground_top(), 32.0);
    }

    #[test]
    fn test_rejects_zero_min_step() {
        let err = LanderConfig::from_toml_str("[clock]\nmin_step = 0.0\n").unwrap_err();
        assert!(matches!(err, LanderError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err =
            LanderConfig::from_toml_str("[solver]\nvelocity_iterations = 0\n").unwrap_err();
        assert!(matches!(err, LanderError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_view_smaller_than_tile() {
        let err = LanderConfig::from_toml_str("[view]\nheight = 16\n").unwrap_err();
        assert!(matches!(err, LanderError::ConfigError(_)));
    }

    #[test]
    fn test_parse_error_maps_to_toml_error() {
        let err = LanderConfig::from_toml_str("[clock\nmin_step = 1").unwrap_err();
        assert!(matches!(err, LanderError::TomlParseError(_)));
    }
}
