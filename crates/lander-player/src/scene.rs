//! The landing scene: a floor along the bottom tile row, a rocket resting
//! on it near the left edge, and the assets they are drawn and heard with

use lander_asset::{AssetHandle, AssetHost, ResourceLoader};
use lander_core::{LanderConfig, Vec2};
use lander_physics::{Actor, BodyDef, BodyKind, Material, PhysicsEngine, WorldDef};
use lander_runtime::ControlState;

pub const ROCKET_IMAGE: &str = "rocket";
pub const TILES_IMAGE: &str = "tiles";
pub const THRUST_SOUND: &str = "rocket-thrust";

pub fn world_def(config: &LanderConfig) -> WorldDef {
    WorldDef {
        gravity: config.world.gravity(),
        allow_sleep: config.world.allow_sleep,
    }
}

/// Static box under the ground tile row
pub fn floor_body(config: &LanderConfig) -> BodyDef {
    let view = &config.view;
    let scale = view.scale;
    let tile = view.tile_size as f32;

    BodyDef {
        kind: BodyKind::Static,
        position: Vec2::new(
            view.width as f32 / 2.0 / scale,
            (view.ground_top() + tile / 2.0) / scale,
        ),
        half_extents: Vec2::new(view.tiles_x() as f32 * tile / scale, tile / 2.0 / scale),
        material: body_material(config),
    }
}

/// Dynamic rocket box, one and a half tiles in, standing on the ground row
pub fn rocket_body(config: &LanderConfig) -> BodyDef {
    let view = &config.view;
    let rocket = &config.rocket;
    let scale = view.scale;
    let tile = view.tile_size as f32;

    BodyDef {
        kind: BodyKind::Dynamic,
        position: Vec2::new(
            (tile + tile / 2.0) / scale,
            (view.ground_top() - rocket.height / 2.0) / scale,
        ),
        half_extents: Vec2::new(rocket.width / 2.0 / scale, rocket.height / 2.0 / scale),
        material: body_material(config),
    }
}

fn body_material(config: &LanderConfig) -> Material {
    Material {
        density: config.rocket.density,
        friction: config.rocket.friction,
        restitution: config.rocket.restitution,
    }
}

/// Everything the game loop starts from
pub struct Scene<E: PhysicsEngine, H: AssetHost> {
    pub engine: E,
    pub floor: E::Body,
    pub rocket: Actor<E::Body>,
    pub loader: ResourceLoader<H>,
    /// Looped engine sound, absent when the host plays no supported codec
    pub thrust_sound: Option<AssetHandle<H::Audio>>,
}

impl<E: PhysicsEngine, H: AssetHost> Scene<E, H> {
    /// Create the bodies in `engine` and start loading assets through `host`
    pub fn build(config: &LanderConfig, mut engine: E, host: H) -> Self {
        let floor = engine.create_body(&floor_body(config));
        let body = engine.create_body(&rocket_body(config));
        let rocket = Actor::new(body, ControlState::from_config(&config.rocket));

        let assets = &config.assets;
        let mut loader = ResourceLoader::new(host);
        for (key, source) in [
            (ROCKET_IMAGE, &assets.rocket_image),
            (TILES_IMAGE, &assets.tiles_image),
        ] {
            if let Err(e) = loader.register_image(key, source) {
                log::warn!("{e}");
            }
        }

        let thrust_sound = match loader.register_audio(THRUST_SOUND, &assets.thrust_sound) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::info!("{e}; continuing without sound");
                None
            }
        };

        Self {
            engine,
            floor,
            rocket,
            loader,
            thrust_sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_asset::ManualHost;
    use lander_physics::RapierWorld;

    #[test]
    fn test_floor_under_ground_row() {
        let floor = floor_body(&LanderConfig::default());
        assert_eq!(floor.kind, BodyKind::Static);
        // (544 + 16) / 4
        assert_eq!(floor.position, Vec2::new(100.0, 140.0));
        assert_eq!(floor.half_extents, Vec2::new(200.0, 4.0));
    }

    #[test]
    fn test_rocket_rests_on_floor() {
        let config = LanderConfig::default();
        let rocket = rocket_body(&config);
        let floor = floor_body(&config);

        assert_eq!(rocket.kind, BodyKind::Dynamic);
        assert_eq!(rocket.position, Vec2::new(12.0, 132.25));
        assert_eq!(rocket.half_extents, Vec2::new(1.375, 3.75));

        let rocket_bottom = rocket.position.y + rocket.half_extents.y;
        let floor_top = floor.position.y - floor.half_extents.y;
        assert_eq!(rocket_bottom, floor_top);
    }

    #[test]
    fn test_build_registers_assets() {
        let config = LanderConfig::default();
        let world = RapierWorld::new(&world_def(&config));
        let scene = Scene::build(&config, world, ManualHost::new());

        assert_eq!(scene.engine.rigid_body_set.len(), 2);
        assert_eq!(
            scene.loader.host().image_sources(),
            vec!["images/rocket.png", "images/platformer-tiles.png"]
        );
        assert_eq!(scene.loader.host().audio_sources(), vec!["sound/rocket.ogg"]);
        assert_eq!(scene.loader.image_progress().total, 2);
        assert_eq!(scene.loader.audio_progress().total, 1);
        assert!(scene.thrust_sound.is_some());
        assert!(!scene.loader.is_fully_loaded());
    }

    #[test]
    fn test_build_without_codec() {
        let config = LanderConfig::default();
        let world = RapierWorld::new(&world_def(&config));
        let scene = Scene::build(&config, world, ManualHost::default());

        assert!(scene.thrust_sound.is_none());
        assert_eq!(scene.loader.audio_progress().total, 0);
        assert_eq!(scene.loader.image_progress().total, 2);
    }
}
