//! Lander - rocket landing game
//!
//! Opens a window and flies the rocket with the arrow keys, or runs a
//! scripted session without a display.
//!
//! Usage:
//!   lander [--config <lander.toml>] [--assets <dir>] [--log <filter>]
//!   lander --headless [--frames N] [--frame-ms MS] [--hold up:0-30 ...]

use anyhow::{Context, Result};
use clap::Parser;
use lander_asset::{ManualHost, ThreadedHost};
use lander_audio::AudioEngine;
use lander_core::LanderConfig;
use lander_physics::RapierWorld;
use lander_player::scene::world_def;
use lander_player::{
    init_logging, GameLoop, HeadlessRun, KeyHold, LogRenderer, PlayerApp, Scene,
};
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "lander")]
#[command(about = "Land a rocket on the moon")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Asset directory, overriding the config and LANDER_ASSET_ROOT
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "lander_asset=debug" (RUST_LOG wins)
    #[arg(long)]
    log: Option<String>,

    /// Run without a window, using synthetic frame timestamps
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Milliseconds between headless frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Hold a key in headless mode, e.g. "up:0-30" (repeatable)
    #[arg(long = "hold", value_name = "KEY:FROM-TO")]
    holds: Vec<KeyHold>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log.as_deref());

    let config = load_config(&args)?;

    if args.headless {
        run_headless(&config, &args)
    } else {
        run_window(config)
    }
}

fn load_config(args: &Args) -> Result<LanderConfig> {
    let mut config = match &args.config {
        Some(path) => LanderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LanderConfig::from_env(),
    };

    if let Some(root) = &args.assets {
        config.assets.root = root.clone();
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

fn run_headless(config: &LanderConfig, args: &Args) -> Result<()> {
    let world = RapierWorld::new(&world_def(config));
    let scene = Scene::build(config, world, ManualHost::new());
    // Nothing is drawn or heard, so every asset arrives immediately
    scene.loader.host().complete_all();

    let mut game = GameLoop::new(config, scene);
    let run = HeadlessRun {
        frames: args.frames,
        frame_ms: args.frame_ms,
        holds: args.holds.clone(),
    };
    let mut renderer = LogRenderer::new();

    match run.run(&mut game, &mut renderer).and_then(|report| report.pose) {
        Some(pose) => println!(
            "Final pose: x {:.3} y {:.3} angle {:.4} rad",
            pose.position.x, pose.position.y, pose.angle
        ),
        None => println!("No frames run"),
    }
    println!(
        "{} steps, {:.3}s simulated",
        game.clock().steps,
        game.clock().total_time
    );

    Ok(())
}

fn run_window(config: LanderConfig) -> Result<()> {
    let world = RapierWorld::new(&world_def(&config));
    let host = ThreadedHost::new(&config.assets.root);
    let scene = Scene::build(&config, world, host);
    let thrust_sound = scene.thrust_sound.clone();

    let mut game = GameLoop::new(&config, scene);
    let audio = AudioEngine::new();
    if let Some(player) = thrust_sound.and_then(|sound| audio.cue_player(sound, true)) {
        game.set_thrust_cue(Box::new(player));
    }

    println!("Controls:");
    println!("  Up     - Thrust");
    println!("  Left   - Turn left");
    println!("  Right  - Turn right");
    println!("  Escape - Exit");

    // Create and run the event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(game, (config.view.width, config.view.height));
    event_loop.run_app(&mut app)?;

    Ok(())
}
