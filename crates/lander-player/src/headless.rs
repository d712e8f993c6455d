//! Running the game without a window
//!
//! Frames are driven by synthetic timestamps `frame * frame_ms` and keys by
//! a schedule of holds, so a run is fully reproducible.

use crate::game_loop::{FrameReport, GameLoop};
use crate::render::Renderer;
use lander_asset::AssetHost;
use lander_core::{LanderError, Result};
use lander_physics::PhysicsEngine;
use std::str::FromStr;
use std::time::Duration;
use winit::keyboard::KeyCode;

/// A key held down from frame `from` up to, not including, frame `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHold {
    pub key: KeyCode,
    pub from: u32,
    pub to: u32,
}

/// Parses `KEY:FROM-TO`, e.g. `up:0-30`. Keys are `up`, `left`, `right`.
impl FromStr for KeyHold {
    type Err = LanderError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, range) = s
            .split_once(':')
            .ok_or_else(|| LanderError::InputError(format!("expected KEY:FROM-TO, got '{s}'")))?;

        let key = match name.trim().to_ascii_lowercase().as_str() {
            "up" => KeyCode::ArrowUp,
            "left" => KeyCode::ArrowLeft,
            "right" => KeyCode::ArrowRight,
            other => {
                return Err(LanderError::InputError(format!(
                    "unknown key '{other}' (expected up, left or right)"
                )))
            }
        };

        let (from, to) = range
            .split_once('-')
            .ok_or_else(|| LanderError::InputError(format!("expected FROM-TO, got '{range}'")))?;
        let parse = |n: &str| {
            n.trim()
                .parse::<u32>()
                .map_err(|e| LanderError::InputError(format!("bad frame number '{n}': {e}")))
        };
        let (from, to) = (parse(from)?, parse(to)?);

        if to <= from {
            return Err(LanderError::InputError(format!(
                "hold '{s}' ends before it starts"
            )));
        }

        Ok(KeyHold { key, from, to })
    }
}

/// A scripted run
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub frames: u32,
    pub frame_ms: u64,
    pub holds: Vec<KeyHold>,
}

impl HeadlessRun {
    /// Press and release keys scheduled for `frame`
    fn apply_holds<E: PhysicsEngine, H: AssetHost>(&self, game: &mut GameLoop<E, H>, frame: u32) {
        for hold in &self.holds {
            if hold.from == frame {
                game.key_down(hold.key);
            }
            if hold.to == frame {
                game.key_up(hold.key);
            }
        }
    }

    /// Drive `game` for the scheduled frames or until it is stopped.
    ///
    /// Returns the last frame's report, if any frame ran.
    pub fn run<E: PhysicsEngine, H: AssetHost>(
        &self,
        game: &mut GameLoop<E, H>,
        renderer: &mut dyn Renderer,
    ) -> Option<FrameReport> {
        let mut last = None;

        for frame in 0..self.frames {
            if !game.is_running() {
                break;
            }
            self.apply_holds(game, frame);
            let now = Duration::from_millis(u64::from(frame) * self.frame_ms);
            last = Some(game.frame(now, renderer));
        }

        if let Some(report) = &last {
            log::debug!("headless run finished: {report:?}");
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{world_def, Scene};
    use lander_asset::ManualHost;
    use lander_core::LanderConfig;
    use lander_physics::RapierWorld;
    use lander_runtime::StepDecision;

    fn game() -> GameLoop<RapierWorld, ManualHost> {
        let config = LanderConfig::default();
        let world = RapierWorld::new(&world_def(&config));
        let scene = Scene::build(&config, world, ManualHost::new());
        scene.loader.host().complete_all();
        GameLoop::new(&config, scene)
    }

    #[test]
    fn test_parse_hold() {
        let hold: KeyHold = "up:10-40".parse().unwrap();
        assert_eq!(
            hold,
            KeyHold {
                key: KeyCode::ArrowUp,
                from: 10,
                to: 40
            }
        );
        assert_eq!("LEFT: 0-1".parse::<KeyHold>().unwrap().key, KeyCode::ArrowLeft);
    }

    #[test]
    fn test_parse_hold_errors() {
        for bad in ["up", "down:0-5", "up:5", "up:a-5", "up:5-5", "right:9-2"] {
            assert!(
                matches!(bad.parse::<KeyHold>(), Err(LanderError::InputError(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_idle_rocket_stays_on_floor() {
        let mut game = game();
        let run = HeadlessRun {
            frames: 120,
            frame_ms: 16,
            holds: Vec::new(),
        };
        let mut frame = Vec::new();

        let report = run.run(&mut game, &mut frame).unwrap();
        assert!(report.ready);
        let pose = report.pose.unwrap();
        assert!((pose.position.y - 132.25).abs() < 0.1);
        assert!(pose.angle.abs() < 0.01);
    }

    #[test]
    fn test_thrust_lifts_rocket() {
        let mut game = game();
        let run = HeadlessRun {
            frames: 60,
            frame_ms: 33,
            holds: vec![KeyHold {
                key: KeyCode::ArrowUp,
                from: 0,
                to: 60,
            }],
        };
        let mut frame = Vec::new();

        let report = run.run(&mut game, &mut frame).unwrap();
        assert!(report.pose.unwrap().position.y < 130.0);
        assert!(game.rocket().control().thrusting());
    }

    #[test]
    fn test_hold_released_on_schedule() {
        let mut game = game();
        let run = HeadlessRun {
            frames: 10,
            frame_ms: 16,
            holds: vec![KeyHold {
                key: KeyCode::ArrowRight,
                from: 2,
                to: 5,
            }],
        };
        let mut frame = Vec::new();

        let report = run.run(&mut game, &mut frame).unwrap();
        assert!(!game.rocket().control().any_active());
        assert_eq!(report.step, StepDecision::Step(2.0 / 60.0));
        assert_eq!(game.clock().steps, 9);
    }

    #[test]
    fn test_stopped_game_runs_nothing() {
        let mut game = game();
        game.stop();
        let run = HeadlessRun {
            frames: 10,
            frame_ms: 16,
            holds: Vec::new(),
        };
        let mut frame = Vec::new();
        assert!(run.run(&mut game, &mut frame).is_none());
    }
}
