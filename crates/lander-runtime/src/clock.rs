//! Simulation clock with a floor-clamped variable timestep
//!
//! Each tick the time since the previous tick becomes the physics step,
//! raised to `min_step` when shorter. There is no ceiling: a long stall is
//! handed to the engine as one long step. Because of the floor, a run of
//! very fast frames advances simulated time faster than wall-clock time;
//! `total_time` makes that drift observable.

use std::time::Duration;

/// Outcome of one clock tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepDecision {
    /// No reference timestamp yet, so no step this tick
    Skip,
    /// Advance the physics engine by this many seconds
    Step(f64),
}

impl StepDecision {
    pub fn dt(&self) -> Option<f64> {
        match self {
            StepDecision::Skip => None,
            StepDecision::Step(dt) => Some(*dt),
        }
    }
}

/// Converts host frame timestamps into physics timesteps
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Smallest step handed to the physics engine, in seconds
    min_step: f64,
    /// Timestamp of the previous tick, measured from an arbitrary origin
    last_tick: Option<Duration>,
    /// Total simulated time in seconds
    pub total_time: f64,
    /// Number of steps produced
    pub steps: u64,
}

impl SimulationClock {
    /// Create a clock that never steps by less than `min_step` seconds
    pub fn new(min_step: f64) -> Self {
        debug_assert!(min_step > 0.0);
        Self {
            min_step,
            last_tick: None,
            total_time: 0.0,
            steps: 0,
        }
    }

    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Timestamp recorded by the previous tick
    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }

    /// Advance the clock to `now`. Call once per frame.
    ///
    /// Timestamps that go backwards count as zero elapsed time and are
    /// floored like any other short frame.
    pub fn advance(&mut self, now: Duration) -> StepDecision {
        let Some(last) = self.last_tick.replace(now) else {
            return StepDecision::Skip;
        };

        let elapsed = now.saturating_sub(last).as_secs_f64();
        let dt = if elapsed < self.min_step {
            log::trace!("frame of {elapsed:.4}s raised to {:.4}s", self.min_step);
            self.min_step
        } else {
            elapsed
        };

        self.total_time += dt;
        self.steps += 1;
        StepDecision::Step(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_first_tick_skips() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        assert_eq!(clock.advance(ms(500)), StepDecision::Skip);
        assert_eq!(clock.last_tick(), Some(ms(500)));
        assert_eq!(clock.steps, 0);
    }

    #[test]
    fn test_short_frame_is_floored() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        clock.advance(ms(0));
        assert_eq!(clock.advance(ms(10)), StepDecision::Step(1.0 / 30.0));
    }

    #[test]
    fn test_long_frame_passes_through() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        clock.advance(ms(0));
        assert_eq!(clock.advance(ms(100)), StepDecision::Step(0.1));
    }

    #[test]
    fn test_no_ceiling_on_stalls() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        clock.advance(ms(0));
        assert_eq!(clock.advance(ms(5_000)), StepDecision::Step(5.0));
    }

    #[test]
    fn test_step_is_max_of_elapsed_and_floor() {
        let min_step = 1.0 / 30.0;
        for (a, b) in [(0u64, 1u64), (40, 50), (0, 33), (0, 34), (100, 350)] {
            let mut clock = SimulationClock::new(min_step);
            clock.advance(ms(a));
            let expected = ms(b - a).as_secs_f64().max(min_step);
            assert_eq!(clock.advance(ms(b)), StepDecision::Step(expected));
        }
    }

    #[test]
    fn test_elapsed_measured_from_previous_tick() {
        let mut clock = SimulationClock::new(0.001);
        clock.advance(ms(0));
        clock.advance(ms(20));
        assert_eq!(clock.advance(ms(50)), StepDecision::Step(0.03));
        assert_eq!(clock.last_tick(), Some(ms(50)));
    }

    #[test]
    fn test_backwards_timestamp_is_floored() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        clock.advance(ms(100));
        assert_eq!(clock.advance(ms(90)), StepDecision::Step(1.0 / 30.0));
    }

    #[test]
    fn test_fast_frames_run_ahead_of_wall_clock() {
        let mut clock = SimulationClock::new(1.0 / 30.0);
        clock.advance(ms(0));
        for i in 1..=60 {
            clock.advance(ms(i * 5));
        }
        // 300ms of wall time, 2s of simulated time
        assert_eq!(clock.steps, 60);
        assert!((clock.total_time - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_decision_dt() {
        assert_eq!(StepDecision::Skip.dt(), None);
        assert_eq!(StepDecision::Step(0.5).dt(), Some(0.5));
    }
}
