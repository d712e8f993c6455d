//! Lander Runtime - Game loop building blocks
//!
//! - `SimulationClock` - turns frame timestamps into floor-clamped physics steps
//! - `ControlState` - per-actor intent flags and tuning constants
//! - `InputController` - maps key presses and releases onto control flags

mod clock;
mod control;
mod input;

pub use clock::{SimulationClock, StepDecision};
pub use control::{Control, ControlState};
pub use input::InputController;
