//! Keyboard to control-flag mapping

use crate::control::{Control, ControlState};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps key presses and releases onto [`ControlState`] flags.
///
/// Key-down sets the bound flag, key-up clears it, unbound keys are
/// ignored. Auto-repeat key-downs land on an already-set flag and change
/// nothing.
#[derive(Debug, Clone)]
pub struct InputController {
    bindings: HashMap<KeyCode, Control>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    /// Arrow keys: up thrusts, left and right turn
    pub fn new() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(KeyCode::ArrowUp, Control::Thrust);
        bindings.insert(KeyCode::ArrowLeft, Control::TurnLeft);
        bindings.insert(KeyCode::ArrowRight, Control::TurnRight);
        Self { bindings }
    }

    /// The control bound to `key`, if any
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    /// Process a key press. Returns true if the key is bound.
    pub fn key_down(&self, key: KeyCode, state: &mut ControlState) -> bool {
        self.apply(key, true, state)
    }

    /// Process a key release. Returns true if the key is bound.
    pub fn key_up(&self, key: KeyCode, state: &mut ControlState) -> bool {
        self.apply(key, false, state)
    }

    fn apply(&self, key: KeyCode, pressed: bool, state: &mut ControlState) -> bool {
        let Some(control) = self.control_for(key) else {
            return false;
        };
        if state.set(control, pressed) {
            log::trace!("{control:?} -> {pressed}");
        }
        true
    }
}
