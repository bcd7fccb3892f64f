//! Abstract driving controls.
//!
//! The host maps whatever device it reads (keyboard, pad) onto [`DriveAction`]s,
//! and [`ControlInput::from_state`] folds the held actions into the normalized
//! throttle and steer values the simulation consumes.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveAction {
    Accelerate,
    Reverse,
    SteerLeft,
    SteerRight,
}

impl DriveAction {
    pub const ALL: [DriveAction; 4] = [
        DriveAction::Accelerate,
        DriveAction::Reverse,
        DriveAction::SteerLeft,
        DriveAction::SteerRight,
    ];
}

/// Which actions are currently held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<DriveAction, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: DriveAction) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: DriveAction) {
        self.set(action, false);
    }

    pub fn set(&mut self, action: DriveAction, active: bool) {
        self.held.insert(action, active);
    }

    pub fn is_active(&self, action: DriveAction) -> bool {
        self.held.get(&action).copied().unwrap_or(false)
    }

    // Called when the window loses focus so no key stays stuck down
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Normalized per-frame control values, both in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    /// Positive drives forward, negative brakes and then reverses.
    pub throttle: f32,
    /// Positive turns left.
    pub steer: f32,
}

impl ControlInput {
    pub fn new(throttle: f32, steer: f32) -> Self {
        ControlInput { throttle, steer }
    }

    /// Opposing actions cancel out, so holding both gives zero.
    pub fn from_state(state: &InputState) -> Self {
        let mut throttle = 0.0;
        if state.is_active(DriveAction::Accelerate) {
            throttle += 1.0;
        }
        if state.is_active(DriveAction::Reverse) {
            throttle -= 1.0;
        }

        let mut steer = 0.0;
        if state.is_active(DriveAction::SteerLeft) {
            steer += 1.0;
        }
        if state.is_active(DriveAction::SteerRight) {
            steer -= 1.0;
        }

        ControlInput { throttle, steer }
    }
}
