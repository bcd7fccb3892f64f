//! Tuning for the arcade drive model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Rates and caps used by [`VehicleSimulation`](super::VehicleSimulation).
///
/// Every field falls back to the built-in tuning when missing from a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Speed gained per second at full forward throttle.
    pub acceleration: f32,
    /// Speed lost per second at full reverse throttle.
    pub brake: f32,
    /// Rolling resistance applied only with zero throttle.
    pub friction: f32,
    pub max_forward_speed: f32,
    pub max_reverse_speed: f32,
    /// Degrees per second at full steer.
    pub turn_rate: f32,
    /// Speeds smaller than this in magnitude snap to zero.
    pub deadzone: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            acceleration: ACCELERATION,
            brake: BRAKE,
            friction: FRICTION,
            max_forward_speed: MAX_FORWARD_SPEED,
            max_reverse_speed: MAX_REVERSE_SPEED,
            turn_rate: TURN_RATE,
            deadzone: SPEED_DEADZONE,
        }
    }
}

impl PhysicsConfig {
    /// Reverse speed cap derived the default way, as half the forward cap.
    pub fn with_max_speed(mut self, max_forward_speed: f32) -> Self {
        self.max_forward_speed = max_forward_speed;
        self.max_reverse_speed = max_forward_speed * 0.5;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("acceleration", self.acceleration),
            ("brake", self.brake),
            ("friction", self.friction),
            ("max_forward_speed", self.max_forward_speed),
            ("max_reverse_speed", self.max_reverse_speed),
            ("turn_rate", self.turn_rate),
            ("deadzone", self.deadzone),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// A physics field that cannot drive the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str },
    Negative { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "physics field `{field}` must be finite"),
            Self::Negative { field, value } => {
                write!(f, "physics field `{field}` must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
