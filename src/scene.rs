//! Drive course descriptions.
//!
//! A [`SceneConfig`] bundles everything needed to start a simulation: tuning,
//! car size, obstacles and the starting state. Scenes are stored as JSON; any
//! top-level field left out falls back to the default course (one wall twenty
//! units ahead of the car).

use std::fmt;
use std::path::Path;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::core::{
    CollisionDetector, ConfigError, PhysicsConfig, StaticObstacle, VehicleShape, VehicleSimulation,
    VehicleState,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub physics: PhysicsConfig,
    pub vehicle: VehicleShape,
    pub obstacles: Vec<StaticObstacle>,
    pub start: VehicleState,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            physics: PhysicsConfig::default(),
            vehicle: VehicleShape::default(),
            obstacles: vec![StaticObstacle::new(WALL_CENTER, WALL_HALF_EXTENTS).named("wall")],
            start: VehicleState::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        let scene: SceneConfig =
            serde_json::from_str(json).map_err(|e| SceneError::Parse(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SceneError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let scene = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            obstacles = scene.obstacles.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    pub fn to_json_string(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.physics.validate()?;

        if !is_positive_extent(self.vehicle.half_extents) {
            return Err(SceneError::InvalidVehicle);
        }
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.center.is_finite() || !is_positive_extent(obstacle.half_extents) {
                return Err(SceneError::InvalidObstacle { index });
            }
        }
        Ok(())
    }

    /// Drop `count` random crates onto the ground within `spread` of the origin.
    ///
    /// `spread` is limited to the ground; a non-finite value covers all of it.
    /// Crates never cover the car's starting box. A crate that cannot be placed
    /// after a bounded number of tries is skipped. Returns how many were added.
    pub fn scatter_obstacles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        spread: f32,
    ) -> usize {
        let ground_spread = GROUND_HALF_SIZE - CRATE_MAX_HALF_EXTENT;
        let spread = if spread.is_finite() {
            spread.abs().clamp(CRATE_MAX_HALF_EXTENT, ground_spread)
        } else {
            ground_spread
        };
        let start_bounds = self.vehicle.bounds_at(self.start.position);
        let mut placed = 0;

        for _ in 0..count {
            for _ in 0..SCATTER_MAX_ATTEMPTS {
                let half = rng.gen_range(CRATE_MIN_HALF_EXTENT..=CRATE_MAX_HALF_EXTENT);
                let half_extents = Vec3::new(half, half, half);
                let center = Vec3::new(
                    rng.gen_range(-spread..=spread),
                    half,
                    rng.gen_range(-spread..=spread),
                );
                let obstacle = StaticObstacle::new(center, half_extents)
                    .named(format!("crate {}", self.obstacles.len()));

                if CollisionDetector::is_clear(&start_bounds, std::slice::from_ref(&obstacle)) {
                    self.obstacles.push(obstacle);
                    placed += 1;
                    break;
                }
            }
        }

        if placed < count {
            tracing::warn!(requested = count, placed, "could not place every crate");
        }
        placed
    }

    pub fn build(&self) -> VehicleSimulation {
        VehicleSimulation::new(
            self.physics.clone(),
            self.vehicle,
            self.obstacles.clone(),
            self.start,
        )
    }
}

fn is_positive_extent(half_extents: Vec3) -> bool {
    half_extents.is_finite() && half_extents.cmpgt(Vec3::ZERO).all()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    Io { path: String, detail: String },
    Parse(String),
    Config(ConfigError),
    InvalidVehicle,
    InvalidObstacle { index: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "could not read scene {path}: {detail}"),
            Self::Parse(detail) => write!(f, "invalid scene json: {detail}"),
            Self::Config(err) => write!(f, "invalid physics: {err}"),
            Self::InvalidVehicle => {
                write!(f, "vehicle half extents must be finite and positive")
            }
            Self::InvalidObstacle { index } => write!(
                f,
                "obstacle {index} needs a finite centre and positive half extents"
            ),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(err: ConfigError) -> Self {
        SceneError::Config(err)
    }
}
