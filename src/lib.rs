//! Arcade car simulation.
//!
//! [`VehicleSimulation`] owns the car's position, heading and speed plus a set of
//! static box obstacles. A host calls [`VehicleSimulation::step`] once per frame
//! with the frame time and normalized throttle/steer, then reads the state back
//! to place the model and camera. Moves that would overlap an obstacle are
//! rejected outright and the car stops.

pub mod constants;
pub mod core;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod statistics;

pub use crate::core::{
    CollisionDetector, ConfigError, PhysicsConfig, StaticObstacle, StepReport, VehicleShape,
    VehicleSimulation, VehicleState,
};
pub use geometry::Aabb;
pub use input::{ControlInput, DriveAction, InputState};
pub use scene::{SceneConfig, SceneError};
pub use statistics::{DriveStatistics, DriveSummary};
