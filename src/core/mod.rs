pub mod vehicle_data;
pub mod physics_config;
pub mod collision_detector;
pub mod simulation;

pub use collision_detector::{CollisionDetector, StaticObstacle};
pub use physics_config::{ConfigError, PhysicsConfig};
pub use simulation::{StepReport, VehicleSimulation};
pub use vehicle_data::{VehicleShape, VehicleState};
