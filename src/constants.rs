use glam::Vec3;

// Vehicle tuning
pub const MAX_FORWARD_SPEED: f32 = 12.0;
// reverse is capped at half the forward speed
pub const MAX_REVERSE_SPEED: f32 = MAX_FORWARD_SPEED * 0.5;
pub const ACCELERATION: f32 = 20.0; // units/s^2
pub const BRAKE: f32 = 30.0;
pub const FRICTION: f32 = 6.0;
pub const TURN_RATE: f32 = 90.0; // degrees per second at full steer
pub const SPEED_DEADZONE: f32 = 0.01;

// Car footprint as half extents (width, height, length)
pub const VEHICLE_HALF_EXTENTS: Vec3 = Vec3::new(0.75, 0.5, 1.5);

// The wall from the default course
pub const WALL_CENTER: Vec3 = Vec3::new(0.0, 2.0, 20.0);
pub const WALL_HALF_EXTENTS: Vec3 = Vec3::new(2.0, 2.0, 0.25);

// Ground plane spans [-GROUND_HALF_SIZE, GROUND_HALF_SIZE] on X and Z
pub const GROUND_HALF_SIZE: f32 = 50.0;

// Random crates
pub const CRATE_MIN_HALF_EXTENT: f32 = 0.5;
pub const CRATE_MAX_HALF_EXTENT: f32 = 2.0;
pub const SCATTER_MAX_ATTEMPTS: usize = 32;
