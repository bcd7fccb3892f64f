use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::VEHICLE_HALF_EXTENTS;
use crate::geometry::{forward_from_heading, Aabb};

/// Kinematic state of the car.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    /// World position of the box centre.
    pub position: Vec3,
    /// Degrees from +Z. Not wrapped.
    pub heading: f32,
    /// Signed speed in units/s, positive is forward along the heading.
    pub speed: f32,
}

impl VehicleState {
    pub fn new(position: Vec3, heading: f32, speed: f32) -> Self {
        VehicleState {
            position,
            heading,
            speed,
        }
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, 0.0, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        forward_from_heading(self.heading)
    }

    pub fn is_reversing(&self) -> bool {
        self.speed < 0.0
    }
}

/// Half extents of the car's bounding box (half width, half height, half length).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleShape {
    pub half_extents: Vec3,
}

impl VehicleShape {
    pub fn new(half_extents: Vec3) -> Self {
        VehicleShape { half_extents }
    }

    /// Bounding box of the car centred on `position`. The box never rotates.
    pub fn bounds_at(&self, position: Vec3) -> Aabb {
        Aabb::new(position, self.half_extents)
    }
}

impl Default for VehicleShape {
    fn default() -> Self {
        VehicleShape::new(VEHICLE_HALF_EXTENTS)
    }
}
