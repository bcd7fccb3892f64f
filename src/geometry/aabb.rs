use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box stored as a centre and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Overlap test on a single axis (0 = X, 1 = Y, 2 = Z).
    ///
    /// Strict: boxes whose faces touch exactly do not overlap.
    pub fn overlaps_axis(&self, other: &Aabb, axis: usize) -> bool {
        let distance = (self.center[axis] - other.center[axis]).abs();
        distance < self.half_extents[axis] + other.half_extents[axis]
    }

    /// Two boxes collide only when they overlap on all three axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (0..3).all(|axis| self.overlaps_axis(other, axis))
    }
}
