use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// Immovable box the car cannot drive into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticObstacle {
    pub center: Vec3,
    pub half_extents: Vec3,
    /// Label used in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StaticObstacle {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        StaticObstacle {
            center,
            half_extents,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.center, self.half_extents)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

pub struct CollisionDetector;

impl CollisionDetector {
    /// Index of the first obstacle the box would overlap, if any.
    pub fn first_collision(vehicle: &Aabb, obstacles: &[StaticObstacle]) -> Option<usize> {
        obstacles
            .iter()
            .position(|obstacle| vehicle.overlaps(&obstacle.bounds()))
    }

    pub fn is_clear(vehicle: &Aabb, obstacles: &[StaticObstacle]) -> bool {
        Self::first_collision(vehicle, obstacles).is_none()
    }
}
