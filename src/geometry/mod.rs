pub mod aabb;
pub mod position;

pub use aabb::Aabb;
pub use position::{forward_from_heading, move_along_heading, wrap_degrees};
