use glam::Vec3;

/// Unit vector a heading (degrees) points along. Heading 0 faces +Z.
pub fn forward_from_heading(heading: f32) -> Vec3 {
    let radians = heading.to_radians();
    Vec3::new(radians.sin(), 0.0, radians.cos())
}

/// Move `position` along `heading` by a signed distance. Y is left alone.
pub fn move_along_heading(position: Vec3, heading: f32, distance: f32) -> Vec3 {
    position + forward_from_heading(heading) * distance
}

/// Fold a heading into `[0, 360)`.
pub fn wrap_degrees(heading: f32) -> f32 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
