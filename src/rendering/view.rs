use glam::Vec3;
use sdl2::rect::Rect;

/// Top-down projection centred on a focus point.
///
/// Looking down from +Y with +Z towards the top of the screen puts +X on the left.
pub struct View {
    pub focus: Vec3,
    /// Pixels per world unit.
    pub scale: f32,
    pub width: u32,
    pub height: u32,
}

impl View {
    pub fn new(focus: Vec3, scale: f32, width: u32, height: u32) -> Self {
        View {
            focus,
            scale,
            width,
            height,
        }
    }

    pub fn to_screen(&self, x: f32, z: f32) -> (i32, i32) {
        let center_x = self.width as f32 / 2.0;
        let center_y = self.height as f32 / 2.0;
        let screen_x = center_x - (x - self.focus.x) * self.scale;
        let screen_y = center_y - (z - self.focus.z) * self.scale;
        (screen_x.round() as i32, screen_y.round() as i32)
    }

    /// Screen rectangle covering the world-space box between `min` and `max` on X/Z.
    pub fn rect_for(&self, min: Vec3, max: Vec3) -> Rect {
        let (left, top) = self.to_screen(max.x, max.z);
        let (right, bottom) = self.to_screen(min.x, min.z);
        Self::rect_between((left, top), (right, bottom))
    }

    pub fn rect_between(top_left: (i32, i32), bottom_right: (i32, i32)) -> Rect {
        let width = (bottom_right.0 - top_left.0).max(1) as u32;
        let height = (bottom_right.1 - top_left.1).max(1) as u32;
        Rect::new(top_left.0, top_left.1, width, height)
    }
}
