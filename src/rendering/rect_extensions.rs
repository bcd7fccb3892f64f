use sdl2::rect::Rect;

pub trait RectExtensions {
    fn is_on_screen(&self, width: u32, height: u32) -> bool;
}

impl RectExtensions for Rect {
    fn is_on_screen(&self, width: u32, height: u32) -> bool {
        self.right() > 0 && self.x() < width as i32 && self.bottom() > 0 && self.y() < height as i32
    }
}
