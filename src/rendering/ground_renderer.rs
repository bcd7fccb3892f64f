use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use chase_drive::constants::GROUND_HALF_SIZE;

use super::view::View;

const GRID_SPACING: f32 = 5.0;

pub struct GroundRenderer;

impl GroundRenderer {
    pub fn render_background(canvas: &mut Canvas<Window>) {
        canvas.set_draw_color(Color::RGB(13, 13, 18));
        canvas.clear();
    }

    pub fn render_ground(canvas: &mut Canvas<Window>, view: &View) -> Result<(), String> {
        let (left, top) = view.to_screen(GROUND_HALF_SIZE, GROUND_HALF_SIZE);
        let (right, bottom) = view.to_screen(-GROUND_HALF_SIZE, -GROUND_HALF_SIZE);

        canvas.set_draw_color(Color::RGB(92, 64, 40));
        canvas.fill_rect(View::rect_between((left, top), (right, bottom)))?;

        canvas.set_draw_color(Color::RGB(120, 88, 58));
        let lines = (2.0 * GROUND_HALF_SIZE / GRID_SPACING) as i32;
        for i in 0..=lines {
            let offset = -GROUND_HALF_SIZE + i as f32 * GRID_SPACING;

            let start = view.to_screen(offset, GROUND_HALF_SIZE);
            let end = view.to_screen(offset, -GROUND_HALF_SIZE);
            canvas.draw_line(start, end)?;

            let start = view.to_screen(GROUND_HALF_SIZE, offset);
            let end = view.to_screen(-GROUND_HALF_SIZE, offset);
            canvas.draw_line(start, end)?;
        }

        Ok(())
    }
}
