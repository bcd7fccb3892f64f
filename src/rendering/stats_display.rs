use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use chase_drive::{DriveStatistics, PhysicsConfig, VehicleState};

const BAR_WIDTH: u32 = 240;
const BAR_HEIGHT: u32 = 16;
const MARGIN: i32 = 16;

/// Speed gauge in the bottom-left corner plus a contact counter.
pub fn render_speed_gauge(
    canvas: &mut Canvas<Window>,
    state: &VehicleState,
    config: &PhysicsConfig,
    stats: &DriveStatistics,
) -> Result<(), String> {
    let (_, window_height) = canvas.output_size()?;
    let x = MARGIN;
    let y = window_height as i32 - MARGIN - BAR_HEIGHT as i32;

    canvas.set_draw_color(Color::RGB(40, 40, 40));
    canvas.fill_rect(Rect::new(x, y, BAR_WIDTH, BAR_HEIGHT))?;

    let (cap, color) = if state.is_reversing() {
        (config.max_reverse_speed, Color::RGB(255, 150, 0))
    } else {
        (config.max_forward_speed, Color::RGB(80, 220, 80))
    };
    let fraction = if cap > 0.0 {
        (state.speed.abs() / cap).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * BAR_WIDTH as f32) as u32;
    if filled > 0 {
        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(x, y, filled, BAR_HEIGHT))?;
    }

    canvas.set_draw_color(Color::RGB(200, 200, 200));
    canvas.draw_rect(Rect::new(x, y, BAR_WIDTH, BAR_HEIGHT))?;

    // One pip per contact, capped so the row stays on screen
    let pip_y = y - 14;
    let pip_color = if stats.is_in_contact() {
        Color::RGB(255, 0, 0)
    } else {
        Color::RGB(200, 80, 80)
    };
    canvas.set_draw_color(pip_color);
    for i in 0..stats.contacts.min(25) {
        canvas.fill_rect(Rect::new(x + i as i32 * 9, pip_y, 6, 10))?;
    }

    Ok(())
}
