use glam::Vec3;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use chase_drive::VehicleSimulation;

use super::rect_extensions::RectExtensions;
use super::view::View;

pub struct SceneRenderer;

impl SceneRenderer {
    pub fn render_obstacles(
        canvas: &mut Canvas<Window>,
        view: &View,
        simulation: &VehicleSimulation,
        blocked_by: Option<usize>,
    ) -> Result<(), String> {
        for (index, obstacle) in simulation.obstacles().iter().enumerate() {
            let bounds = obstacle.bounds();
            let rect = view.rect_for(bounds.min(), bounds.max());
            if !rect.is_on_screen(view.width, view.height) {
                continue;
            }

            let fill = if blocked_by == Some(index) {
                Color::RGB(200, 40, 40)
            } else {
                Color::RGB(150, 150, 160)
            };
            canvas.set_draw_color(fill);
            canvas.fill_rect(rect)?;

            canvas.set_draw_color(Color::RGB(30, 30, 30));
            canvas.draw_rect(rect)?;
        }
        Ok(())
    }

    pub fn render_vehicle(
        canvas: &mut Canvas<Window>,
        view: &View,
        simulation: &VehicleSimulation,
    ) -> Result<(), String> {
        let state = simulation.state();
        let half = simulation.shape().half_extents;

        // Collision box, which stays axis-aligned while the body turns
        let bounds = simulation.vehicle_bounds();
        canvas.set_draw_color(Color::RGB(90, 90, 110));
        canvas.draw_rect(view.rect_for(bounds.min(), bounds.max()))?;

        let forward = state.forward();
        let side = Vec3::new(forward.z, 0.0, -forward.x);
        let corners = [
            state.position + forward * half.z + side * half.x,
            state.position + forward * half.z - side * half.x,
            state.position - forward * half.z - side * half.x,
            state.position - forward * half.z + side * half.x,
            state.position + forward * half.z + side * half.x,
        ];
        let outline: Vec<Point> = corners
            .iter()
            .map(|corner| Point::from(view.to_screen(corner.x, corner.z)))
            .collect();

        canvas.set_draw_color(Color::RGB(220, 60, 50));
        canvas.draw_lines(outline.as_slice())?;

        // Nose marker
        let nose = state.position + forward * (half.z + 1.0);
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.draw_line(
            view.to_screen(state.position.x, state.position.z),
            view.to_screen(nose.x, nose.z),
        )?;

        Ok(())
    }
}
