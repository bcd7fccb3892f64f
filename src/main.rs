use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chase_drive::constants::{CRATE_MAX_HALF_EXTENT, GROUND_HALF_SIZE};
use chase_drive::{ControlInput, DriveStatistics, SceneConfig, VehicleSimulation};

mod controls;
mod rendering;

use controls::{KeyBindings, KeyboardInput, ViewerCommand};
use rendering::{stats_display, GroundRenderer, SceneRenderer, View};

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
const FPS: u32 = 60;
const STATS_INTERVAL_SECS: u64 = 5;

#[derive(Parser, Debug)]
#[command(name = "chase_drive", version, about = "Drive a car around a box course")]
struct Args {
    /// Scene JSON to load instead of the built-in wall course.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Random crates to scatter on top of the scene.
    #[arg(long, default_value_t = 0)]
    obstacles: usize,

    /// Seed for crate placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pixels per world unit.
    #[arg(long, default_value_t = 12.0)]
    scale: f32,
}

fn main() -> Result<(), String> {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let args = Args::parse();
    let scene = load_scene(&args)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Chase Drive", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let mut session = DriveSession::new(scene, args.scale.max(1.0));
    let mut event_pump = sdl_context.event_pump()?;
    let mut running = true;
    let mut last_frame = Instant::now();
    let mut last_report = Instant::now();

    controls::print_controls();
    tracing::info!(
        obstacles = session.simulation.obstacles().len(),
        "simulation started"
    );

    while running {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for event in event_pump.poll_iter() {
            match session.keyboard.process_event(&event) {
                ViewerCommand::Exit => running = false,
                ViewerCommand::Reset => session.reset(),
                ViewerCommand::None => {}
            }
        }

        session.update(delta_time);
        session.render(&mut canvas)?;

        if last_report.elapsed() >= Duration::from_secs(STATS_INTERVAL_SECS) {
            session.log_periodic_stats();
            last_report = Instant::now();
        }

        let frame_time = now.elapsed();
        let frame_budget = Duration::from_millis(1000 / FPS as u64);
        if frame_time < frame_budget {
            std::thread::sleep(frame_budget - frame_time);
        }
    }

    session.statistics.log_summary();
    Ok(())
}

fn load_scene(args: &Args) -> Result<SceneConfig, String> {
    let mut scene = match &args.scene {
        Some(path) => SceneConfig::load(path).map_err(|e| e.to_string())?,
        None => SceneConfig::default(),
    };

    if args.obstacles > 0 {
        let seed = args.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, count = args.obstacles, "scattering crates");
        let mut rng = StdRng::seed_from_u64(seed);
        scene.scatter_obstacles(
            &mut rng,
            args.obstacles,
            GROUND_HALF_SIZE - CRATE_MAX_HALF_EXTENT,
        );
    }

    Ok(scene)
}

struct DriveSession {
    scene: SceneConfig,
    simulation: VehicleSimulation,
    keyboard: KeyboardInput,
    statistics: DriveStatistics,
    last_blocked_by: Option<usize>,
    scale: f32,
}

impl DriveSession {
    fn new(scene: SceneConfig, scale: f32) -> Self {
        let simulation = scene.build();
        DriveSession {
            scene,
            simulation,
            keyboard: KeyboardInput::new(KeyBindings::default()),
            statistics: DriveStatistics::new(),
            last_blocked_by: None,
            scale,
        }
    }

    fn update(&mut self, delta_time: f32) {
        let input = ControlInput::from_state(self.keyboard.state());
        let report = self
            .simulation
            .step_with_report(delta_time, input.throttle, input.steer);
        self.statistics.record(&report, delta_time);
        self.last_blocked_by = report.blocked_by;
    }

    fn reset(&mut self) {
        self.simulation.reset(self.scene.start);
        self.last_blocked_by = None;
        tracing::info!("car returned to the start");
    }

    fn render(
        &self,
        canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
    ) -> Result<(), String> {
        let (width, height) = canvas.output_size()?;
        let view = View::new(self.simulation.state().position, self.scale, width, height);

        GroundRenderer::render_background(canvas);
        GroundRenderer::render_ground(canvas, &view)?;
        SceneRenderer::render_obstacles(canvas, &view, &self.simulation, self.last_blocked_by)?;
        SceneRenderer::render_vehicle(canvas, &view, &self.simulation)?;
        stats_display::render_speed_gauge(
            canvas,
            &self.simulation.state(),
            self.simulation.config(),
            &self.statistics,
        )?;

        canvas.present();
        Ok(())
    }

    fn log_periodic_stats(&self) {
        let state = self.simulation.state();
        tracing::info!(
            x = format_args!("{:.1}", state.position.x),
            z = format_args!("{:.1}", state.position.z),
            heading = format_args!("{:.0}", chase_drive::geometry::wrap_degrees(state.heading)),
            speed = format_args!("{:.2}", state.speed),
            contacts = self.statistics.contacts,
            "drive status"
        );
    }
}
