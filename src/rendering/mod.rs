pub mod ground_renderer;
pub mod rect_extensions;
pub mod scene_renderer;
pub mod stats_display;
pub mod view;

pub use ground_renderer::GroundRenderer;
pub use scene_renderer::SceneRenderer;
pub use view::View;
