mod render_instance;
mod renderer;
mod renderer_config;
mod sink;

pub use render_instance::RenderInstance;
pub use renderer::Renderer;
pub use renderer_config::RendererConfig;
pub use sink::{SignalSink, WireSink};
