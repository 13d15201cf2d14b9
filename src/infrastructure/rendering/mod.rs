pub mod canvas_renderer;
pub mod chart_renderer;
pub mod surface;

pub use canvas_renderer::CanvasSurface;
pub use chart_renderer::{render_frame, FrameReport, OhlcReadout, RenderInput};
pub use surface::{CursorStyle, DrawCommand, DrawSurface, LineStyle, RecordingSurface};
