mod engine;
mod frame;
mod frame_engine;
mod null_renderer;
mod primitives;

pub use engine::{ChartEngine, ChartHandle};
pub use frame::RenderFrame;
pub use frame_engine::{FrameEngine, FrameHandle, FrameStyle, build_frame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so painting code never
/// sees chart state or options.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoPaintStats, CairoRenderer};
