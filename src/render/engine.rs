use crate::api::ChartOptions;
use crate::core::{ChartState, Viewport};
use crate::error::ChartResult;
use crate::platform::DrawingContext;

/// Factory side of a rendering engine.
///
/// `create` is called once per chart with the drawing context, the initial
/// (empty) data and the presentation options. The returned handle is the only
/// way the chart touches the visible output afterwards.
pub trait ChartEngine {
    type Handle: ChartHandle;

    fn create(
        self,
        context: DrawingContext,
        data: &ChartState,
        options: &ChartOptions,
    ) -> ChartResult<Self::Handle>;
}

/// Live connection between a chart and its engine.
pub trait ChartHandle {
    /// Repaints from the current data. Implementations may defer the actual
    /// paint; callers do not wait on it.
    fn redraw(&mut self, data: &ChartState) -> ChartResult<()>;

    /// Adopts new surface dimensions. Takes effect on the next redraw.
    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;
}
