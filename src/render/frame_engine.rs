use tracing::trace;

use crate::api::{AxisOptions, ChartOptions};
use crate::core::ticks::{format_value_tick, select_label_ticks, value_ticks};
use crate::core::{ChartState, LinearScale, PixelRect, Viewport};
use crate::error::ChartResult;
use crate::interaction::{DEFAULT_HIT_RADIUS_PX, PlotLayout, PointHit, resolve_pointer};
use crate::platform::DrawingContext;
use crate::render::{
    ChartEngine, ChartHandle, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

/// Visual constants used when turning chart state into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub line_width: f64,
    pub marker_size: f64,
    pub axis_width: f64,
    pub tick_length: f64,
    pub font_size_px: f64,
    pub value_tick_count: usize,
    pub axis_color: Color,
    pub text_color: Color,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            marker_size: 6.0,
            axis_width: 1.0,
            tick_length: 4.0,
            font_size_px: 11.0,
            value_tick_count: 5,
            axis_color: Color::rgb(0.6, 0.6, 0.6),
            text_color: Color::rgb(0.4, 0.4, 0.4),
        }
    }
}

/// Engine that lays chart state out as a [`RenderFrame`] and hands it to a
/// [`Renderer`] on every redraw.
#[derive(Debug, Default)]
pub struct FrameEngine<R: Renderer> {
    renderer: R,
    style: FrameStyle,
}

impl<R: Renderer> FrameEngine<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            style: FrameStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }
}

impl<R: Renderer> ChartEngine for FrameEngine<R> {
    type Handle = FrameHandle<R>;

    fn create(
        self,
        context: DrawingContext,
        data: &ChartState,
        options: &ChartOptions,
    ) -> ChartResult<Self::Handle> {
        let mut handle = FrameHandle {
            renderer: self.renderer,
            style: self.style,
            viewport: context.viewport.validated()?,
            context,
            options: options.clone(),
            layout: None,
            redraw_count: 0,
        };
        handle.redraw(data)?;
        Ok(handle)
    }
}

/// Handle returned by [`FrameEngine`].
#[derive(Debug)]
pub struct FrameHandle<R: Renderer> {
    renderer: R,
    style: FrameStyle,
    context: DrawingContext,
    viewport: Viewport,
    options: ChartOptions,
    layout: Option<PlotLayout>,
    redraw_count: usize,
}

impl<R: Renderer> FrameHandle<R> {
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn context(&self) -> DrawingContext {
        self.context
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Layout of the last drawn frame.
    #[must_use]
    pub fn layout(&self) -> Option<PlotLayout> {
        self.layout
    }

    #[must_use]
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    /// Samples a tooltip at pointer `(x, y)` would show.
    pub fn tooltip_at(&self, data: &ChartState, x: f64, y: f64) -> ChartResult<Vec<PointHit>> {
        self.resolve(data, x, y, true)
    }

    /// Samples hovering at pointer `(x, y)` would highlight.
    pub fn hover_at(&self, data: &ChartState, x: f64, y: f64) -> ChartResult<Vec<PointHit>> {
        self.resolve(data, x, y, false)
    }

    fn resolve(
        &self,
        data: &ChartState,
        x: f64,
        y: f64,
        tooltip: bool,
    ) -> ChartResult<Vec<PointHit>> {
        let Some(layout) = self.layout else {
            return Ok(Vec::new());
        };
        let options = if tooltip {
            self.options.tooltips
        } else {
            self.options.hover
        };
        resolve_pointer(&layout, data, x, y, options, DEFAULT_HIT_RADIUS_PX)
    }
}

impl<R: Renderer> ChartHandle for FrameHandle<R> {
    fn redraw(&mut self, data: &ChartState) -> ChartResult<()> {
        let (frame, layout) = build_frame(self.viewport, data, &self.options, self.style)?;
        self.renderer.render(&frame)?;
        self.layout = Some(layout);
        self.redraw_count += 1;
        trace!(
            redraws = self.redraw_count,
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "frame redrawn"
        );
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport.validated()?;
        self.context.viewport = self.viewport;
        Ok(())
    }
}

/// Lays out axes, legend, series lines and point markers for `data`.
pub fn build_frame(
    viewport: Viewport,
    data: &ChartState,
    options: &ChartOptions,
    style: FrameStyle,
) -> ChartResult<(RenderFrame, PlotLayout)> {
    let viewport = viewport.validated()?;
    let plot = plot_rect(viewport, data, options, style);
    let value_scale = LinearScale::padded_from_range(data.value_range(), (plot.bottom(), plot.y))?;
    let layout = PlotLayout { plot, value_scale };

    let mut frame = RenderFrame::new(viewport);
    push_value_axis(&mut frame, &layout, &options.y_axis, style);
    push_label_axis(&mut frame, &layout, data, &options.x_axis, style);
    if options.legend.display {
        push_legend(&mut frame, data, style);
    }
    push_series(&mut frame, &layout, data, style);

    Ok((frame, layout))
}

fn plot_rect(
    viewport: Viewport,
    data: &ChartState,
    options: &ChartOptions,
    style: FrameStyle,
) -> PixelRect {
    let title_space = style.font_size_px + 4.0;
    let legend_height = if options.legend.display && !data.series().is_empty() {
        style.font_size_px + 8.0
    } else {
        0.0
    };

    let mut left = if options.y_axis.display { 48.0 } else { 8.0 };
    if axis_title(&options.y_axis).is_some() {
        left += title_space;
    }
    let mut bottom = if options.x_axis.display {
        style.font_size_px + 10.0
    } else {
        8.0
    };
    if axis_title(&options.x_axis).is_some() {
        bottom += title_space;
    }
    let top = 8.0 + legend_height;
    let right = 12.0;

    let width = (f64::from(viewport.width) - left - right).max(1.0);
    let height = (f64::from(viewport.height) - top - bottom).max(1.0);
    PixelRect::new(left, top, width, height)
}

fn axis_title(axis: &AxisOptions) -> Option<&str> {
    if !axis.display || !axis.scale_label.display {
        return None;
    }
    axis.scale_label
        .label_string
        .as_deref()
        .filter(|title| !title.is_empty())
}

fn push_value_axis(
    frame: &mut RenderFrame,
    layout: &PlotLayout,
    axis: &AxisOptions,
    style: FrameStyle,
) {
    if !axis.display {
        return;
    }
    let plot = layout.plot;
    frame.lines.push(LinePrimitive::new(
        plot.x,
        plot.y,
        plot.x,
        plot.bottom(),
        style.axis_width,
        style.axis_color,
    ));

    let (min, max) = layout.value_scale.domain();
    for value in value_ticks(min, max, style.value_tick_count) {
        let Ok(y) = layout.value_scale.to_pixel(value) else {
            continue;
        };
        frame.lines.push(LinePrimitive::new(
            plot.x - style.tick_length,
            y,
            plot.x,
            y,
            style.axis_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_value_tick(value, max - min),
            plot.x - style.tick_length - 2.0,
            y - style.font_size_px / 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }

    if let Some(title) = axis_title(axis) {
        frame.texts.push(TextPrimitive::new(
            title,
            2.0,
            plot.y + plot.height / 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}

fn push_label_axis(
    frame: &mut RenderFrame,
    layout: &PlotLayout,
    data: &ChartState,
    axis: &AxisOptions,
    style: FrameStyle,
) {
    if !axis.display {
        return;
    }
    let plot = layout.plot;
    frame.lines.push(LinePrimitive::new(
        plot.x,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_width,
        style.axis_color,
    ));

    let len = data.len();
    for index in select_label_ticks(len, axis.max_ticks_limit) {
        let x = layout.column_x(index, len);
        frame.lines.push(LinePrimitive::new(
            x,
            plot.bottom(),
            x,
            plot.bottom() + style.tick_length,
            style.axis_width,
            style.axis_color,
        ));
        let text = data.labels()[index].to_string();
        if text.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            text,
            x,
            plot.bottom() + style.tick_length + 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    if let Some(title) = axis_title(axis) {
        frame.texts.push(TextPrimitive::new(
            title,
            plot.x + plot.width / 2.0,
            plot.bottom() + style.font_size_px + 8.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
}

fn push_legend(frame: &mut RenderFrame, data: &ChartState, style: FrameStyle) {
    let swatch = style.font_size_px;
    let mut x = 8.0;
    for buffer in data.series() {
        let (line, fill) = series_colors(buffer.line_color(), buffer.fill_color());
        frame.rects.push(
            RectPrimitive::new(x, 6.0, swatch * 1.5, swatch, fill).with_border(1.0, line),
        );
        x += swatch * 1.5 + 4.0;

        if buffer.label().is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            buffer.label(),
            x,
            6.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
        x += buffer.label().chars().count() as f64 * style.font_size_px * 0.6 + 12.0;
    }
}

fn push_series(
    frame: &mut RenderFrame,
    layout: &PlotLayout,
    data: &ChartState,
    style: FrameStyle,
) {
    let len = data.len();
    let half = style.marker_size / 2.0;
    for buffer in data.series() {
        let (line, fill) = series_colors(buffer.line_color(), buffer.fill_color());
        let mut previous: Option<(f64, f64)> = None;

        for (index, value) in buffer.values().iter().enumerate() {
            let Some(y) = value
                .filter(|v| v.is_finite())
                .and_then(|v| layout.value_scale.to_pixel(v).ok())
            else {
                previous = None;
                continue;
            };
            let x = layout.column_x(index, len);

            if let Some((px, py)) = previous {
                frame
                    .lines
                    .push(LinePrimitive::new(px, py, x, y, style.line_width, line));
            }
            frame.rects.push(
                RectPrimitive::new(x - half, y - half, style.marker_size, style.marker_size, fill)
                    .with_border(1.0, line),
            );
            previous = Some((x, y));
        }
    }
}

fn series_colors(line_token: &str, fill_token: &str) -> (Color, Color) {
    let line = Color::from_token_or(line_token, Color::BLACK);
    let fill = Color::from_token_or(fill_token, Color::rgba(0.0, 0.0, 0.0, 0.1));
    (line, fill)
}
