use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Primitive counts from the last paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub lines: usize,
    pub rects: usize,
    pub texts: usize,
}

/// Renderers that can also paint into a Cairo context owned by someone else,
/// such as a GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer painting into an offscreen image surface.
///
/// The surface follows the viewport of each frame, so a resized chart gets a
/// resized surface on its next redraw.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    background: Color,
    stats: CairoPaintStats,
}

impl Default for CairoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            background: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoPaintStats::default(),
        }
    }

    /// Surface holding the last offscreen paint, if any frame was rendered.
    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> CairoPaintStats {
        self.stats
    }

    /// Encodes the last offscreen paint as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("nothing has been rendered yet".to_owned()))?;
        surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn surface_for(&mut self, viewport: Viewport) -> ChartResult<ImageSurface> {
        let (Ok(width), Ok(height)) = (
            i32::try_from(viewport.width),
            i32::try_from(viewport.height),
        ) else {
            return Err(ChartError::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        };

        if let Some(surface) = &self.surface {
            if surface.width() == width && surface.height() == height {
                return Ok(surface.clone());
            }
        }

        debug!(width, height, "allocating cairo surface");
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        self.surface = Some(surface.clone());
        Ok(surface)
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;

        for line in &frame.lines {
            stroke_line(context, line)?;
        }
        for rect in &frame.rects {
            fill_rect(context, rect)?;
        }
        for text in &frame.texts {
            show_text(context, text);
        }

        self.stats = CairoPaintStats {
            lines: frame.lines.len(),
            rects: frame.rects.len(),
            texts: frame.texts.len(),
        };
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let surface = self.surface_for(frame.viewport.validated()?)?;
        let context =
            Context::new(&surface).map_err(|err| backend_error("failed to create context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint(context, frame)
    }
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke line", err))
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("failed to fill rect", err));
    }

    context
        .fill_preserve()
        .map_err(|err| backend_error("failed to fill rect", err))?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke rect border", err))
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let width = f64::from(layout.pixel_size().0);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };

    set_source(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(what: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{what}: {err}"))
}
