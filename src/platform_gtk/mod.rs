use gtk4 as gtk;
use gtk4::prelude::*;
use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::platform::{DrawingSurface, SurfaceContainer, SurfaceId};

/// Container that maps region names onto GTK boxes.
///
/// Each appended surface becomes a `DrawingArea` sized to the surface and
/// packed at the end of the region's box.
#[derive(Debug, Default)]
pub struct GtkRegionContainer {
    regions: IndexMap<String, gtk::Box>,
    areas: IndexMap<SurfaceId, gtk::DrawingArea>,
}

impl GtkRegionContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_region(&mut self, name: impl Into<String>, region: gtk::Box) {
        self.regions.insert(name.into(), region);
    }

    /// Drawing area created for `surface`, for wiring a draw callback.
    #[must_use]
    pub fn drawing_area(&self, surface: SurfaceId) -> Option<&gtk::DrawingArea> {
        self.areas.get(&surface)
    }
}

impl SurfaceContainer for GtkRegionContainer {
    fn append_child(&mut self, region: &str, surface: &DrawingSurface) -> ChartResult<()> {
        let target = self
            .regions
            .get(region)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown gtk region `{region}`")))?;

        let viewport = surface.viewport();
        let (Ok(width), Ok(height)) = (
            i32::try_from(viewport.width),
            i32::try_from(viewport.height),
        ) else {
            return Err(ChartError::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        };

        let area = gtk::DrawingArea::new();
        area.set_content_width(width);
        area.set_content_height(height);
        target.append(&area);
        self.areas.insert(surface.id(), area);
        Ok(())
    }
}
