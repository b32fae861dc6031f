//! Drawing surfaces and the containers that host them.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;

static SURFACE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Region charts are appended to unless configured otherwise.
pub const DEFAULT_REGION: &str = "elements";

/// Process-unique identifier of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        Self(SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Sized drawing surface owned by one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSurface {
    id: SurfaceId,
    viewport: Viewport,
}

impl DrawingSurface {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Ok(Self {
            id: SurfaceId::next(),
            viewport: viewport.validated()?,
        })
    }

    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport.validated()?;
        Ok(())
    }

    /// Acquires the 2-D drawing context bound to this surface.
    #[must_use]
    pub fn context_2d(&self) -> DrawingContext {
        DrawingContext {
            surface: self.id,
            viewport: self.viewport,
        }
    }
}

/// 2-D drawing context handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingContext {
    pub surface: SurfaceId,
    pub viewport: Viewport,
}

/// Host that surfaces are registered with, addressed by region name.
///
/// Registration is append-only from the chart's side; removing surfaces is up
/// to the host.
pub trait SurfaceContainer {
    fn append_child(&mut self, region: &str, surface: &DrawingSurface) -> ChartResult<()>;
}

impl<C: SurfaceContainer + ?Sized> SurfaceContainer for &mut C {
    fn append_child(&mut self, region: &str, surface: &DrawingSurface) -> ChartResult<()> {
        (**self).append_child(region, surface)
    }
}

/// In-memory container recording appended surfaces per region.
#[derive(Debug, Clone, Default)]
pub struct RegionContainer {
    regions: IndexMap<String, Vec<(SurfaceId, Viewport)>>,
}

impl RegionContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surfaces appended to `region`, oldest first.
    #[must_use]
    pub fn children(&self, region: &str) -> &[(SurfaceId, Viewport)] {
        self.regions.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Detaches every surface from `region`, returning how many were removed.
    pub fn clear_region(&mut self, region: &str) -> usize {
        self.regions
            .shift_remove(region)
            .map_or(0, |children| children.len())
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}

impl SurfaceContainer for RegionContainer {
    fn append_child(&mut self, region: &str, surface: &DrawingSurface) -> ChartResult<()> {
        self.regions
            .entry(region.to_owned())
            .or_default()
            .push((surface.id(), surface.viewport()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    #[test]
    fn surfaces_get_distinct_ids() {
        let a = DrawingSurface::new(Viewport::new(10, 10)).expect("surface");
        let b = DrawingSurface::new(Viewport::new(10, 10)).expect("surface");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.context_2d().surface, a.id());
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let err = DrawingSurface::new(Viewport::new(0, 10)).expect_err("must fail");
        assert!(matches!(
            err,
            ChartError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn region_container_records_children_in_order() {
        let mut container = RegionContainer::new();
        let a = DrawingSurface::new(Viewport::new(1, 2)).expect("surface");
        let b = DrawingSurface::new(Viewport::new(3, 4)).expect("surface");
        container.append_child(DEFAULT_REGION, &a).expect("append");
        container.append_child(DEFAULT_REGION, &b).expect("append");

        let children = container.children(DEFAULT_REGION);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].0, a.id());
        assert_eq!(children[1].1, Viewport::new(3, 4));
        assert_eq!(container.clear_region(DEFAULT_REGION), 2);
        assert!(container.children(DEFAULT_REGION).is_empty());
    }
}
