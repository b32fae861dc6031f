use serde::{Deserialize, Serialize};

use crate::interaction::{InteractionMode, InteractionOptions};

/// Tick cap applied to the label axis by default.
pub const DEFAULT_MAX_X_TICKS: usize = 11;

/// Axis title settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleLabel {
    pub display: bool,
    pub label_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    pub display: bool,
    pub scale_label: ScaleLabel,
    /// `None` shows every tick.
    pub max_ticks_limit: Option<usize>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            display: true,
            scale_label: ScaleLabel {
                display: true,
                label_string: None,
            },
            max_ticks_limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOptions {
    pub display: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { display: true }
    }
}

/// Chart presentation policy handed to the rendering engine.
///
/// Built once per chart and treated as an immutable value. Adjustments go
/// through the consuming `with_*` builders or [`ChartOptions::merged`], both
/// of which return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default = "default_responsive")]
    pub responsive: bool,
    #[serde(default = "default_tooltips")]
    pub tooltips: InteractionOptions,
    #[serde(default = "default_hover")]
    pub hover: InteractionOptions,
    #[serde(default = "default_x_axis")]
    pub x_axis: AxisOptions,
    #[serde(default)]
    pub y_axis: AxisOptions,
    #[serde(default)]
    pub legend: LegendOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: default_responsive(),
            tooltips: default_tooltips(),
            hover: default_hover(),
            x_axis: default_x_axis(),
            y_axis: AxisOptions::default(),
            legend: LegendOptions::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    #[must_use]
    pub fn with_tooltips(mut self, tooltips: InteractionOptions) -> Self {
        self.tooltips = tooltips;
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hover: InteractionOptions) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisOptions) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOptions) -> Self {
        self.y_axis = axis;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    /// Returns a copy with every field set in `patch` replaced.
    #[must_use]
    pub fn merged(&self, patch: &ChartOptionsPatch) -> Self {
        Self {
            responsive: patch.responsive.unwrap_or(self.responsive),
            tooltips: patch.tooltips.unwrap_or(self.tooltips),
            hover: patch.hover.unwrap_or(self.hover),
            x_axis: patch.x_axis.clone().unwrap_or_else(|| self.x_axis.clone()),
            y_axis: patch.y_axis.clone().unwrap_or_else(|| self.y_axis.clone()),
            legend: patch.legend.unwrap_or(self.legend),
        }
    }
}

/// Partial override for [`ChartOptions::merged`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptionsPatch {
    pub responsive: Option<bool>,
    pub tooltips: Option<InteractionOptions>,
    pub hover: Option<InteractionOptions>,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
    pub legend: Option<LegendOptions>,
}

fn default_responsive() -> bool {
    true
}

fn default_tooltips() -> InteractionOptions {
    InteractionOptions::new(InteractionMode::Index, false)
}

fn default_hover() -> InteractionOptions {
    InteractionOptions::new(InteractionMode::Nearest, true)
}

fn default_x_axis() -> AxisOptions {
    AxisOptions {
        max_ticks_limit: Some(DEFAULT_MAX_X_TICKS),
        ..AxisOptions::default()
    }
}
