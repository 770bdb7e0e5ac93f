use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::core::{BarGroupLayout, PercentOrPixels, PolarLayout, SectorBuildOptions};
use crate::error::{PolarChartError, PolarChartResult};

use super::{LegendType, TooltipType};

/// Immutable options of one radial bar series.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialBarConfig {
    pub series_id: String,
    pub data_key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layout: PolarLayout,
    #[serde(default)]
    pub min_point_size: f64,
    #[serde(default)]
    pub max_bar_size: Option<f64>,
    #[serde(default)]
    pub corner_radius: Option<PercentOrPixels>,
    #[serde(default)]
    pub force_corner_radius: bool,
    #[serde(default)]
    pub corner_is_external: bool,
    #[serde(default)]
    pub background: bool,
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub legend_type: LegendType,
    #[serde(default)]
    pub tooltip_type: TooltipType,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl RadialBarConfig {
    /// Creates a radial-layout config with default animation timing.
    #[must_use]
    pub fn new(series_id: impl Into<String>, data_key: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            data_key: data_key.into(),
            name: None,
            layout: PolarLayout::Radial,
            min_point_size: 0.0,
            max_bar_size: None,
            corner_radius: None,
            force_corner_radius: false,
            corner_is_external: false,
            background: false,
            start_angle: 0.0,
            end_angle: default_end_angle(),
            hide: false,
            legend_type: LegendType::default(),
            tooltip_type: TooltipType::default(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PolarLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_min_point_size(mut self, min_point_size: f64) -> Self {
        self.min_point_size = min_point_size;
        self
    }

    #[must_use]
    pub fn with_max_bar_size(mut self, max_bar_size: f64) -> Self {
        self.max_bar_size = Some(max_bar_size);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: PercentOrPixels) -> Self {
        self.corner_radius = Some(corner_radius);
        self
    }

    /// Enables the background track spanning `start_angle..end_angle`.
    #[must_use]
    pub fn with_background(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.background = true;
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn with_hide(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    #[must_use]
    pub fn with_legend_type(mut self, legend_type: LegendType) -> Self {
        self.legend_type = legend_type;
        self
    }

    #[must_use]
    pub fn with_tooltip_type(mut self, tooltip_type: TooltipType) -> Self {
        self.tooltip_type = tooltip_type;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(&self) -> PolarChartResult<()> {
        if self.series_id.is_empty() {
            return Err(PolarChartError::InvalidConfig(
                "series id must not be empty".to_owned(),
            ));
        }
        if self.data_key.is_empty() {
            return Err(PolarChartError::InvalidConfig(
                "data key must not be empty".to_owned(),
            ));
        }
        if !self.min_point_size.is_finite() {
            return Err(PolarChartError::InvalidConfig(
                "min point size must be finite".to_owned(),
            ));
        }
        if let Some(max) = self.max_bar_size {
            if !max.is_finite() || max < 0.0 {
                return Err(PolarChartError::InvalidConfig(
                    "max bar size must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(PercentOrPixels::Pixels(value) | PercentOrPixels::Percent(value)) =
            self.corner_radius
        {
            if !value.is_finite() || value < 0.0 {
                return Err(PolarChartError::InvalidConfig(
                    "corner radius must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.start_angle.is_finite() || !self.end_angle.is_finite() {
            return Err(PolarChartError::InvalidConfig(
                "start and end angles must be finite".to_owned(),
            ));
        }
        self.animation.validate()?;
        Ok(())
    }

    /// Options handed to the sector builder on every rebuild.
    #[must_use]
    pub fn build_options(&self) -> SectorBuildOptions {
        SectorBuildOptions {
            layout: self.layout,
            min_point_size: self.min_point_size,
            background_arc: self
                .background
                .then_some((self.start_angle, self.end_angle)),
            tooltip_name: self.name.clone(),
            tooltip_type: self.tooltip_type,
        }
    }

    /// Bar group spacing for `band_size`, carrying this series' size cap.
    #[must_use]
    pub fn bar_group_layout(&self, band_size: f64) -> BarGroupLayout {
        let layout = BarGroupLayout::new(band_size);
        match self.max_bar_size {
            Some(max) => layout.with_max_bar_size(max),
            None => layout,
        }
    }
}

fn default_end_angle() -> f64 {
    360.0
}
