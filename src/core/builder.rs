#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    AxisView, BackgroundSector, BarGroup, BarPosition, DataEntry, PolarCenter, PolarLayout,
    SectorDescriptor, SectorValue, StackedValues, TooltipItem, TooltipType, truncate_by_domain,
};

/// Per-call options of the sector builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBuildOptions {
    pub layout: PolarLayout,
    /// Floor on the bar's variable dimension, in degrees (radial) or pixels
    /// (angular). Zero disables the correction.
    #[serde(default)]
    pub min_point_size: f64,
    /// Full `(start_angle, end_angle)` arc of the background track, if any.
    /// Only honored by the radial layout.
    #[serde(default)]
    pub background_arc: Option<(f64, f64)>,
    #[serde(default)]
    pub tooltip_name: Option<String>,
    #[serde(default)]
    pub tooltip_type: TooltipType,
}

impl Default for SectorBuildOptions {
    fn default() -> Self {
        Self {
            layout: PolarLayout::Radial,
            min_point_size: 0.0,
            background_arc: None,
            tooltip_name: None,
            tooltip_type: TooltipType::Auto,
        }
    }
}

/// Everything the builder reads for one series.
#[derive(Debug, Clone, Copy)]
pub struct SectorBuildInput<'a> {
    pub series_id: &'a str,
    pub data_key: &'a str,
    pub entries: &'a [DataEntry],
    pub center: PolarCenter,
    pub angle_axis: AxisView<'a>,
    pub radius_axis: AxisView<'a>,
    pub stacking: Option<&'a StackedValues>,
    pub bar_group: &'a BarGroup,
    pub band_size: f64,
    pub start_index: usize,
}

/// Pushes `end` away from `start` so that `|end - start| >= |min_point_size|`.
///
/// The correction follows the sign of the current delta, or the sign of
/// `min_point_size` when the delta is exactly zero. `start` is never moved.
#[must_use]
pub fn apply_min_point_size(start: f64, end: f64, min_point_size: f64) -> f64 {
    let delta = end - start;
    if min_point_size.abs() > 0.0 && delta.abs() < min_point_size.abs() {
        let direction = if delta != 0.0 { delta } else { min_point_size };
        return end + direction.signum() * (min_point_size.abs() - delta.abs());
    }
    end
}

/// Builds sector geometry for every entry of a series.
///
/// Returns `None` when the series has no position inside its bar group, which
/// callers treat as "nothing to render". Non-finite scale output propagates
/// into the descriptors untouched.
#[must_use]
pub fn build_sectors(
    input: &SectorBuildInput<'_>,
    options: &SectorBuildOptions,
) -> Option<Vec<SectorDescriptor>> {
    let position = input.bar_group.find_position(input.series_id)?;

    let numeric_axis = match options.layout {
        PolarLayout::Radial => input.angle_axis,
        PolarLayout::Angular => input.radius_axis,
    };
    let context = EntryContext {
        input,
        options,
        position,
        base_value: numeric_axis.base_value(),
        stacked_domain: numeric_axis.scale.domain(),
    };

    #[cfg(feature = "parallel-projection")]
    let sectors: Vec<SectorDescriptor> = input
        .entries
        .par_iter()
        .enumerate()
        .map(|(index, entry)| context.build(index, entry))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let sectors: Vec<SectorDescriptor> = input
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| context.build(index, entry))
        .collect();

    trace!(
        series_id = input.series_id,
        count = sectors.len(),
        layout = ?options.layout,
        "built radial bar sectors"
    );
    Some(sectors)
}

struct EntryContext<'i, 'a> {
    input: &'i SectorBuildInput<'a>,
    options: &'i SectorBuildOptions,
    position: BarPosition,
    base_value: f64,
    stacked_domain: (f64, f64),
}

impl EntryContext<'_, '_> {
    fn build(&self, index: usize, entry: &DataEntry) -> SectorDescriptor {
        let input = self.input;
        let (range, value) = match input.stacking {
            Some(stacked) => {
                let range = truncate_by_domain(
                    stacked.get(input.start_index + index),
                    self.stacked_domain,
                );
                (range, SectorValue::Range(range))
            }
            None => {
                let range = entry.resolved_range(self.base_value);
                (range, SectorValue::Scalar(range[1]))
            }
        };

        let min_point_size = self.options.min_point_size;
        let mut background = None;
        let (inner_radius, outer_radius, start_angle, end_angle) = match self.options.layout {
            PolarLayout::Radial => {
                let inner_radius = input.radius_axis.category_coordinate(
                    index,
                    entry.category,
                    input.band_size,
                    self.position.offset,
                );
                let outer_radius = inner_radius + self.position.size;
                let start_angle = input.angle_axis.scale.scale(range[0]);
                let end_angle = apply_min_point_size(
                    start_angle,
                    input.angle_axis.scale.scale(range[1]),
                    min_point_size,
                );
                background = self.options.background_arc.map(|(start, end)| BackgroundSector {
                    center: input.center,
                    inner_radius,
                    outer_radius,
                    start_angle: start,
                    end_angle: end,
                });
                (inner_radius, outer_radius, start_angle, end_angle)
            }
            PolarLayout::Angular => {
                let inner_radius = input.radius_axis.scale.scale(range[0]);
                let outer_radius = apply_min_point_size(
                    inner_radius,
                    input.radius_axis.scale.scale(range[1]),
                    min_point_size,
                );
                let start_angle = input.angle_axis.category_coordinate(
                    index,
                    entry.category,
                    input.band_size,
                    self.position.offset,
                );
                (
                    inner_radius,
                    outer_radius,
                    start_angle,
                    start_angle + self.position.size,
                )
            }
        };

        let tooltip_name = self
            .options
            .tooltip_name
            .clone()
            .unwrap_or_else(|| input.data_key.to_owned());

        let mut sector = SectorDescriptor {
            center: input.center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            value,
            payload: entry.payload.clone(),
            tooltip_position: input.center.to_cartesian(0.0, 0.0),
            tooltip_payload: vec![TooltipItem {
                name: tooltip_name,
                data_key: input.data_key.to_owned(),
                value: entry.value,
                tooltip_type: self.options.tooltip_type,
                unit: String::new(),
                payload: entry.payload.clone(),
            }],
            background,
        };
        sector.tooltip_position = sector.mid_point();
        sector
    }
}
