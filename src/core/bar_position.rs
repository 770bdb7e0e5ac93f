use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::PercentOrPixels;
use crate::error::{PolarChartError, PolarChartResult};

/// Offset and thickness of one series inside its shared category band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPosition {
    pub offset: f64,
    pub size: f64,
}

impl BarPosition {
    #[must_use]
    pub fn new(offset: f64, size: f64) -> Self {
        Self { offset, size }
    }
}

/// One bar slot in a category band.
///
/// `stacked_with` lists series that are stacked on top of this one and
/// therefore reuse its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub series_id: String,
    #[serde(default)]
    pub bar_size: Option<f64>,
    #[serde(default)]
    pub stacked_with: Vec<String>,
}

impl BarSlot {
    #[must_use]
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            bar_size: None,
            stacked_with: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bar_size(mut self, bar_size: f64) -> Self {
        self.bar_size = Some(bar_size);
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, series_id: impl Into<String>) -> Self {
        self.stacked_with.push(series_id.into());
        self
    }
}

/// Spacing rules for bars sharing a category band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGroupLayout {
    pub band_size: f64,
    #[serde(default = "default_bar_gap")]
    pub bar_gap: PercentOrPixels,
    #[serde(default = "default_bar_category_gap")]
    pub bar_category_gap: PercentOrPixels,
    #[serde(default)]
    pub max_bar_size: Option<f64>,
}

impl BarGroupLayout {
    #[must_use]
    pub fn new(band_size: f64) -> Self {
        Self {
            band_size,
            bar_gap: default_bar_gap(),
            bar_category_gap: default_bar_category_gap(),
            max_bar_size: None,
        }
    }

    #[must_use]
    pub fn with_bar_gap(mut self, bar_gap: PercentOrPixels) -> Self {
        self.bar_gap = bar_gap;
        self
    }

    #[must_use]
    pub fn with_bar_category_gap(mut self, gap: PercentOrPixels) -> Self {
        self.bar_category_gap = gap;
        self
    }

    #[must_use]
    pub fn with_max_bar_size(mut self, max_bar_size: f64) -> Self {
        self.max_bar_size = Some(max_bar_size);
        self
    }

    fn validate(self) -> PolarChartResult<Self> {
        if !self.band_size.is_finite() || self.band_size < 0.0 {
            return Err(PolarChartError::InvalidData(
                "band size must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(max) = self.max_bar_size {
            if !max.is_finite() || max < 0.0 {
                return Err(PolarChartError::InvalidData(
                    "max bar size must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    /// Resolves a gap against the band, never exceeding the band itself.
    fn resolve_gap(self, gap: PercentOrPixels) -> f64 {
        gap.resolve(self.band_size).min(self.band_size)
    }
}

fn default_bar_gap() -> PercentOrPixels {
    PercentOrPixels::Pixels(4.0)
}

fn default_bar_category_gap() -> PercentOrPixels {
    PercentOrPixels::Percent(10.0)
}

/// Resolved positions for every series of a category band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarGroup {
    positions: Vec<(String, BarPosition)>,
}

impl BarGroup {
    /// Lays out `slots` inside one band.
    ///
    /// When the first slot carries an explicit size, all slots are packed
    /// around the band center (shrinking to 90% of an equal share on
    /// overflow). Otherwise the band minus category gaps is split evenly.
    pub fn resolve(layout: BarGroupLayout, slots: &[BarSlot]) -> PolarChartResult<Self> {
        let layout = layout.validate()?;
        if slots.is_empty() {
            return Ok(Self::default());
        }

        let positions = if slots[0].bar_size.is_some() {
            explicit_positions(layout, slots)
        } else {
            implicit_positions(layout, slots)
        };

        let mut group = Self::default();
        for (slot, position) in slots.iter().zip(positions) {
            group.positions.push((slot.series_id.clone(), position));
            for stacked in &slot.stacked_with {
                group.positions.push((stacked.clone(), position));
            }
        }
        Ok(group)
    }

    /// Group with a single series occupying `position`.
    #[must_use]
    pub fn single(series_id: impl Into<String>, position: BarPosition) -> Self {
        Self {
            positions: vec![(series_id.into(), position)],
        }
    }

    #[must_use]
    pub fn find_position(&self, series_id: &str) -> Option<BarPosition> {
        let found = self
            .positions
            .iter()
            .find(|(id, _)| id == series_id)
            .map(|(_, position)| *position);
        if found.is_none() {
            debug!(series_id, "series has no bar position in its group");
        }
        found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn explicit_positions(layout: BarGroupLayout, slots: &[BarSlot]) -> Vec<BarPosition> {
    let band_size = layout.band_size;
    let count = slots.len() as f64;
    let mut gap = layout.resolve_gap(layout.bar_gap);
    let mut full_bar_size = band_size / count;
    let mut use_full = false;

    let mut sum: f64 = slots.iter().map(|slot| slot.bar_size.unwrap_or(0.0)).sum();
    sum += (count - 1.0) * gap;
    if sum >= band_size {
        sum -= (count - 1.0) * gap;
        gap = 0.0;
    }
    if sum >= band_size && full_bar_size > 0.0 {
        use_full = true;
        full_bar_size *= 0.9;
        sum = count * full_bar_size;
    }

    let mut cursor = ((band_size - sum) / 2.0).trunc() - gap;
    let mut previous_size = 0.0;
    slots
        .iter()
        .map(|slot| {
            let offset = cursor + previous_size + gap;
            let size = if use_full {
                full_bar_size
            } else {
                slot.bar_size.unwrap_or(0.0)
            };
            cursor = offset;
            previous_size = size;
            BarPosition::new(offset, size)
        })
        .collect()
}

fn implicit_positions(layout: BarGroupLayout, slots: &[BarSlot]) -> Vec<BarPosition> {
    let band_size = layout.band_size;
    let count = slots.len() as f64;
    let mut gap = layout.resolve_gap(layout.bar_gap);
    let category_gap = layout.resolve_gap(layout.bar_category_gap);

    if band_size - 2.0 * category_gap - (count - 1.0) * gap <= 0.0 {
        gap = 0.0;
    }
    let mut uncapped_size = (band_size - 2.0 * category_gap - (count - 1.0) * gap) / count;
    if uncapped_size > 1.0 {
        uncapped_size = uncapped_size.trunc();
    }
    let size = layout
        .max_bar_size
        .map_or(uncapped_size, |max| uncapped_size.min(max));

    (0..slots.len())
        .map(|index| {
            let offset = category_gap
                + (uncapped_size + gap) * index as f64
                + (uncapped_size - size) / 2.0;
            BarPosition::new(offset, size)
        })
        .collect()
}
