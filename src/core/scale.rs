use serde::{Deserialize, Serialize};

use crate::error::{PolarChartError, PolarChartResult};

/// Read-only view of an axis scale owned by the host.
///
/// Continuous scales report a zero bandwidth. Implementations must not
/// sanitize their output: a non-finite result propagates into the geometry.
pub trait AxisScale: Sync {
    fn scale(&self, value: f64) -> f64;

    fn domain(&self) -> (f64, f64);

    fn bandwidth(&self) -> f64 {
        0.0
    }
}

/// How an axis interprets its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    #[default]
    Number,
    Category,
}

/// Discrete band position on a categorical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub coordinate: f64,
    #[serde(default)]
    pub bandwidth: f64,
}

impl Tick {
    #[must_use]
    pub fn new(coordinate: f64, bandwidth: f64) -> Self {
        Self {
            coordinate,
            bandwidth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> PolarChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(PolarChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PolarChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }
}

impl AxisScale for LinearScale {
    /// A collapsed domain (all-equal data) maps every value to the middle of
    /// the range.
    fn scale(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }
}

/// Band scale over `count` categories addressed by index.
///
/// Bands are centered in the range using `padding_inner` (fraction of a step
/// between bands) and `padding_outer` (fraction of a step at both ends).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize, range_start: f64, range_end: f64) -> PolarChartResult<Self> {
        Self::with_padding(count, range_start, range_end, 0.0, 0.0)
    }

    pub fn with_padding(
        count: usize,
        range_start: f64,
        range_end: f64,
        padding_inner: f64,
        padding_outer: f64,
    ) -> PolarChartResult<Self> {
        if count == 0 {
            return Err(PolarChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PolarChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding_inner) || !padding_outer.is_finite() || padding_outer < 0.0
        {
            return Err(PolarChartError::InvalidData(
                "band padding must be within [0, 1) inner and >= 0 outer".to_owned(),
            ));
        }

        Ok(Self {
            count,
            range_start,
            range_end,
            padding_inner,
            padding_outer,
        })
    }

    fn step(self) -> f64 {
        let slots = (self.count as f64 - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        (self.range_end - self.range_start) / slots
    }

    fn start(self) -> f64 {
        let step = self.step();
        let used = step * (self.count as f64 - self.padding_inner);
        self.range_start + (self.range_end - self.range_start - used) * 0.5
    }

    /// One tick per category, positioned at the start of its band.
    #[must_use]
    pub fn ticks(self) -> Vec<Tick> {
        let bandwidth = self.bandwidth();
        (0..self.count)
            .map(|index| Tick::new(self.scale(index as f64), bandwidth))
            .collect()
    }
}

impl AxisScale for BandScale {
    fn scale(&self, value: f64) -> f64 {
        if value.fract() != 0.0 || value < 0.0 || value >= self.count as f64 {
            return f64::NAN;
        }
        self.start() + self.step() * value
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, (self.count - 1) as f64)
    }

    fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }
}

/// Borrowed axis as seen by the sector builder.
#[derive(Clone, Copy)]
pub struct AxisView<'a> {
    pub scale: &'a dyn AxisScale,
    pub axis_type: AxisType,
    pub ticks: &'a [Tick],
}

impl<'a> AxisView<'a> {
    #[must_use]
    pub fn number(scale: &'a dyn AxisScale) -> Self {
        Self {
            scale,
            axis_type: AxisType::Number,
            ticks: &[],
        }
    }

    #[must_use]
    pub fn category(scale: &'a dyn AxisScale, ticks: &'a [Tick]) -> Self {
        Self {
            scale,
            axis_type: AxisType::Category,
            ticks,
        }
    }

    /// Baseline a bare scalar value grows from.
    ///
    /// Number axes use zero when the domain straddles it, otherwise the bound
    /// closest to zero. Category axes use the first domain value.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        let (d0, d1) = self.scale.domain();
        match self.axis_type {
            AxisType::Category => d0,
            AxisType::Number => {
                let min = d0.min(d1);
                let max = d0.max(d1);
                if min <= 0.0 && max >= 0.0 {
                    0.0
                } else if max < 0.0 {
                    max
                } else {
                    min
                }
            }
        }
    }

    /// Start of the bar slot for the entry at `index`.
    ///
    /// Category axes read the tick at `index`; number axes scale the entry's
    /// own category value and center it on the band. Missing lookups yield NaN.
    #[must_use]
    pub fn category_coordinate(
        &self,
        index: usize,
        category: Option<f64>,
        band_size: f64,
        offset: f64,
    ) -> f64 {
        match self.axis_type {
            AxisType::Category => self
                .ticks
                .get(index)
                .map_or(f64::NAN, |tick| tick.coordinate + offset),
            AxisType::Number => category.map_or(f64::NAN, |value| {
                self.scale.scale(value) - band_size / 2.0 + offset
            }),
        }
    }
}

impl std::fmt::Debug for AxisView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisView")
            .field("domain", &self.scale.domain())
            .field("axis_type", &self.axis_type)
            .field("ticks", &self.ticks.len())
            .finish()
    }
}
