use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{DataValue, Point, PolarCenter};

/// Full-arc track drawn behind a radial bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundSector {
    pub center: PolarCenter,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Value shown for a sector: the raw scalar, or the clamped stack range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorValue {
    Scalar(f64),
    Range([f64; 2]),
}

impl SectorValue {
    /// Scalar for plain entries, stack end for stacked ones.
    #[must_use]
    pub fn display_value(self) -> f64 {
        match self {
            Self::Scalar(value) => value,
            Self::Range([_, end]) => end,
        }
    }
}

/// Whether the series contributes to tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TooltipType {
    #[default]
    Auto,
    None,
}

/// Tooltip line attached to a sector.
///
/// `value` is the record's own data-key value, never the stacked range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub name: String,
    pub data_key: String,
    pub value: Option<DataValue>,
    pub tooltip_type: TooltipType,
    pub unit: String,
    pub payload: Value,
}

/// Annular sector geometry for one data entry.
///
/// Angle order is not normalized: a decreasing sweep encodes a decreasing
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDescriptor {
    pub center: PolarCenter,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: SectorValue,
    pub payload: Value,
    pub tooltip_position: Point,
    pub tooltip_payload: Vec<TooltipItem>,
    #[serde(default)]
    pub background: Option<BackgroundSector>,
}

impl SectorDescriptor {
    /// Signed angular sweep in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Signed radial thickness. Negative when an angular-layout bar grows
    /// inward.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Midpoint in both dimensions converted to screen space.
    #[must_use]
    pub fn mid_point(&self) -> Point {
        self.center.to_cartesian(
            (self.inner_radius + self.outer_radius) / 2.0,
            (self.start_angle + self.end_angle) / 2.0,
        )
    }
}
