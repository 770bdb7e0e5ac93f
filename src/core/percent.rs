use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PolarChartError, PolarChartResult};

/// Length given either in pixels or as a percentage of a reference distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentOrPixels {
    Pixels(f64),
    Percent(f64),
}

impl PercentOrPixels {
    /// Absolute pixel length against `reference`.
    #[must_use]
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(percent) => reference * percent / 100.0,
        }
    }
}

impl Default for PercentOrPixels {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

impl FromStr for PercentOrPixels {
    type Err = PolarChartError;

    fn from_str(input: &str) -> PolarChartResult<Self> {
        let trimmed = input.trim();
        let (number, is_percent) = match trimmed.strip_suffix('%') {
            Some(number) => (number.trim_end(), true),
            None => (trimmed, false),
        };
        let value: f64 = number.parse().map_err(|_| {
            PolarChartError::InvalidData(format!("`{input}` is not a number or percentage"))
        })?;
        if !value.is_finite() {
            return Err(PolarChartError::InvalidData(format!(
                "`{input}` must be finite"
            )));
        }

        Ok(if is_percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

impl fmt::Display for PercentOrPixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl Serialize for PercentOrPixels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pixels(px) => serializer.serialize_f64(*px),
            Self::Percent(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PercentOrPixels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(px) => Ok(Self::Pixels(px)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Resolves an optional corner radius to pixels.
///
/// Percentages are taken of `reference`, normally the sector's
/// `outer_radius - inner_radius`. Absent input resolves to zero.
#[must_use]
pub fn resolve_corner_radius(corner_radius: Option<PercentOrPixels>, reference: f64) -> f64 {
    corner_radius.map_or(0.0, |radius| radius.resolve(reference))
}
