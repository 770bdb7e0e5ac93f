use serde::{Deserialize, Serialize};

use crate::core::{BackgroundSector, SectorDescriptor};
use crate::error::{PolarChartError, PolarChartResult};

/// A sector ready to draw, with its corner radius resolved to pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorShape {
    pub sector: SectorDescriptor,
    pub corner_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundShape {
    pub background: BackgroundSector,
    pub corner_radius: f64,
}

/// Backend-agnostic scene for one radial bar draw pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorFrame {
    pub backgrounds: Vec<BackgroundShape>,
    pub sectors: Vec<SectorShape>,
    pub force_corner_radius: bool,
    pub corner_is_external: bool,
    /// Labels are drawn only once geometry has settled.
    pub show_labels: bool,
}

impl SectorFrame {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty() && self.backgrounds.is_empty()
    }

    /// Rejects negative corner radii.
    ///
    /// Sector radii are not checked: angular bars may grow inward
    /// (`outer < inner`) and non-finite geometry is left for the backend to
    /// skip.
    pub fn validate(&self) -> PolarChartResult<()> {
        for (index, shape) in self.sectors.iter().enumerate() {
            check_corner_radius("sector", index, shape.corner_radius)?;
        }
        for (index, shape) in self.backgrounds.iter().enumerate() {
            check_corner_radius("background", index, shape.corner_radius)?;
        }
        Ok(())
    }
}

fn check_corner_radius(kind: &str, index: usize, radius: f64) -> PolarChartResult<()> {
    if radius < 0.0 {
        return Err(PolarChartError::InvalidData(format!(
            "{kind} {index} has negative corner radius {radius}"
        )));
    }
    Ok(())
}
