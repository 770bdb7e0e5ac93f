mod frame;
mod null_renderer;

pub use frame::{BackgroundShape, SectorFrame, SectorShape};
pub use null_renderer::NullRenderer;

use crate::error::PolarChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `SectorFrame` so drawing code stays
/// isolated from geometry and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &SectorFrame) -> PolarChartResult<()>;
}
