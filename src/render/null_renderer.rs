use crate::error::PolarChartResult;
use crate::render::{Renderer, SectorFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_sector_count: usize,
    pub last_background_count: usize,
    pub last_show_labels: bool,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SectorFrame) -> PolarChartResult<()> {
        frame.validate()?;
        self.last_sector_count = frame.sectors.len();
        self.last_background_count = frame.backgrounds.len();
        self.last_show_labels = frame.show_labels;
        self.frames_rendered += 1;
        Ok(())
    }
}
