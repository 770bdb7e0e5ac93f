use tracing::{debug, trace};

use crate::animation::{AnimationId, AnimationPhase, SectorAnimator};
use crate::core::{
    AxisView, BarGroup, DataEntry, PolarCenter, SectorBuildInput, SectorDescriptor,
    StackedValues, build_sectors, resolve_corner_radius,
};
use crate::error::PolarChartResult;
use crate::extensions::{ChartObserver, ObserverContext};
use crate::render::{BackgroundShape, Renderer, SectorFrame, SectorShape};

use super::{
    LegendEntry, RadialBarConfig, TooltipEntrySettings, legend_payload, tooltip_entry_settings,
};

/// Axis and grouping context of one series, owned by the host.
#[derive(Debug, Clone, Copy)]
pub struct SeriesContext<'a> {
    pub center: PolarCenter,
    pub angle_axis: AxisView<'a>,
    pub radius_axis: AxisView<'a>,
    pub bar_group: &'a BarGroup,
    pub band_size: f64,
    pub stacking: Option<&'a StackedValues>,
    pub start_index: usize,
}

/// Host facade for a single radial bar series.
///
/// `RadialBarChart` rebuilds sector geometry on every data change, feeds it to
/// the transition state machine and hands finished frames to the renderer.
pub struct RadialBarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: RadialBarConfig,
    pub(super) animator: SectorAnimator,
    pub(super) entries: Vec<DataEntry>,
    pub(super) position_resolved: bool,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
}

impl<R: Renderer> RadialBarChart<R> {
    pub fn new(renderer: R, config: RadialBarConfig) -> PolarChartResult<Self> {
        config.validate()?;
        let animator = SectorAnimator::new(config.animation)?;
        Ok(Self {
            renderer,
            config,
            animator,
            entries: Vec::new(),
            position_resolved: true,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RadialBarConfig {
        &self.config
    }

    #[must_use]
    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    /// Target geometry of the latest input.
    #[must_use]
    pub fn sectors(&self) -> &[SectorDescriptor] {
        self.animator.current()
    }

    /// `false` when the last input found no bar position for this series.
    #[must_use]
    pub fn position_resolved(&self) -> bool {
        self.position_resolved
    }

    /// Rebuilds geometry for `entries` and feeds it to the animator.
    ///
    /// An unresolved bar position is not an error: the series keeps an empty
    /// geometry set and draws nothing.
    pub fn set_data(
        &mut self,
        entries: Vec<DataEntry>,
        context: &SeriesContext<'_>,
        animation_id: impl Into<AnimationId>,
    ) -> AnimationPhase {
        let input = SectorBuildInput {
            series_id: &self.config.series_id,
            data_key: &self.config.data_key,
            entries: &entries,
            center: context.center,
            angle_axis: context.angle_axis,
            radius_axis: context.radius_axis,
            stacking: context.stacking,
            bar_group: context.bar_group,
            band_size: context.band_size,
            start_index: context.start_index,
        };
        let built = build_sectors(&input, &self.config.build_options());
        self.position_resolved = built.is_some();
        if !self.position_resolved {
            debug!(
                series_id = self.config.series_id.as_str(),
                "no bar position, rendering nothing"
            );
        }

        self.entries = entries;
        let phase = self
            .animator
            .on_input(built.unwrap_or_default(), animation_id);
        self.dispatch_events();
        phase
    }

    /// Renders the frame for externally sampled progress `t`.
    pub fn tick(&mut self, t: f64) -> PolarChartResult<()> {
        let sectors = self.animator.on_tick(t)?;
        self.dispatch_events();
        self.render_sectors(sectors)
    }

    /// Advances the built-in clock by `delta_ms` and renders the frame.
    pub fn advance(&mut self, delta_ms: f64) -> PolarChartResult<()> {
        let sectors = self.animator.advance(delta_ms)?;
        self.dispatch_events();
        self.render_sectors(sectors)
    }

    /// Renders the geometry at the last observed progress.
    pub fn render(&mut self) -> PolarChartResult<()> {
        let sectors = self.animator.frame();
        self.render_sectors(sectors)
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.config.animation.enabled = enabled;
        self.animator.set_enabled(enabled);
        self.dispatch_events();
    }

    #[must_use]
    pub fn legend_payload(&self) -> Vec<LegendEntry> {
        legend_payload(&self.entries, self.config.legend_type)
    }

    #[must_use]
    pub fn tooltip_entry_settings(&self) -> TooltipEntrySettings {
        tooltip_entry_settings(&self.config, &self.entries)
    }

    /// Builds the frame handed to the renderer for `sectors`.
    #[must_use]
    pub fn compose_frame(&self, sectors: Vec<SectorDescriptor>) -> SectorFrame {
        let current = self.animator.current();
        if self.config.hide || current.is_empty() {
            return SectorFrame::empty();
        }

        let corner_radius = self.config.corner_radius;
        let backgrounds = current
            .iter()
            .filter_map(|sector| {
                sector.background.map(|background| BackgroundShape {
                    background,
                    corner_radius: resolve_corner_radius(
                        corner_radius,
                        (background.outer_radius - background.inner_radius).abs(),
                    ),
                })
            })
            .collect();
        let sectors = sectors
            .into_iter()
            .map(|sector| SectorShape {
                corner_radius: resolve_corner_radius(corner_radius, sector.thickness().abs()),
                sector,
            })
            .collect();

        SectorFrame {
            backgrounds,
            sectors,
            force_corner_radius: self.config.force_corner_radius,
            corner_is_external: self.config.corner_is_external,
            show_labels: !self.config.animation.enabled || self.animator.is_settled(),
        }
    }

    fn render_sectors(&mut self, sectors: Vec<SectorDescriptor>) -> PolarChartResult<()> {
        let frame = self.compose_frame(sectors);
        trace!(
            sectors = frame.sectors.len(),
            backgrounds = frame.backgrounds.len(),
            "render radial bar frame"
        );
        self.renderer.render(&frame)
    }

    fn dispatch_events(&mut self) {
        let events = self.animator.drain_events();
        if events.is_empty() || self.observers.is_empty() {
            return;
        }
        let context = ObserverContext {
            phase: self.animator.phase(),
            progress: self.animator.progress(),
            sector_count: self.animator.current().len(),
        };
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(event, context);
            }
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
