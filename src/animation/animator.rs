use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::AnimationConfig;
use crate::core::SectorDescriptor;
use crate::error::{PolarChartError, PolarChartResult};

/// Host-supplied key identifying one data generation.
///
/// A new identifier starts a new transition; the same identifier with new
/// geometry only refreshes the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(String);

impl AnimationId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AnimationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for AnimationId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// Rendered geometry equals `current`.
    Settled,
    /// Rendered geometry is blended from `previous` toward `current`.
    Transitioning,
}

/// Lifecycle notifications for observers of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationEvent {
    Started,
    Finished,
    /// A new identifier replaced a transition that was still in flight.
    Superseded,
}

/// Linear interpolation of two numbers.
#[inline]
#[must_use]
pub fn interpolate_number(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blends the angular sweep of `current` from `previous` at progress `t`.
///
/// Entries are matched by index. Entries without a previous counterpart grow
/// their end angle from their own start angle. Every other field is taken
/// from `current` unchanged.
#[must_use]
pub fn interpolate_sectors(
    previous: Option<&[SectorDescriptor]>,
    current: &[SectorDescriptor],
    t: f64,
) -> Vec<SectorDescriptor> {
    current
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut step = entry.clone();
            match previous.and_then(|prev| prev.get(index)) {
                Some(prev) => {
                    step.start_angle = interpolate_number(prev.start_angle, entry.start_angle, t);
                    step.end_angle = interpolate_number(prev.end_angle, entry.end_angle, t);
                }
                None => {
                    step.end_angle = interpolate_number(entry.start_angle, entry.end_angle, t);
                }
            }
            step
        })
        .collect()
}

/// Two-snapshot transition state machine driven by host input and clock ticks.
#[derive(Debug, Clone)]
pub struct SectorAnimator {
    config: AnimationConfig,
    animation_id: Option<AnimationId>,
    previous: Option<Vec<SectorDescriptor>>,
    current: Option<Vec<SectorDescriptor>>,
    phase: AnimationPhase,
    progress: f64,
    elapsed_ms: f64,
    events: Vec<AnimationEvent>,
}

impl SectorAnimator {
    pub fn new(config: AnimationConfig) -> PolarChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            animation_id: None,
            previous: None,
            current: None,
            phase: AnimationPhase::Settled,
            progress: 0.0,
            elapsed_ms: 0.0,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == AnimationPhase::Settled
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn animation_id(&self) -> Option<&AnimationId> {
        self.animation_id.as_ref()
    }

    #[must_use]
    pub fn previous(&self) -> Option<&[SectorDescriptor]> {
        self.previous.as_deref()
    }

    #[must_use]
    pub fn current(&self) -> &[SectorDescriptor] {
        self.current.as_deref().unwrap_or(&[])
    }

    /// Takes the lifecycle events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feeds new geometry keyed by `animation_id`.
    ///
    /// A changed identifier shifts `current` into `previous` and restarts the
    /// clock, discarding any transition in flight. An unchanged identifier
    /// only replaces `current` and keeps the running clock.
    pub fn on_input(
        &mut self,
        data: Vec<SectorDescriptor>,
        animation_id: impl Into<AnimationId>,
    ) -> AnimationPhase {
        let animation_id = animation_id.into();
        if self.animation_id.as_ref() != Some(&animation_id) {
            if self.phase == AnimationPhase::Transitioning {
                debug!(animation_id = %animation_id, "transition superseded");
                self.events.push(AnimationEvent::Superseded);
            }
            self.previous = self.current.replace(data);
            self.animation_id = Some(animation_id);
            self.progress = 0.0;
            self.elapsed_ms = 0.0;
            self.phase = AnimationPhase::Settled;

            if self.needs_transition() {
                debug!(
                    animation_id = %self.animation_id.as_ref().map_or("", AnimationId::as_str),
                    count = self.current().len(),
                    "transition started"
                );
                self.phase = AnimationPhase::Transitioning;
                self.events.push(AnimationEvent::Started);
            }
        } else if self.current.as_ref() != Some(&data) {
            trace!(count = data.len(), "transition target replaced");
            self.current = Some(data);
        }
        self.phase
    }

    fn needs_transition(&self) -> bool {
        let current = self.current();
        if !self.config.enabled || current.is_empty() {
            return false;
        }
        self.previous
            .as_deref()
            .is_none_or(|previous| previous != current)
    }

    /// Renders the frame for externally sampled progress `t`.
    ///
    /// Reaching `t == 1` settles the machine and emits `Finished`. Ticks while
    /// settled render `current` directly.
    pub fn on_tick(&mut self, t: f64) -> PolarChartResult<Vec<SectorDescriptor>> {
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(PolarChartError::InvalidProgress(t));
        }
        if self.phase == AnimationPhase::Settled {
            trace!(t, "tick ignored while settled");
            return Ok(self.current().to_vec());
        }

        self.progress = t;
        if t >= 1.0 {
            self.finish();
            return Ok(self.current().to_vec());
        }
        Ok(interpolate_sectors(
            self.previous.as_deref(),
            self.current(),
            t,
        ))
    }

    /// Advances the internal clock by `delta_ms` and renders the eased frame.
    pub fn advance(&mut self, delta_ms: f64) -> PolarChartResult<Vec<SectorDescriptor>> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(PolarChartError::InvalidData(
                "animation delta must be finite and >= 0".to_owned(),
            ));
        }
        if self.phase == AnimationPhase::Settled {
            return Ok(self.current().to_vec());
        }

        self.elapsed_ms += delta_ms;
        let t = self.config.progress_at(self.elapsed_ms);
        self.on_tick(t)
    }

    /// Geometry at the last observed progress, without advancing anything.
    #[must_use]
    pub fn frame(&self) -> Vec<SectorDescriptor> {
        match self.phase {
            AnimationPhase::Settled => self.current().to_vec(),
            AnimationPhase::Transitioning => {
                interpolate_sectors(self.previous.as_deref(), self.current(), self.progress)
            }
        }
    }

    /// Turning animation off mid-flight settles immediately on `current`.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled && self.phase == AnimationPhase::Transitioning {
            self.finish();
        }
    }

    fn finish(&mut self) {
        debug!("transition finished");
        self.phase = AnimationPhase::Settled;
        self.progress = 1.0;
        self.previous = None;
        self.events.push(AnimationEvent::Finished);
    }
}
