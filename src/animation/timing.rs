use serde::{Deserialize, Serialize};

use crate::animation::AnimationEasing;
use crate::error::{PolarChartError, PolarChartResult};

/// Transition timing: whether it runs, when it starts, how long it takes and
/// how progress is eased.
///
/// `enabled` is an explicit constructor input; headless hosts simply pass
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub begin_ms: f64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub easing: AnimationEasing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            begin_ms: 0.0,
            duration_ms: default_duration_ms(),
            easing: AnimationEasing::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_begin_ms(mut self, begin_ms: f64) -> Self {
        self.begin_ms = begin_ms;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: AnimationEasing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(self) -> PolarChartResult<Self> {
        if !self.begin_ms.is_finite() || self.begin_ms < 0.0 {
            return Err(PolarChartError::InvalidConfig(
                "animation begin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(PolarChartError::InvalidConfig(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        self.easing.validate()?;
        Ok(self)
    }

    /// Linear clock progress after `elapsed_ms`, clamped to `[0, 1]`.
    ///
    /// Progress stays at zero during the begin delay. A zero duration jumps
    /// straight to one once the delay has passed.
    #[must_use]
    pub fn linear_progress_at(self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.begin_ms;
        if active < 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (active / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress after `elapsed_ms`.
    #[must_use]
    pub fn progress_at(self, elapsed_ms: f64) -> f64 {
        self.easing.apply(self.linear_progress_at(elapsed_ms))
    }
}

fn default_enabled() -> bool {
    true
}

fn default_duration_ms() -> f64 {
    1500.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_waits_for_begin_delay() {
        let config = AnimationConfig::default()
            .with_begin_ms(100.0)
            .with_duration_ms(400.0)
            .with_easing(AnimationEasing::Linear);
        assert_eq!(config.progress_at(50.0), 0.0);
        assert_eq!(config.progress_at(300.0), 0.5);
        assert_eq!(config.progress_at(10_000.0), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let config = AnimationConfig::default().with_duration_ms(0.0);
        assert_eq!(config.progress_at(0.0), 1.0);
        assert!(config.validate().is_ok());
        assert!(config.with_duration_ms(-1.0).validate().is_err());
    }
}
