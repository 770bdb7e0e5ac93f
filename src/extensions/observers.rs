use serde::{Deserialize, Serialize};

use crate::animation::{AnimationEvent, AnimationPhase};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub phase: AnimationPhase,
    pub progress: f64,
    pub sector_count: usize,
}

/// Hook interface for animation start/end notifications.
///
/// Observers see lifecycle events and chart context without mutating
/// animation state directly.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: AnimationEvent, context: ObserverContext);
}
