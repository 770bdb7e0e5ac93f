//! Transition animation between successive sector geometry snapshots.

mod animator;
mod easing;
mod timing;

pub use animator::{
    AnimationEvent, AnimationId, AnimationPhase, SectorAnimator, interpolate_number,
    interpolate_sectors,
};
pub use easing::AnimationEasing;
pub use timing::AnimationConfig;
