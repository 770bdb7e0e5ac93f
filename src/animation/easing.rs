use serde::{Deserialize, Serialize};

use crate::error::{PolarChartError, PolarChartResult};

/// Timing function applied to linear clock progress.
///
/// Named variants use the CSS cubic-bezier control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationEasing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Control points `[x1, y1, x2, y2]`; `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier([f64; 4]),
}

impl AnimationEasing {
    #[must_use]
    pub fn control_points(self) -> [f64; 4] {
        match self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::Ease => [0.25, 0.1, 0.25, 1.0],
            Self::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Self::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Self::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Self::CubicBezier(points) => points,
        }
    }

    pub fn validate(self) -> PolarChartResult<Self> {
        let [x1, y1, x2, y2] = self.control_points();
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(PolarChartError::InvalidConfig(
                "easing control points must be finite".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(PolarChartError::InvalidConfig(
                "easing x control points must be within [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Maps linear progress `t` to eased progress. Endpoints are exact.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let [x1, y1, x2, y2] = self.control_points();
        if x1 == y1 && x2 == y2 {
            return t;
        }
        bezier_ease(t, x1, y1, x2, y2)
    }
}

#[inline]
fn cubic_bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Inverts the x curve by bisection, then evaluates y.
fn bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut mid = t;
    for _ in 0..48 {
        let x = cubic_bezier(x1, x2, mid);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(y1, y2, mid)
}
