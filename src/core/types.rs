use serde::{Deserialize, Serialize};

pub const RADIAN: f64 = std::f64::consts::PI / 180.0;

/// Cartesian point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shared center of a polar coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarCenter {
    pub cx: f64,
    pub cy: f64,
}

impl PolarCenter {
    #[must_use]
    pub fn new(cx: f64, cy: f64) -> Self {
        Self { cx, cy }
    }

    /// Converts a polar coordinate around this center to screen space.
    ///
    /// Angles are in degrees and grow counter-clockwise, so the y component is
    /// negated for a y-down surface.
    #[must_use]
    pub fn to_cartesian(self, radius: f64, angle_deg: f64) -> Point {
        polar_to_cartesian(self.cx, self.cy, radius, angle_deg)
    }
}

#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let theta = -RADIAN * angle_deg;
    Point {
        x: cx + theta.cos() * radius,
        y: cy + theta.sin() * radius,
    }
}

/// Which dimension of the bar carries the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolarLayout {
    /// Fixed radial slot, value sweeps along the angle axis.
    #[default]
    Radial,
    /// Fixed angular slot, value extends along the radius axis.
    Angular,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_degrees_points_right_and_ninety_points_up() {
        let center = PolarCenter::new(100.0, 100.0);
        let right = center.to_cartesian(10.0, 0.0);
        assert!((right.x - 110.0).abs() <= 1e-9);
        assert!((right.y - 100.0).abs() <= 1e-9);

        let up = center.to_cartesian(10.0, 90.0);
        assert!((up.x - 100.0).abs() <= 1e-9);
        assert!((up.y - 90.0).abs() <= 1e-9);
    }
}
