//! Traffic Tutor - a pair of educational traffic-rules mini-games
//!
//! Core modules:
//! - `sim`: Deterministic driving simulation (road geometry, rule zones, vehicle tick)
//! - `crossing`: Pedestrian crossing mini-game simulation
//! - `score`: Persistent score ledger (JSON file)
//! - `hud`: HUD sink interface consumed by a host renderer

pub mod crossing;
pub mod hud;
pub mod score;
pub mod sim;

pub use hud::{HudSink, NullHud, Severity, WarningChannel};
pub use score::ScoreLedger;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Each city block dimension (the land between roads)
    pub const BLOCK_SIZE: f32 = 20.0;
    /// Width of each road
    pub const ROAD_WIDTH: f32 = 10.0;
    /// Distance between parallel roads' center lines
    pub const CELL_SPACING: f32 = BLOCK_SIZE + ROAD_WIDTH;
    /// 2x2 blocks => 3 parallel roads in each direction
    pub const GRID_SIZE: i32 = 2;
    /// City is centered around the origin
    pub const OFFSET: f32 = -((GRID_SIZE / 2) as f32) * CELL_SPACING;

    /// Distance below which a sign or light affects the car
    pub const RULE_RANGE: f32 = 15.0;
    /// Half-angle of the cone within which a traffic light counts as "in front" (degrees)
    pub const VIEW_CONE_DEG: f32 = 15.0;
    /// Seconds between traffic light phase flips
    pub const LIGHT_PERIOD: f32 = 20.0;

    /// Car forward acceleration (world units/s^2)
    pub const CAR_ACCEL: f32 = 1.0;
    /// Car top speed (world units/s); reverse is capped at half
    pub const CAR_MAX_SPEED: f32 = 5.0;
    /// Steering rate at top speed (degrees/s)
    pub const CAR_TURN_SPEED: f32 = 100.0;
    /// Displayed km/h per world unit of speed (top speed reads 60 km/h)
    pub const KMH_PER_UNIT: f32 = 12.0;
    /// Displayed speed limit in km/h
    pub const SPEED_LIMIT_KMH: u32 = 30;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Ground-plane forward vector for a heading in degrees (0 = +z, 90 = +x)
#[inline]
pub fn heading_to_forward(heading_deg: f32) -> Vec2 {
    let r = heading_deg.to_radians();
    Vec2::new(r.sin(), r.cos())
}

/// Decay a value toward zero by lerp factor `rate * dt`, saturating at 1
#[inline]
pub fn decay_toward_zero(value: f32, rate: f32, dt: f32) -> f32 {
    value * (1.0 - (rate * dt).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deg() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(-10.0), 350.0);
        assert_eq!(normalize_deg(725.0), 5.0);
    }

    #[test]
    fn test_heading_to_forward() {
        assert!((heading_to_forward(0.0) - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert!((heading_to_forward(90.0) - Vec2::new(1.0, 0.0)).length() < 1e-6);
        assert!((heading_to_forward(180.0) - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_decay_saturates() {
        // Huge dt must stop at zero, not overshoot past it
        assert_eq!(decay_toward_zero(5.0, 10.0, 1.0), 0.0);
        assert!(decay_toward_zero(5.0, 1.0, 0.1) > 4.0);
    }
}
