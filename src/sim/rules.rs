//! Rule zone detection
//!
//! The interesting part of the driving game: deciding which sign or light
//! currently applies to the car (proximity gate, and for traffic lights a
//! facing cone), and converting continuous compliance or violation into
//! discrete score events through accrual timers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::{Marker, TrafficLight};
use crate::consts::{RULE_RANGE, SPEED_LIMIT_KMH, VIEW_CONE_DEG};
use crate::hud::Severity;

/// Result of scanning one rule category for an applicable marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleScan<T> {
    /// The first marker that passed every gate for this rule
    Matched(T),
    NoneInRange,
}

/// Converts continuous violation/compliance time into score events.
///
/// Accumulates real elapsed time; each time the total crosses one second it
/// fires exactly once and resets to zero. The excess above 1.0 is discarded,
/// capping the rate at one event per second even for a huge frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccrualTimer {
    elapsed: f32,
}

impl AccrualTimer {
    /// Advance by `dt`; true exactly when a score event is due
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= 1.0 {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Clear accumulated time (called whenever the rule's gate fails)
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Proximity gate shared by every rule family
#[inline]
pub fn in_range(car_pos: Vec2, marker_pos: Vec2) -> bool {
    car_pos.distance(marker_pos) < RULE_RANGE
}

/// Facing-cone test for traffic lights.
///
/// The light must be in front of the car (positive forward projection),
/// within [`RULE_RANGE`], and within [`VIEW_CONE_DEG`] of the forward axis
/// (strict comparison: a light at exactly the cone edge is not seen).
pub fn light_in_view(car_pos: Vec2, forward: Vec2, light_pos: Vec2) -> bool {
    let to_light = light_pos - car_pos;
    let forward_dist = forward.dot(to_light);
    if forward_dist <= 0.0 || to_light.length() >= RULE_RANGE {
        return false;
    }
    // Ground-plane right vector, perpendicular to forward
    let right = Vec2::new(forward.y, -forward.x);
    let lateral = right.dot(to_light).abs();
    let angle = lateral.atan2(forward_dist).to_degrees();
    angle < VIEW_CONE_DEG
}

/// The speed rule watches only the first posted sign
pub fn scan_speed_sign(car_pos: Vec2, signs: &[Marker]) -> RuleScan<&Marker> {
    match signs.first() {
        Some(sign) if in_range(car_pos, sign.pos) => RuleScan::Matched(sign),
        _ => RuleScan::NoneInRange,
    }
}

/// First stop-sign or work-zone marker within range wins
pub fn scan_stop_markers(car_pos: Vec2, markers: &[Marker]) -> RuleScan<&Marker> {
    markers
        .iter()
        .find(|m| in_range(car_pos, m.pos))
        .map_or(RuleScan::NoneInRange, RuleScan::Matched)
}

/// First light satisfying the facing cone wins.
///
/// Collection order decides ties, not distance. Preserved as-is: at the demo
/// city's single intersection at most one light can be in cone at a time.
pub fn scan_lights<'a>(
    car_pos: Vec2,
    forward: Vec2,
    lights: &'a [TrafficLight],
) -> RuleScan<&'a TrafficLight> {
    lights
        .iter()
        .find(|l| light_in_view(car_pos, forward, l.pos))
        .map_or(RuleScan::NoneInRange, RuleScan::Matched)
}

/// One evaluated rule outcome: what to show and how to score it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub message: &'static str,
    pub severity: Severity,
    /// Score delta applied once per accrued second
    pub delta: i64,
}

/// Speed rule: compliant iff the displayed speed is at or under the limit
pub fn speed_outcome(kmh: u32) -> Outcome {
    if kmh > SPEED_LIMIT_KMH {
        Outcome {
            message: "Speed limit 30, do not exceed!",
            severity: Severity::Violation,
            delta: -1,
        }
    } else {
        Outcome {
            message: "Good job! Following speed limit!",
            severity: Severity::Praise,
            delta: 1,
        }
    }
}

/// Stop-sign/work-zone rule: presence in the zone always penalizes,
/// whatever the speed. It never rewards actually stopping; see DESIGN.md.
pub fn work_zone_outcome() -> Outcome {
    Outcome {
        message: "STOP: Work In Progress",
        severity: Severity::Violation,
        delta: -1,
    }
}

/// Traffic-light rule: red wants the car stopped, green wants it moving.
/// "Moving" means the displayed speed exceeds 1 km/h.
pub fn traffic_outcome(is_red: bool, kmh: u32) -> Outcome {
    let moving = kmh > 1;
    match (is_red, moving) {
        (true, true) => Outcome {
            message: "Red Light! Stop the car!",
            severity: Severity::Violation,
            delta: -1,
        },
        (true, false) => Outcome {
            message: "Stopped at red light, good job!",
            severity: Severity::Praise,
            delta: 1,
        },
        (false, true) => Outcome {
            message: "Green Light! Keep going!",
            severity: Severity::Praise,
            delta: 1,
        },
        (false, false) => Outcome {
            message: "Green Light! You should move!",
            severity: Severity::Violation,
            delta: -1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrual_timer_caps_at_one_event_per_second() {
        let mut timer = AccrualTimer::default();
        let mut events = 0;
        // 2.5 seconds of continuous violation in 0.1s steps
        for _ in 0..25 {
            if timer.advance(0.1) {
                events += 1;
            }
        }
        assert_eq!(events, 2);
    }

    #[test]
    fn test_accrual_timer_discards_excess() {
        let mut timer = AccrualTimer::default();
        // A 3.5 second frame still fires only once, with no carry-over
        assert!(timer.advance(3.5));
        assert!(!timer.advance(0.9));
        assert!(timer.advance(0.1));
    }

    #[test]
    fn test_light_ahead_is_in_view() {
        let forward = Vec2::new(0.0, 1.0);
        assert!(light_in_view(Vec2::ZERO, forward, Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_light_behind_is_never_in_view() {
        let forward = Vec2::new(0.0, 1.0);
        assert!(!light_in_view(Vec2::ZERO, forward, Vec2::new(0.0, -2.0)));
        assert!(!light_in_view(Vec2::ZERO, forward, Vec2::new(0.0, -100.0)));
    }

    #[test]
    fn test_light_outside_range_is_not_in_view() {
        let forward = Vec2::new(0.0, 1.0);
        assert!(!light_in_view(Vec2::ZERO, forward, Vec2::new(0.0, 15.0)));
        assert!(light_in_view(Vec2::ZERO, forward, Vec2::new(0.0, 14.9)));
    }

    #[test]
    fn test_cone_edge_is_excluded() {
        let forward = Vec2::new(0.0, 1.0);
        // The threshold is strict: the cone edge itself is rejected
        let at_edge = Vec2::new(10.0 * 15.1f32.to_radians().tan(), 10.0);
        assert!(!light_in_view(Vec2::ZERO, forward, at_edge));
        // Slightly inside the cone
        let inside = Vec2::new(10.0 * 14.9f32.to_radians().tan(), 10.0);
        assert!(light_in_view(Vec2::ZERO, forward, inside));
    }

    #[test]
    fn test_traffic_outcome_quadrants() {
        assert_eq!(traffic_outcome(true, 30).delta, -1);
        assert_eq!(traffic_outcome(true, 0).delta, 1);
        assert_eq!(traffic_outcome(false, 30).delta, 1);
        assert_eq!(traffic_outcome(false, 0).delta, -1);
        // 1 km/h counts as stopped
        assert_eq!(traffic_outcome(true, 1).delta, 1);
    }

    #[test]
    fn test_speed_outcome_limit_is_inclusive() {
        assert_eq!(speed_outcome(30).delta, 1);
        assert_eq!(speed_outcome(31).delta, -1);
    }
}
