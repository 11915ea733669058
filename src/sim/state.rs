//! Vehicle state and per-frame input

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rules::AccrualTimer;
use crate::consts::KMH_PER_UNIT;
use crate::heading_to_forward;

/// Held-key input for one drive frame
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub brake: bool,
}

/// The drivable car: a plain data struct, no scene-graph baggage.
/// A host renderer mirrors `pos`/`heading_deg` into its own entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarState {
    /// Ground-plane position
    pub pos: Vec2,
    /// Heading in degrees (0 = +z, 90 = +x)
    pub heading_deg: f32,
    /// Signed scalar forward speed (world units/s, negative = reversing)
    pub speed: f32,
    /// One accrual timer per rule family, each gating one score event
    /// per second of continuous compliance or violation
    pub speed_timer: AccrualTimer,
    pub work_timer: AccrualTimer,
    pub light_timer: AccrualTimer,
}

impl CarState {
    pub fn new(pos: Vec2, heading_deg: f32) -> Self {
        Self {
            pos,
            heading_deg,
            speed: 0.0,
            speed_timer: AccrualTimer::default(),
            work_timer: AccrualTimer::default(),
            light_timer: AccrualTimer::default(),
        }
    }

    /// Unit forward vector in the ground plane
    pub fn forward(&self) -> Vec2 {
        heading_to_forward(self.heading_deg)
    }

    /// Speed as shown on the speedometer
    pub fn kmh(&self) -> u32 {
        (self.speed * KMH_PER_UNIT).round().abs() as u32
    }
}
