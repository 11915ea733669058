//! Pedestrian crossing game state

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Screen and layout constants (pixel units)
pub const SCREEN_W: f32 = 1000.0;
pub const SCREEN_H: f32 = 700.0;
pub const ROAD_TOP: f32 = SCREEN_H / 2.0 - 120.0;
pub const ROAD_BOTTOM: f32 = SCREEN_H / 2.0 + 120.0;
pub const SIDEWALK_HEIGHT: f32 = 60.0;
pub const PLAYER_SIZE: f32 = 40.0;
/// Avatar speed in px/s
pub const PLAYER_SPEED: f32 = 300.0;

pub const CAR_W: f32 = 80.0;
pub const CAR_H: f32 = 40.0;
/// Obstacle car speed in px/s (rightward)
pub const CAR_SPEED: f32 = 240.0;
/// Seconds between car spawns
pub const SPAWN_INTERVAL: f32 = 1.5;

/// Seconds between signal toggles
pub const SIGNAL_PERIOD: f32 = 3.0;
/// Seconds between crossing-zone score awards
pub const AWARD_INTERVAL: f32 = 0.5;

/// Score deltas
pub const COLLISION_PENALTY: i64 = -15;
pub const CROSS_ON_GREEN: i64 = 2;
pub const CROSS_ON_RED: i64 = -3;
pub const GOAL_BONUS: i64 = 20;

/// The avatar reaches the far sidewalk once its top edge passes this line
pub const GOAL_LINE: f32 = ROAD_TOP - SIDEWALK_HEIGHT + 10.0;

/// Axis-aligned screen rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap: rectangles merely sharing an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Held-key input for one crossing frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossingInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The pedestrian avatar. Score is session-only, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub score: i64,
}

impl Player {
    pub fn start_rect() -> Rect {
        Rect::new(
            SCREEN_W / 2.0 - PLAYER_SIZE / 2.0,
            ROAD_BOTTOM + SIDEWALK_HEIGHT + 10.0,
            PLAYER_SIZE,
            PLAYER_SIZE,
        )
    }

    /// Send the avatar back to the starting sidewalk
    pub fn respawn(&mut self) {
        self.rect = Self::start_rect();
    }
}

/// A car sweeping across the road
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarObstacle {
    pub rect: Rect,
    pub speed: f32,
}

/// The two lane y-positions cars can spawn in
pub const LANE_YS: [f32; 2] = [ROAD_TOP + 20.0, ROAD_BOTTOM - CAR_H - 20.0];

impl CarObstacle {
    /// Spawn just off the left edge in the given lane
    pub fn spawn(lane: usize) -> Self {
        Self {
            rect: Rect::new(-CAR_W, LANE_YS[lane], CAR_W, CAR_H),
            speed: CAR_SPEED,
        }
    }

    /// Off the right edge and due for removal
    pub fn off_screen(&self) -> bool {
        self.rect.x >= SCREEN_W
    }
}

/// Pedestrian-crossing signal: a plain boolean toggled on a fixed period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub green: bool,
    elapsed: f32,
}

impl Signal {
    pub fn new() -> Self {
        Self {
            green: false,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= SIGNAL_PERIOD {
            self.elapsed = 0.0;
            self.green = !self.green;
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

/// The crossing zone in the middle of the road
pub fn crossing_zone() -> Rect {
    Rect::new(
        SCREEN_W / 2.0 - 100.0,
        ROAD_TOP,
        200.0,
        ROAD_BOTTOM - ROAD_TOP,
    )
}

/// Complete crossing game state
#[derive(Debug, Clone)]
pub struct CrossingState {
    pub player: Player,
    pub cars: Vec<CarObstacle>,
    pub signal: Signal,
    pub spawn_timer: f32,
    pub award_timer: f32,
    pub rng: Pcg32,
}

impl CrossingState {
    pub fn new(seed: u64) -> Self {
        Self {
            player: Player {
                rect: Player::start_rect(),
                score: 0,
            },
            cars: Vec::new(),
            signal: Signal::new(),
            spawn_timer: 0.0,
            award_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Sharing an edge is not a collision
        assert!(!a.overlaps(&b));
        let c = Rect::new(9.9, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_signal_toggles_on_period() {
        let mut signal = Signal::new();
        assert!(!signal.green);
        for _ in 0..30 {
            signal.update(0.1);
        }
        assert!(signal.green);
        for _ in 0..30 {
            signal.update(0.1);
        }
        assert!(!signal.green);
    }

    #[test]
    fn test_spawn_lanes_sit_inside_the_road() {
        for lane in 0..LANE_YS.len() {
            let car = CarObstacle::spawn(lane);
            assert!(car.rect.y >= ROAD_TOP);
            assert!(car.rect.y + car.rect.h <= ROAD_BOTTOM);
        }
    }
}
