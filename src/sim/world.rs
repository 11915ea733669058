//! City layout: roads, signs and traffic lights
//!
//! The world is constructed once at startup and handed to the vehicle tick
//! by reference; only the traffic lights mutate afterwards (phase timers).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::RoadShape;
use super::road::RoadNetwork;
use crate::consts::*;

/// What a roadside marker means to the rule checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    StopSign,
    SpeedLimit,
    WorkZone,
}

/// A sign or work-zone barrier standing beside the road
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Vec2,
    /// Which way the marker faces (degrees); presentation only
    pub heading_deg: f32,
    pub kind: MarkerKind,
}

/// A traffic light with a two-phase timer
///
/// `index` 0 shows green, 1 shows red. Lights at one intersection are seeded
/// with opposite indices so crossing approaches alternate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficLight {
    pub pos: Vec2,
    pub heading_deg: f32,
    index: u8,
    elapsed: f32,
}

impl TrafficLight {
    pub fn new(pos: Vec2, heading_deg: f32, index: u8) -> Self {
        Self {
            pos,
            heading_deg,
            index,
            elapsed: 0.0,
        }
    }

    /// Advance the phase timer; flips every [`LIGHT_PERIOD`] seconds.
    /// The counter resets to zero on flip, discarding any excess.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= LIGHT_PERIOD {
            self.elapsed = 0.0;
            self.index ^= 1;
        }
    }

    pub fn is_red(&self) -> bool {
        self.index == 1
    }
}

/// Everything the driving simulation reads: the road network plus all
/// rule markers. Injected into the tick, never global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub roads: RoadNetwork,
    pub speed_signs: Vec<Marker>,
    /// Stop signs and work-zone barriers share one rule family
    pub stop_markers: Vec<Marker>,
    pub lights: Vec<TrafficLight>,
}

impl World {
    /// Advance all traffic light timers
    pub fn update_lights(&mut self, dt: f32) {
        for light in &mut self.lights {
            light.update(dt);
        }
    }

    /// Where the car starts: on the bottom road row, facing east
    pub fn car_spawn() -> (Vec2, f32) {
        (
            Vec2::new(OFFSET + CELL_SPACING, OFFSET + ROAD_WIDTH * 0.35),
            90.0,
        )
    }
}

/// Build the demo city: a GRID_SIZE x GRID_SIZE block grid of roads with one
/// signed intersection at the center.
pub fn city_layout() -> World {
    let mut shapes = Vec::new();
    let span = GRID_SIZE as f32 * CELL_SPACING;

    // Horizontal roads
    for j in 0..=GRID_SIZE {
        let z = OFFSET + j as f32 * CELL_SPACING;
        shapes.push(RoadShape::segment(
            Vec2::new(0.0, z),
            Vec2::new(span, ROAD_WIDTH),
        ));
    }
    // Vertical roads
    for i in 0..=GRID_SIZE {
        let x = OFFSET + i as f32 * CELL_SPACING;
        shapes.push(RoadShape::segment(
            Vec2::new(x, 0.0),
            Vec2::new(ROAD_WIDTH, span),
        ));
    }

    let speed_signs = vec![Marker {
        pos: Vec2::new(OFFSET - ROAD_WIDTH * 0.4, OFFSET + CELL_SPACING),
        heading_deg: 0.0,
        kind: MarkerKind::SpeedLimit,
    }];

    let stop_markers = vec![
        Marker {
            pos: Vec2::new(OFFSET - 2.0 + 2.0 * CELL_SPACING, OFFSET + 2.0 * CELL_SPACING),
            heading_deg: 90.0,
            kind: MarkerKind::StopSign,
        },
        Marker {
            pos: Vec2::new(OFFSET + 2.0 * CELL_SPACING, OFFSET - 2.0),
            heading_deg: 90.0,
            kind: MarkerKind::StopSign,
        },
        Marker {
            pos: Vec2::new(OFFSET + 2.0 * CELL_SPACING, OFFSET + CELL_SPACING),
            heading_deg: 90.0,
            kind: MarkerKind::WorkZone,
        },
    ];

    // Four lights around the central intersection; opposing approaches get
    // opposite starting phases.
    let cx = OFFSET + CELL_SPACING;
    let cz = OFFSET + CELL_SPACING;
    let half_road = ROAD_WIDTH / 2.0;
    let lights = vec![
        TrafficLight::new(Vec2::new(cx + half_road, cz), 90.0, 0),
        TrafficLight::new(Vec2::new(cx, cz + half_road), 0.0, 1),
        TrafficLight::new(Vec2::new(cx - half_road, cz), -90.0, 1),
        TrafficLight::new(Vec2::new(cx, cz - half_road), 180.0, 0),
    ];

    World {
        roads: RoadNetwork::new(shapes),
        speed_signs,
        stop_markers,
        lights,
    }
}
