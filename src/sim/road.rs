//! Road network membership test

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::RoadShape;

/// The union of all drivable shapes. Built once at city-generation time,
/// immutable afterwards.
///
/// Membership is a linear scan over the shapes. The shape count is tiny
/// (2 * (grid + 1) segments), so no spatial index is worth its weight here;
/// a grid or BVH would only pay off for much larger cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadNetwork {
    shapes: Vec<RoadShape>,
}

impl RoadNetwork {
    pub fn new(shapes: Vec<RoadShape>) -> Self {
        Self { shapes }
    }

    /// True if `point` lies on any road shape (short-circuits on first hit)
    pub fn contains(&self, point: Vec2) -> bool {
        self.shapes.iter().any(|s| s.contains(point))
    }

    pub fn shapes(&self) -> &[RoadShape] {
        &self.shapes
    }
}
