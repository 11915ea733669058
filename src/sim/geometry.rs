//! Drivable-area shapes
//!
//! Roads are flat ground-plane shapes. A straight segment is an axis-aligned
//! rectangle; a smooth corner is an annular arc sector defined by a circle
//! center, an inner/outer radius band and an angular extent in degrees
//! (0 = +x, 90 = +y, wrapping at 360).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_deg;

/// One drivable shape in the road network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoadShape {
    /// Axis-aligned rectangle: center plus half-extents
    Rect { center: Vec2, half: Vec2 },
    /// Annular arc sector: radial band [inner, outer] over [start, end] degrees
    Arc {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        start_deg: f32,
        end_deg: f32,
    },
}

impl RoadShape {
    /// A straight road segment from its center and full size
    pub fn segment(center: Vec2, size: Vec2) -> Self {
        Self::Rect {
            center,
            half: size * 0.5,
        }
    }

    /// A corner arc from its centerline radius and road width
    pub fn corner(center: Vec2, radius: f32, width: f32, start_deg: f32, end_deg: f32) -> Self {
        Self::Arc {
            center,
            inner_radius: radius - width * 0.5,
            outer_radius: radius + width * 0.5,
            start_deg,
            end_deg,
        }
    }

    /// Whether `point` lies on this shape. Boundaries count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Self::Rect { center, half } => {
                let d = point - center;
                d.x.abs() <= half.x && d.y.abs() <= half.y
            }
            Self::Arc {
                center,
                inner_radius,
                outer_radius,
                start_deg,
                end_deg,
            } => {
                let offset = point - center;
                let dist = offset.length();
                if dist < inner_radius || dist > outer_radius {
                    return false;
                }
                let ang = normalize_deg(offset.y.atan2(offset.x).to_degrees());
                let start = normalize_deg(start_deg);
                let end = normalize_deg(end_deg);
                if start <= end {
                    start <= ang && ang <= end
                } else {
                    // Wrap-around sector, e.g. 350..10 degrees
                    ang >= start || ang <= end
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_contains_interior_and_boundary() {
        let rect = RoadShape::segment(Vec2::new(10.0, -5.0), Vec2::new(20.0, 4.0));
        assert!(rect.contains(Vec2::new(10.0, -5.0)));
        // Exactly on the half-extent is still on the road
        assert!(rect.contains(Vec2::new(20.0, -5.0)));
        assert!(rect.contains(Vec2::new(10.0, -3.0)));
        assert!(!rect.contains(Vec2::new(20.1, -5.0)));
    }

    #[test]
    fn test_arc_radial_band_boundaries() {
        let arc = RoadShape::corner(Vec2::ZERO, 10.0, 4.0, 0.0, 90.0);
        // Inner and outer radii are inclusive
        assert!(arc.contains(Vec2::new(8.0, 0.0)));
        assert!(arc.contains(Vec2::new(12.0, 0.0)));
        assert!(!arc.contains(Vec2::new(7.9, 0.0)));
        assert!(!arc.contains(Vec2::new(12.1, 0.0)));
        // Inside the band but outside the angular extent
        assert!(!arc.contains(Vec2::new(-10.0, 0.0)));
    }

    #[test]
    fn test_arc_wraparound_sector() {
        let arc = RoadShape::corner(Vec2::ZERO, 10.0, 4.0, 350.0, 10.0);
        // Angle 0 is inside the wrapped span
        assert!(arc.contains(Vec2::new(10.0, 0.0)));
        // Angle 180 is not
        assert!(!arc.contains(Vec2::new(-10.0, 0.0)));
        assert!(arc.contains(Vec2::new(10.0, 1.0)));
        assert!(arc.contains(Vec2::new(10.0, -1.0)));
    }

    proptest! {
        /// Rectangle containment is symmetric under reflection through the center
        #[test]
        fn prop_rect_reflection_symmetry(
            cx in -50.0f32..50.0, cy in -50.0f32..50.0,
            hx in 0.0f32..30.0, hy in 0.0f32..30.0,
            px in -100.0f32..100.0, py in -100.0f32..100.0,
        ) {
            let center = Vec2::new(cx, cy);
            let rect = RoadShape::Rect { center, half: Vec2::new(hx, hy) };
            let p = Vec2::new(px, py);
            let mirrored = center * 2.0 - p;
            prop_assert_eq!(rect.contains(p), rect.contains(mirrored));
        }
    }
}
