//! Deterministic driving simulation
//!
//! All gameplay logic for the car game lives here. This module is pure:
//! - No rendering or platform dependencies
//! - World and score ledger are injected, never global
//! - Per-frame `tick` with real elapsed time

pub mod geometry;
pub mod road;
pub mod rules;
pub mod state;
pub mod tick;
pub mod world;

pub use geometry::RoadShape;
pub use road::RoadNetwork;
pub use rules::{AccrualTimer, Outcome, RuleScan, light_in_view};
pub use state::{CarState, DriveInput};
pub use tick::tick;
pub use world::{Marker, MarkerKind, TrafficLight, World, city_layout};
