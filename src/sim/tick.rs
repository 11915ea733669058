//! Per-frame vehicle update
//!
//! Order matters and mirrors the rule semantics: longitudinal speed first,
//! then the speedometer reading, then steering, then the on-road movement
//! commit, then the three rule checks in fixed priority order
//! (speed limit, stop/work zone, traffic light).

use crate::consts::*;
use crate::decay_toward_zero;
use crate::hud::{HudSink, WarningChannel};
use crate::score::ScoreLedger;

use super::rules::{
    RuleScan, scan_lights, scan_speed_sign, scan_stop_markers, speed_outcome, traffic_outcome,
    work_zone_outcome,
};
use super::state::{CarState, DriveInput};
use super::world::World;

/// Advance the car by one frame and apply rule scoring
pub fn tick(
    car: &mut CarState,
    input: &DriveInput,
    dt: f32,
    world: &World,
    ledger: &mut ScoreLedger,
    hud: &mut dyn HudSink,
) {
    // Longitudinal: accelerate, coast toward zero, or brake hard
    if input.forward {
        car.speed += CAR_ACCEL * dt;
    } else if input.backward {
        car.speed -= CAR_ACCEL * dt;
    } else {
        car.speed = decay_toward_zero(car.speed, 1.0, dt);
    }
    if input.brake {
        car.speed = decay_toward_zero(car.speed, 10.0, dt);
    }
    car.speed = car.speed.clamp(-CAR_MAX_SPEED / 2.0, CAR_MAX_SPEED);

    // The speedometer reading the rules judge against
    let kmh = car.kmh();
    hud.speed(kmh);

    // Steering: no turning at standstill, full rate at top speed
    let direction = if input.left {
        -1.0
    } else if input.right {
        1.0
    } else {
        0.0
    };
    car.heading_deg += direction * CAR_TURN_SPEED * dt * (car.speed.abs() / CAR_MAX_SPEED);

    // Commit movement only while on the road; leaving it is a hard stop
    let candidate = car.pos + car.forward() * car.speed * dt;
    if world.roads.contains(candidate) {
        car.pos = candidate;
    } else {
        car.speed = 0.0;
    }

    // Speed limit rule
    match scan_speed_sign(car.pos, &world.speed_signs) {
        RuleScan::Matched(_) => {
            let outcome = speed_outcome(kmh);
            hud.warning(WarningChannel::Speed, Some((outcome.message, outcome.severity)));
            if car.speed_timer.advance(dt) {
                hud.score(ledger.change(outcome.delta));
            }
        }
        RuleScan::NoneInRange => {
            hud.warning(WarningChannel::Speed, None);
            car.speed_timer.reset();
        }
    }

    // Stop sign / work zone rule
    match scan_stop_markers(car.pos, &world.stop_markers) {
        RuleScan::Matched(_) => {
            let outcome = work_zone_outcome();
            hud.warning(
                WarningChannel::WorkZone,
                Some((outcome.message, outcome.severity)),
            );
            if car.work_timer.advance(dt) {
                hud.score(ledger.change(outcome.delta));
            }
        }
        RuleScan::NoneInRange => {
            hud.warning(WarningChannel::WorkZone, None);
            car.work_timer.reset();
        }
    }

    // Traffic light rule (first light in the facing cone)
    match scan_lights(car.pos, car.forward(), &world.lights) {
        RuleScan::Matched(light) => {
            let outcome = traffic_outcome(light.is_red(), kmh);
            hud.warning(
                WarningChannel::TrafficLight,
                Some((outcome.message, outcome.severity)),
            );
            if car.light_timer.advance(dt) {
                hud.score(ledger.change(outcome.delta));
            }
        }
        RuleScan::NoneInRange => {
            hud.warning(WarningChannel::TrafficLight, None);
            car.light_timer.reset();
        }
    }
}
