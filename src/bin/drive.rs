//! Headless scripted run of the driving game
//!
//! Stands in for the real engine-hosted build: fixed 60 Hz timestep, a
//! scripted input track, HUD updates written to the log. Useful for
//! eyeballing rule behavior without a window.

use traffic_tutor::hud::{HudSink, Severity, WarningChannel};
use traffic_tutor::score::{SCORE_FILE, ScoreLedger};
use traffic_tutor::sim::{CarState, DriveInput, World, city_layout, tick};

const DT: f32 = 1.0 / 60.0;

/// HUD that logs state changes instead of drawing them
#[derive(Default)]
struct LogHud {
    last_kmh: Option<u32>,
}

impl HudSink for LogHud {
    fn speed(&mut self, kmh: u32) {
        if self.last_kmh != Some(kmh) {
            self.last_kmh = Some(kmh);
            log::debug!("speed: {kmh} km/h");
        }
    }

    fn warning(&mut self, channel: WarningChannel, message: Option<(&'static str, Severity)>) {
        if let Some((text, severity)) = message {
            match severity {
                Severity::Praise => log::info!("{channel:?}: {text}"),
                Severity::Violation => log::warn!("{channel:?}: {text}"),
            }
        }
    }

    fn score(&mut self, value: i64) {
        log::info!("score: {value}");
    }
}

fn main() {
    env_logger::init();

    let mut world = city_layout();
    let (spawn, heading) = World::car_spawn();
    let mut car = CarState::new(spawn, heading);
    let mut ledger = ScoreLedger::load(SCORE_FILE);
    let mut hud = LogHud::default();

    log::info!("starting score: {}", ledger.value());

    // 30 seconds: floor it for 10, coast for 10, brake and sit for 10
    for frame in 0..(30.0 / DT) as u32 {
        let t = frame as f32 * DT;
        let input = if t < 10.0 {
            DriveInput {
                forward: true,
                ..Default::default()
            }
        } else if t < 20.0 {
            DriveInput::default()
        } else {
            DriveInput {
                brake: true,
                ..Default::default()
            }
        };

        world.update_lights(DT);
        tick(&mut car, &input, DT, &world, &mut ledger, &mut hud);
    }

    log::info!(
        "final: pos ({:.1}, {:.1}), score {}",
        car.pos.x,
        car.pos.y,
        ledger.value()
    );
}
