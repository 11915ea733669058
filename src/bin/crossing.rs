//! Headless scripted run of the pedestrian crossing game
//!
//! Walks the avatar straight up toward the far sidewalk at a fixed 60 Hz
//! timestep and logs score changes along the way.

use traffic_tutor::crossing::{CrossingInput, CrossingState, tick};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut state = CrossingState::new(0xC0FFEE);
    let mut last_score = state.player.score;

    let walk_up = CrossingInput {
        up: true,
        ..Default::default()
    };

    // 20 seconds is enough to cross a couple of times (or get run over)
    for _ in 0..(20.0 / DT) as u32 {
        tick(&mut state, &walk_up, DT);
        if state.player.score != last_score {
            last_score = state.player.score;
            log::info!("score: {last_score}");
        }
    }

    log::info!(
        "final: score {}, {} cars on screen",
        state.player.score,
        state.cars.len()
    );
}
