//! Per-frame crossing game update

use rand::Rng;

use super::state::{
    AWARD_INTERVAL, COLLISION_PENALTY, CROSS_ON_GREEN, CROSS_ON_RED, CarObstacle, CrossingInput,
    CrossingState, GOAL_BONUS, GOAL_LINE, LANE_YS, PLAYER_SPEED, SCREEN_H, SCREEN_W,
    SPAWN_INTERVAL, crossing_zone,
};

/// Advance the crossing game by one frame
pub fn tick(state: &mut CrossingState, input: &CrossingInput, dt: f32) {
    // Avatar movement, clamped to the screen
    let step = PLAYER_SPEED * dt;
    let rect = &mut state.player.rect;
    if input.up {
        rect.y -= step;
    }
    if input.down {
        rect.y += step;
    }
    if input.left {
        rect.x -= step;
    }
    if input.right {
        rect.x += step;
    }
    rect.x = rect.x.clamp(0.0, SCREEN_W - rect.w);
    rect.y = rect.y.clamp(0.0, SCREEN_H - rect.h);

    state.signal.update(dt);

    // Spawn cars on a fixed cadence, lane chosen by the seeded RNG
    state.spawn_timer += dt;
    if state.spawn_timer >= SPAWN_INTERVAL {
        state.spawn_timer = 0.0;
        let lane = state.rng.random_range(0..LANE_YS.len());
        state.cars.push(CarObstacle::spawn(lane));
    }

    for car in &mut state.cars {
        car.rect.x += car.speed * dt;
    }
    state.cars.retain(|c| !c.off_screen());

    // Any collision sends the avatar home with a penalty
    for car in &state.cars {
        if state.player.rect.overlaps(&car.rect) {
            state.player.score += COLLISION_PENALTY;
            state.player.respawn();
        }
    }

    // Crossing-zone scoring: rate-limited, sign depends on the signal
    state.award_timer += dt;
    if state.player.rect.overlaps(&crossing_zone()) && state.award_timer >= AWARD_INTERVAL {
        state.award_timer = 0.0;
        state.player.score += if state.signal.green {
            CROSS_ON_GREEN
        } else {
            CROSS_ON_RED
        };
    }

    // Reaching the far sidewalk pays out and restarts the crossing
    if state.player.rect.y < GOAL_LINE {
        state.player.score += GOAL_BONUS;
        state.player.respawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::state::{CAR_W, PLAYER_SIZE, Player, ROAD_TOP, Rect};

    #[test]
    fn test_avatar_stays_on_screen() {
        let mut state = CrossingState::new(7);
        let push_left = CrossingInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &push_left, 0.1);
        }
        assert_eq!(state.player.rect.x, 0.0);
    }

    #[test]
    fn test_cars_spawn_on_cadence_and_leave() {
        let mut state = CrossingState::new(7);
        // 3.1 seconds: spawns at 1.5 and 3.0
        for _ in 0..31 {
            tick(&mut state, &CrossingInput::default(), 0.1);
        }
        assert_eq!(state.cars.len(), 2);

        // Crossing the full screen takes (1000 + 80) / 240 = 4.5s
        for _ in 0..50 {
            state.spawn_timer = -1000.0; // stop further spawns
            tick(&mut state, &CrossingInput::default(), 0.1);
        }
        assert!(state.cars.is_empty());
    }

    #[test]
    fn test_collision_penalizes_and_respawns() {
        let mut state = CrossingState::new(7);
        state.player.rect = Rect::new(10.0, LANE_YS[0], PLAYER_SIZE, PLAYER_SIZE);
        state.cars.push(CarObstacle {
            rect: Rect::new(10.0, LANE_YS[0], CAR_W, 40.0),
            speed: 0.0,
        });
        tick(&mut state, &CrossingInput::default(), 0.01);
        assert_eq!(state.player.score, COLLISION_PENALTY);
        assert_eq!(state.player.rect, Player::start_rect());
    }

    #[test]
    fn test_crossing_zone_awards_by_signal() {
        let mut state = CrossingState::new(7);
        let zone = crossing_zone();
        state.player.rect = Rect::new(
            zone.x + 50.0,
            zone.y + 50.0,
            PLAYER_SIZE,
            PLAYER_SIZE,
        );

        // Signal starts red: 1 second in the zone costs two awards of -3
        for _ in 0..10 {
            tick(&mut state, &CrossingInput::default(), 0.1);
        }
        assert_eq!(state.player.score, 2 * CROSS_ON_RED);

        state.signal.green = true;
        state.player.score = 0;
        for _ in 0..10 {
            tick(&mut state, &CrossingInput::default(), 0.1);
        }
        assert_eq!(state.player.score, 2 * CROSS_ON_GREEN);
    }

    #[test]
    fn test_reaching_the_far_sidewalk_pays_out() {
        let mut state = CrossingState::new(7);
        state.player.rect.y = ROAD_TOP - 55.0; // already past the goal line
        tick(&mut state, &CrossingInput::default(), 0.01);
        assert_eq!(state.player.score, GOAL_BONUS);
        assert_eq!(state.player.rect, Player::start_rect());
    }

    #[test]
    fn test_same_seed_same_lanes() {
        let mut a = CrossingState::new(42);
        let mut b = CrossingState::new(42);
        for _ in 0..100 {
            tick(&mut a, &CrossingInput::default(), 0.1);
            tick(&mut b, &CrossingInput::default(), 0.1);
        }
        let lanes_a: Vec<u32> = a.cars.iter().map(|c| c.rect.y as u32).collect();
        let lanes_b: Vec<u32> = b.cars.iter().map(|c| c.rect.y as u32).collect();
        assert_eq!(lanes_a, lanes_b);
        assert!(!lanes_a.is_empty());
    }
}
