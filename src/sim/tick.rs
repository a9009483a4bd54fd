//! Per-frame simulation tick
//!
//! One execution of the pipeline per rendered frame, in a fixed order:
//! process input, advance and spawn objects, resolve collisions, derive the
//! level. A tick that enters as `Playing` runs the whole pipeline: even when
//! the collision phase ends the run, the level is still re-derived from the
//! final score so the snapshot never shows a stale tier. Only the celebration
//! flags stay gated on an ongoing run.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::check_collision;
use super::geometry::{clamp_lane, is_off_screen, lane_position};
use super::input::{GameKey, HeldKeys};
use super::levels::{LevelConfig, LevelTier};
use super::state::{Coin, GameState, GameStatus, Obstacle, ObstacleKind};
use crate::consts::*;

/// Advance the game state by one tick
///
/// Runs while status is `Playing` or `Paused`; while paused only the input
/// phase is live so Escape can resume.
pub fn tick(state: &mut GameState, keys: &mut HeldKeys) {
    process_input(state, keys);

    if state.status != GameStatus::Playing {
        return;
    }
    state.time_ticks += 1;

    update_game_objects(state);
    check_collisions(state);
    update_level(state);
}

/// Drain recognized keys into lane/pause intents
///
/// Handled keys are consumed so one physical press maps to one action. A tick
/// that handles the pause toggle skips lane movement.
fn process_input(state: &mut GameState, keys: &mut HeldKeys) {
    if state.status != GameStatus::Menu && keys.take(GameKey::Pause) {
        match state.status {
            GameStatus::Playing => {
                state.status = GameStatus::Paused;
                log::info!("paused");
            }
            GameStatus::Paused => {
                state.status = GameStatus::Playing;
                log::info!("resumed");
            }
            _ => {}
        }
        return;
    }

    if state.status != GameStatus::Playing {
        return;
    }

    if keys.take(GameKey::Left) {
        apply_lane_move(state, -1);
    }
    if keys.take(GameKey::Right) {
        apply_lane_move(state, 1);
    }
}

/// Move the player one lane, clamped at the boundary
pub(super) fn apply_lane_move(state: &mut GameState, delta: i32) {
    if state.status != GameStatus::Playing {
        return;
    }
    let lane = clamp_lane(state.player.lane + delta);
    state.player.lane = lane;
    state.player.pos.x = lane_position(lane);
}

/// Advance positions, despawn off-screen entities, roll for a new spawn
fn update_game_objects(state: &mut GameState) {
    let config = *state.level_config();

    for coin in &mut state.coins {
        coin.pos.y += coin.speed;
    }
    state.coins.retain(|c| !c.collected && !is_off_screen(c.pos));

    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed;
    }
    state.obstacles.retain(|o| !is_off_screen(o.pos));

    // At most one spawn per tick, using the current tier's rates and speeds
    let mut rng = state.rng_state.tick_rng(state.time_ticks);
    if rng.random::<f32>() < config.spawn_rate {
        if rng.random::<f32>() < config.obstacle_chance {
            spawn_obstacle(state, &config, &mut rng);
        } else {
            spawn_coin(state, &config, &mut rng);
        }
    }
}

fn spawn_coin(state: &mut GameState, config: &LevelConfig, rng: &mut Pcg32) {
    let lane = rng.random_range(0..LANE_COUNT);
    let id = state.next_entity_id();
    state.coins.push(Coin {
        id,
        pos: Vec2::new(lane_position(lane), SPAWN_Y),
        lane,
        speed: config.coin_speed,
        collected: false,
        value: COIN_VALUE,
    });
}

fn spawn_obstacle(state: &mut GameState, config: &LevelConfig, rng: &mut Pcg32) {
    let lane = rng.random_range(0..LANE_COUNT);
    let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(lane_position(lane), SPAWN_Y),
        lane,
        speed: config.obstacle_speed,
        kind,
    });
}

/// Resolve coin pickups, lethal hits, and the win threshold
///
/// Order matters: an obstacle hit sets `GameOver` first, then the win check
/// unconditionally overwrites to `Won` when the threshold is met, so a
/// simultaneous kill and win resolves as a win.
fn check_collisions(state: &mut GameState) {
    let player_pos = state.player.pos;

    for coin in &mut state.coins {
        if !coin.collected && check_collision(player_pos, coin.pos) {
            coin.collected = true;
            state.score += coin.value;
        }
    }
    state.coins.retain(|c| !c.collected);

    let hit_obstacle = state
        .obstacles
        .iter()
        .any(|o| check_collision(player_pos, o.pos));
    if hit_obstacle {
        state.player.is_alive = false;
        state.status = GameStatus::GameOver;
        log::info!("game over at score {}", state.score);
    }

    if state.score >= WIN_THRESHOLD {
        state.status = GameStatus::Won;
        log::info!("won at score {}", state.score);
    }
}

/// Derive the active tier from the score and fire edge-triggered celebrations
///
/// The derivation is unconditional so the tier always matches the score, even
/// on the tick the run ends; celebrations only fire while the run is live.
fn update_level(state: &mut GameState) {
    let tier = LevelTier::for_score(state.score);
    state.current_level = tier;
    state.level_progress = tier.progress(state.score);

    if tier != state.last_level {
        if state.status == GameStatus::Playing {
            state.show_level_up = true;
            state.show_confetti = true;
            state.is_expert_celebration = tier == LevelTier::Expert;
            log::info!("level up: {} at score {}", tier.as_str(), state.score);
        }
        state.last_level = tier;
    }
}
