//! State-owning game controller
//!
//! The only boundary contract between the simulation and the presentation
//! layers. Front ends read snapshots, forward raw key events, and call the
//! explicit intents (`start`, `restart`, `toggle_pause`, `move_lane`) plus the
//! celebration acknowledgements; nothing else mutates game state.

use super::input::{GameKey, HeldKeys};
use super::state::{GameState, GameStatus};
use super::tick;

/// Owns the game state and the held-key set
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    keys: HeldKeys,
}

impl GameEngine {
    /// New engine waiting in the menu
    pub fn new(seed: u64) -> Self {
        log::info!("engine created with seed {seed}");
        Self {
            state: GameState::new(seed),
            keys: HeldKeys::default(),
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// JSON snapshot for the 2D/3D scene renderers
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|err| {
            log::error!("snapshot serialization failed: {err}");
            String::from("{}")
        })
    }

    /// Record an asynchronous key-down event
    pub fn key_down(&mut self, key: GameKey) {
        self.keys.press(key);
    }

    /// Record an asynchronous key-up event
    pub fn key_up(&mut self, key: GameKey) {
        self.keys.release(key);
    }

    /// Run one tick of the simulation pipeline
    pub fn tick(&mut self) {
        tick::tick(&mut self.state, &mut self.keys);
    }

    /// Whether the host should schedule another tick
    pub fn should_reschedule(&self) -> bool {
        self.state.status.keeps_ticking()
    }

    /// Reset and begin a run
    pub fn start(&mut self) {
        log::info!("run started");
        self.state.reset();
        self.keys = HeldKeys::default();
    }

    /// Identical reset, callable from game over / won
    pub fn restart(&mut self) {
        log::info!("run restarted");
        self.state.reset();
        self.keys = HeldKeys::default();
    }

    /// Discrete pause intent (pause-menu button), same rules as Escape
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Playing => self.state.status = GameStatus::Paused,
            GameStatus::Paused => self.state.status = GameStatus::Playing,
            _ => {}
        }
    }

    /// Discrete lane intent: one step left (-1) or right (+1), only while playing
    pub fn move_lane(&mut self, delta: i32) {
        tick::apply_lane_move(&mut self.state, delta);
    }

    /// Presentation finished the level-up banner animation
    pub fn on_level_up_complete(&mut self) {
        self.state.show_level_up = false;
    }

    /// Presentation finished the confetti animation
    pub fn on_confetti_complete(&mut self) {
        self.state.show_confetti = false;
        self.state.is_expert_celebration = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::levels::LevelTier;

    #[test]
    fn test_start_begins_run_and_tick_reschedules() {
        let mut engine = GameEngine::new(5);
        assert!(!engine.should_reschedule());

        engine.start();
        assert_eq!(engine.state().status, GameStatus::Playing);
        assert!(engine.should_reschedule());

        engine.tick();
        assert!(engine.should_reschedule());
    }

    #[test]
    fn test_restart_from_game_over_fully_resets() {
        let mut engine = GameEngine::new(5);
        engine.start();
        engine.move_lane(-1);
        {
            // Simulate a dead run with residue
            let state = &mut engine.state;
            state.score = 9999;
            state.status = GameStatus::GameOver;
            state.player.is_alive = false;
            state.current_level = LevelTier::Expert;
            state.show_confetti = true;
        }

        engine.restart();
        let state = engine.state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert!(state.coins.is_empty() && state.obstacles.is_empty());
        assert_eq!(state.player.lane, CENTER_LANE);
        assert_eq!(state.current_level, LevelTier::Beginner);
        assert!(!state.show_level_up && !state.show_confetti && !state.is_expert_celebration);
    }

    #[test]
    fn test_move_lane_intent_gated_on_playing() {
        let mut engine = GameEngine::new(5);
        engine.move_lane(1);
        assert_eq!(engine.state().player.lane, CENTER_LANE);

        engine.start();
        engine.move_lane(1);
        assert_eq!(engine.state().player.lane, CENTER_LANE + 1);

        engine.toggle_pause();
        engine.move_lane(1);
        assert_eq!(engine.state().player.lane, CENTER_LANE + 1);
    }

    #[test]
    fn test_pause_intent_only_toggles_mid_run() {
        let mut engine = GameEngine::new(5);
        engine.toggle_pause();
        assert_eq!(engine.state().status, GameStatus::Menu);

        engine.start();
        engine.toggle_pause();
        assert_eq!(engine.state().status, GameStatus::Paused);
        engine.toggle_pause();
        assert_eq!(engine.state().status, GameStatus::Playing);
    }

    #[test]
    fn test_celebration_acks_clear_flags() {
        let mut engine = GameEngine::new(5);
        engine.start();
        engine.state.show_level_up = true;
        engine.state.show_confetti = true;
        engine.state.is_expert_celebration = true;

        engine.on_level_up_complete();
        assert!(!engine.state().show_level_up);
        assert!(engine.state().show_confetti);

        engine.on_confetti_complete();
        assert!(!engine.state().show_confetti);
        assert!(!engine.state().is_expert_celebration);
    }

    #[test]
    fn test_snapshot_is_json_with_status_tag() {
        let engine = GameEngine::new(5);
        let json = engine.snapshot_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Menu");
        assert_eq!(value["score"], 0);
    }
}
