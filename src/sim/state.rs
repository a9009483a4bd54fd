//! Game state and core simulation types
//!
//! The single mutable aggregate lives here. It is only ever mutated inside the
//! tick pipeline or by the explicit start/restart intents; presentation layers
//! get read-only snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::lane_position;
use super::levels::{LevelConfig, LevelTier};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Waiting on the start intent
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run; only the pause toggle is live
    Paused,
    /// Run ended on a lethal collision
    GameOver,
    /// Score reached the win threshold
    Won,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
            GameStatus::Won => "won",
        }
    }

    /// Whether the tick loop should keep rescheduling itself
    pub fn keeps_ticking(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Paused)
    }
}

/// Obstacle flavors - cosmetic only, no gameplay differentiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Barrier,
    Spike,
    Wall,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] =
        [ObstacleKind::Barrier, ObstacleKind::Spike, ObstacleKind::Wall];

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Barrier => "barrier",
            ObstacleKind::Spike => "spike",
            ObstacleKind::Wall => "wall",
        }
    }
}

/// The player's vehicle - one instance for the whole game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub lane: i32,
    pub speed: f32,
    /// Set false exactly once, on the first lethal collision
    pub is_alive: bool,
}

impl Player {
    /// A fresh player in the center lane
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::new(lane_position(CENTER_LANE), PLAYER_Y),
            lane: CENTER_LANE,
            speed: 0.0,
            is_alive: true,
        }
    }
}

/// A collectible coin falling down its lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub lane: i32,
    pub speed: f32,
    pub collected: bool,
    pub value: u32,
}

/// A lethal obstacle falling down its lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub lane: i32,
    pub speed: f32,
    pub kind: ObstacleKind,
}

/// RNG state wrapper for serialization
///
/// The aggregate stays plain data: instead of carrying a live generator, each
/// tick derives a fresh `Pcg32` stream from the run seed and the tick counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic per-tick RNG stream
    pub fn tick_rng(&self, ticks: u64) -> Pcg32 {
        // splitmix-style spread so consecutive ticks land far apart
        let stream = self
            .seed
            .wrapping_add(ticks.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Pcg32::seed_from_u64(stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current status
    pub status: GameStatus,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Tier whose threshold is the greatest one <= score
    pub current_level: LevelTier,
    /// Progress toward the next tier, in [0, 1]
    pub level_progress: f32,
    /// Celebration flags - set on tier change, cleared by presentation acks
    pub show_level_up: bool,
    pub show_confetti: bool,
    pub is_expert_celebration: bool,
    /// Tier as of the last level derivation; a mismatch is a level-up event
    pub last_level: LevelTier,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed, waiting in the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            status: GameStatus::Menu,
            player: Player::new(0),
            coins: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            current_level: LevelTier::Beginner,
            level_progress: 0.0,
            show_level_up: false,
            show_confetti: false,
            is_expert_celebration: false,
            last_level: LevelTier::Beginner,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Configuration of the active tier
    pub fn level_config(&self) -> &'static LevelConfig {
        self.current_level.config()
    }

    /// Reset for a fresh run and enter `Playing`
    ///
    /// Identical for the start and restart intents: center-lane player, empty
    /// field, zero score, beginner tier, all celebration flags cleared.
    pub fn reset(&mut self) {
        self.player = Player::new(0);
        self.coins.clear();
        self.obstacles.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.current_level = LevelTier::Beginner;
        self.level_progress = 0.0;
        self.show_level_up = false;
        self.show_confetti = false;
        self.is_expert_celebration = false;
        self.last_level = LevelTier::Beginner;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_in_menu() {
        let state = GameState::new(7);
        assert_eq!(state.status, GameStatus::Menu);
        assert_eq!(state.player.lane, CENTER_LANE);
        assert!(state.player.is_alive);
        assert!(state.coins.is_empty() && state.obstacles.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(7);
        state.score = 9000;
        state.status = GameStatus::GameOver;
        state.player.is_alive = false;
        state.player.lane = 0;
        state.current_level = LevelTier::Expert;
        state.last_level = LevelTier::Expert;
        state.show_level_up = true;
        state.show_confetti = true;
        state.is_expert_celebration = true;

        state.reset();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.lane, CENTER_LANE);
        assert!(state.player.is_alive);
        assert_eq!(state.current_level, LevelTier::Beginner);
        assert_eq!(state.level_progress, 0.0);
        assert!(!state.show_level_up && !state.show_confetti && !state.is_expert_celebration);
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tick_rng_deterministic() {
        let rng_state = RngState::new(42);
        use rand::Rng;
        let a: u32 = rng_state.tick_rng(10).random();
        let b: u32 = rng_state.tick_rng(10).random();
        let c: u32 = rng_state.tick_rng(11).random();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
