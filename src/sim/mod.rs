//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The presentation layers hold read-only snapshots of [`GameState`] and talk
//! back to the simulation exclusively through [`GameEngine`] methods.

pub mod collision;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod levels;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use engine::GameEngine;
pub use geometry::{clamp_lane, is_off_screen, lane_position};
pub use input::{GameKey, HeldKeys};
pub use levels::{LevelConfig, LevelTier};
pub use state::{Coin, GameState, GameStatus, Obstacle, ObstacleKind, Player, RngState};
pub use tick::tick;
