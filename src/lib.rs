//! Neon Runner - a synthwave endless-lane-runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, collisions, level tiers)
//! - `settings`: Presentation preferences persisted in LocalStorage
//!
//! Rendering (2D SVG and 3D WebGL scenes) lives outside this crate; the front
//! ends consume read-only state snapshots and feed intents back through
//! [`sim::GameEngine`].

pub mod settings;
pub mod sim;

pub use settings::{RendererMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield width in game-space pixels
    pub const GAME_WIDTH: f32 = 800.0;
    /// Playfield height in game-space pixels
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Number of lanes (indexed 0 = far left .. 4 = far right)
    pub const LANE_COUNT: i32 = 5;
    /// Horizontal spacing between lane centers
    pub const LANE_WIDTH: f32 = 100.0;
    /// The player starts and resets in the center lane
    pub const CENTER_LANE: i32 = 2;

    /// Fixed y of the player row
    pub const PLAYER_Y: f32 = GAME_HEIGHT - 100.0;
    /// Entities enter the playfield just above the visible canvas
    pub const SPAWN_Y: f32 = -50.0;
    /// Margin outside the canvas before an entity despawns
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Half-extent of the collision box around every object (30x30 boxes)
    pub const HIT_HALF_EXTENT: f32 = 15.0;

    /// Score awarded per collected coin
    pub const COIN_VALUE: u32 = 100;
    /// Cumulative score at which the run is won
    pub const WIN_THRESHOLD: u32 = 15_000;
}
