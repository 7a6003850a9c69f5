//! Blockfall - a falling-block dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `input`: Held-key tracking, platform-independent
//! - `render`: Canvas 2D rendering (wasm only)
//! - `audio`: Background music (wasm only)
//! - `platform`: Browser timer handles (wasm only)
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play-area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 400.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Player defaults - a square near the bottom edge
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 180.0;
    pub const PLAYER_START_Y: f32 = 550.0;
    /// Horizontal movement per frame (pixels)
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Block defaults
    pub const BLOCK_SIZE: f32 = 40.0;
    /// Fall speed range, randomized per block (pixels/frame)
    pub const BLOCK_MIN_SPEED: f32 = 3.0;
    pub const BLOCK_MAX_SPEED: f32 = 6.0;

    /// Spawn cadence - interval between block spawns
    pub const SPAWN_INTERVAL_START_MS: u32 = 800;
    /// Decrement applied by each difficulty tick
    pub const SPAWN_INTERVAL_STEP_MS: u32 = 40;
    /// Interval never drops below this
    pub const SPAWN_INTERVAL_FLOOR_MS: u32 = 300;
    /// Time between difficulty ticks
    pub const DIFFICULTY_PERIOD_MS: u32 = 5000;

    /// Background music
    pub const MUSIC_SRC: &str = "music.mp3";
    pub const MUSIC_VOLUME: f64 = 0.5;
}
