//! Game state and core simulation types
//!
//! All mutable gameplay state lives in a single owned [`GameState`]; there are
//! no module-level singletons.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a restart click is accepted
    GameOver,
}

/// The player's square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Side length
    pub size: f32,
    /// Horizontal movement per frame
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.player_start_y),
            size: tuning.player_size,
            speed: tuning.player_speed,
        }
    }

    /// Bounding box for collision
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

/// A falling block
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    /// Side length
    pub size: f32,
    /// Fall speed (pixels/frame), fixed for the block's lifetime
    pub speed: f32,
}

impl Block {
    /// Bounding box for collision
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Gameplay tuning, fixed for the state's lifetime
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for spawn placement and speeds
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// The player square
    pub player: Player,
    /// Active blocks, in spawn order
    pub blocks: Vec<Block>,
    /// Blocks dodged this session
    pub score: u64,
    /// Current interval between block spawns
    pub spawn_interval_ms: u32,
}

impl GameState {
    /// Create a new game state with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            player: Player::new(&tuning),
            spawn_interval_ms: tuning.spawn_interval_start_ms,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            blocks: Vec::new(),
            score: 0,
        }
    }

    /// Reset for a new session. No-op unless the run has ended.
    ///
    /// Clears blocks, score, and the spawn cadence; the player keeps its
    /// position and the RNG keeps its stream.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.blocks.clear();
        self.score = 0;
        self.spawn_interval_ms = self.tuning.spawn_interval_start_ms;
        self.phase = GamePhase::Playing;
        log::info!("restarted, spawn interval back to {}ms", self.spawn_interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_playing() {
        let state = GameState::new(Tuning::default(), 12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.blocks.is_empty());
        assert_eq!(state.spawn_interval_ms, 800);
        assert_eq!(state.player.pos, Vec2::new(180.0, 550.0));
    }

    #[test]
    fn test_restart_is_noop_while_playing() {
        let mut state = GameState::new(Tuning::default(), 12345);
        state.score = 7;
        state.spawn_interval_ms = 600;
        state.blocks.push(Block {
            pos: Vec2::new(50.0, 50.0),
            size: 40.0,
            speed: 4.0,
        });

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 7);
        assert_eq!(state.spawn_interval_ms, 600);
        assert_eq!(state.blocks.len(), 1);
    }

    #[test]
    fn test_restart_resets_session_but_not_player() {
        let mut state = GameState::new(Tuning::default(), 12345);
        state.player.pos.x = 42.0;
        state.score = 19;
        state.spawn_interval_ms = 300;
        state.blocks.push(Block {
            pos: Vec2::new(50.0, 50.0),
            size: 40.0,
            speed: 4.0,
        });
        state.phase = GamePhase::GameOver;

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.blocks.is_empty());
        assert_eq!(state.spawn_interval_ms, 800);
        // Player position persists across restarts
        assert_eq!(state.player.pos.x, 42.0);
    }
}
