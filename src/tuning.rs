//! Game tuning and balance values
//!
//! All gameplay-affecting numbers live in one place so tests can run the
//! simulation on arbitrary play-area sizes.

use thiserror::Error;

use crate::consts::*;

/// Fatal configuration errors caught at startup
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    /// Spawn offset range `[0, play_width - block_size)` would be negative
    #[error("block size {block_size} exceeds play-area width {play_width}")]
    BlockTooWide { block_size: f32, play_width: f32 },
    /// Player clamp range `[0, play_width - player_size]` would be negative
    #[error("player size {player_size} exceeds play-area width {play_width}")]
    PlayerTooWide { player_size: f32, play_width: f32 },
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Play-area dimensions (pixels)
    pub play_width: f32,
    pub play_height: f32,
    /// Player square side length
    pub player_size: f32,
    /// Player start position (top-left corner)
    pub player_start_x: f32,
    pub player_start_y: f32,
    /// Player horizontal speed (pixels/frame)
    pub player_speed: f32,
    /// Block square side length
    pub block_size: f32,
    /// Per-block fall speed range (pixels/frame)
    pub block_min_speed: f32,
    pub block_max_speed: f32,
    /// Spawn cadence: start interval, difficulty decrement, floor
    pub spawn_interval_start_ms: u32,
    pub spawn_interval_step_ms: u32,
    pub spawn_interval_floor_ms: u32,
    /// Time between difficulty ticks
    pub difficulty_period_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            player_size: PLAYER_SIZE,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_speed: PLAYER_SPEED,
            block_size: BLOCK_SIZE,
            block_min_speed: BLOCK_MIN_SPEED,
            block_max_speed: BLOCK_MAX_SPEED,
            spawn_interval_start_ms: SPAWN_INTERVAL_START_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            difficulty_period_ms: DIFFICULTY_PERIOD_MS,
        }
    }
}

impl Tuning {
    /// Check for degenerate geometry. Called once at startup; a failure here
    /// means the spawn/clamp formulas would produce negative ranges.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.block_size > self.play_width {
            return Err(TuningError::BlockTooWide {
                block_size: self.block_size,
                play_width: self.play_width,
            });
        }
        if self.player_size > self.play_width {
            return Err(TuningError::PlayerTooWide {
                player_size: self.player_size,
                play_width: self.play_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_block_wider_than_play_area_rejected() {
        let tuning = Tuning {
            play_width: 30.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::BlockTooWide {
                block_size: 40.0,
                play_width: 30.0,
            })
        );
    }

    #[test]
    fn test_player_wider_than_play_area_rejected() {
        let tuning = Tuning {
            player_size: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::PlayerTooWide { .. })
        ));
    }
}
