//! Per-frame simulation step and spawner operations
//!
//! One call to [`step`] advances the game by one frame. Spawning and the
//! difficulty ramp are separate operations so the platform layer can drive
//! them from its own timers.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use super::state::{Block, GamePhase, GameState};

/// Held movement input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame.
///
/// Does nothing while GameOver. Order per frame: player movement, block
/// fall, collision check, then cleanup/scoring. A collision transitions to
/// GameOver immediately and skips cleanup, so the triggering blocks never
/// score.
pub fn step(state: &mut GameState, input: &FrameInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // 1. Player movement, clamped to the play area
    let player = &mut state.player;
    if input.left {
        player.pos.x -= player.speed;
    }
    if input.right {
        player.pos.x += player.speed;
    }
    let max_x = state.tuning.play_width - player.size;
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    // 2. Blocks fall at their own speed
    for block in &mut state.blocks {
        block.pos.y += block.speed;
    }

    // 3. Collision ends the run
    let player_rect = state.player.rect();
    if state
        .blocks
        .iter()
        .any(|block| overlaps(&player_rect, &block.rect()))
    {
        state.phase = GamePhase::GameOver;
        log::info!("game over, final score {}", state.score);
        return;
    }

    // 4. Blocks fully past the bottom edge are dodged: remove and score
    let play_height = state.tuning.play_height;
    let before = state.blocks.len();
    state.blocks.retain(|block| block.pos.y <= play_height);
    state.score += (before - state.blocks.len()) as u64;
}

/// Spawn one block just above the top edge, at a random horizontal offset
/// fully inside the play area and a random per-block fall speed.
pub fn spawn_block(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let tuning = &state.tuning;
    let size = tuning.block_size;
    let max_x = tuning.play_width - size;
    let x = if max_x > 0.0 {
        state.rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    let speed = state
        .rng
        .random_range(tuning.block_min_speed..tuning.block_max_speed);
    state.blocks.push(Block {
        pos: Vec2::new(x, -size),
        size,
        speed,
    });
}

/// One difficulty tick: shorten the spawn interval by the tuned step,
/// clamped to the floor. Returns whether the interval changed; once at the
/// floor the ramp has stopped and this always returns false.
pub fn reduce_spawn_interval(state: &mut GameState) -> bool {
    let tuning = &state.tuning;
    if state.spawn_interval_ms <= tuning.spawn_interval_floor_ms {
        return false;
    }
    state.spawn_interval_ms = state
        .spawn_interval_ms
        .saturating_sub(tuning.spawn_interval_step_ms)
        .max(tuning.spawn_interval_floor_ms);
    log::debug!("spawn interval reduced to {}ms", state.spawn_interval_ms);
    true
}
