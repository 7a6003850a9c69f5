//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No wall-clock reads
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{Rect, overlaps};
pub use state::{Block, GamePhase, GameState, Player};
pub use step::{FrameInput, reduce_spawn_interval, spawn_block, step};
