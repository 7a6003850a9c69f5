//! Held-key tracking
//!
//! Platform-independent: the browser layer feeds raw `keydown`/`keyup` key
//! identifiers in here, and the frame loop reads one [`FrameInput`] per
//! frame. Bindings are fixed: ArrowLeft/"a" and ArrowRight/"d".

use std::collections::HashSet;

use crate::sim::FrameInput;

/// Currently-held keys
#[derive(Debug, Default)]
pub struct InputState {
    pressed_keys: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn key_down(&mut self, key: &str) {
        self.pressed_keys.insert(normalize(key));
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        self.pressed_keys.remove(&normalize(key));
    }

    fn held(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    /// Movement input for the current frame
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.held("ArrowLeft") || self.held("a"),
            right: self.held("ArrowRight") || self.held("d"),
        }
    }
}

/// Letter keys match case-insensitively so a held Shift doesn't drop movement
fn normalize(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}
