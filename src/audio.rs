//! Background music
//!
//! One looping `HtmlAudioElement`. Browsers block autoplay until a user
//! gesture, so playback starts on the first click and then never stops;
//! game over and restart do not touch it.

use web_sys::HtmlAudioElement;

/// Audio manager for the game
pub struct AudioManager {
    element: Option<HtmlAudioElement>,
}

impl AudioManager {
    pub fn new(src: &str, volume: f64) -> Self {
        // May fail outside a document context
        let element = HtmlAudioElement::new_with_src(src).ok();
        match &element {
            Some(el) => {
                el.set_loop(true);
                el.set_volume(volume);
            }
            None => log::warn!("Failed to create audio element - music disabled"),
        }
        Self { element }
    }

    /// Start playback if it hasn't started yet. Safe to call on every click.
    pub fn ensure_playing(&self) {
        if let Some(el) = &self.element
            && el.paused()
        {
            // play() returns a promise; a rejection (autoplay policy) just
            // means we try again on the next click
            let _ = el.play();
        }
    }
}
