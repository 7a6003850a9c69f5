//! Canvas 2D rendering
//!
//! Draws the whole scene from scratch every frame: player, blocks, score,
//! and the game-over overlay.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{GamePhase, GameState};

/// Renderer over a fixed-size canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame of the current state
    pub fn render(&self, state: &GameState) {
        match state.phase {
            GamePhase::Playing => self.draw_playing(state),
            GamePhase::GameOver => self.draw_game_over(state),
        }
    }

    fn draw_playing(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        // Player
        ctx.set_fill_style_str("cyan");
        let player = &state.player;
        ctx.fill_rect(
            player.pos.x as f64,
            player.pos.y as f64,
            player.size as f64,
            player.size as f64,
        );

        // Blocks
        ctx.set_fill_style_str("orange");
        for block in &state.blocks {
            ctx.fill_rect(
                block.pos.x as f64,
                block.pos.y as f64,
                block.size as f64,
                block.size as f64,
            );
        }

        // Score
        ctx.set_fill_style_str("#fff");
        ctx.set_font("18px Arial");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 24.0);
    }

    /// Dim the final scene and overlay the game-over text. No clear, so the
    /// last frame stays visible underneath.
    fn draw_game_over(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("rgba(0,0,0,0.6)");
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        ctx.set_text_align("center");
        ctx.set_fill_style_str("red");
        ctx.set_font("40px Arial");
        let _ = ctx.fill_text("GAME OVER", cx, cy);
        ctx.set_fill_style_str("#fff");
        ctx.set_font("18px Arial");
        let _ = ctx.fill_text(&format!("Score: {}", state.score), cx, cy + 40.0);
        let _ = ctx.fill_text("Click to restart", cx, cy + 80.0);
    }
}
