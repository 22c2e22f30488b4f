//! GameView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use harold_core::types::Projection;
use harold_engine::Game;

use crate::canvas::FrameCanvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the world into all rows but the last, which holds a status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// The world-to-cell mapping for a viewport. Mouse input must be mapped
    /// with the same projection the frame was drawn with.
    pub fn projection(&self, viewport: Viewport) -> Projection {
        Projection::new(viewport.width, viewport.height.saturating_sub(1).max(1))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, game: &Game, fps: f32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let grass = CellStyle::new(Rgb::new(60, 110, 50), Rgb::new(40, 80, 35));
        fb.clear(grass.into_cell(' '));

        let mut canvas = FrameCanvas::new(fb, self.projection(viewport), game.config().debug);
        game.render(&mut canvas);

        let status_row = i32::from(viewport.height) - 1;
        let status = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 25));
        let width = i32::from(viewport.width);
        fb.fill_rect_at(0, status_row, width, status_row + 1, status.into_cell(' '));
        let line = format!(
            " {} | score {} | {:.0} fps | q: quit",
            game.phase().as_str(),
            game.score(),
            fps
        );
        fb.put_str_at(0, status_row, &line, status.fg, false);
    }
}
