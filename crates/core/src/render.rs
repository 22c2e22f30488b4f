//! Draw-target and asset seams.
//!
//! The core never inspects a renderer; it only forwards sprite placement,
//! debug markers, text and tinted rectangles. Asset loading sits behind
//! [`TextureLoader`] so geometry can be sized from texture dimensions.

use anyhow::Result;

use crate::types::{Flip, RoomTint, Vector2D};

/// A loaded texture: its source identifier and pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub path: String,
    pub width: f32,
    pub height: f32,
}

impl Texture {
    pub fn new(path: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Vector2D {
        Vector2D::new(self.width, self.height)
    }
}

/// One textured quad, rotated about its own centre.
#[derive(Debug, Clone, Copy)]
pub struct Sprite<'a> {
    pub texture: &'a Texture,
    pub position: Vector2D,
    pub size: Vector2D,
    /// Degrees, clockwise on screen
    pub rotation: f32,
    pub flip: Flip,
}

/// Opaque draw target.
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &Sprite<'_>);

    /// Small marker used by the debug overlay
    fn draw_marker(&mut self, position: Vector2D);

    fn draw_text(&mut self, position: Vector2D, text: &str);

    fn fill_rect(&mut self, position: Vector2D, size: Vector2D, tint: RoomTint);

    /// Whether objects should draw their collision corners
    fn debug_overlay(&self) -> bool {
        false
    }
}

/// Source of textures (image files, a built-in catalog, ...).
pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Result<Texture>;
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite {
        path: String,
        position: Vector2D,
        size: Vector2D,
        rotation: f32,
        flip: Flip,
    },
    Marker(Vector2D),
    Text(Vector2D, String),
    Rect(Vector2D, Vector2D, RoomTint),
}

/// Renderer that records draw calls instead of drawing.
///
/// Used for headless runs and for asserting on what a frame would draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub debug: bool,
}

impl RecordingRenderer {
    pub fn new(debug: bool) -> Self {
        Self {
            calls: Vec::new(),
            debug,
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = Vector2D> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Marker(p) => Some(*p),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(_, s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn sprite_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Sprite { path, .. } => Some(path.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite<'_>) {
        self.calls.push(DrawCall::Sprite {
            path: sprite.texture.path.clone(),
            position: sprite.position,
            size: sprite.size,
            rotation: sprite.rotation,
            flip: sprite.flip,
        });
    }

    fn draw_marker(&mut self, position: Vector2D) {
        self.calls.push(DrawCall::Marker(position));
    }

    fn draw_text(&mut self, position: Vector2D, text: &str) {
        self.calls.push(DrawCall::Text(position, text.to_string()));
    }

    fn fill_rect(&mut self, position: Vector2D, size: Vector2D, tint: RoomTint) {
        self.calls.push(DrawCall::Rect(position, size, tint));
    }

    fn debug_overlay(&self) -> bool {
        self.debug
    }
}

/// Loader that hands out fixed-size textures for any path.
#[derive(Debug, Clone)]
pub struct FixedSizeLoader {
    pub size: Vector2D,
}

impl TextureLoader for FixedSizeLoader {
    fn load(&mut self, path: &str) -> Result<Texture> {
        Ok(Texture::new(path, self.size.x, self.size.y))
    }
}
