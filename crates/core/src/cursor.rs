//! The on-screen hand cursor.
//!
//! `hovering` is recomputed by the game from object states on every event and
//! every frame; `closed` follows the primary button.

use crate::entity::Behaviour;
use crate::game_object::GameObject;
use crate::render::{Renderer, Sprite, Texture, TextureLoader};
use crate::types::{Flip, InputEvent, InteractionState, Vector2D};

/// Which of the three cursor skins is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSkin {
    Open,
    Hover,
    Closed,
}

impl CursorSkin {
    pub fn texture_path(self) -> &'static str {
        match self {
            CursorSkin::Open => "./resources/cursor/open.png",
            CursorSkin::Hover => "./resources/cursor/hover.png",
            CursorSkin::Closed => "./resources/cursor/closed.png",
        }
    }

    fn index(self) -> usize {
        match self {
            CursorSkin::Open => 0,
            CursorSkin::Hover => 1,
            CursorSkin::Closed => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    object: GameObject,
    pub hovering: bool,
    pub closed: bool,
    skins: [Option<Texture>; 3],
}

impl Cursor {
    pub const SIZE: Vector2D = Vector2D::new(32.0, 32.0);

    pub fn new() -> Self {
        Self {
            object: GameObject::with_details(
                Vector2D::ZERO,
                Self::SIZE,
                Vector2D::ZERO,
                "Cursor",
                CursorSkin::Open.texture_path(),
            ),
            hovering: false,
            closed: false,
            skins: [None, None, None],
        }
    }

    /// Closed beats hover beats open.
    pub fn skin(&self) -> CursorSkin {
        if self.closed {
            CursorSkin::Closed
        } else if self.hovering {
            CursorSkin::Hover
        } else {
            CursorSkin::Open
        }
    }

    /// Load all three skins. Returns whether every skin loaded.
    pub fn load_textures(&mut self, loader: &mut dyn TextureLoader) -> bool {
        let mut ok = true;
        for skin in [CursorSkin::Open, CursorSkin::Hover, CursorSkin::Closed] {
            match loader.load(skin.texture_path()) {
                Ok(texture) => self.skins[skin.index()] = Some(texture),
                Err(err) => {
                    tracing::warn!(path = skin.texture_path(), error = %err, "cursor skin failed to load");
                    ok = false;
                }
            }
        }
        ok
    }

    /// Centre the cursor on a world point.
    pub fn center_on(&mut self, point: Vector2D) {
        self.object.set_position(point - self.object.size() / 2.0);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Behaviour for Cursor {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    fn handle_event(&mut self, event: &InputEvent) -> InteractionState {
        match event {
            InputEvent::MouseButtonDown { .. } => self.closed = true,
            InputEvent::MouseButtonUp { .. } => self.closed = false,
            _ => {}
        }
        self.object.current_state()
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        if let Some(texture) = &self.skins[self.skin().index()] {
            renderer.draw_sprite(&Sprite {
                texture,
                position: self.object.position(),
                size: self.object.size(),
                rotation: 0.0,
                flip: Flip::None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FixedSizeLoader, RecordingRenderer};
    use crate::types::MouseButton;

    #[test]
    fn skin_priority() {
        let mut c = Cursor::new();
        assert_eq!(c.skin(), CursorSkin::Open);
        c.hovering = true;
        assert_eq!(c.skin(), CursorSkin::Hover);
        c.closed = true;
        assert_eq!(c.skin(), CursorSkin::Closed);
    }

    #[test]
    fn button_closes_and_opens_hand() {
        let mut c = Cursor::new();
        let at = Vector2D::new(3.0, 4.0);
        c.handle_event(&InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            position: at,
        });
        assert!(c.closed);
        c.handle_event(&InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            position: at,
        });
        assert!(!c.closed);
    }

    #[test]
    fn renders_current_skin_centred() {
        let mut c = Cursor::new();
        assert!(c.load_textures(&mut FixedSizeLoader {
            size: Cursor::SIZE
        }));
        c.hovering = true;
        c.center_on(Vector2D::new(100.0, 100.0));
        assert_eq!(c.object().position(), Vector2D::new(84.0, 84.0));

        let mut r = RecordingRenderer::new(false);
        c.render(&mut r);
        let paths: Vec<_> = r.sprite_paths().collect();
        assert_eq!(paths, vec![CursorSkin::Hover.texture_path()]);
    }
}
