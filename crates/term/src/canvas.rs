//! FrameCanvas: the core [`Renderer`] drawn into a terminal framebuffer.
//!
//! World space (1280x720) is projected onto the cell grid. Sprites are
//! rasterised by testing each covered cell centre against the sprite's
//! rotated rectangle, so rotation shows up as a tilted block of cells.

use harold_core::types::{Flip, Projection, RoomTint, Vector2D};
use harold_core::{CursorSkin, FurnitureBox, Harold, Renderer, Sprite, Wall};
use harold_engine::catalog::CHECKPOINT_TEXTURE;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const FURNITURE_PREFIX: &str = "./resources/furniture/";

const TEXT: Rgb = Rgb::new(245, 245, 245);
const MARKER: Rgb = Rgb::new(230, 40, 40);
const FLOOR: Rgb = Rgb::new(150, 120, 90);
const ACCEPTED: Rgb = Rgb::new(60, 160, 70);
const REJECTED: Rgb = Rgb::new(180, 50, 50);

const FURNITURE_PALETTE: [Rgb; 6] = [
    Rgb::new(70, 110, 170),
    Rgb::new(140, 90, 160),
    Rgb::new(190, 140, 60),
    Rgb::new(60, 140, 140),
    Rgb::new(170, 90, 90),
    Rgb::new(110, 130, 70),
];

/// How a texture is drawn in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skin {
    /// Fill the rotated footprint, `center` replaces the middle cell's glyph
    Block {
        fill: char,
        center: Option<char>,
        style: CellStyle,
    },
    /// A single glyph at the sprite centre
    Glyph(char, Rgb),
}

fn furniture_color(name: &str) -> Rgb {
    let hash = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    FURNITURE_PALETTE[hash % FURNITURE_PALETTE.len()]
}

fn skin_for(path: &str, flip: Flip) -> Skin {
    if let Some(rest) = path.strip_prefix(FURNITURE_PREFIX) {
        let name = rest.trim_end_matches(".png");
        let initial = name.chars().next().map(|c| c.to_ascii_uppercase());
        let bg = furniture_color(name);
        return Skin::Block {
            fill: ' ',
            center: initial,
            style: CellStyle::new(TEXT, bg).bold(),
        };
    }

    match path {
        p if p == CursorSkin::Open.texture_path() => Skin::Glyph('+', TEXT),
        p if p == CursorSkin::Hover.texture_path() => Skin::Glyph('^', TEXT),
        p if p == CursorSkin::Closed.texture_path() => Skin::Glyph('x', TEXT),
        p if p == FurnitureBox::TEXTURE => Skin::Block {
            fill: '▒',
            center: None,
            style: CellStyle::new(Rgb::new(200, 160, 110), Rgb::new(120, 80, 40)),
        },
        p if p == Wall::TEXTURE => Skin::Block {
            fill: '█',
            center: None,
            style: CellStyle::new(Rgb::new(90, 90, 95), Rgb::new(40, 40, 45)),
        },
        p if p == Harold::TEXTURE => Skin::Block {
            fill: '@',
            center: Some(if flip == Flip::Horizontal { '<' } else { '>' }),
            style: CellStyle::new(Rgb::new(250, 220, 60), Rgb::new(60, 50, 20)).bold(),
        },
        p if p == CHECKPOINT_TEXTURE => Skin::Glyph('○', Rgb::new(250, 230, 90)),
        _ => Skin::Block {
            fill: '?',
            center: None,
            style: CellStyle::new(TEXT, Rgb::new(200, 0, 200)),
        },
    }
}

fn rotate(v: Vector2D, degrees: f32) -> Vector2D {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector2D::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// A [`Renderer`] over a borrowed framebuffer.
pub struct FrameCanvas<'a> {
    fb: &'a mut FrameBuffer,
    projection: Projection,
    debug: bool,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, projection: Projection, debug: bool) -> Self {
        Self {
            fb,
            projection,
            debug,
        }
    }

    fn cell_at(&self, position: Vector2D) -> (i32, i32) {
        self.projection.world_to_cell(position)
    }

    /// Cells whose centres fall inside the rotated rectangle.
    fn covered_cells(&self, sprite: &Sprite<'_>) -> Vec<(i32, i32)> {
        let half = sprite.size / 2.0;
        let center = sprite.position + half;
        let (sin, cos) = sprite.rotation.to_radians().sin_cos();
        let reach = Vector2D::new(
            (half.x * cos).abs() + (half.y * sin).abs(),
            (half.x * sin).abs() + (half.y * cos).abs(),
        );
        let (x0, y0) = self.cell_at(center - reach);
        let (x1, y1) = self.cell_at(center + reach);

        let mut cells = Vec::new();
        for row in y0.max(0)..=y1.min(i32::from(self.fb.height()) - 1) {
            for col in x0.max(0)..=x1.min(i32::from(self.fb.width()) - 1) {
                let world = self.projection.cell_to_world(col as u16, row as u16);
                let local = rotate(world - center, -sprite.rotation);
                if local.x.abs() <= half.x && local.y.abs() <= half.y {
                    cells.push((col, row));
                }
            }
        }
        cells
    }
}

impl Renderer for FrameCanvas<'_> {
    fn draw_sprite(&mut self, sprite: &Sprite<'_>) {
        let center = sprite.position + sprite.size / 2.0;
        let (cx, cy) = self.cell_at(center);

        match skin_for(&sprite.texture.path, sprite.flip) {
            Skin::Glyph(ch, fg) => {
                let bg = self
                    .fb
                    .get_at(cx, cy)
                    .map(|c| c.style.bg)
                    .unwrap_or_default();
                self.fb.set_at(cx, cy, CellStyle::new(fg, bg).bold().into_cell(ch));
            }
            Skin::Block {
                fill,
                center: mark,
                style,
            } => {
                // Anything smaller than a cell still shows up as one.
                let mut cells = self.covered_cells(sprite);
                if cells.is_empty() {
                    cells.push((cx, cy));
                }
                for (x, y) in cells {
                    self.fb.set_at(x, y, style.into_cell(fill));
                }
                if let Some(ch) = mark {
                    self.fb.set_at(cx, cy, style.into_cell(ch));
                }
            }
        }
    }

    fn draw_marker(&mut self, position: Vector2D) {
        let (x, y) = self.cell_at(position);
        let bg = self.fb.get_at(x, y).map(|c| c.style.bg).unwrap_or_default();
        self.fb.set_at(x, y, CellStyle::new(MARKER, bg).bold().into_cell('+'));
    }

    fn draw_text(&mut self, position: Vector2D, text: &str) {
        let (x, y) = self.cell_at(position);
        self.fb.put_str_at(x, y, text, TEXT, true);
    }

    fn fill_rect(&mut self, position: Vector2D, size: Vector2D, tint: RoomTint) {
        let bg = match tint {
            RoomTint::Neutral => FLOOR,
            RoomTint::Accepted => FLOOR.mix(ACCEPTED, 160),
            RoomTint::Rejected => FLOOR.mix(REJECTED, 160),
        };
        let (x0, y0) = self.cell_at(position);
        let (x1, y1) = self.cell_at(position + size);
        self.fb
            .fill_rect_at(x0, y0, x1, y1, CellStyle::new(TEXT, bg).into_cell(' '));
    }

    fn debug_overlay(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harold_core::Texture;

    // 160x45 cells, 8x16 world units per cell.
    fn canvas_fb() -> FrameBuffer {
        FrameBuffer::new(160, 45)
    }

    fn projection() -> Projection {
        Projection::new(160, 45)
    }

    fn sprite<'a>(texture: &'a Texture, position: Vector2D, rotation: f32) -> Sprite<'a> {
        Sprite {
            texture,
            position,
            size: texture.size(),
            rotation,
            flip: Flip::None,
        }
    }

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        let mut n = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(ch) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn box_covers_its_footprint() {
        let mut fb = canvas_fb();
        let texture = Texture::new(FurnitureBox::TEXTURE, 64.0, 64.0);
        let mut canvas = FrameCanvas::new(&mut fb, projection(), false);
        canvas.draw_sprite(&sprite(&texture, Vector2D::new(80.0, 160.0), 0.0));
        // 64 / 8 = 8 columns, 64 / 16 = 4 rows.
        assert_eq!(count(&fb, '▒'), 32);
        assert_eq!(fb.get(10, 10).map(|c| c.ch), Some('▒'));
        assert_eq!(fb.get(9, 10).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn rotation_changes_the_shape() {
        let texture = Texture::new(Wall::TEXTURE, 160.0, 16.0);
        let position = Vector2D::new(400.0, 320.0);

        let mut flat = canvas_fb();
        FrameCanvas::new(&mut flat, projection(), false)
            .draw_sprite(&sprite(&texture, position, 0.0));
        let mut upright = canvas_fb();
        FrameCanvas::new(&mut upright, projection(), false)
            .draw_sprite(&sprite(&texture, position, 90.0));

        let rows = |fb: &FrameBuffer| {
            (0..fb.height())
                .filter(|&y| (0..fb.width()).any(|x| fb.get(x, y).map(|c| c.ch) == Some('█')))
                .count()
        };
        assert_eq!(rows(&flat), 1);
        assert!(rows(&upright) > 5);
    }

    #[test]
    fn furniture_shows_its_initial() {
        let mut fb = canvas_fb();
        let texture = Texture::new("./resources/furniture/sofa.png", 96.0, 48.0);
        FrameCanvas::new(&mut fb, projection(), false)
            .draw_sprite(&sprite(&texture, Vector2D::new(320.0, 320.0), 0.0));
        let (x, y) = projection().world_to_cell(Vector2D::new(368.0, 344.0));
        assert_eq!(fb.get_at(x, y).map(|c| c.ch), Some('S'));
    }

    #[test]
    fn tints_text_and_markers() {
        let mut fb = canvas_fb();
        let mut canvas = FrameCanvas::new(&mut fb, projection(), true);
        assert!(canvas.debug_overlay());
        canvas.fill_rect(Vector2D::new(0.0, 0.0), Vector2D::new(80.0, 32.0), RoomTint::Accepted);
        canvas.draw_text(Vector2D::new(0.0, 0.0), "hi");
        canvas.draw_marker(Vector2D::new(40.0, 20.0));

        let green = FLOOR.mix(ACCEPTED, 160);
        let first = fb.get(0, 0).unwrap();
        assert_eq!(first.ch, 'h');
        assert_eq!(first.style.bg, green);
        assert_eq!(fb.get(9, 1).map(|c| c.style.bg), Some(green));
        assert_eq!(fb.get(10, 0).map(|c| c.style.bg), Some(Rgb::default()));
        assert_eq!(fb.get(5, 1).map(|c| c.ch), Some('+'));
    }

    #[test]
    fn cursor_is_a_single_glyph() {
        let mut fb = canvas_fb();
        let texture = Texture::new(CursorSkin::Closed.texture_path(), 32.0, 32.0);
        FrameCanvas::new(&mut fb, projection(), false)
            .draw_sprite(&sprite(&texture, Vector2D::new(100.0, 100.0), 0.0));
        assert_eq!(count(&fb, 'x'), 1);
    }
}
