//! Furniture catalog and the built-in asset table.
//!
//! Each catalog entry gives how many copies may ship (at least one, at most
//! `max_amount`), the mass used by drag, the rooms it belongs in and its
//! footprint in world units.

use anyhow::{anyhow, Result};

use harold_core::types::{RoomKind, Vector2D, CHECKPOINT_SIZE, HAROLD_SIZE};
use harold_core::{
    Cursor, CursorSkin, Furniture, FurnitureBox, Harold, SatMode, SimpleRng, Texture,
    TextureLoader, Wall,
};

use RoomKind::{Bathroom, Bedroom, Kitchen, LivingRoom};

/// Texture of the checkpoint ring
pub const CHECKPOINT_TEXTURE: &str = "./resources/ring.png";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnitureSpec {
    pub name: &'static str,
    pub max_amount: u32,
    pub weight: f32,
    pub rooms: &'static [RoomKind],
    pub size: Vector2D,
}

impl FurnitureSpec {
    pub fn texture_path(&self) -> String {
        format!("./resources/furniture/{}.png", self.name)
    }

    pub fn build(&self, sat_mode: SatMode) -> Furniture {
        Furniture::new(self.name, &self.texture_path(), self.weight, self.rooms.to_vec())
            .with_size(self.size)
            .with_sat_mode(sat_mode)
    }
}

const fn spec(
    name: &'static str,
    max_amount: u32,
    weight: f32,
    rooms: &'static [RoomKind],
    width: f32,
    height: f32,
) -> FurnitureSpec {
    FurnitureSpec {
        name,
        max_amount,
        weight,
        rooms,
        size: Vector2D::new(width, height),
    }
}

/// All furniture, sorted by name.
pub const CATALOG: &[FurnitureSpec] = &[
    spec("bathtub", 1, 10.0, &[Bathroom], 48.0, 96.0),
    spec("bed", 1, 12.0, &[Bedroom], 64.0, 96.0),
    spec("bedsidetable", 2, 6.0, &[Bedroom], 28.0, 28.0),
    spec("bookshelf", 2, 7.0, &[Bedroom, LivingRoom], 64.0, 24.0),
    spec("chair", 12, 5.0, &[Bedroom, LivingRoom, Kitchen], 24.0, 24.0),
    spec("coffeetable", 2, 7.0, &[Bedroom, LivingRoom, Kitchen], 48.0, 32.0),
    spec("dinnertable", 2, 10.0, &[LivingRoom, Kitchen], 80.0, 48.0),
    spec("dishwasher", 1, 13.0, &[Kitchen], 40.0, 40.0),
    spec("dresser", 2, 9.0, &[Bedroom, LivingRoom], 56.0, 32.0),
    spec("fridge", 1, 14.0, &[Kitchen], 40.0, 48.0),
    spec("lamp", 14, 3.0, &[Bedroom, LivingRoom, Kitchen, Bathroom], 20.0, 20.0),
    spec("oven", 1, 15.0, &[Kitchen], 40.0, 40.0),
    spec("piano", 1, 20.0, &[Bedroom, LivingRoom], 80.0, 48.0),
    spec("plant", 21, 3.0, &[Bedroom, LivingRoom, Bathroom], 24.0, 24.0),
    spec("sink", 2, 12.0, &[Kitchen, Bathroom], 40.0, 28.0),
    spec("sofa", 1, 10.0, &[LivingRoom], 96.0, 48.0),
    spec("toilet", 1, 7.0, &[Bathroom], 28.0, 36.0),
    spec("washingmachine", 1, 13.0, &[Bathroom], 40.0, 40.0),
    spec("washingstation", 1, 7.0, &[Bathroom], 40.0, 32.0),
];

pub fn find(name: &str) -> Option<&'static FurnitureSpec> {
    CATALOG.iter().find(|s| s.name == name)
}

/// Horizontal range boxes are scattered over
pub const BOX_X_RANGE: (i32, i32) = (240, 1040);
/// Vertical range boxes are scattered over (above the house)
pub const BOX_Y_RANGE: (i32, i32) = (0, 160);

/// One box per furniture copy, each copy count drawn from `1..=max_amount`,
/// scattered over the yard.
pub fn spawn_boxes(rng: &mut SimpleRng, sat_mode: SatMode) -> Vec<FurnitureBox> {
    let mut boxes = Vec::new();
    for spec in CATALOG {
        let amount = rng.next_between(1, spec.max_amount as i32);
        for _ in 0..amount {
            let position = Vector2D::new(
                rng.next_between(BOX_X_RANGE.0, BOX_X_RANGE.1) as f32,
                rng.next_between(BOX_Y_RANGE.0, BOX_Y_RANGE.1) as f32,
            );
            boxes.push(FurnitureBox::new(position, spec.build(sat_mode)));
        }
    }
    boxes
}

/// Texture source for the terminal build: every known asset path maps to a
/// fixed footprint, there are no image files.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog;

impl AssetCatalog {
    pub fn size_of(path: &str) -> Option<Vector2D> {
        if let Some(spec) = CATALOG.iter().find(|s| s.texture_path() == path) {
            return Some(spec.size);
        }
        let cursor_skins = [CursorSkin::Open, CursorSkin::Hover, CursorSkin::Closed];
        if cursor_skins.iter().any(|s| s.texture_path() == path) {
            return Some(Cursor::SIZE);
        }
        match path {
            p if p == FurnitureBox::TEXTURE => Some(FurnitureBox::SIZE),
            p if p == Harold::TEXTURE => Some(HAROLD_SIZE),
            p if p == CHECKPOINT_TEXTURE => Some(Vector2D::new(CHECKPOINT_SIZE, CHECKPOINT_SIZE)),
            p if p == Wall::TEXTURE => Some(Vector2D::new(1.0, 1.0)),
            _ => None,
        }
    }
}

impl TextureLoader for AssetCatalog {
    fn load(&mut self, path: &str) -> Result<Texture> {
        let size = Self::size_of(path).ok_or_else(|| anyhow!("unknown asset: {path}"))?;
        Ok(Texture::new(path, size.x, size.y))
    }
}
