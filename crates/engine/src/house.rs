//! The house: four rooms in a 2x2 grid, walls with door gaps between them.
//!
//! ```text
//!  240        400  496       636 644       784  880      1040
//!   +---------+    +----------+-+----------+    +---------+  240
//!   |                         | |                         |
//!   |        room 0           |    room 1                 |  320..400 door
//!   |                         | |                         |
//!   +---------+    +----------+-+----------+    +---------+  466..474
//!   |                         | |                         |
//!   |        room 2                room 3                 |  540..620 door
//!   |                         | |                         |
//!   +-----------------------------------------------------+  700
//! ```
//!
//! Which kind of room sits in which slot is shuffled per game.

use harold_core::types::{RoomKind, RoomTint, Vector2D};
use harold_core::{Behaviour, GameObject, Renderer, Scene, SimpleRng, TextureLoader, Wall};

/// Wall segments as (top-left, bottom-right)
const WALL_SEGMENTS: [((f32, f32), (f32, f32)); 13] = [
    // Outer top, doors at 400..496 and 784..880
    ((240.0, 240.0), (400.0, 248.0)),
    ((496.0, 240.0), (784.0, 248.0)),
    ((880.0, 240.0), (1040.0, 248.0)),
    // Outer bottom, left, right
    ((240.0, 692.0), (1040.0, 700.0)),
    ((240.0, 248.0), (248.0, 692.0)),
    ((1032.0, 248.0), (1040.0, 692.0)),
    // Middle horizontal, doors at 400..496 and 784..880
    ((248.0, 466.0), (400.0, 474.0)),
    ((496.0, 466.0), (784.0, 474.0)),
    ((880.0, 466.0), (1032.0, 474.0)),
    // Middle vertical, doors at 320..400 and 540..620
    ((636.0, 248.0), (644.0, 320.0)),
    ((636.0, 400.0), (644.0, 466.0)),
    ((636.0, 474.0), (644.0, 540.0)),
    ((636.0, 620.0), (644.0, 692.0)),
];

/// Room floors as (top-left, bottom-right), in slot order
const ROOM_SLOTS: [((f32, f32), (f32, f32)); 4] = [
    ((248.0, 248.0), (636.0, 466.0)),
    ((644.0, 248.0), (1032.0, 466.0)),
    ((248.0, 474.0), (636.0, 692.0)),
    ((644.0, 474.0), (1032.0, 692.0)),
];

fn point((x, y): (f32, f32)) -> Vector2D {
    Vector2D::new(x, y)
}

/// A room floor: an unrotated region with a kind and placement feedback tint.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    kind: RoomKind,
    tint: RoomTint,
    object: GameObject,
}

impl Room {
    pub fn new(kind: RoomKind, object: GameObject) -> Self {
        Self {
            kind,
            tint: RoomTint::Neutral,
            object,
        }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn tint(&self) -> RoomTint {
        self.tint
    }

    pub fn set_tint(&mut self, tint: RoomTint) {
        self.tint = tint;
    }

    pub fn object(&self) -> &GameObject {
        &self.object
    }

    /// Containment on the unrotated floor, no SAT
    pub fn contains(&self, position: Vector2D) -> bool {
        self.object.is_inside(position.x, position.y)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.object.position(), self.object.size(), self.tint);
        let label = self.object.position() + Vector2D::new(8.0, 8.0);
        renderer.draw_text(label, self.kind.as_str());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub rooms: Vec<Room>,
    pub walls: Scene,
}

impl House {
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut kinds = RoomKind::ALL;
        rng.shuffle(&mut kinds);

        let rooms = ROOM_SLOTS
            .iter()
            .zip(kinds)
            .map(|(&(top_left, bottom_right), kind)| {
                let floor = GameObject::with_details(
                    point(top_left),
                    point(bottom_right) - point(top_left),
                    Vector2D::ZERO,
                    kind.as_str(),
                    "",
                );
                Room::new(kind, floor)
            })
            .collect();

        let mut walls = Scene::new();
        for &(top_left, bottom_right) in &WALL_SEGMENTS {
            let object = GameObject::from_bounds(
                point(top_left),
                point(bottom_right),
                Wall::TEXTURE,
                rng,
            );
            walls.push(Wall::new(object));
        }

        Self { rooms, walls }
    }

    /// Load wall textures, keeping each wall's footprint.
    pub fn load_textures(&mut self, loader: &mut dyn TextureLoader) {
        for wall in self.walls.iter_mut() {
            let object = wall.object_mut();
            let size = object.size();
            object.load_texture(loader);
            object.set_size(size);
        }
    }

    /// The first room whose floor contains `position`.
    pub fn room_at_mut(&mut self, position: Vector2D) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.contains(position))
    }

    pub fn room_of_kind(&self, kind: RoomKind) -> Option<&Room> {
        self.rooms.iter().find(|r| r.kind == kind)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for room in &self.rooms {
            room.render(renderer);
        }
        self.walls.render(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harold_core::types::HAROLD_SIZE;
    use harold_core::FixedSizeLoader;

    #[test]
    fn every_kind_appears_once() {
        let house = House::generate(&mut SimpleRng::new(3));
        for kind in RoomKind::ALL {
            assert_eq!(house.rooms.iter().filter(|r| r.kind() == kind).count(), 1);
        }
        assert_eq!(house.walls.len(), WALL_SEGMENTS.len());
    }

    #[test]
    fn rooms_do_not_touch_walls() {
        let house = House::generate(&mut SimpleRng::new(3));
        for room in &house.rooms {
            assert!(!house.walls.any_aabb_collision(room.object()));
        }
    }

    #[test]
    fn doors_fit_harold() {
        let house = House::generate(&mut SimpleRng::new(3));
        // Straight down through the top-left door into room 0.
        let mut probe = GameObject::with_details(
            Vector2D::new(410.0, 200.0),
            HAROLD_SIZE,
            Vector2D::ZERO,
            "probe",
            "",
        );
        for _ in 0..100 {
            probe.set_position(probe.position() + Vector2D::new(0.0, 1.0));
            assert!(!house.walls.any_aabb_collision(&probe));
        }
    }

    #[test]
    fn room_lookup_by_position() {
        let mut house = House::generate(&mut SimpleRng::new(11));
        let kind = house.rooms[3].kind();
        let room = house.room_at_mut(Vector2D::new(900.0, 600.0)).map(|r| r.kind());
        assert_eq!(room, Some(kind));
        assert!(house.room_at_mut(Vector2D::new(10.0, 10.0)).is_none());
        assert!(house.room_at_mut(Vector2D::new(640.0, 300.0)).is_none());
    }

    #[test]
    fn wall_textures_keep_footprint() {
        let mut house = House::generate(&mut SimpleRng::new(1));
        let before: Vec<_> = house.walls.iter().map(|w| w.object().size()).collect();
        house.load_textures(&mut FixedSizeLoader {
            size: Vector2D::new(1.0, 1.0),
        });
        let after: Vec<_> = house.walls.iter().map(|w| w.object().size()).collect();
        assert_eq!(before, after);
        assert!(house.walls.iter().all(|w| w.object().texture().is_some()));
    }
}
