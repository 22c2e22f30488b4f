//! Furniture and the boxes it arrives in.

use crate::collision::{Corners, SatMode};
use crate::entity::Behaviour;
use crate::game_object::GameObject;
use crate::interaction::drag_velocity;
use crate::render::TextureLoader;
use crate::types::{RoomKind, Vector2D};

/// Direction of a continuous spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinDirection {
    #[default]
    None,
    Clockwise,
    CounterClockwise,
}

/// Continuous rotation applied once per frame by [`Behaviour::rotate`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    pub direction: SpinDirection,
    /// Degrees per frame
    pub speed: f32,
}

impl Spin {
    pub const NONE: Spin = Spin {
        direction: SpinDirection::None,
        speed: 0.0,
    };

    pub fn new(direction: SpinDirection, speed: f32) -> Self {
        Self { direction, speed }
    }

    /// Signed degrees to add this frame
    pub fn step(&self) -> f32 {
        match self.direction {
            SpinDirection::None => 0.0,
            SpinDirection::Clockwise => self.speed,
            SpinDirection::CounterClockwise => -self.speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    object: GameObject,
    mass: f32,
    rooms: Vec<RoomKind>,
    spin: Spin,
    sat_mode: SatMode,
    colliding: bool,
}

impl Furniture {
    pub fn new(name: &str, texture_path: &str, mass: f32, rooms: Vec<RoomKind>) -> Self {
        Self {
            object: GameObject::with_details(
                Vector2D::ZERO,
                Vector2D::ZERO,
                Vector2D::ZERO,
                name,
                texture_path,
            ),
            mass: mass.max(1.0),
            rooms,
            spin: Spin::NONE,
            sat_mode: SatMode::TesterEdges,
            colliding: false,
        }
    }

    /// Same furniture with an explicit size (before any texture is loaded)
    pub fn with_size(mut self, size: Vector2D) -> Self {
        self.object.set_size(size);
        self
    }

    pub fn with_sat_mode(mut self, mode: SatMode) -> Self {
        self.sat_mode = mode;
        self
    }

    pub fn name(&self) -> &str {
        self.object.name()
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn rooms(&self) -> &[RoomKind] {
        &self.rooms
    }

    pub fn compatible_with(&self, room: RoomKind) -> bool {
        self.rooms.contains(&room)
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn set_spin(&mut self, spin: Spin) {
        self.spin = spin;
    }

    pub fn cancel_spin(&mut self) {
        self.spin = Spin::NONE;
    }

    /// Whether the last collision pass found an overlap
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Set velocity toward the pointer for this frame
    pub fn drag_toward(&mut self, pointer: Vector2D, avg_fps: f32) {
        let velocity = drag_velocity(self.object.position(), pointer, avg_fps, self.mass);
        self.object.set_velocity(velocity);
    }
}

impl Behaviour for Furniture {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    fn rotate(&mut self) {
        let step = self.spin.step();
        if step != 0.0 {
            self.object.increase_rotation(step);
        }
    }

    /// Any overlap stops the furniture: velocity zeroed, spin cancelled.
    fn handle_collisions(&mut self, others: &[Corners]) -> bool {
        let hit = others
            .iter()
            .any(|c| self.object.has_corner_collision_with(c, self.sat_mode));
        if hit {
            self.object.set_velocity(Vector2D::ZERO);
            self.spin = Spin::NONE;
        }
        self.colliding = hit;
        hit
    }
}

/// A pending box holding exactly one furniture item.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureBox {
    object: GameObject,
    contents: Furniture,
}

impl FurnitureBox {
    pub const TEXTURE: &'static str = "./resources/box.png";
    pub const SIZE: Vector2D = Vector2D::new(64.0, 64.0);

    pub fn new(position: Vector2D, contents: Furniture) -> Self {
        Self {
            object: GameObject::with_details(
                position,
                Self::SIZE,
                Vector2D::ZERO,
                "Box",
                Self::TEXTURE,
            ),
            contents,
        }
    }

    pub fn contents(&self) -> &Furniture {
        &self.contents
    }

    /// Load the box texture and the furniture's own texture.
    pub fn load_textures(&mut self, loader: &mut dyn TextureLoader) -> bool {
        let own = self.object.load_texture(loader);
        let inner = self.contents.object.load_texture(loader);
        own && inner
    }

    /// Unpack: the furniture is centred on where the box was.
    pub fn unpack(self) -> Furniture {
        let mut furniture = self.contents;
        let centered =
            self.object.position() + self.object.size() / 2.0 - furniture.object.size() / 2.0;
        furniture.object.set_position(centered);
        furniture
    }
}

impl Behaviour for FurnitureBox {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> Furniture {
        Furniture::new(
            "chair",
            "./resources/furniture/chair.png",
            5.0,
            vec![RoomKind::Bedroom, RoomKind::Kitchen],
        )
        .with_size(Vector2D::new(32.0, 32.0))
    }

    #[test]
    fn room_compatibility() {
        let c = chair();
        assert!(c.compatible_with(RoomKind::Kitchen));
        assert!(!c.compatible_with(RoomKind::Bathroom));
    }

    #[test]
    fn mass_is_at_least_one() {
        let f = Furniture::new("feather", "", 0.0, vec![]);
        assert_eq!(f.mass(), 1.0);
    }

    #[test]
    fn spin_integrates_and_wraps() {
        let mut c = chair();
        c.set_spin(Spin::new(SpinDirection::CounterClockwise, 3.0));
        c.rotate();
        assert!((c.object().rotation() - 357.0).abs() < 1e-4);
        c.set_spin(Spin::new(SpinDirection::Clockwise, 5.0));
        c.rotate();
        c.rotate();
        assert!((c.object().rotation() - 7.0).abs() < 1e-3);
    }

    #[test]
    fn collision_stops_motion_and_spin() {
        let mut c = chair();
        c.object_mut().set_velocity(Vector2D::new(3.0, 0.0));
        c.set_spin(Spin::new(SpinDirection::Clockwise, 2.0));

        let far = chair().object().corners().map(|p| p + Vector2D::new(500.0, 0.0));
        assert!(!c.handle_collisions(&[far]));
        assert!(c.object().is_moving());

        let near = chair().object().corners();
        assert!(c.handle_collisions(&[far, near]));
        assert!(c.is_colliding());
        assert!(!c.object().is_moving());
        assert_eq!(c.spin(), Spin::NONE);
    }

    #[test]
    fn unpack_centres_on_box() {
        let b = FurnitureBox::new(Vector2D::new(100.0, 100.0), chair());
        let f = b.unpack();
        assert_eq!(f.object().position(), Vector2D::new(116.0, 116.0));
        assert_eq!(f.name(), "chair");
    }

    #[test]
    fn drag_moves_toward_pointer() {
        let mut c = chair();
        c.object_mut().set_position(Vector2D::new(0.0, 0.0));
        c.drag_toward(Vector2D::new(60.0, 0.0), 60.0);
        let v = c.object().velocity();
        assert!(v.x > 0.0 && v.y == 0.0);
        // Pull 20 / mass 5 over one 60 FPS frame.
        assert!((v.x - 60.0 / 60.0 * 4.0).abs() < 1e-4);
    }
}
