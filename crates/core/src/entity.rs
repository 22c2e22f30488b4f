//! Entity capabilities and the closed set of entity variants.
//!
//! Every live object exposes the same per-frame surface through [`Behaviour`]:
//! move, rotate, react to input, respond to collisions and draw. [`Entity`]
//! is the closed set of variants a [`Scene`](crate::Scene) can hold.

use crate::character::Harold;
use crate::collision::Corners;
use crate::furniture::Furniture;
use crate::game_object::GameObject;
use crate::render::Renderer;
use crate::types::{InputEvent, InteractionState};

/// Per-frame capability surface shared by all entities.
pub trait Behaviour {
    fn object(&self) -> &GameObject;

    fn object_mut(&mut self) -> &mut GameObject;

    /// Integrate position by velocity
    fn advance(&mut self) {
        self.object_mut().apply_velocity();
    }

    /// Integrate rotation by any active spin
    fn rotate(&mut self) {}

    fn handle_event(&mut self, event: &InputEvent) -> InteractionState {
        self.object_mut().handle_pointer_event(event)
    }

    /// Test against neighbours and apply this entity's response.
    ///
    /// Returns whether any neighbour overlapped.
    fn handle_collisions(&mut self, others: &[Corners]) -> bool {
        let object = self.object();
        others.iter().any(|c| object.has_corner_collision(c))
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        self.object().render(renderer);
    }
}

impl Behaviour for GameObject {
    fn object(&self) -> &GameObject {
        self
    }

    fn object_mut(&mut self) -> &mut GameObject {
        self
    }
}

/// Static obstacle. Never moves, never reacts to the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    object: GameObject,
}

impl Wall {
    pub const TEXTURE: &'static str = "./resources/black.png";

    pub fn new(object: GameObject) -> Self {
        Self { object }
    }
}

impl Behaviour for Wall {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    fn advance(&mut self) {}

    fn handle_event(&mut self, _event: &InputEvent) -> InteractionState {
        self.object.current_state()
    }

    fn handle_collisions(&mut self, _others: &[Corners]) -> bool {
        false
    }
}

/// The closed set of entity variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Object(GameObject),
    Furniture(Furniture),
    Character(Harold),
    Wall(Wall),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Entity::Object($inner) => $body,
            Entity::Furniture($inner) => $body,
            Entity::Character($inner) => $body,
            Entity::Wall($inner) => $body,
        }
    };
}

impl Behaviour for Entity {
    fn object(&self) -> &GameObject {
        dispatch!(self, e => e.object())
    }

    fn object_mut(&mut self) -> &mut GameObject {
        dispatch!(self, e => e.object_mut())
    }

    fn advance(&mut self) {
        dispatch!(self, e => e.advance())
    }

    fn rotate(&mut self) {
        dispatch!(self, e => e.rotate())
    }

    fn handle_event(&mut self, event: &InputEvent) -> InteractionState {
        dispatch!(self, e => e.handle_event(event))
    }

    fn handle_collisions(&mut self, others: &[Corners]) -> bool {
        dispatch!(self, e => e.handle_collisions(others))
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        dispatch!(self, e => e.render(renderer))
    }
}

impl From<GameObject> for Entity {
    fn from(object: GameObject) -> Self {
        Entity::Object(object)
    }
}

impl From<Furniture> for Entity {
    fn from(furniture: Furniture) -> Self {
        Entity::Furniture(furniture)
    }
}

impl From<Harold> for Entity {
    fn from(harold: Harold) -> Self {
        Entity::Character(harold)
    }
}

impl From<Wall> for Entity {
    fn from(wall: Wall) -> Self {
        Entity::Wall(wall)
    }
}
