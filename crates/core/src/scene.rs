//! Scene - an ordered collection of entities
//!
//! A scene owns its entities outright; moving an entity in or out of a scene
//! is a move, never a copy. Render and event dispatch walk the entities in
//! insertion order.

use crate::collision::Corners;
use crate::entity::{Behaviour, Entity};
use crate::game_object::GameObject;
use crate::render::Renderer;
use crate::types::{InputEvent, InteractionState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.iter_mut()
    }

    /// Current corners of every entity, in order.
    pub fn corners(&self) -> Vec<Corners> {
        self.entities.iter().map(|e| e.object().corners()).collect()
    }

    /// Corners of every entity except the one at `skip`.
    pub fn corners_except(&self, skip: usize) -> Vec<Corners> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, e)| e.object().corners())
            .collect()
    }

    /// Whether any entity's unrotated box overlaps `object`.
    pub fn any_aabb_collision(&self, object: &GameObject) -> bool {
        self.entities.iter().any(|e| object.has_collision(e.object()))
    }

    /// Whether any entity's rotated box overlaps `corners`, testing with each
    /// entity's own edges.
    pub fn any_corner_collision(&self, corners: &Corners) -> bool {
        self.entities
            .iter()
            .any(|e| e.object().has_corner_collision(corners))
    }

    /// Whether the pointer currently engages any entity.
    pub fn any_hovered(&self) -> bool {
        self.entities
            .iter()
            .any(|e| e.object().current_state() != InteractionState::MouseOut)
    }

    /// Dispatch one event to every entity.
    pub fn handle_event(&mut self, event: &InputEvent) {
        for entity in &mut self.entities {
            entity.handle_event(event);
        }
    }

    /// One frame for every entity: move, rotate, then respond to collisions
    /// with every other entity in the scene plus `obstacles`.
    ///
    /// Entities are processed in order, each seeing the others' positions as
    /// they stand at that moment.
    pub fn step(&mut self, obstacles: &[Corners]) -> usize {
        let mut hits = 0;
        for i in 0..self.entities.len() {
            {
                let entity = &mut self.entities[i];
                entity.advance();
                entity.rotate();
            }
            let mut others = self.corners_except(i);
            others.extend_from_slice(obstacles);
            if self.entities[i].handle_collisions(&others) {
                hits += 1;
            }
        }
        hits
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for entity in &self.entities {
            entity.render(renderer);
        }
    }
}

impl FromIterator<Entity> for Scene {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
