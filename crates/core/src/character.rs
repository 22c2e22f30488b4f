//! Harold, the keyboard-driven character.

use crate::entity::Behaviour;
use crate::game_object::GameObject;
use crate::render::Renderer;
use crate::types::{
    Flip, InputEvent, InteractionState, Key, Vector2D, HAROLD_SIZE, HAROLD_SPAWN, HAROLD_SPEED,
};

/// Movement axis a key drives, with its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal(i8),
    Vertical(i8),
}

fn axis_for(key: Key) -> Option<Axis> {
    match key {
        Key::Up | Key::Char('w') => Some(Axis::Vertical(-1)),
        Key::Down | Key::Char('s') => Some(Axis::Vertical(1)),
        Key::Left | Key::Char('a') => Some(Axis::Horizontal(-1)),
        Key::Right | Key::Char('d') => Some(Axis::Horizontal(1)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Harold {
    object: GameObject,
    can_control: bool,
    facing: Flip,
}

impl Harold {
    pub const TEXTURE: &'static str = "./resources/harold.png";

    pub fn new(position: Vector2D) -> Self {
        Self {
            object: GameObject::with_details(
                position,
                HAROLD_SIZE,
                Vector2D::ZERO,
                "Harold",
                Self::TEXTURE,
            ),
            can_control: false,
            facing: Flip::None,
        }
    }

    pub fn can_control(&self) -> bool {
        self.can_control
    }

    /// Grant or revoke keyboard control. Revoking also stops him.
    pub fn set_can_control(&mut self, can_control: bool) {
        self.can_control = can_control;
        if !can_control {
            self.object.set_velocity(Vector2D::ZERO);
        }
    }

    pub fn facing(&self) -> Flip {
        self.facing
    }

    /// Back to the spawn point, standing still
    pub fn reset_to_spawn(&mut self) {
        self.object.set_position(HAROLD_SPAWN);
        self.object.set_velocity(Vector2D::ZERO);
    }

    fn press(&mut self, axis: Axis) {
        let mut velocity = self.object.velocity();
        match axis {
            Axis::Horizontal(sign) => velocity.x = HAROLD_SPEED * f32::from(sign),
            Axis::Vertical(sign) => velocity.y = HAROLD_SPEED * f32::from(sign),
        }
        self.object.set_velocity(velocity);
    }

    /// Releasing a key only stops the axis if it is still moving that way.
    fn release(&mut self, axis: Axis) {
        let mut velocity = self.object.velocity();
        match axis {
            Axis::Horizontal(sign) if velocity.x * f32::from(sign) > 0.0 => velocity.x = 0.0,
            Axis::Vertical(sign) if velocity.y * f32::from(sign) > 0.0 => velocity.y = 0.0,
            _ => return,
        }
        self.object.set_velocity(velocity);
    }
}

impl Default for Harold {
    fn default() -> Self {
        Self::new(HAROLD_SPAWN)
    }
}

impl Behaviour for Harold {
    fn object(&self) -> &GameObject {
        &self.object
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.object
    }

    fn advance(&mut self) {
        let dx = self.object.velocity().x;
        if dx < 0.0 {
            self.facing = Flip::Horizontal;
        } else if dx > 0.0 {
            self.facing = Flip::None;
        }
        self.object.apply_velocity();
    }

    fn handle_event(&mut self, event: &InputEvent) -> InteractionState {
        match *event {
            InputEvent::KeyDown(key) if self.can_control => {
                if let Some(axis) = axis_for(key) {
                    self.press(axis);
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some(axis) = axis_for(key) {
                    self.release(axis);
                }
            }
            _ => {}
        }
        self.object.handle_pointer_event(event)
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        self.object.render_flipped(renderer, self.facing);
    }
}
