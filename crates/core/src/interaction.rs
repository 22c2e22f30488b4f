//! Interaction state machine - hover, click and drag
//!
//! Each pointer event reclassifies an object against its unrotated bounds:
//!
//! | Pointer | Event | Next state |
//! |---------|-------|------------|
//! | outside | any pointer event | `MouseOut` |
//! | inside | primary button pressed | `MouseDown` |
//! | inside | motion / release / other button | `MouseOverMotion` |
//!
//! Wheel events carry no position and keys are not pointer events; both leave
//! the state unchanged. Dragging and wheel rotation are derived from the state
//! by the owner of the object (see [`drag_velocity`] and [`wheel_rotation`]).

use crate::game_object::GameObject;
use crate::types::{
    InputEvent, InteractionState, MouseButton, Vector2D, PULL_STRENGTH, TARGET_FPS,
    WHEEL_ROTATION_GAIN,
};

/// Classify a pointer event against an object's bounds.
///
/// Returns `None` for events that do not reclassify (keys, wheel, text, quit).
pub fn classify(object: &GameObject, event: &InputEvent) -> Option<InteractionState> {
    let position = event.pointer()?;

    if !object.is_inside(position.x, position.y) {
        return Some(InteractionState::MouseOut);
    }

    match event {
        InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            ..
        } => Some(InteractionState::MouseDown),
        _ => Some(InteractionState::MouseOverMotion),
    }
}

/// Whether the pointer is currently engaging an object (hovered or pressed).
pub fn is_engaged(state: InteractionState) -> bool {
    state != InteractionState::MouseOut
}

/// Wheel rotation applies only to an object that is hovered or being dragged.
pub fn can_rotate(state: InteractionState, dragging: bool) -> bool {
    dragging || is_engaged(state)
}

/// Degrees of rotation for a wheel delta.
pub fn wheel_rotation(delta: i32) -> f32 {
    delta as f32 * WHEEL_ROTATION_GAIN
}

/// Per-frame step size for an average frame rate.
///
/// A non-positive or non-finite average (first frame, timer glitch) falls back
/// to the target rate so the step stays finite.
pub fn frame_delta(avg_fps: f32) -> f32 {
    if avg_fps.is_finite() && avg_fps > 0.0 {
        1.0 / avg_fps
    } else {
        1.0 / TARGET_FPS as f32
    }
}

/// Velocity pulling a dragged object's position toward the pointer.
///
/// Heavier objects follow more sluggishly; mass below 1 is treated as 1.
pub fn drag_velocity(position: Vector2D, pointer: Vector2D, avg_fps: f32, mass: f32) -> Vector2D {
    let pull = PULL_STRENGTH / mass.max(1.0);
    (pointer - position) * frame_delta(avg_fps) * pull
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> GameObject {
        GameObject::with_details(
            Vector2D::new(100.0, 100.0),
            Vector2D::new(64.0, 64.0),
            Vector2D::ZERO,
            "Box1",
            "",
        )
    }

    fn motion(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMotion {
            position: Vector2D::new(x, y),
        }
    }

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseButtonDown {
            button,
            position: Vector2D::new(x, y),
        }
    }

    #[test]
    fn transitions_follow_pointer() {
        let mut o = target();
        assert_eq!(o.current_state(), InteractionState::MouseOut);

        assert_eq!(
            o.handle_pointer_event(&motion(120.0, 120.0)),
            InteractionState::MouseOverMotion
        );
        assert_eq!(
            o.handle_pointer_event(&press(MouseButton::Left, 120.0, 120.0)),
            InteractionState::MouseDown
        );
        let release = InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            position: Vector2D::new(120.0, 120.0),
        };
        assert_eq!(
            o.handle_pointer_event(&release),
            InteractionState::MouseOverMotion
        );
        assert_eq!(
            o.handle_pointer_event(&motion(5.0, 5.0)),
            InteractionState::MouseOut
        );
    }

    #[test]
    fn press_outside_is_mouse_out() {
        let o = target();
        assert_eq!(
            classify(&o, &press(MouseButton::Left, 0.0, 0.0)),
            Some(InteractionState::MouseOut)
        );
    }

    #[test]
    fn secondary_button_only_hovers() {
        let o = target();
        assert_eq!(
            classify(&o, &press(MouseButton::Right, 110.0, 110.0)),
            Some(InteractionState::MouseOverMotion)
        );
    }

    #[test]
    fn non_pointer_events_keep_state() {
        let mut o = target();
        o.handle_pointer_event(&motion(110.0, 110.0));
        assert_eq!(classify(&o, &InputEvent::MouseWheel { delta: 2 }), None);
        assert_eq!(
            classify(&o, &InputEvent::KeyDown(crate::types::Key::Char('e'))),
            None
        );
        assert_eq!(
            o.handle_pointer_event(&InputEvent::Quit),
            InteractionState::MouseOverMotion
        );
    }

    #[test]
    fn rotation_gate_and_gain() {
        assert!(!can_rotate(InteractionState::MouseOut, false));
        assert!(can_rotate(InteractionState::MouseOut, true));
        assert!(can_rotate(InteractionState::MouseOverMotion, false));
        assert_eq!(wheel_rotation(3), 15.0);
        assert_eq!(wheel_rotation(-1), -5.0);
    }

    #[test]
    fn drag_pulls_toward_pointer_scaled_by_mass() {
        let v = drag_velocity(
            Vector2D::new(100.0, 100.0),
            Vector2D::new(200.0, 200.0),
            60.0,
            1.0,
        );
        let expected = 100.0 / 60.0 * 20.0;
        assert!((v.x - expected).abs() < 1e-3);
        assert!((v.y - expected).abs() < 1e-3);

        let heavy = drag_velocity(
            Vector2D::new(100.0, 100.0),
            Vector2D::new(200.0, 200.0),
            60.0,
            10.0,
        );
        assert!((heavy.x - expected / 10.0).abs() < 1e-3);
    }

    #[test]
    fn zero_fps_falls_back_to_target_rate() {
        assert_eq!(frame_delta(0.0), 1.0 / 60.0);
        assert_eq!(frame_delta(f32::INFINITY), 1.0 / 60.0);
        assert_eq!(frame_delta(30.0), 1.0 / 30.0);
    }
}
