//! Mapping from terminal events to game input events.

use arrayvec::ArrayVec;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton,
    MouseEvent, MouseEventKind,
};

use crate::types::{InputEvent, Key, MouseButton, Projection};

/// Game events produced by a single terminal event
pub type Mapped = ArrayVec<InputEvent, 2>;

/// Map a key code to a game key. Letters are lowercased.
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

pub fn map_mouse_button(button: TermButton) -> MouseButton {
    match button {
        TermButton::Left => MouseButton::Left,
        TermButton::Right => MouseButton::Right,
        TermButton::Middle => MouseButton::Middle,
    }
}

/// Map keyboard input. Presses of printable keys also yield text input.
pub fn map_key_event(key: KeyEvent) -> Mapped {
    let mut out = Mapped::new();
    let Some(mapped) = map_key_code(key.code) else {
        return out;
    };
    match key.kind {
        KeyEventKind::Press => {
            out.push(InputEvent::KeyDown(mapped));
            if let KeyCode::Char(c) = key.code {
                out.push(InputEvent::TextInput(c));
            }
        }
        // Auto-repeat re-asserts the key so release tracking stays alive.
        KeyEventKind::Repeat => out.push(InputEvent::KeyDown(mapped)),
        KeyEventKind::Release => out.push(InputEvent::KeyUp(mapped)),
    }
    out
}

/// Map mouse input, converting cell coordinates to world coordinates.
///
/// A press is preceded by a motion event so hover state is current before the
/// press is classified.
pub fn map_mouse_event(mouse: MouseEvent, projection: Projection) -> Mapped {
    let mut out = Mapped::new();
    let position = projection.cell_to_world(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => {
            out.push(InputEvent::MouseMotion { position });
            out.push(InputEvent::MouseButtonDown {
                button: map_mouse_button(button),
                position,
            });
        }
        MouseEventKind::Up(button) => out.push(InputEvent::MouseButtonUp {
            button: map_mouse_button(button),
            position,
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            out.push(InputEvent::MouseMotion { position })
        }
        MouseEventKind::ScrollUp => out.push(InputEvent::MouseWheel { delta: 1 }),
        MouseEventKind::ScrollDown => out.push(InputEvent::MouseWheel { delta: -1 }),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {}
    }
    out
}

/// Map any terminal event. Quit keys map to [`InputEvent::Quit`].
pub fn map_event(event: &Event, projection: Projection) -> Mapped {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(*key) => {
            let mut out = Mapped::new();
            out.push(InputEvent::Quit);
            out
        }
        Event::Key(key) => map_key_event(*key),
        Event::Mouse(mouse) => map_mouse_event(*mouse, projection),
        _ => Mapped::new(),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
