//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::InputEvent`]s,
//! converting terminal cells to world coordinates through a
//! [`Projection`](crate::types::Projection), and synthesises key releases for
//! terminals that never report them.

pub mod handler;
pub mod map;

pub use harold_types as types;

pub use handler::KeyReleaseTracker;
pub use map::{map_event, map_key_code, map_key_event, map_mouse_event, should_quit, Mapped};
