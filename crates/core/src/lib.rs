//! Core object model - geometry, collision and pointer interaction
//!
//! This crate holds everything that decides *where* things are and *whether*
//! they touch. It has no terminal, file or clock dependencies, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same names and layouts
//! - **Testable**: geometry and collision are pure functions of object state
//! - **Portable**: rendering and asset loading sit behind small traits
//!
//! # Module Structure
//!
//! - [`game_object`]: base entity with position, size, velocity, rotation and hit-testing
//! - [`collision`]: axis-aligned and separating-axis overlap tests
//! - [`interaction`]: pointer state machine plus drag and wheel helpers
//! - [`entity`]: the per-frame [`Behaviour`] surface and the closed [`Entity`] set
//! - [`furniture`]: furniture with mass, room kinds and spin, and the boxes it ships in
//! - [`character`]: Harold, moved by the keyboard
//! - [`cursor`]: the hand cursor with hover / closed skins
//! - [`scene`]: ordered entity collections with batched update, dispatch and render
//! - [`render`]: [`Renderer`] and [`TextureLoader`] seams plus a recording renderer
//! - [`rng`]: seeded generator for names, scatter and sampling
//!
//! # Example
//!
//! ```
//! use harold_core::{GameObject, SatMode};
//! use harold_core::types::Vector2D;
//!
//! let a = GameObject::with_details(Vector2D::new(0.0, 0.0), Vector2D::new(10.0, 10.0), Vector2D::ZERO, "a", "");
//! let mut b = GameObject::with_details(Vector2D::new(5.0, 5.0), Vector2D::new(10.0, 10.0), Vector2D::ZERO, "b", "");
//!
//! assert!(a.has_collision(&b));
//! assert!(a.has_corner_collision(&b.corners()));
//!
//! b.set_position(Vector2D::new(40.0, 0.0));
//! assert!(!a.has_corner_collision_with(&b.corners(), SatMode::Symmetric));
//! ```

pub mod character;
pub mod collision;
pub mod cursor;
pub mod entity;
pub mod furniture;
pub mod game_object;
pub mod interaction;
pub mod render;
pub mod rng;
pub mod scene;

pub use harold_types as types;

pub use character::Harold;
pub use collision::{aabb_overlap, point_in_box, sat_overlap, Corners, SatMode};
pub use cursor::{Cursor, CursorSkin};
pub use entity::{Behaviour, Entity, Wall};
pub use furniture::{Furniture, FurnitureBox, Spin, SpinDirection};
pub use game_object::{normalize_degrees, GameObject};
pub use render::{DrawCall, FixedSizeLoader, RecordingRenderer, Renderer, Sprite, Texture, TextureLoader};
pub use rng::SimpleRng;
pub use scene::Scene;
