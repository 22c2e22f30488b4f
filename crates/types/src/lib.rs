//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! from the geometry core, the orchestrator, input mapping and terminal rendering.
//!
//! # World Dimensions
//!
//! The game world is a fixed 1280x720 plane in "world units". The terminal
//! front-end projects it onto however many cells the terminal offers (see
//! [`Projection`]).
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Frame rate the loop paces to |
//! | `TICK_MS` | 16 | Frame budget in milliseconds |
//! | `WHEEL_ROTATION_GAIN` | 5 | Degrees per wheel notch |
//! | `PULL_STRENGTH` | 20 | Drag pull, divided by furniture mass |
//! | `SPIN_SPEED` | 3 | Keyboard spin, degrees per frame |
//! | `HAROLD_SPEED` | 4 | Character speed, world units per frame |
//! | `PLACEMENT_REWARD` | 10 | Score delta for a (mis)placement |
//! | `CHECKPOINT_SIZE` | 64 | Side of the square checkpoint ring |
//!
//! # Examples
//!
//! ```
//! use harold_types::{InputEvent, InteractionState, MouseButton, Vector2D};
//!
//! let a = Vector2D::new(1.0, 2.0);
//! let b = Vector2D::new(3.0, 4.0);
//! assert_eq!(a + b, Vector2D::new(4.0, 6.0));
//! assert_eq!((b - a) * 2.0, Vector2D::new(4.0, 4.0));
//!
//! assert_eq!(InteractionState::default(), InteractionState::MouseOut);
//!
//! let press = InputEvent::MouseButtonDown {
//!     button: MouseButton::Left,
//!     position: Vector2D::new(10.0, 10.0),
//! };
//! assert_eq!(press.pointer(), Some(Vector2D::new(10.0, 10.0)));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// World width in world units
pub const WORLD_WIDTH: f32 = 1280.0;

/// World height in world units
pub const WORLD_HEIGHT: f32 = 720.0;

/// Frame rate the game loop paces to
pub const TARGET_FPS: u32 = 60;

/// Frame budget in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 1000 / TARGET_FPS;

/// Rotation applied per mouse-wheel notch, in degrees
pub const WHEEL_ROTATION_GAIN: f32 = 5.0;

/// Pull applied to dragged furniture; divided by the furniture's mass
pub const PULL_STRENGTH: f32 = 20.0;

/// Keyboard spin speed in degrees per frame
pub const SPIN_SPEED: f32 = 3.0;

/// Harold's walking speed in world units per frame
pub const HAROLD_SPEED: f32 = 4.0;

/// Where Harold starts and where he is sent back after touching a wall
pub const HAROLD_SPAWN: Vector2D = Vector2D::new(WORLD_WIDTH / 2.0, 64.0);

/// Harold's sprite size
pub const HAROLD_SIZE: Vector2D = Vector2D::new(32.0, 48.0);

/// Score delta for placing furniture in a (in)compatible room
pub const PLACEMENT_REWARD: i32 = 10;

/// Side length of the square checkpoint ring
pub const CHECKPOINT_SIZE: f32 = 64.0;

/// Length of generated object names
pub const NAME_LENGTH: usize = 8;

/// Number of high scores shown on the game-over screen
pub const HIGH_SCORE_ROWS: usize = 10;

/// Average-FPS readings above this are treated as a timer glitch
pub const FPS_SANITY_LIMIT: f32 = 2_000_000.0;

/// Immutable 2D vector used for positions, sizes and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product
    pub fn dot(self, other: Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Vector rotated 90° counter-clockwise
    pub fn perpendicular(self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f32) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f32) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pointer-interaction state of a single object
///
/// Recomputed once per processed pointer event:
/// - **MouseOut**: pointer outside the object's bounds (initial state)
/// - **MouseOverMotion**: pointer inside, primary button not pressed by this event
/// - **MouseDown**: pointer inside and the primary button was pressed by this event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    MouseOut,
    MouseOverMotion,
    MouseDown,
}

impl InteractionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::MouseOut => "mouse_out",
            InteractionState::MouseOverMotion => "mouse_over_motion",
            InteractionState::MouseDown => "mouse_down",
        }
    }
}

/// Mouse buttons the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the game reacts to
///
/// Character keys are normalised to lowercase by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
}

/// Input events consumed by the game, each with the minimal payload it needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown { button: MouseButton, position: Vector2D },
    MouseButtonUp { button: MouseButton, position: Vector2D },
    MouseMotion { position: Vector2D },
    /// Positive delta is a notch away from the user ("up")
    MouseWheel { delta: i32 },
    TextInput(char),
}

impl InputEvent {
    /// Pointer position carried by the event, if any
    pub fn pointer(&self) -> Option<Vector2D> {
        match *self {
            InputEvent::MouseButtonDown { position, .. }
            | InputEvent::MouseButtonUp { position, .. }
            | InputEvent::MouseMotion { position } => Some(position),
            _ => None,
        }
    }

    /// Whether the event is a pointer event (motion, button or wheel)
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            InputEvent::MouseButtonDown { .. }
                | InputEvent::MouseButtonUp { .. }
                | InputEvent::MouseMotion { .. }
                | InputEvent::MouseWheel { .. }
        )
    }
}

/// Mirroring applied when drawing a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Feedback tint of a room floor after a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomTint {
    #[default]
    Neutral,
    Accepted,
    Rejected,
}

/// Kinds of rooms furniture can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Bedroom,
    LivingRoom,
    Kitchen,
    Bathroom,
}

impl RoomKind {
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Bedroom,
        RoomKind::LivingRoom,
        RoomKind::Kitchen,
        RoomKind::Bathroom,
    ];

    /// Parse room kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use harold_types::RoomKind;
    ///
    /// assert_eq!(RoomKind::from_str("livingroom"), Some(RoomKind::LivingRoom));
    /// assert_eq!(RoomKind::from_str("Kitchen"), Some(RoomKind::Kitchen));
    /// assert_eq!(RoomKind::from_str("attic"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bedroom" => Some(RoomKind::Bedroom),
            "livingroom" => Some(RoomKind::LivingRoom),
            "kitchen" => Some(RoomKind::Kitchen),
            "bathroom" => Some(RoomKind::Bathroom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Bedroom => "bedroom",
            RoomKind::LivingRoom => "livingroom",
            RoomKind::Kitchen => "kitchen",
            RoomKind::Bathroom => "bathroom",
        }
    }
}

/// Maps the fixed world plane onto a grid of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub columns: u16,
    pub rows: u16,
}

impl Projection {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// World units covered by one cell along each axis
    pub fn cell_size(&self) -> Vector2D {
        Vector2D::new(
            WORLD_WIDTH / f32::from(self.columns.max(1)),
            WORLD_HEIGHT / f32::from(self.rows.max(1)),
        )
    }

    /// World position of the centre of a cell
    pub fn cell_to_world(&self, column: u16, row: u16) -> Vector2D {
        let cell = self.cell_size();
        Vector2D::new(
            (f32::from(column) + 0.5) * cell.x,
            (f32::from(row) + 0.5) * cell.y,
        )
    }

    /// Cell containing a world position (may be outside the grid)
    pub fn world_to_cell(&self, position: Vector2D) -> (i32, i32) {
        let cell = self.cell_size();
        (
            (position.x / cell.x).floor() as i32,
            (position.y / cell.y).floor() as i32,
        )
    }
}
