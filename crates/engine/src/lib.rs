//! Orchestrator for Harold the Hoarder
//!
//! Owns every live object and runs the game through its phases: menu,
//! furnishing (unpack boxes, drag and place furniture), routing (walk Harold
//! through checkpoints) and game over (high-score list).
//!
//! - [`game`]: the [`Game`] state and its event / update / render flow
//! - [`catalog`]: furniture table and the built-in [`AssetCatalog`]
//! - [`house`]: room layout and walls
//! - [`scoreboard`]: flat high-score file
//! - [`clock`]: average FPS and frame pacing
//! - [`config`]: `HAROLD_*` environment configuration

pub mod catalog;
pub mod clock;
pub mod config;
pub mod game;
pub mod house;
pub mod scoreboard;

pub use catalog::{AssetCatalog, FurnitureSpec, CATALOG};
pub use clock::FrameClock;
pub use config::GameConfig;
pub use game::{Game, Phase, Placement};
pub use house::{House, Room};
pub use scoreboard::{Scoreboard, ScoreboardError};
