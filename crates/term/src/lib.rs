//! Terminal front end for Harold the Hoarder.
//!
//! The game draws through the core `Renderer` trait; here that trait is
//! implemented over a framebuffer of styled cells which is then diffed and
//! flushed to the terminal.
//!
//! - [`fb`]: cells, styles and the framebuffer
//! - [`canvas`]: world-to-cell rasterisation of sprites, text and rooms
//! - [`game_view`]: a whole frame plus the status line
//! - [`renderer`]: terminal session and diffed output

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use harold_core as core;
pub use harold_engine as engine;

pub use canvas::FrameCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
