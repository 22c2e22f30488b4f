//! Harold the Hoarder (workspace facade crate).
//!
//! Re-exports the member crates so the binary, integration tests and benches
//! can use `harold_hoarder::{core,engine,input,term,types}`.

pub use harold_core as core;
pub use harold_engine as engine;
pub use harold_input as input;
pub use harold_term as term;
pub use harold_types as types;
