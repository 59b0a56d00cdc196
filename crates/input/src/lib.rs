//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The
//! mapping is a pure lookup table; nothing here touches the engine or the
//! terminal. 2048 is one discrete move per keypress, so there is no held-key
//! or auto-repeat handling.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
