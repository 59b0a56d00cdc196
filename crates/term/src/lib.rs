//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders
//! into a simple framebuffer that a terminal backend flushes, keeping the
//! view pure and testable:
//!
//! - `core` stays deterministic; nothing here feeds back into the engine
//! - [`game_view::GameView`] maps engine state to styled cells (no I/O)
//! - [`renderer::TerminalRenderer`] owns raw mode and the alternate screen

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
