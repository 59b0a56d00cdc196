//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole 2048 rule set with **zero dependencies** on
//! UI or I/O:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Total**: every operation is defined for every well-formed grid;
//!   there are no engine error states
//! - **Allocation-free**: shifts and spawns work on a flat 16-cell array
//!
//! # Module Structure
//!
//! - [`grid`]: the 4x4 grid, the compress/merge shift primitive, and the
//!   reverse/transpose transforms that derive all four directions from it
//! - [`game_state`]: grid + score + RNG behind the engine contract
//!   (shift, spawn, `can_move`, `is_win`)
//! - [`rng`]: seedable LCG used for tile spawning
//!
//! # Contract
//!
//! The engine never spawns inside a shift and never owns the session
//! outcome. The driving loop calls [`GameState::shift`], spawns via
//! [`GameState::spawn_tile`] only when the shift changed something, and
//! then folds [`GameState::status_after_move`] into its own state machine.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! if game.shift(Direction::Left) {
//!     game.spawn_tile();
//! }
//! assert_eq!(game.status_after_move(), GameStatus::InProgress);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;

pub use game_state::{GameState, SpawnedTile};
pub use grid::{Grid, ShiftOutcome};
pub use rng::SimpleRng;
