//! Game state module - grid, score, and spawn management
//!
//! Ties the grid and RNG together behind the engine's public contract:
//! shift, spawn, and the terminal-condition observations. The engine never
//! spawns inside a shift and never decides the session outcome; the driving
//! loop spawns after a changed move and folds `is_win`/`can_move` into its
//! own status enum.

use tui_2048_types::{Direction, GameConfig, GameStatus};

use crate::grid::Grid;
use crate::rng::SimpleRng;

/// A tile placed by [`GameState::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    /// Flat index of the cell the tile landed in.
    pub index: usize,
    /// Tile value (2 or 4).
    pub value: u32,
}

/// Complete engine state for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u32,
    rng: SimpleRng,
    config: GameConfig,
}

impl GameState {
    /// Create a new game with the default rules and the given RNG seed.
    ///
    /// The grid starts with two spawned tiles.
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new game with explicit rules.
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            rng: SimpleRng::new(seed),
            config,
        };
        state.spawn_tile();
        state.spawn_tile();
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The largest tile on the grid.
    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// Current RNG state (for deriving a restart seed).
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Replace the grid wholesale.
    ///
    /// For fixtures and replays; normal play only mutates through
    /// [`GameState::shift`] and [`GameState::spawn_tile`].
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Spawn one tile into a uniformly chosen empty cell.
    ///
    /// The value is 4 with `config.four_tile_percent` probability, else 2.
    /// Returns what was placed, or `None` when the grid is full (no-op).
    pub fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let index = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.chance(self.config.four_tile_percent) {
            4
        } else {
            2
        };
        self.grid.place(index, value);

        Some(SpawnedTile { index, value })
    }

    /// Shift the grid in a direction.
    ///
    /// Merged points are added to the score. Returns whether any cell
    /// changed; the caller spawns a tile only after a changed move.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let outcome = self.grid.shift(direction);
        self.score += outcome.gained;
        outcome.moved
    }

    /// Whether any legal move remains: an empty cell, or an adjacent equal
    /// pair somewhere on the grid.
    pub fn can_move(&self) -> bool {
        self.grid.has_empty_cell() || self.grid.has_adjacent_equal()
    }

    /// Whether any tile has reached the win threshold.
    pub fn is_win(&self) -> bool {
        self.grid.max_tile() >= self.config.win_threshold
    }

    /// Fold the terminal observations into a session status.
    ///
    /// Pure: the engine holds no session state. Call after a changed move
    /// and its spawn. Win is only reported while `stop_at_win` is set;
    /// otherwise play continues until no move remains.
    pub fn status_after_move(&self) -> GameStatus {
        if self.config.stop_at_win && self.is_win() {
            GameStatus::Won
        } else if !self.can_move() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
