//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_2048_core::GameState;
use tui_2048_scores::Leaderboard;
use tui_2048_types::{GameStatus, GRID_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 fits a centered "2048" and compensates for glyph aspect ratio.
        Self {
            cell_w: 8,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game into a framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        status: GameStatus,
        scores: &Leaderboard,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = state.grid().get(row, col).unwrap_or(0);
                self.draw_tile(&mut fb, start_x + 1, start_y + 1, row, col, value);
            }
        }

        self.draw_side_panel(&mut fb, state, scores, start_x + frame_w + 2, start_y);

        match status {
            GameStatus::Won => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "YOU WIN")
            }
            GameStatus::Lost => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::InProgress => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for cx in x + 1..right {
            fb.put(cx, y, '─', style);
            fb.put(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put(x, cy, '│', style);
            fb.put(right, cy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: usize,
        col: usize,
        value: u32,
    ) {
        let x = origin_x + (col as u16) * self.cell_w;
        let y = origin_y + (row as u16) * self.cell_h;
        let style = tile_style(value);

        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let label_y = y + self.cell_h / 2;
        if value == 0 {
            fb.put_str_centered(x, label_y, self.cell_w, "·", style);
        } else {
            fb.put_str_centered(x, label_y, self.cell_w, &value.to_string(), style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        scores: &Leaderboard,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let best = scores
            .best()
            .map(|record| record.score)
            .unwrap_or(0)
            .max(state.score());

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x + 6, y, &state.score().to_string(), value);
        fb.put_str(x, y + 1, "BEST", label);
        fb.put_str(x + 6, y + 1, &best.to_string(), value);

        fb.put_str(x, y + 3, "TOP SCORES", label);
        if scores.records().is_empty() {
            fb.put_str(x, y + 4, "(none yet)", label);
        }
        for (rank, record) in scores.records().iter().enumerate() {
            let line = format!("{}. {:<10} {}", rank + 1, record.name, record.score);
            fb.put_str(x, y + 4 + rank as u16, &line, value);
        }

        fb.put_str(x, y + 8, "arrows/wasd shift", label);
        fb.put_str(x, y + 9, "r restart  q quit", label);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let pad_w = (text.chars().count() as u16) + 4;
        let ox = x + frame_w.saturating_sub(pad_w) / 2;
        let oy = y + frame_h / 2;
        fb.fill_rect(ox, oy, pad_w, 1, ' ', style);
        fb.put_str_centered(ox, oy, pad_w, text, style);
    }
}

/// Per-value tile colors (classic 2048 palette).
fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        0 => (Rgb::new(55, 65, 81), Rgb::new(95, 105, 121)),
        2 => (Rgb::new(238, 228, 218), Rgb::new(119, 110, 101)),
        4 => (Rgb::new(237, 224, 200), Rgb::new(119, 110, 101)),
        8 => (Rgb::new(242, 177, 121), Rgb::new(249, 246, 242)),
        16 => (Rgb::new(245, 149, 99), Rgb::new(249, 246, 242)),
        32 => (Rgb::new(246, 124, 95), Rgb::new(249, 246, 242)),
        64 => (Rgb::new(246, 94, 59), Rgb::new(249, 246, 242)),
        128 => (Rgb::new(237, 207, 114), Rgb::new(249, 246, 242)),
        256 => (Rgb::new(237, 204, 97), Rgb::new(249, 246, 242)),
        512 => (Rgb::new(237, 200, 80), Rgb::new(249, 246, 242)),
        1024 => (Rgb::new(237, 197, 63), Rgb::new(249, 246, 242)),
        2048 => (Rgb::new(237, 194, 46), Rgb::new(249, 246, 242)),
        _ => (Rgb::new(60, 58, 50), Rgb::new(249, 246, 242)),
    };
    CellStyle {
        fg,
        bg,
        bold: value >= 8,
    }
}
