//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The drawing API is intentionally small: the game renders one full frame
//! per keypress, so there is no diffing, only a styled full redraw with
//! escape codes emitted on style changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Enter raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.stdout, EnterAlternateScreen, Hide, DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Callers run this on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let mut active: Option<CellStyle> = None;

        for y in 0..fb.height() {
            queue!(self.stdout, MoveTo(0, y))?;
            for x in 0..fb.width() {
                let style = fb.style_at(x, y).unwrap_or_default();
                if active != Some(style) {
                    self.switch_style(style)?;
                    active = Some(style);
                }
                queue!(self.stdout, Print(fb.char_at(x, y).unwrap_or(' ')))?;
            }
        }

        queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn switch_style(&mut self, style: CellStyle) -> Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(color(style.fg)),
            SetBackgroundColor(color(style.bg))
        )?;
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
