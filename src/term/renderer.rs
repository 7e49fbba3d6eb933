//! TerminalRenderer: flushes game frames to a real terminal.
//!
//! The drawing API stays small: a full redraw per frame is plenty for a
//! 4x4 board, so there is no diffing layer.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::term::game_view::{tile_color, tile_text_color, GameView, Viewport};
use crate::types::GRID_SIZE;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: header, board, footer.
    pub fn draw(&mut self, snapshot: &GameSnapshot, view: &GameView, viewport: Viewport) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(ClearType::All))?;

        let (board_x, board_y) = view.board_origin(viewport);
        let (board_w, board_h) = view.board_size();

        let header = GameView::header_line(snapshot);
        let header_x = board_x + board_w.saturating_sub(header.len() as u16) / 2;
        self.buf.queue(cursor::MoveTo(header_x, board_y - 1))?;
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.buf.queue(Print(&header))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;

        for row in 0..GRID_SIZE {
            for line in 0..view.cell_h() {
                let y = board_y + row as u16 * view.cell_h() + line;
                self.buf.queue(cursor::MoveTo(board_x, y))?;
                for col in 0..GRID_SIZE {
                    let value = snapshot.grid[row][col];
                    self.buf.queue(SetBackgroundColor(tile_color(value)))?;
                    self.buf.queue(SetForegroundColor(tile_text_color()))?;
                    self.buf.queue(SetAttribute(Attribute::Bold))?;
                    // Value on the middle row only; filler rows pad the tile.
                    if line == view.cell_h() / 2 {
                        self.buf.queue(Print(view.tile_label(value)))?;
                    } else {
                        self.buf.queue(Print(view.tile_label(0)))?;
                    }
                    self.buf.queue(SetAttribute(Attribute::Reset))?;
                }
                self.buf.queue(ResetColor)?;
            }
        }

        let footer = GameView::footer_line(snapshot);
        let footer_x = board_x + board_w.saturating_sub(footer.len() as u16) / 2;
        self.buf.queue(cursor::MoveTo(footer_x, board_y + board_h + 1))?;
        self.buf.queue(Print(footer))?;

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
