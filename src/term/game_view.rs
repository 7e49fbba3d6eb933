//! GameView: maps a `core::GameSnapshot` onto terminal geometry and colors.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::GameSnapshot;
use crate::types::GRID_SIZE;

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

/// Pure layout and styling for the 4x4 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles roughly square under typical glyph aspect ratio
        // and fits five-digit values.
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

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Board size in terminal columns/rows.
    pub fn board_size(&self) -> (u16, u16) {
        (
            self.cell_w * GRID_SIZE as u16,
            self.cell_h * GRID_SIZE as u16,
        )
    }

    /// Top-left corner that centers the board in the viewport.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (board_w, board_h) = self.board_size();
        let x = viewport.width.saturating_sub(board_w) / 2;
        // Leave one row above for the header even on tight terminals.
        let y = (viewport.height.saturating_sub(board_h) / 2).max(1);
        (x, y)
    }

    /// Tile label centered within a cell-width column span.
    ///
    /// Empty cells render as spaces; the value sits on the cell's middle row.
    pub fn tile_label(&self, value: u32) -> String {
        let width = self.cell_w as usize;
        if value == 0 {
            return " ".repeat(width);
        }
        let text = value.to_string();
        let pad = width.saturating_sub(text.len());
        let left = pad / 2;
        let right = pad - left;
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }

    /// Header line: title and current score.
    pub fn header_line(snapshot: &GameSnapshot) -> String {
        format!("2048   score: {}", snapshot.score)
    }

    /// Footer line: game-over banner or key hints.
    pub fn footer_line(snapshot: &GameSnapshot) -> &'static str {
        if snapshot.game_over {
            "Game over! Press r to play again"
        } else {
            "arrows/hjkl/wasd move - r restart - q quit"
        }
    }
}

/// Background color for a tile value.
pub fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::Rgb {
            r: 0xCB,
            g: 0xD5,
            b: 0xE0,
        },
        4 => Color::Rgb {
            r: 0xA0,
            g: 0xAE,
            b: 0xC0,
        },
        8 => Color::Rgb {
            r: 0xF6,
            g: 0xAD,
            b: 0x55,
        },
        16 => Color::Rgb {
            r: 0xED,
            g: 0x89,
            b: 0x36,
        },
        32 => Color::Rgb {
            r: 0xDD,
            g: 0x6B,
            b: 0x20,
        },
        64 => Color::Rgb {
            r: 0xFC,
            g: 0x81,
            b: 0x81,
        },
        128 => Color::Rgb {
            r: 0xF5,
            g: 0x65,
            b: 0x65,
        },
        256 => Color::Rgb {
            r: 0xE5,
            g: 0x3E,
            b: 0x3E,
        },
        512 => Color::Rgb {
            r: 0xF6,
            g: 0xE0,
            b: 0x5E,
        },
        1024 => Color::Rgb {
            r: 0xEC,
            g: 0xC9,
            b: 0x4B,
        },
        2048 => Color::Rgb {
            r: 0xD6,
            g: 0x9E,
            b: 0x2E,
        },
        // Empty cells and anything past 2048.
        _ => Color::Rgb {
            r: 0xED,
            g: 0xF2,
            b: 0xF7,
        },
    }
}

/// Foreground color for tile labels.
pub fn tile_text_color() -> Color {
    Color::White
}
