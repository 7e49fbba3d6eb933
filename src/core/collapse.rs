//! Collapse module - sliding, merging, and move legality
//!
//! One line collapser drives all four directions: rows or columns are
//! extracted as ordered 4-cell lines, reversed when the scan order is
//! descending (Right/Down), collapsed, and written back. A tile produced by
//! a merge is final for that line and that move.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::types::{Direction, GRID_SIZE};

/// Result of applying a move to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score_delta: u32,
    pub moved: bool,
}

/// Collapse one line toward its front (index 0).
///
/// Non-zero values are compacted preserving order, then scanned once front
/// to back: equal neighbors merge into their doubled value, which scores
/// and cannot merge again this pass. The result is padded with trailing
/// zeros. Returns the new line and the score gained from merges.
pub fn collapse_line(line: [u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let packed: ArrayVec<u32, GRID_SIZE> = line.into_iter().filter(|&v| v != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut gained = 0;
    let mut write = 0;
    let mut read = 0;
    while read < packed.len() {
        if read + 1 < packed.len() && packed[read] == packed[read + 1] {
            let merged = packed[read] * 2;
            out[write] = merged;
            gained += merged;
            read += 2;
        } else {
            out[write] = packed[read];
            read += 1;
        }
        write += 1;
    }
    (out, gained)
}

/// Apply a move to the whole grid.
///
/// Collapses every row (Left/Right) or column (Up/Down), summing the per
/// line score gains. `moved` compares the whole grid, so a merge with no
/// positional shift still counts as a move.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    let mut score_delta = 0;

    for index in 0..GRID_SIZE {
        let line = match direction {
            Direction::Left | Direction::Right => next.row(index),
            Direction::Up | Direction::Down => next.col(index),
        };

        let reversed = matches!(direction, Direction::Right | Direction::Down);
        let scan = if reversed { flip(line) } else { line };
        let (collapsed, gained) = collapse_line(scan);
        let result = if reversed { flip(collapsed) } else { collapsed };
        score_delta += gained;

        match direction {
            Direction::Left | Direction::Right => next.set_row(index, result),
            Direction::Up | Direction::Down => next.set_col(index, result),
        }
    }

    MoveOutcome {
        grid: next,
        score_delta,
        moved: next != *grid,
    }
}

/// Check whether the game has ended: the grid is full and no two adjacent
/// cells (horizontally or vertically) hold equal tiles. Equivalent to "no
/// direction produces a move".
pub fn is_terminal(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = grid.get(row, col);
            if col + 1 < GRID_SIZE && grid.get(row, col + 1) == value {
                return false;
            }
            if row + 1 < GRID_SIZE && grid.get(row + 1, col) == value {
                return false;
            }
        }
    }
    true
}

fn flip(mut line: [u32; GRID_SIZE]) -> [u32; GRID_SIZE] {
    line.reverse();
    line
}
