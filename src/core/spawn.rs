//! Spawn module - inserts a new tile after a successful move

use rand::Rng;

use crate::core::grid::Grid;
use crate::types::TWO_SPAWN_PROBABILITY;

/// Insert one new tile (2 at 90%, 4 at 10%) into a uniformly chosen empty
/// cell, using the supplied random source.
///
/// Returns the coordinates of the spawned tile, or `None` on a full grid,
/// which leaves the grid untouched. A full grid here means the caller
/// skipped the terminal check; the spawner treats it as a benign no-op.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(usize, usize)> {
    let empties = grid.empty_cells();
    if empties.is_empty() {
        return None;
    }

    let (row, col) = empties[rng.gen_range(0..empties.len())];
    let value = if rng.gen_bool(TWO_SPAWN_PROBABILITY) {
        2
    } else {
        4
    };
    grid.set(row, col, value);
    Some((row, col))
}
