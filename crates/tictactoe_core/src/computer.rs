//! Random move selection for the computer side.

use crate::types::{Board, Cell};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Returns the 1-based positions of all currently empty cells.
#[instrument]
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index + 1)
        .collect()
}

/// Picks a uniformly random empty cell, or `None` when the board is full.
///
/// Reads the board only; the caller applies the returned position. The
/// pick is guaranteed empty, so applying it cannot fail.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = empty_cells(board);
    let position = open.choose(rng).copied();
    debug!(open = open.len(), ?position, "computer selection");
    position
}
