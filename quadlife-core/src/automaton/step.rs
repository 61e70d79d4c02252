//! Quadlife stepping: Conway's B3/S23 with four colors.
//!
//! - Survival: a live cell with 2 or 3 live neighbors keeps its exact count.
//! - Death: a live cell with fewer than 2 or more than 3 live neighbors drops to 0.
//! - Birth: a dead cell with exactly 3 live neighbors takes a count derived from their buckets
//!   (see [`resolve_spawn_count`]).
//!
//! The neighborhood is Moore (8 cells), clipped at the grid edge with no wraparound. Columns
//! may be ragged, so each neighbor lookup is bounded by that column's own length.

use crate::{
    calendar::grid::{Cell, Grid},
    foundation::core::Bucket,
};

/// Count given to a spawned cell when neither a pair nor a missing bucket decides.
pub const FALLBACK_SPAWN_COUNT: u32 = 15;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Live neighbors of one cell, tallied by bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    tally: [u8; 5],
}

impl Neighborhood {
    /// Survey the Moore neighborhood of `(col, row)`. The cell itself is not counted.
    pub fn survey(grid: &Grid, col: usize, row: usize) -> Self {
        let mut n = Self::default();
        for (dc, dr) in OFFSETS {
            let c = col as isize + dc;
            let r = row as isize + dr;
            if let Some(cell) = grid.get_signed(c, r)
                && cell.is_alive()
            {
                n.push(cell.bucket());
            }
        }
        n
    }

    /// Build a neighborhood from explicit live-neighbor buckets.
    pub fn from_buckets(buckets: impl IntoIterator<Item = Bucket>) -> Self {
        let mut n = Self::default();
        for b in buckets {
            n.push(b);
        }
        n
    }

    fn push(&mut self, bucket: Bucket) {
        if bucket.is_alive() {
            self.tally[bucket.index()] += 1;
        }
    }

    /// Number of live neighbors.
    pub fn alive(&self) -> u8 {
        self.tally.iter().sum()
    }

    /// Live neighbors in `bucket`.
    pub fn count_of(&self, bucket: Bucket) -> u8 {
        self.tally[bucket.index()]
    }
}

/// Count for a cell born from `neighbors`.
///
/// Order matters and is fixed:
/// 1. the lowest bucket held by exactly two neighbors gives `bucket * 5 - 1`;
/// 2. otherwise the lowest bucket held by no neighbor gives `bucket * 5 - 1`;
/// 3. otherwise [`FALLBACK_SPAWN_COUNT`].
pub fn resolve_spawn_count(neighbors: &Neighborhood) -> u32 {
    if let Some(pair) = Bucket::ALIVE.iter().find(|&&b| neighbors.count_of(b) == 2) {
        return pair.spawn_count();
    }
    if let Some(missing) = Bucket::ALIVE.iter().find(|&&b| neighbors.count_of(b) == 0) {
        return missing.spawn_count();
    }
    FALLBACK_SPAWN_COUNT
}

/// Next state of a single cell given its neighborhood.
pub fn next_cell(cell: Cell, neighbors: &Neighborhood) -> Cell {
    let alive = neighbors.alive();
    if cell.is_alive() {
        if !(2..=3).contains(&alive) {
            return cell.with_count(0);
        }
        cell
    } else if alive == 3 {
        cell.with_count(resolve_spawn_count(neighbors))
    } else {
        cell
    }
}

/// Compute the next generation. The input is left untouched; the output has the same shape
/// and dates.
pub fn step(grid: &Grid) -> Grid {
    let columns = grid
        .columns()
        .iter()
        .enumerate()
        .map(|(c, column)| {
            column
                .iter()
                .enumerate()
                .map(|(r, &cell)| next_cell(cell, &Neighborhood::survey(grid, c, r)))
                .collect()
        })
        .collect();
    Grid::from_columns(columns)
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/step.rs"]
mod tests;
