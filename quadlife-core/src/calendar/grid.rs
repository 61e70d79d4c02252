use chrono::NaiveDate;

use crate::{calendar::model::ContributionCalendar, foundation::core::Bucket};

/// One day on the grid for one generation.
///
/// Cells are plain `Copy` values; every generation owns its own cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    /// Current count (observed, or produced by the automaton).
    pub contribution_count: u32,
    /// Calendar day this cell stands for. Never changes across generations.
    pub date: NaiveDate,
}

impl Cell {
    pub fn new(contribution_count: u32, date: NaiveDate) -> Self {
        Self {
            contribution_count,
            date,
        }
    }

    pub fn is_alive(self) -> bool {
        self.contribution_count > 0
    }

    pub fn bucket(self) -> Bucket {
        Bucket::of(self.contribution_count)
    }

    /// Same day, different count.
    pub fn with_count(self, contribution_count: u32) -> Self {
        Self {
            contribution_count,
            date: self.date,
        }
    }
}

/// How [`Grid::from_calendar`] treats upstream counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridMode {
    /// Keep the observed counts.
    #[default]
    Observed,
    /// Zero every count, keep dates.
    Reset,
}

/// Column-major grid: one column per week, one cell per day.
///
/// Columns may have different lengths; a position exists only if its column does and the row
/// is within that column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    columns: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from the upstream calendar, one column per week in source order.
    pub fn from_calendar(calendar: &ContributionCalendar, mode: GridMode) -> Self {
        let columns = calendar
            .weeks
            .iter()
            .map(|week| {
                week.contribution_days
                    .iter()
                    .map(|day| {
                        let count = match mode {
                            GridMode::Observed => day.contribution_count,
                            GridMode::Reset => 0,
                        };
                        Cell::new(count, day.date)
                    })
                    .collect()
            })
            .collect();
        Self { columns }
    }

    pub fn from_columns(columns: Vec<Vec<Cell>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        self.columns.get(col)?.get(row)
    }

    /// Like [`Grid::get`] with signed coordinates; anything outside the grid is `None`.
    pub fn get_signed(&self, col: isize, row: isize) -> Option<&Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }

    /// All cells in column-major order with their `(col, row)` position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(c, column)| column.iter().enumerate().map(move |(r, cell)| (c, r, cell)))
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.iter().filter(|(_, _, cell)| cell.is_alive()).count()
    }

    /// Whether both grids have the same column count and column lengths.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.len() == b.len())
    }

    /// Same shape and dates with every count zeroed.
    pub fn reset(&self) -> Grid {
        Grid {
            columns: self
                .columns
                .iter()
                .map(|column| column.iter().map(|cell| cell.with_count(0)).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/grid.rs"]
mod tests;
