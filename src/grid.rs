use thiserror::Error;

/// A row-major grid of cells, where `true` is alive.
///
/// Rows are not required to have the same length. Any column past the end of a row is treated
/// as a dead cell, so a jagged grid is always a valid input to the generation engine. Use
/// [`Grid::ensure_rectangular`] when the caller wants to reject jagged grids instead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {got} cells, expected {exp}")]
    JaggedRow { row: usize, exp: usize, got: usize },
}

impl Grid {
    /// Create an empty grid, with no rows.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Create a `rows` by `columns` grid of dead cells
    pub fn dead(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![false; columns]; rows],
        }
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or `None` if there is no such row.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Whether the cell at `(row, col)` is alive. Coordinates outside the grid, including
    /// negative ones and columns past the end of that particular row, are dead.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };

        self.get(row, col).unwrap_or(false)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell).count()
    }

    pub fn is_rectangular(&self) -> bool {
        self.ensure_rectangular().is_ok()
    }

    /// Checks that every row is as long as the first one.
    pub fn ensure_rectangular(&self) -> Result<(), GridError> {
        let Some(first) = self.rows.first() else {
            return Ok(());
        };

        let exp = first.len();

        for (row, cells) in self.rows.iter().enumerate().skip(1) {
            if cells.len() != exp {
                return Err(GridError::JaggedRow {
                    row,
                    exp,
                    got: cells.len(),
                });
            }
        }

        Ok(())
    }
}

impl From<Vec<Vec<bool>>> for Grid {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self::from_rows(rows)
    }
}

impl FromIterator<Vec<bool>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<bool>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
