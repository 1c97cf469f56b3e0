use rand::Rng;
use thiserror::Error;

use crate::grid::Grid;

/// Probability of a cell starting out alive in a random grid
pub const DEFAULT_DENSITY: f64 = 0.7;

#[derive(Debug, Error, PartialEq)]
pub enum RandomGridError {
    #[error("Need at least one row")]
    NoRows,

    #[error("Need at least one column")]
    NoColumns,

    #[error("Density must be between 0 and 1, got {got}")]
    InvalidDensity { got: f64 },
}

/// Dimensions and density of a random grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomOptions {
    pub rows: usize,
    pub columns: usize,
    pub density: f64,
    pub seed: Option<u64>,
}

/// Create a `rows` by `columns` grid where each cell is independently alive with probability
/// `density`.
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid, RandomGridError> {
    if rows == 0 {
        return Err(RandomGridError::NoRows);
    }

    if columns == 0 {
        return Err(RandomGridError::NoColumns);
    }

    if !(0.0..=1.0).contains(&density) {
        return Err(RandomGridError::InvalidDensity { got: density });
    }

    let grid: Grid = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| rng.gen_bool(density))
                .collect::<Vec<bool>>()
        })
        .collect();

    Ok(grid)
}
