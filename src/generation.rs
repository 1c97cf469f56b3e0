use crate::grid::Grid;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Offsets of the 8 cells surrounding a cell
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the next generation of `grid` under the rules of Conway's Game of Life.
pub fn advance(grid: &Grid) -> Grid {
    advance_with(grid, B3S23)
}

/// Compute the next generation of `grid` under `rule`.
///
/// The result has exactly the shape of `grid`, including the length of every row. Cells past
/// the edges of the grid are dead: the grid does not wrap around.
pub fn advance_with(grid: &Grid, rule: RuleSet) -> Grid {
    grid.rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &alive)| rule.next(alive, live_neighbors(grid, row, col)))
                .collect::<Vec<bool>>()
        })
        .collect()
}

/// Count the live cells around `(row, col)`.
///
/// The bounds of every neighboring row are checked against that row's own length, so a short
/// row next to a long one only contributes the cells it actually has.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);

    NEIGHBORHOOD
        .iter()
        .filter(|&&(dr, dc)| grid.is_alive(row + dr, col + dc))
        .count() as u8
}

/// Successive generations of a grid, starting with the grid itself.
///
/// The iterator never ends; use [`Iterator::take`] to bound it.
pub struct Generations {
    next: Grid,
    rule: RuleSet,
}

impl Generations {
    pub fn new(seed: Grid) -> Self {
        Self::with_rule(seed, B3S23)
    }

    pub fn with_rule(seed: Grid, rule: RuleSet) -> Self {
        Self { next: seed, rule }
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let following = advance_with(&self.next, self.rule);

        Some(std::mem::replace(&mut self.next, following))
    }
}
