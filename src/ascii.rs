use thiserror::Error;

use crate::grid::Grid;
use crate::grid::GridError;

pub const ALIVE: char = '*';
pub const DEAD: char = '.';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsciiError {
    #[error("Invalid character {got:?} at line {line}, column {column}")]
    InvalidCharacter {
        got: char,
        line: usize,
        column: usize,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse a grid drawn with `*` for live cells and `.` for dead cells, one row per line.
///
/// Lines are split on `\n` only, so a `\r` is rejected like any other unknown character. Text
/// ending in `\n` yields a trailing empty row. Rows may have different lengths. Empty text
/// is a grid with no rows.
pub fn parse(text: &str) -> Result<Grid, AsciiError> {
    if text.is_empty() {
        return Ok(Grid::new());
    }

    let mut rows = Vec::new();

    for (line, cells) in text.split('\n').enumerate() {
        let mut row = Vec::with_capacity(cells.len());

        for (column, c) in cells.chars().enumerate() {
            match c {
                ALIVE => row.push(true),
                DEAD => row.push(false),
                got => {
                    return Err(AsciiError::InvalidCharacter { got, line, column });
                }
            }
        }

        rows.push(row);
    }

    Ok(Grid::from_rows(rows))
}

/// Like [`parse`], but every row must be as long as the first.
///
/// A single trailing `\n` ends the last row instead of starting an empty one, so ordinary
/// newline-terminated files are accepted.
pub fn parse_rectangular(text: &str) -> Result<Grid, AsciiError> {
    let text = text.strip_suffix('\n').unwrap_or(text);

    let grid = parse(text)?;
    grid.ensure_rectangular()?;

    Ok(grid)
}

/// Draw the grid, terminating every row with `\n`. An empty grid renders to the empty string.
pub fn render(grid: &Grid) -> String {
    let len = grid.rows().iter().map(|row| row.len() + 1).sum();
    let mut out = String::with_capacity(len);

    for row in grid.rows() {
        for &cell in row {
            out.push(if cell { ALIVE } else { DEAD });
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::AsciiError;
    use super::parse;
    use super::parse_rectangular;
    use super::render;
    use crate::grid::Grid;
    use crate::grid::GridError;

    fn blinker() -> Grid {
        let f = false;
        let t = true;

        Grid::from_rows(vec![
            vec![f, f, f, f, f, f, f, f],
            vec![f, f, f, f, t, f, f, f],
            vec![f, f, f, t, t, f, f, f],
            vec![f, f, f, f, f, f, f, f],
        ])
    }

    #[test]
    fn parse_grid() {
        let text = "........\n....*...\n...**...\n........";

        assert_eq!(parse(text), Ok(blinker()));
    }

    #[test]
    fn parse_invalid_character() {
        let err = parse("invalid").unwrap_err();

        assert_eq!(
            err,
            AsciiError::InvalidCharacter {
                got: 'i',
                line: 0,
                column: 0
            }
        );
    }

    #[test]
    fn parse_reports_position() {
        let err = parse("...\n.*x\n").unwrap_err();

        assert_eq!(
            err,
            AsciiError::InvalidCharacter {
                got: 'x',
                line: 1,
                column: 2
            }
        );
    }

    #[test]
    fn parse_rejects_carriage_return() {
        let err = parse("**\r\n**").unwrap_err();

        assert!(matches!(err, AsciiError::InvalidCharacter { got: '\r', .. }));
    }

    #[test]
    fn parse_rejects_multibyte() {
        let err = parse("*é*").unwrap_err();

        assert_eq!(
            err,
            AsciiError::InvalidCharacter {
                got: 'é',
                line: 0,
                column: 1
            }
        );
    }

    #[test]
    fn parse_trailing_newline_yields_empty_row() {
        let grid = parse("*.\n.*\n").unwrap();

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.row_len(2), Some(0));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse(""), Ok(Grid::new()));
    }

    #[test]
    fn parse_jagged() {
        let grid = parse("***\n*\n..").unwrap();

        assert_eq!(grid.row_len(0), Some(3));
        assert_eq!(grid.row_len(1), Some(1));
        assert_eq!(grid.row_len(2), Some(2));
    }

    #[test]
    fn parse_rectangular_rejects_jagged() {
        let err = parse_rectangular("***\n*").unwrap_err();

        assert_eq!(
            err,
            AsciiError::Grid(GridError::JaggedRow {
                row: 1,
                exp: 3,
                got: 1
            })
        );

        assert!(parse_rectangular("**\n..").is_ok());
    }

    #[test]
    fn parse_rectangular_accepts_final_newline() {
        let grid = parse_rectangular("**\n**\n").unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid, parse("**\n**").unwrap());

        // only one newline is dropped
        assert!(parse_rectangular("**\n**\n\n").is_err());
    }

    #[test]
    fn render_grid() {
        let exp = "........\n....*...\n...**...\n........\n";

        assert_eq!(render(&blinker()), exp);
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(&Grid::new()), "");
    }
}
