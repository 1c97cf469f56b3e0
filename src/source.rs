use std::fs;
use std::io;
use std::io::Read;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;

use crate::ascii;
use crate::ascii::AsciiError;
use crate::grid::Grid;
use crate::random;
use crate::random::RandomGridError;
use crate::random::RandomOptions;

/// Where the first generation comes from
#[derive(Debug, Clone, PartialEq)]
pub enum GridSource {
    File(PathBuf),
    Stdin,
    Random(RandomOptions),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Input is empty")]
    EmptyInput,

    #[error("Failed to parse starting grid: {0}")]
    Parse(#[from] AsciiError),

    #[error("Failed to create random grid: {0}")]
    Random(#[from] RandomGridError),
}

impl GridSource {
    /// Read, parse or generate the grid. With `strict`, a grid read from text must be
    /// rectangular.
    pub fn load(&self, strict: bool) -> Result<Grid, SourceError> {
        match self {
            GridSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.display().to_string(),
                    source,
                })?;

                parse_input(&text, strict)
            }
            GridSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| SourceError::Io {
                        path: "<stdin>".to_string(),
                        source,
                    })?;

                parse_input(&text, strict)
            }
            GridSource::Random(options) => {
                let mut rng = match options.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };

                debug!(
                    rows = options.rows,
                    columns = options.columns,
                    "Generating random grid"
                );

                let RandomOptions {
                    rows,
                    columns,
                    density,
                    ..
                } = *options;

                Ok(random::random_grid(rows, columns, density, &mut rng)?)
            }
        }
    }
}

/// Parse text read from a file or stdin, rejecting zero-length input.
pub fn parse_input(text: &str, strict: bool) -> Result<Grid, SourceError> {
    if text.is_empty() {
        return Err(SourceError::EmptyInput);
    }

    let grid = if strict {
        ascii::parse_rectangular(text)?
    } else {
        ascii::parse(text)?
    };

    debug!(
        rows = grid.row_count(),
        rectangular = grid.is_rectangular(),
        "Parsed starting grid"
    );

    Ok(grid)
}
