pub mod ascii;
pub mod config;
pub mod display;
pub mod events;
pub mod generation;
pub mod grid;
pub mod random;
pub mod rule_set;
pub mod runner;
pub mod simulation;
pub mod source;

pub use ascii::parse;
pub use ascii::render;
pub use generation::advance;
pub use grid::Grid;
