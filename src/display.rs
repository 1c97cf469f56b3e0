use std::io;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use crossterm::terminal::ClearType;

use crate::ascii;
use crate::grid::Grid;

/// Everything drawn for a single generation
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    /// How long the previous iteration of the render loop took
    pub loop_time: Duration,
    pub paused: bool,
}

impl Frame<'_> {
    pub fn status(&self) -> String {
        let mut status = format!(
            "Generation: {}  Population: {}  Loop time: {:?}",
            self.generation,
            self.grid.population(),
            self.loop_time
        );

        if self.paused {
            status.push_str("  [paused]");
        }

        status
    }
}

/// Clear the whole screen
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    out.flush()
}

/// Draw `frame` from the top left corner of the terminal.
///
/// Lines are ended with cursor movements rather than `\n`, since raw mode doesn't return the
/// cursor to the first column.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;

    for line in ascii::render(frame.grid).lines() {
        queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    queue!(
        out,
        terminal::Clear(ClearType::UntilNewLine),
        style::Print(frame.status()),
        cursor::MoveToNextLine(1)
    )?;

    out.flush()
}
