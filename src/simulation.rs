use std::time::Duration;

use crate::display::Frame;
use crate::events::Event;
use crate::generation;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// What the render loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Exit,
    /// The pause state or the grid changed, so the frame should be drawn again
    Redraw,
    /// Nothing changed, keep waiting out the frame
    Ignore,
}

/// The current generation, and how the render loop should treat it.
pub struct Simulation {
    grid: Grid,
    rule: RuleSet,
    generation: u64,
    paused: bool,
}

impl Simulation {
    pub fn new(grid: Grid, rule: RuleSet) -> Self {
        Self {
            grid,
            rule,
            generation: 0,
            paused: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced since the start
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Replace the current grid with the next generation
    pub fn step(&mut self) {
        self.grid = generation::advance_with(&self.grid, self.rule);
        self.generation += 1;
    }

    /// Advance once, unless paused
    pub fn tick(&mut self) {
        if !self.paused {
            self.step();
        }
    }

    pub fn handle(&mut self, event: Event) -> Response {
        match event {
            Event::Exit => Response::Exit,
            Event::TogglePause => {
                self.paused = !self.paused;
                Response::Redraw
            }
            Event::Step if self.paused => {
                self.step();
                Response::Redraw
            }
            Event::Step => Response::Ignore,
        }
    }

    pub fn frame(&self, loop_time: Duration) -> Frame<'_> {
        Frame {
            grid: &self.grid,
            generation: self.generation,
            loop_time,
            paused: self.paused,
        }
    }
}
