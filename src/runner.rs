//! The render loop.

use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use crossterm::event;
use tracing::debug;

use crate::config::Config;
use crate::display;
use crate::events;
use crate::events::Event;
use crate::simulation::Response;
use crate::simulation::Simulation;

/// Something that produces user events
pub trait EventSource {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the timeout ran out.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Key presses from the terminal, through crossterm
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }

            // Resizes, mouse events and unbound keys keep the wait going
            if let Some(event) = events::convert_event(event::read()?) {
                return Ok(Some(event));
            }
        }
    }
}

/// Render, advance and wait out the rest of the frame until the user quits or the generation
/// limit is reached. Returns the number of generations advanced.
pub fn run<W: Write, E: EventSource>(
    out: &mut W,
    sim: &mut Simulation,
    events: &mut E,
    config: &Config,
) -> io::Result<u64> {
    let mut loop_time = Duration::ZERO;

    display::clear(out)?;

    loop {
        let start = Instant::now();

        display::draw(out, &sim.frame(loop_time))?;

        if config.generations.is_some_and(|limit| sim.generation() >= limit) {
            break;
        }

        sim.tick();
        loop_time = start.elapsed();

        let deadline = start + config.delay;
        while let Some(event) =
            events.next_event(deadline.saturating_duration_since(Instant::now()))?
        {
            match sim.handle(event) {
                Response::Exit => {
                    debug!(generation = sim.generation(), "Exit requested");
                    return Ok(sim.generation());
                }
                Response::Redraw => break,
                Response::Ignore => {}
            }
        }
    }

    Ok(sim.generation())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::time::Duration;

    use super::EventSource;
    use super::run;
    use crate::ascii::parse;
    use crate::config::Config;
    use crate::events::Event;
    use crate::rule_set::B3S23;
    use crate::simulation::Simulation;

    /// Hands out a fixed list of events, then reports timeouts
    #[derive(Default)]
    struct Scripted {
        events: VecDeque<Option<Event>>,
        timeouts: Vec<Duration>,
    }

    impl Scripted {
        fn new(events: impl IntoIterator<Item = Option<Event>>) -> Self {
            Self {
                events: events.into_iter().collect(),
                timeouts: Vec::new(),
            }
        }
    }

    impl EventSource for Scripted {
        fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
            self.timeouts.push(timeout);

            Ok(self.events.pop_front().flatten())
        }
    }

    fn blinker() -> Simulation {
        let grid = parse(".....\n..*..\n..*..\n..*..\n.....").unwrap();

        Simulation::new(grid, B3S23)
    }

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(["asciilife", "-r"].iter().chain(args).copied()).unwrap()
    }

    fn run_to_string(
        sim: &mut Simulation,
        events: &mut Scripted,
        config: &Config,
    ) -> (u64, String) {
        let mut out = Vec::new();
        let generations = run(&mut out, sim, events, config).unwrap();

        (generations, String::from_utf8(out).unwrap())
    }

    #[test]
    fn zero_generations_draws_the_seed() {
        let mut sim = blinker();
        let mut events = Scripted::default();

        let (generations, out) = run_to_string(&mut sim, &mut events, &config(&["-g", "0"]));

        assert_eq!(generations, 0);
        assert!(out.contains("Generation: 0 "));
        assert!(!out.contains("Generation: 1 "));
        assert!(events.timeouts.is_empty());
    }

    #[test]
    fn stops_at_the_limit() {
        let mut sim = blinker();
        let mut events = Scripted::default();

        let (generations, out) =
            run_to_string(&mut sim, &mut events, &config(&["-g", "2", "-d", "0"]));

        assert_eq!(generations, 2);
        assert_eq!(sim.generation(), 2);
        for n in 0..=2 {
            assert!(out.contains(&format!("Generation: {n} ")), "missing generation {n}");
        }
        assert!(!out.contains("Generation: 3 "));
        assert_eq!(events.timeouts.len(), 2);
    }

    #[test]
    fn waits_for_the_rest_of_the_frame() {
        let mut sim = blinker();
        let mut events = Scripted::default();

        run_to_string(&mut sim, &mut events, &config(&["-g", "1", "-d", "1s"]));

        assert_eq!(events.timeouts.len(), 1);
        assert!(events.timeouts[0] <= Duration::from_secs(1));
        assert!(events.timeouts[0] > Duration::from_millis(900));
    }

    #[test]
    fn ignored_events_keep_waiting() {
        let mut sim = blinker();
        // stepping does nothing unless paused
        let mut events = Scripted::new([Some(Event::Step), Some(Event::Step), None]);

        let (generations, _) =
            run_to_string(&mut sim, &mut events, &config(&["-g", "1", "-d", "1s"]));

        assert_eq!(generations, 1);
        assert_eq!(events.timeouts.len(), 3);
        assert!(events.timeouts[2] <= events.timeouts[0]);
        assert!(events.timeouts[2] > Duration::from_millis(900));
    }

    #[test]
    fn exit_stops_immediately() {
        let mut sim = blinker();
        let mut events = Scripted::new([Some(Event::Exit)]);

        let (generations, out) = run_to_string(&mut sim, &mut events, &config(&["-d", "1s"]));

        assert_eq!(generations, 1);
        assert!(!out.contains("Generation: 1 "));
        assert_eq!(events.timeouts.len(), 1);
    }

    #[test]
    fn pause_redraws_without_advancing() {
        let mut sim = blinker();
        let mut events = Scripted::new([
            Some(Event::TogglePause),
            None,
            Some(Event::Step),
            Some(Event::Exit),
        ]);

        let (generations, out) = run_to_string(&mut sim, &mut events, &config(&["-d", "1s"]));

        // tick, then a paused frame, then one manual step
        assert_eq!(generations, 2);
        assert!(out.contains("Generation: 1  Population: 3  Loop time"));
        assert!(out.contains("[paused]"));
        assert!(out.contains("Generation: 2 "));
        assert_eq!(events.timeouts.len(), 4);
    }
}
