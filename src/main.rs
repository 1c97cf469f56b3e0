use std::io;

use anyhow::Context;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asciilife::config::Config;
use asciilife::runner;
use asciilife::runner::TerminalEvents;
use asciilife::simulation::Simulation;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().unwrap_or_else(|e| e.exit());

    let Some(source) = &config.source else {
        asciilife::config::command().print_help()?;
        return Ok(());
    };

    let grid = source
        .load(config.strict)
        .context("Error creating grid")?;

    info!(
        rows = grid.row_count(),
        population = grid.population(),
        rule = %config.rule,
        "Starting simulation"
    );

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;

    let mut sim = Simulation::new(grid, config.rule);
    let res = runner::run(&mut io::stdout(), &mut sim, &mut TerminalEvents, &config);

    // Restore the terminal even if the loop failed
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;

    let generations = res.context("Error while running simulation")?;
    info!(generations, "Simulation finished");

    Ok(())
}
