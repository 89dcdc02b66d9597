//! Terminal Game of Life runner (default binary).
//!
//! Prints the seed, clears the screen and repaints the grid every tick until
//! SIGINT or SIGTERM arrives; a second signal exits at once. Rendering uses
//! crossterm commands written into a framebuffer-driven renderer.

use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{info, level_filters::LevelFilter, warn};

use tui_life::config::{Config, ConfigError, USAGE};
use tui_life::core::Simulation;
use tui_life::runner::{register_shutdown, Runner};
use tui_life::term::TerminalRenderer;
use tui_life::types::TICK_MS;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            if err != ConfigError::HelpRequested {
                eprintln!("{err}");
            }
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level());
    for arg in &config.ignored {
        warn!(arg = arg.as_str(), "ignoring argument");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<()> {
    println!("\n{}", config.seed);

    let shutdown = Arc::new(AtomicBool::new(false));
    register_shutdown(&[SIGINT, SIGTERM], &shutdown)?;

    info!(
        seed = config.seed,
        rows = config.rows,
        cols = config.cols,
        theme = config.theme().as_str(),
        "starting simulation"
    );
    let mut sim = Simulation::new(config.cols, config.rows, config.seed, config.terrain)
        .context("failed to initialize grid")?;

    let mut runner = Runner::new(
        config.theme(),
        TerminalRenderer::new(),
        Duration::from_millis(TICK_MS),
    );
    runner.run(&mut sim, &shutdown)?;

    Ok(())
}
