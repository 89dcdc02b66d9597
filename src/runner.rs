//! Tick loop: paint, sleep, advance, until a shutdown is requested.
//!
//! The shutdown flag is only read between iterations, right before the next
//! generation is computed. A frame that has started painting is always
//! finished, and once the flag is seen the grid is not touched again.

use std::io::Write;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use signal_hook::flag;
use tracing::{debug, info, trace};

use crate::core::Simulation;
use crate::term::{FrameBuffer, GridView, TerminalRenderer};
use crate::types::Theme;

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    ShuttingDown,
    Terminated,
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub generations: u64,
}

/// Raise `shutdown` on the first of `signals`; exit with status 1 on a
/// second one if the loop has not wound down by then.
pub fn register_shutdown(signals: &[c_int], shutdown: &Arc<AtomicBool>) -> Result<()> {
    for &signal in signals {
        flag::register_conditional_shutdown(signal, 1, Arc::clone(shutdown))
            .with_context(|| format!("failed to install handler for signal {signal}"))?;
        flag::register(signal, Arc::clone(shutdown))
            .with_context(|| format!("failed to install handler for signal {signal}"))?;
    }
    Ok(())
}

pub struct Runner<W: Write> {
    view: GridView,
    term: TerminalRenderer<W>,
    fb: FrameBuffer,
    tick: Duration,
    phase: Phase,
}

impl<W: Write> Runner<W> {
    pub fn new(theme: Theme, term: TerminalRenderer<W>, tick: Duration) -> Self {
        Self {
            view: GridView::new(theme),
            term,
            fb: FrameBuffer::new(0, 0),
            tick,
            phase: Phase::Initializing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn into_terminal(self) -> TerminalRenderer<W> {
        self.term
    }

    /// Run until `shutdown` is set, then restore the terminal.
    ///
    /// The terminal is restored even when painting fails; the first error
    /// wins.
    pub fn run(&mut self, sim: &mut Simulation, shutdown: &AtomicBool) -> Result<RunSummary> {
        let result = self.run_loop(sim, shutdown);

        self.set_phase(Phase::ShuttingDown);
        let restored = self.term.exit();
        self.set_phase(Phase::Terminated);

        let summary = result?;
        restored?;
        info!(
            frames = summary.frames,
            generations = summary.generations,
            "simulation stopped"
        );
        Ok(summary)
    }

    fn run_loop(&mut self, sim: &mut Simulation, shutdown: &AtomicBool) -> Result<RunSummary> {
        let (cols, rows) = (sim.grid().cols(), sim.grid().rows());
        self.fb = FrameBuffer::try_new(cols, rows).context("failed to allocate framebuffer")?;
        self.term
            .reserve_frame(cols, rows)
            .context("failed to allocate output buffer")?;

        info!(
            cols,
            rows,
            terrain = sim.is_terrain(),
            generation = sim.generation(),
            "simulation running"
        );
        self.term.enter()?;
        self.set_phase(Phase::Running);

        let start_generation = sim.generation();
        let mut frames = 0u64;

        while !shutdown.load(Ordering::SeqCst) {
            self.paint(sim)?;
            frames += 1;

            thread::sleep(self.tick);
            if shutdown.load(Ordering::SeqCst) {
                break;
            }
            sim.step();
            trace!(generation = sim.generation(), "tick");
        }

        Ok(RunSummary {
            frames,
            generations: sim.generation() - start_generation,
        })
    }

    fn paint(&mut self, sim: &Simulation) -> Result<()> {
        self.view.render_into(sim.grid(), &mut self.fb);
        self.term.draw(&self.fb)
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
    }
}
