//! Loading screen boot log script.
//!
//! # Responsibility
//! - Produce the short fake "system boot" log shown before the landing page.
//!
//! # Invariants
//! - Exactly [`BOOT_LOG_LINES`] lines are emitted, one per tick.
//! - After the last line the script yields one `Reveal`, then `Done` forever.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Interval between emitted log lines.
pub const BOOT_TICK_INTERVAL: Duration = Duration::from_millis(500);
/// Pause after the last line before content is revealed.
pub const BOOT_REVEAL_DELAY: Duration = Duration::from_millis(1000);
pub const BOOT_LOG_LINES: usize = 5;

const BOOT_LOG_POOL: [&str; 10] = [
    "initializing ai modules...",
    "loading neural networks...",
    "connecting to solana network...",
    "optimizing smart contracts...",
    "calibrating ai parameters...",
    "syncing blockchain data...",
    "loading model weights...",
    "establishing secure connection...",
    "validating network status...",
    "processing training data...",
];

/// Returns the pool the script draws lines from.
pub fn boot_log_pool() -> &'static [&'static str] {
    &BOOT_LOG_POOL
}

/// One step of the boot script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    Log(&'static str),
    /// Show the page after waiting `after`.
    Reveal { after: Duration },
    Done,
}

/// Tick-driven boot log state machine.
pub struct BootScript<R: Rng = StdRng> {
    rng: R,
    lines: Vec<&'static str>,
    revealed: bool,
}

impl BootScript<StdRng> {
    /// Script with an entropy-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic script for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BootScript<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            lines: Vec::with_capacity(BOOT_LOG_LINES),
            revealed: false,
        }
    }

    /// Advances the script by one timer tick.
    pub fn tick(&mut self) -> BootStep {
        if self.lines.len() < BOOT_LOG_LINES {
            let line = BOOT_LOG_POOL[self.rng.gen_range(0..BOOT_LOG_POOL.len())];
            self.lines.push(line);
            trace!("event=boot_tick module=boot index={} line={line}", self.lines.len());
            return BootStep::Log(line);
        }

        if !self.revealed {
            self.revealed = true;
            return BootStep::Reveal {
                after: BOOT_REVEAL_DELAY,
            };
        }

        BootStep::Done
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    pub fn is_finished(&self) -> bool {
        self.revealed
    }

    /// Runs the script to completion and returns every line.
    pub fn run_to_end(mut self) -> Vec<&'static str> {
        while self.tick() != BootStep::Done {}
        self.lines
    }
}
