//! Startup progress bar.
//!
//! Four 300 ms pauses, each followed by a progress update
//! (25%, 50%, 75%, 100%), then a short fade before the line is cleared.
//! Purely cosmetic: nothing waits on it and it cannot fail the command.

use crate::config::Config;
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

pub const STEP_DELAY: Duration = Duration::from_millis(300);
pub const FADE_DELAY: Duration = Duration::from_millis(350);
pub const PROGRESS_STEPS: [f64; 4] = [0.25, 0.50, 0.75, 1.00];

const TITLE: &str = "SHIFT LOG";
const BAR_WIDTH: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashStep {
    pub delay: Duration,
    pub progress: f64,
}

/// The fixed sequence of pauses and progress values.
pub fn steps() -> impl Iterator<Item = SplashStep> {
    PROGRESS_STEPS.into_iter().map(|progress| SplashStep {
        delay: STEP_DELAY,
        progress,
    })
}

/// `[#####.................]  25%`
pub fn render_bar(progress: f64) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        (progress * 100.0) as u32
    )
}

pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}  {}", TITLE, render_bar(0.0))?;
    out.flush()?;

    for step in steps() {
        thread::sleep(step.delay);
        write!(out, "\r{}  {}", TITLE, render_bar(step.progress))?;
        out.flush()?;
    }

    thread::sleep(FADE_DELAY);
    write!(out, "\r\x1b[2K")?;
    out.flush()
}

/// Show the splash on stderr when enabled and attached to a terminal.
pub fn show_if_enabled(cfg: &Config) {
    let stderr = io::stderr();
    if !cfg.show_splash || !stderr.is_terminal() {
        return;
    }

    if let Err(e) = run(&mut stderr.lock()) {
        log::debug!("splash interrupted: {e}");
    }
}
