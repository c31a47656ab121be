use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Step-by-step status on stderr. Does nothing unless `interactive`.
pub struct Progress {
    interactive: bool,
    spinner: Option<ProgressBar>,
    current: u8,
    total: u8,
    started: Instant,
}

impl Progress {
    pub fn new(interactive: bool, total: u8) -> Self {
        Self {
            interactive,
            spinner: None,
            current: 0,
            total,
            started: Instant::now(),
        }
    }

    pub fn step(&mut self, description: &str) {
        self.clear();
        self.current += 1;
        self.started = Instant::now();
        if !self.interactive {
            return;
        }

        let spinner = ProgressBar::new_spinner().with_style(spinner_style());
        spinner.set_message(format!("[{}/{}] {description}", self.current, self.total));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    /// Replaces the spinner with a checked line and one dimmed line per detail.
    pub fn complete_step(&mut self, description: &str, details: &[&str]) {
        self.clear();
        if !self.interactive {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {description:<40} {:>6.2}s",
            self.started.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m{detail}\x1b[0m");
        }
    }

    pub fn finish(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
