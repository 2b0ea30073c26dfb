//! Progress display while the installer runs
//!
//! Provides a spinner on stderr using indicatif. Disabled in quiet mode and
//! whenever stderr is not a terminal, so piped output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown for the package currently being upgraded
pub struct Progress {
    /// Whether progress display is enabled
    enabled: bool,
    /// Active spinner
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Enabled only when requested and stderr is a terminal
    pub fn for_terminal(requested: bool) -> Self {
        Self::new(requested && std::io::stderr().is_terminal())
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Show a spinner with a message for an indeterminate operation
    pub fn spinner(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Finish and clear the current spinner
    pub fn finish_and_clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
