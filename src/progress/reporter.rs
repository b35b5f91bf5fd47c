//! Progress reporter implementation
//!
//! Uses an indicatif spinner on stderr to show which clip is being hashed or
//! copied. Prompts are written to stdout, so callers wrap them in
//! [`ProgressReporter::suspend`] to keep the spinner from drawing over them.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Status spinner for ingest
pub struct ProgressReporter {
    status: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let status = ProgressBar::new_spinner();
        status.set_draw_target(ProgressDrawTarget::stderr());
        status.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
                .expect("Invalid template"),
        );
        status.enable_steady_tick(Duration::from_millis(120));

        Self { status }
    }

    /// Create a disabled progress reporter (for quiet mode)
    pub fn disabled() -> Self {
        Self {
            status: ProgressBar::hidden(),
        }
    }

    /// Set current status message
    pub fn set_status(&self, msg: &str) {
        self.status.set_message(msg.to_string());
    }

    /// Set current file being worked on
    pub fn set_current_file(&self, verb: &str, path: &str) {
        self.status
            .set_message(format!("{} {}", verb, truncate_path(path, 60)));
    }

    /// Hide the spinner while `f` talks to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.status.suspend(f)
    }

    /// Finish progress with success message
    pub fn finish_success(&self, message: &str) {
        self.status.finish_with_message(format!("✓ {}", message));
    }

    /// Finish progress with error message
    pub fn finish_error(&self, message: &str) {
        self.status.abandon_with_message(format!("✗ {}", message));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the last `max - 3` characters of a long path behind `...`
fn truncate_path(path: &str, max: usize) -> String {
    let len = path.chars().count();
    if len <= max {
        return path.to_string();
    }
    let tail: String = path.chars().skip(len - (max - 3)).collect();
    format!("...{}", tail)
}
