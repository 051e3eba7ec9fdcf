//! Progress reporting for record-at-a-time processing
//!
//! Wraps an optional `indicatif` bar and emits an `info!` line every
//! `log_interval` items, so progress is visible in logs even when the bar
//! is disabled.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Progress reporter for the parse and merge passes
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    log_interval: usize,
    unit: String,
    processed: usize,
    total: Option<usize>,
}

impl ProgressReporter {
    /// Create a reporter that only logs, every `log_interval` items
    pub fn new(unit: impl Into<String>, log_interval: usize) -> Self {
        Self {
            progress_bar: None,
            log_interval: log_interval.max(1),
            unit: unit.into(),
            processed: 0,
            total: None,
        }
    }

    /// Create a reporter that never logs nor draws
    pub fn disabled() -> Self {
        Self::new("records", usize::MAX)
    }

    /// Set the expected item count used in log lines and the bar length
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        if let Some(ref pb) = self.progress_bar {
            pb.set_length(total as u64);
        }
        self
    }

    /// Show a progress bar (or a spinner when the total is unknown)
    pub fn with_progress_bar(mut self) -> Self {
        let pb = match self.total {
            Some(total) => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("#>-"),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {pos} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb
            }
        };
        pb.set_message(self.unit.clone());

        debug!("Progress bar initialized for {}", self.unit);
        self.progress_bar = Some(pb);
        self
    }

    /// Record one processed item
    pub fn increment(&mut self) {
        self.processed += 1;

        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }

        if self.processed % self.log_interval == 0 {
            let line = self.status_line();
            self.suspend(|| info!("{}", line));
        }
    }

    /// Number of items recorded so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Whether a bar is drawn
    pub fn is_enabled(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// "N unit" or "N of M unit"
    pub fn status_line(&self) -> String {
        match self.total {
            Some(total) => format!("{} of {} {}", self.processed, total, self.unit),
            None => format!("{} {}", self.processed, self.unit),
        }
    }

    /// Finish the bar with a completion message
    pub fn finish(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
        debug!("Progress finished: {}", message);
    }

    /// Finish the bar with an error message
    pub fn finish_with_error(&self, error_message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.abandon_with_message(format!("Failed: {}", error_message));
        }
    }

    /// Suspend the bar to allow clean console output
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let Some(ref pb) = self.progress_bar {
            pb.suspend(f)
        } else {
            f()
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::disabled()
    }
}
