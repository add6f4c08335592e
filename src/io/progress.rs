//! Progress display for single and batch tiling runs
//!
//! `ScanProgress` turns observer callbacks into a per-scan bar; the manager
//! adds a batch bar when many ring files are processed in one run.

use crate::algorithm::tiler::{GridShape, ScanObserver};
use crate::analysis::statistics::ScanStatistics;
use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::spatial::Tile;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Rings: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Per-scan progress bar driven by observer callbacks
///
/// The bar learns its length when the scan announces its grid shape and
/// replaces its label with the scan summary when the scan finishes.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Attach a fresh bar to a multi-progress display
    pub fn new(display: &MultiProgress, name: &str) -> Self {
        let bar = display.add(ProgressBar::new(0));
        bar.set_style(SCAN_STYLE.clone());
        bar.set_message(name.to_string());
        Self { bar }
    }
}

impl ScanObserver for ScanProgress {
    fn scan_started(&mut self, grid: &GridShape) {
        self.bar.set_length(grid.candidates() as u64);
        self.bar.set_position(0);
    }

    fn candidate_tested(&mut self, _tile: &Tile, _accepted: bool) {
        self.bar.inc(1);
    }

    fn scan_finished(&mut self, statistics: &ScanStatistics) {
        self.bar.finish_with_message(statistics.to_string());
    }
}

/// Coordinates progress display across a batch of ring files
pub struct ProgressManager {
    display: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager
    pub fn new() -> Self {
        Self {
            display: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Add the batch bar when processing a large file set
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.display.add(bar));
        }
    }

    /// Create the per-scan bar for one ring file
    pub fn start_scan(&self, name: &str) -> ScanProgress {
        ScanProgress::new(&self.display, name)
    }

    /// Record one completed file on the batch bar
    pub fn complete_file(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("All rings processed");
        }
        let _ = self.display.clear();
    }
}
