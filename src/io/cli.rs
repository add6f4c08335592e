//! Command-line interface for batch tiling of polygon ring files

use crate::algorithm::containment::RayCrossingChecker;
use crate::algorithm::tiler::GridTiler;
use crate::io::configuration::{DEFAULT_STRIDE, OUTPUT_SUFFIX, PREVIEW_SUFFIX};
use crate::io::error::{Result, invalid_input};
use crate::io::progress::ProgressManager;
use crate::io::{image, json};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "polytile")]
#[command(
    author,
    version,
    about = "Cover polygon interiors with uniform axis-aligned squares"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Input ring JSON file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile side length in input coordinate units
    #[arg(short, long, default_value_t = DEFAULT_STRIDE)]
    pub stride: f64,

    /// Keep exact scan coordinates instead of stride-derived rounding
    #[arg(short, long)]
    pub exact: bool,

    /// Also write a PNG preview of the candidate grid
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch tiling of ring files with progress tracking
pub struct RingProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl RingProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, ring loading, the scan
    /// itself, or output writing fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(pm) = &mut self.progress {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(pm) = &self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_ring_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_input(
                    "target",
                    &self.cli.target.display(),
                    &"Target file must be a JSON ring file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_ring_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input(
                "target",
                &self.cli.target.display(),
                &"Target must be a JSON ring file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let ring = json::load_ring(input_path)?;
        let tiler = GridTiler::new(RayCrossingChecker::new());

        let result = if let Some(pm) = &self.progress {
            let mut scan = pm.start_scan(&display_name(input_path));
            tiler.tile_with_observer(&ring, self.cli.stride, &mut scan)?
        } else {
            tiler.tile(&ring, self.cli.stride)?
        };

        let output = if self.cli.exact {
            result
        } else {
            result.rounded()
        };

        json::export_tiles(&output, &Self::output_path(input_path))?;

        if self.cli.preview {
            image::export_preview(&output, &Self::preview_path(input_path))?;
        }

        if let Some(pm) = &self.progress {
            pm.complete_file();
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn preview_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let preview_name = format!("{}{}.png", stem.to_string_lossy(), PREVIEW_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}

// Ring inputs are .json files that are not this tool's own outputs
fn is_ring_file(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let is_own_output = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    is_json && !is_own_output
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
