//! Scan summaries derived from tiling results

use crate::algorithm::tiler::TilingResult;
use std::fmt;

/// Aggregate figures for one completed scan
///
/// The `Display` rendering is the one-line summary a caller would log after
/// a run; the library itself never prints.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanStatistics {
    /// Candidates examined, accepted and rejected alike
    pub candidates: usize,
    /// Candidates accepted
    pub accepted: usize,
    /// Candidate columns in the scan grid
    pub columns: usize,
    /// Candidate rows in the scan grid
    pub rows: usize,
    /// Tile side length
    pub stride: f64,
    /// Area enclosed by the polygon ring
    pub ring_area: f64,
    /// Total area of accepted tiles
    pub covered_area: f64,
}

impl ScanStatistics {
    /// Summarize a tiling result
    pub fn from_result(result: &TilingResult) -> Self {
        Self {
            candidates: result.candidates(),
            accepted: result.accepted(),
            columns: result.grid().columns,
            rows: result.grid().rows,
            stride: result.stride(),
            ring_area: result.ring().area(),
            covered_area: result.covered_area(),
        }
    }

    /// Candidates rejected
    pub const fn rejected(&self) -> usize {
        self.candidates.saturating_sub(self.accepted)
    }

    /// Fraction of candidates accepted
    pub fn acceptance_ratio(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.accepted as f64 / self.candidates as f64
        }
    }

    /// Fraction of the polygon area covered by accepted tiles
    pub fn coverage_ratio(&self) -> f64 {
        if self.ring_area == 0.0 {
            0.0
        } else {
            self.covered_area / self.ring_area
        }
    }
}

impl fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} candidates accepted ({}x{} grid, stride {}), covering {:.1}% of the region",
            self.accepted,
            self.candidates,
            self.columns,
            self.rows,
            self.stride,
            self.coverage_ratio() * 100.0
        )
    }
}
