//! Uniform grid scan over a polygon's bounding box
//!
//! The engine of the crate: candidate squares of a fixed stride are swept
//! across the bounding box of a ring, each one tested for full containment
//! through the injected [`ContainmentChecker`], and the survivors collected
//! in scan order. The scan is pure and deterministic; identical inputs
//! always produce identical results.

use crate::algorithm::containment::ContainmentChecker;
use crate::algorithm::mask::CellMask;
use crate::analysis::statistics::ScanStatistics;
use crate::io::error::{Result, invalid_input};
use crate::math::rounding::decimals_for_stride;
use crate::spatial::bounds::BoundingBox;
use crate::spatial::ring::Ring;
use crate::spatial::tiles::Tile;

/// Candidate grid geometry for one scan
///
/// Precomputed so callers (progress displays, exhaustiveness checks) know
/// the candidate total before the scan runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GridShape {
    /// Abscissa of the first candidate's lower-left corner
    pub origin_x: f64,
    /// Ordinate of the first candidate's lower-left corner
    pub origin_y: f64,
    /// Candidate side length
    pub stride: f64,
    /// Number of candidate columns
    pub columns: usize,
    /// Number of candidate rows
    pub rows: usize,
}

impl GridShape {
    /// Derive the candidate grid for a bounding box and stride
    ///
    /// The origin sits half a stride inside the box, which keeps the first
    /// row and column of candidates off the irregular boundary fringe, and
    /// a candidate is admitted only while its far edge stays strictly below
    /// the box maximum. Both choices reproduce the behavior of the original
    /// tool; the anchor is a heuristic, not an optimal offset. Counts use
    /// the same repeated-addition accumulation as the scan itself, so shape
    /// and scan cannot disagree under floating point.
    pub fn over(bounds: &BoundingBox, stride: f64) -> Self {
        let origin_x = bounds.min_x + stride / 2.0;
        let origin_y = bounds.min_y + stride / 2.0;
        Self {
            origin_x,
            origin_y,
            stride,
            columns: Self::steps(origin_x, stride, bounds.max_x),
            rows: Self::steps(origin_y, stride, bounds.max_y),
        }
    }

    /// Total candidates the scan will examine
    pub const fn candidates(&self) -> usize {
        self.columns * self.rows
    }

    fn steps(origin: f64, stride: f64, max: f64) -> usize {
        let mut count = 0;
        let mut position = origin;
        while position + stride < max {
            count += 1;
            position += stride;
        }
        count
    }
}

/// Hook into scan progress
///
/// All methods default to no-ops. The scan itself never logs or prints;
/// observability is the caller's choice.
pub trait ScanObserver {
    /// Called once before any candidate is tested
    fn scan_started(&mut self, _grid: &GridShape) {}

    /// Called for every candidate in scan order
    fn candidate_tested(&mut self, _tile: &Tile, _accepted: bool) {}

    /// Called once after the scan completes successfully
    fn scan_finished(&mut self, _statistics: &ScanStatistics) {}
}

/// Outcome of one tiling scan
///
/// Accepted tiles appear in discovery order: column-major, ascending x then
/// ascending y. The ring is carried unchanged, and the candidate count
/// covers accepted and rejected candidates alike. Every field is read-only
/// once the scan returns.
#[derive(Debug, Clone, PartialEq)]
pub struct TilingResult {
    ring: Ring,
    stride: f64,
    tiles: Vec<Tile>,
    candidates: usize,
    grid: GridShape,
    mask: CellMask,
}

impl TilingResult {
    /// The polygon ring, as supplied to the scan
    pub const fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Side length used for every candidate
    pub const fn stride(&self) -> f64 {
        self.stride
    }

    /// Accepted tiles in scan order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Total candidates examined, accepted and rejected alike
    pub const fn candidates(&self) -> usize {
        self.candidates
    }

    /// Number of accepted tiles
    pub fn accepted(&self) -> usize {
        self.tiles.len()
    }

    /// Number of rejected candidates
    pub fn rejected(&self) -> usize {
        self.candidates.saturating_sub(self.tiles.len())
    }

    /// The candidate grid the scan swept
    pub const fn grid(&self) -> &GridShape {
        &self.grid
    }

    /// Acceptance bitmap addressed by (column, row)
    pub const fn mask(&self) -> &CellMask {
        &self.mask
    }

    /// Test whether the candidate at a grid cell was accepted
    pub fn is_accepted(&self, column: usize, row: usize) -> bool {
        self.mask.get(column, row)
    }

    /// Total area of accepted tiles
    pub fn covered_area(&self) -> f64 {
        self.tiles.len() as f64 * self.stride * self.stride
    }

    /// Summarize the scan
    pub fn statistics(&self) -> ScanStatistics {
        ScanStatistics::from_result(self)
    }

    /// Quantize tile coordinates to the stride-derived precision
    ///
    /// Rounding happens strictly after acceptance: it never re-runs
    /// containment and never changes which tiles are present, only their
    /// coordinate values. Applying it twice at the same precision is a
    /// no-op.
    #[must_use]
    pub fn rounded(&self) -> Self {
        self.rounded_to(decimals_for_stride(self.stride))
    }

    /// Quantize tile coordinates to an explicit decimal precision
    #[must_use]
    pub fn rounded_to(&self, decimals: u32) -> Self {
        Self {
            ring: self.ring.clone(),
            stride: self.stride,
            tiles: self
                .tiles
                .iter()
                .map(|tile| tile.rounded_to(decimals))
                .collect(),
            candidates: self.candidates,
            grid: self.grid.clone(),
            mask: self.mask.clone(),
        }
    }
}

/// Grid scan engine parameterized by a containment capability
#[derive(Debug, Clone)]
pub struct GridTiler<C> {
    checker: C,
}

impl<C: ContainmentChecker> GridTiler<C> {
    /// Create a tiler around a containment checker
    pub const fn new(checker: C) -> Self {
        Self { checker }
    }

    /// Cover the interior of `ring` with squares of side `stride`
    ///
    /// Every accepted tile lies entirely within the ring; that is the one
    /// correctness guarantee of the scan. The grid is anchored once at the
    /// half-stride offset, so coverage is a best-effort approximation that
    /// improves as the stride shrinks. Candidates are mutually independent,
    /// which makes the column loop trivially shardable for callers that
    /// need parallelism; this implementation stays single-threaded and
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error before scanning when the stride is not positive and
    /// finite or vanishes below the float resolution of the box extremes,
    /// and aborts with no partial result if the containment checker fails
    /// on any candidate.
    pub fn tile(&self, ring: &Ring, stride: f64) -> Result<TilingResult> {
        self.scan(ring, stride, None)
    }

    /// Scan with an observer receiving per-candidate callbacks
    ///
    /// # Errors
    ///
    /// As [`GridTiler::tile`].
    pub fn tile_with_observer(
        &self,
        ring: &Ring,
        stride: f64,
        observer: &mut dyn ScanObserver,
    ) -> Result<TilingResult> {
        self.scan(ring, stride, Some(observer))
    }

    fn scan(
        &self,
        ring: &Ring,
        stride: f64,
        mut observer: Option<&mut dyn ScanObserver>,
    ) -> Result<TilingResult> {
        if !stride.is_finite() || stride <= 0.0 {
            return Err(invalid_input(
                "stride",
                &stride,
                &"stride must be positive and finite",
            ));
        }

        let bounds = ring.bounding_box();

        // A stride below the float resolution at the box extremes would
        // stall the accumulation below
        let x_magnitude = bounds.min_x.abs().max(bounds.max_x.abs());
        let y_magnitude = bounds.min_y.abs().max(bounds.max_y.abs());
        if x_magnitude + stride == x_magnitude || y_magnitude + stride == y_magnitude {
            return Err(invalid_input(
                "stride",
                &stride,
                &"stride is below coordinate resolution over this bounding box",
            ));
        }

        let grid = GridShape::over(&bounds, stride);
        if let Some(hook) = observer.as_deref_mut() {
            hook.scan_started(&grid);
        }

        let mut tiles = Vec::new();
        let mut mask = CellMask::new(grid.columns, grid.rows);
        let mut candidates = 0usize;

        let mut x = grid.origin_x;
        let mut column = 0usize;
        while x + stride < bounds.max_x {
            let mut y = grid.origin_y;
            let mut row = 0usize;
            while y + stride < bounds.max_y {
                let tile = Tile::at(x, y, stride);
                candidates += 1;

                let candidate_ring = tile.to_ring()?;
                let accepted = self.checker.within(&candidate_ring, ring)?;
                if accepted {
                    mask.set(column, row);
                    tiles.push(tile);
                }
                if let Some(hook) = observer.as_deref_mut() {
                    hook.candidate_tested(&tile, accepted);
                }

                y += stride;
                row += 1;
            }
            x += stride;
            column += 1;
        }

        let result = TilingResult {
            ring: ring.clone(),
            stride,
            tiles,
            candidates,
            grid,
            mask,
        };
        if let Some(hook) = observer {
            hook.scan_finished(&result.statistics());
        }
        Ok(result)
    }
}
