//! Axis-aligned bounding boxes over point sets

use crate::io::error::{Result, invalid_input};
use crate::spatial::point::Point;

/// Smallest axis-aligned rectangle covering a set of points
///
/// Degenerate boxes (zero width or height) are valid values; a grid scan
/// over one simply produces no candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl BoundingBox {
    /// Extract the bounding box of a point set
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty or contains a non-finite
    /// coordinate; the box is never silently degenerate.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(invalid_input(
                "points",
                &"[]",
                &"cannot take the bounding box of an empty point set",
            ));
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for point in points {
            if !point.is_finite() {
                return Err(invalid_input(
                    "points",
                    point,
                    &"coordinates must be finite",
                ));
            }
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Test whether a point lies inside or on the box edges
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
