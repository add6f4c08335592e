//! Validated polygon rings
//!
//! A `Ring` is the ordered, closed boundary of a simple polygon. All
//! validity rules are enforced when the ring is built, so downstream code
//! never has to re-check them: the scan and the containment checker both
//! assume a well-formed boundary.

use crate::io::error::{Result, invalid_input};
use crate::math::predicates::segments_intersect;
use crate::spatial::bounds::BoundingBox;
use crate::spatial::point::Point;

/// Ordered, closed boundary of a simple polygon
///
/// Invariants held after construction:
/// - at least 3 vertices, the closing duplicate (if supplied) dropped
/// - every coordinate finite
/// - no two consecutive vertices equal
/// - no two non-adjacent edges intersect
/// - the enclosed area is non-zero
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point>,
}

impl Ring {
    /// Build a ring from an ordered vertex list
    ///
    /// Accepts both open rings and rings whose last vertex repeats the
    /// first; the closing duplicate is dropped before validation.
    ///
    /// # Errors
    ///
    /// Returns an error when the normalized ring has fewer than 3 vertices,
    /// contains a non-finite coordinate, repeats a vertex consecutively,
    /// self-intersects, or encloses no area.
    pub fn new(mut vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() >= 2 && vertices.first() == vertices.last() {
            vertices.truncate(vertices.len() - 1);
        }

        if vertices.len() < 3 {
            return Err(invalid_input(
                "ring",
                &format!("{} vertices", vertices.len()),
                &"a ring needs at least 3 distinct vertices",
            ));
        }

        for vertex in &vertices {
            if !vertex.is_finite() {
                return Err(invalid_input(
                    "ring",
                    vertex,
                    &"coordinates must be finite",
                ));
            }
        }

        let n = vertices.len();
        for i in 0..n {
            let current = vertices.get(i).copied().unwrap_or(Point::new(0.0, 0.0));
            let next = vertices
                .get((i + 1) % n)
                .copied()
                .unwrap_or(Point::new(0.0, 0.0));
            if current == next {
                return Err(invalid_input(
                    "ring",
                    &current,
                    &"consecutive vertices must be distinct",
                ));
            }
        }

        let ring = Self { vertices };

        if ring.signed_area() == 0.0 {
            return Err(invalid_input(
                "ring",
                &format!("{} vertices", ring.len()),
                &"ring encloses no area",
            ));
        }

        ring.check_simplicity()?;

        Ok(ring)
    }

    /// Build the 4-vertex ring of an axis-aligned rectangle
    ///
    /// Vertices run counter-clockwise from the lower-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error when the rectangle has non-positive extent or a
    /// non-finite corner.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if !(max_x > min_x && max_y > min_y) {
            return Err(invalid_input(
                "rectangle",
                &format!("[{min_x}, {min_y}, {max_x}, {max_y}]"),
                &"rectangle extent must be positive",
            ));
        }
        Self::new(vec![
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, max_y),
        ])
    }

    /// Vertices in ring order, without the closing duplicate
    pub fn points(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A valid ring always has vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Directed edges in ring order, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        self.vertices.iter().enumerate().map(move |(i, &start)| {
            let end = self.vertices.get((i + 1) % n).copied().unwrap_or(start);
            (start, end)
        })
    }

    /// Bounding box of the ring's vertices
    pub fn bounding_box(&self) -> BoundingBox {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for vertex in &self.vertices {
            min_x = min_x.min(vertex.x);
            min_y = min_y.min(vertex.y);
            max_x = max_x.max(vertex.x);
            max_y = max_y.max(vertex.y);
        }
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Enclosed area, independent of winding direction
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    // Shoelace sum; positive for counter-clockwise winding
    fn signed_area(&self) -> f64 {
        let mut doubled = 0.0;
        for (start, end) in self.edges() {
            doubled += start.x * end.y - end.x * start.y;
        }
        doubled / 2.0
    }

    // Rejects rings whose non-adjacent edges touch or cross. Adjacent edges
    // share a vertex by construction and are skipped.
    fn check_simplicity(&self) -> Result<()> {
        let n = self.vertices.len();
        let edges: Vec<(Point, Point)> = self.edges().collect();
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    continue;
                }
                let first = edges.get(i).copied();
                let second = edges.get(j).copied();
                if let (Some((a, b)), Some((c, d))) = (first, second) {
                    if segments_intersect(a, b, c, d) {
                        return Err(invalid_input(
                            "ring",
                            &format!("edges {i} and {j}"),
                            &"ring edges intersect",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
