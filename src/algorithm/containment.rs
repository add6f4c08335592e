//! Polygon containment primitive
//!
//! The grid scan never decides containment itself: it delegates to a
//! [`ContainmentChecker`] supplied by the caller. The checker shipped here
//! classifies points with an even-odd ray cast and rejects any candidate
//! whose boundary crosses or escapes the outer ring. Tests drive the scan
//! with synthetic checkers instead, which keeps the engine independent of
//! any particular geometry implementation.

use crate::io::error::{Result, geometry_error};
use crate::math::predicates::{point_on_segment, segments_cross};
use crate::spatial::point::Point;
use crate::spatial::ring::Ring;

/// Position of a point relative to a ring boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Strictly within the enclosed area
    Inside,
    /// Strictly outside the enclosed area
    Outside,
    /// On the boundary itself
    Boundary,
}

/// Capability for testing whether one polygon lies entirely within another
///
/// A polygon that merely touches the outer boundary (shared edge or vertex)
/// counts as contained only if no part of its interior or boundary lies
/// outside.
pub trait ContainmentChecker {
    /// Test whether `inner` lies entirely within `outer`
    ///
    /// # Errors
    ///
    /// Returns an error when containment cannot be evaluated, for example
    /// because an intermediate value is not finite.
    fn within(&self, inner: &Ring, outer: &Ring) -> Result<bool>;
}

/// Even-odd ray-casting containment checker
///
/// `inner` is within `outer` when every inner vertex is inside or on the
/// outer boundary, no inner edge properly crosses an outer edge, and every
/// inner edge midpoint is also inside or on the boundary. The midpoint pass
/// catches edges that leave through a reflex vertex without producing a
/// proper crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCrossingChecker;

impl RayCrossingChecker {
    /// Create a checker
    pub const fn new() -> Self {
        Self
    }

    /// Classify a point against a ring boundary
    ///
    /// # Errors
    ///
    /// Returns an error when the point is not finite or a ray-crossing
    /// abscissa overflows.
    pub fn point_position(point: Point, ring: &Ring) -> Result<Position> {
        if !point.is_finite() {
            return Err(geometry_error(
                "point classification",
                &"point coordinates are not finite",
            ));
        }

        for (start, end) in ring.edges() {
            if point_on_segment(point, start, end) {
                return Ok(Position::Boundary);
            }
        }

        let mut inside = false;
        for (start, end) in ring.edges() {
            if (start.y > point.y) == (end.y > point.y) {
                continue;
            }
            let crossing_x =
                (end.x - start.x) * (point.y - start.y) / (end.y - start.y) + start.x;
            if !crossing_x.is_finite() {
                return Err(geometry_error(
                    "ray cast",
                    &"crossing abscissa is not finite",
                ));
            }
            if point.x < crossing_x {
                inside = !inside;
            }
        }

        Ok(if inside {
            Position::Inside
        } else {
            Position::Outside
        })
    }
}

impl ContainmentChecker for RayCrossingChecker {
    fn within(&self, inner: &Ring, outer: &Ring) -> Result<bool> {
        for &vertex in inner.points() {
            if Self::point_position(vertex, outer)? == Position::Outside {
                return Ok(false);
            }
        }

        for (a, b) in inner.edges() {
            for (c, d) in outer.edges() {
                if segments_cross(a, b, c, d) {
                    return Ok(false);
                }
            }
        }

        for (a, b) in inner.edges() {
            if Self::point_position(a.midpoint(b), outer)? == Position::Outside {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
