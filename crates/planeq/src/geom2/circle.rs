//! Circles with exact centers and squared radii.
//!
//! A circle is stored as center plus radius squared, so every containment
//! test reduces to comparing two exact rationals. The three-point
//! constructor degrades gracefully on collinear input: it returns the
//! diameter circle over the extreme pair and only fails when all three
//! points coincide.

use std::fmt;

use crate::det::det2x2;
use crate::scalar::Q;

use super::types::Point2;

/// Errors surfaced by circle construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleError {
    /// Explicit construction with a negative squared radius.
    NegativeRadius,
    /// Three-point construction where all three points coincide.
    CollinearPoints,
}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircleError::NegativeRadius => write!(f, "negative squared radius"),
            CircleError::CollinearPoints => {
                write!(f, "degenerate point triple (all points coincide)")
            }
        }
    }
}

impl std::error::Error for CircleError {}

/// A circle in the Euclidean plane: center and radius squared (`≥ 0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle2 {
    center: Point2,
    radius2: Q,
}

impl Circle2 {
    /// A circle with the given center and squared radius, or
    /// `NegativeRadius` if `radius2 < 0`.
    pub fn from_center_radius2(center: Point2, radius2: Q) -> Result<Circle2, CircleError> {
        if radius2.sign() < 0 {
            return Err(CircleError::NegativeRadius);
        }
        Ok(Circle2 { center, radius2 })
    }

    /// The circle having the segment `[a, b]` as a diameter.
    pub fn from_diameter(a: &Point2, b: &Point2) -> Circle2 {
        let center = a.midpoint(b);
        let radius2 = a.dist2(&center);
        Circle2 { center, radius2 }
    }

    /// The unique circle through three non-collinear points.
    ///
    /// Collinear triples degenerate: the result is the diameter circle over
    /// the xy-extreme pair of the three (which encloses the middle point).
    /// Fails with `CollinearPoints` only when all three points coincide.
    pub fn from_three_points(a: &Point2, b: &Point2, c: &Point2) -> Result<Circle2, CircleError> {
        if a.orientation(b, c) == 0 {
            let lo = a.min(b).min(c);
            let hi = a.max(b).max(c);
            if lo == hi {
                return Err(CircleError::CollinearPoints);
            }
            return Ok(Circle2::from_diameter(lo, hi));
        }

        // Translate so `a` is the origin and solve the 2x2 linear system
        // for the circumcenter; the denominator 2*det(q,r) is nonzero
        // exactly because the orientation test above rejected collinearity.
        let dqx = b.x() - a.x();
        let dqy = b.y() - a.y();
        let drx = c.x() - a.x();
        let dry = c.y() - a.y();
        let q2 = &(&dqx * &dqx) + &(&dqy * &dqy);
        let r2 = &(&drx * &drx) + &(&dry * &dry);
        let den = &det2x2(&dqx, &dqy, &drx, &dry) * &Q::two();
        let dcx = &det2x2(&dry, &dqy, &r2, &q2) / &den;
        let dcy = -&(&det2x2(&drx, &dqx, &r2, &q2) / &den);

        let center = Point2::new(&dcx + a.x(), &dcy + a.y());
        let radius2 = center.dist2(a);
        Ok(Circle2 { center, radius2 })
    }

    /// The center of the circle.
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// The squared radius of the circle.
    pub fn radius2(&self) -> &Q {
        &self.radius2
    }

    /// Position of `p` relative to the circle:
    /// −1 strictly outside, 0 on the boundary, +1 strictly inside.
    pub fn side_of(&self, p: &Point2) -> i32 {
        match self.radius2.cmp(&self.center.dist2(p)) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }
}

impl fmt::Display for Circle2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{center={}, radius2={}}}", self.center, self.radius2)
    }
}
