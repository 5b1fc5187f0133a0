//! Minimum enclosing circle (Welzl's randomized incremental algorithm).
//!
//! The input is first reduced to its convex hull vertices: interior points
//! can never touch the minimum enclosing circle, so dropping them is a pure
//! optimization. The incremental construction then runs in three levels,
//! pinning zero, one, or two required boundary points. The random
//! permutation gives the expected-linear bound in the hull size; the result
//! is correct under any permutation.
//!
//! References
//! - E. Welzl, Smallest enclosing disks (balls and ellipsoids), LNCS 555,
//!   pp. 359-370 (1991).

use std::fmt;

use rand::seq::SliceRandom;

use super::circle::{Circle2, CircleError};
use super::hull::{convex_hull, par_convex_hull};
use super::types::Point2;

/// Errors surfaced by the minimum enclosing circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinCircleError {
    /// No circle encloses an empty point set.
    EmptyPointSet,
    /// Propagated circle-construction failure. Unreachable for valid input:
    /// the two pinned boundary points are always distinct when a third
    /// point lies strictly outside their diameter circle.
    Degenerate(CircleError),
}

impl fmt::Display for MinCircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinCircleError::EmptyPointSet => write!(f, "empty point set"),
            MinCircleError::Degenerate(e) => write!(f, "degenerate configuration: {e}"),
        }
    }
}

impl std::error::Error for MinCircleError {}

impl From<CircleError> for MinCircleError {
    fn from(e: CircleError) -> MinCircleError {
        MinCircleError::Degenerate(e)
    }
}

/// Compute the smallest circle enclosing all given points.
///
/// Consumes its input (hull construction reorders it). Fails with
/// `EmptyPointSet` for zero points; a single point yields the zero-radius
/// circle at that point.
pub fn min_enclosing_circle(points: Vec<Point2>) -> Result<Circle2, MinCircleError> {
    let (lower, upper) = convex_hull(points);
    welzl_on_chains(lower, upper)
}

/// Same as [`min_enclosing_circle`] with the hull reduction running through
/// [`par_convex_hull`]; the incremental construction itself is inherently
/// sequential and stays single-threaded. `workers == 0` selects the
/// hardware default.
pub fn par_min_enclosing_circle(
    workers: usize,
    points: Vec<Point2>,
) -> Result<Circle2, MinCircleError> {
    let (lower, upper) = par_convex_hull(workers, points);
    welzl_on_chains(lower, upper)
}

/// Drop the duplicated chain endpoints, concatenate, and run the
/// incremental construction on the hull vertex set.
fn welzl_on_chains(
    mut lower: Vec<Point2>,
    mut upper: Vec<Point2>,
) -> Result<Circle2, MinCircleError> {
    if lower.len() > 1 {
        lower.pop();
    }
    if upper.len() > 1 {
        upper.pop();
    }
    let mut hull = lower;
    hull.append(&mut upper);
    welzl(hull)
}

/// Level 0: no pinned boundary points.
fn welzl(mut ps: Vec<Point2>) -> Result<Circle2, MinCircleError> {
    let n = ps.len();
    if n == 0 {
        return Err(MinCircleError::EmptyPointSet);
    }
    if n == 1 {
        return Ok(Circle2::from_diameter(&ps[0], &ps[0]));
    }
    if n == 2 {
        return Ok(Circle2::from_diameter(&ps[0], &ps[1]));
    }

    ps.shuffle(&mut rand::thread_rng());
    let mut disc = Circle2::from_diameter(&ps[0], &ps[1]);
    for k in 2..n {
        if disc.side_of(&ps[k]) < 0 {
            disc = welzl_pin1(&ps[..k], &ps[k])?;
        }
    }
    Ok(disc)
}

/// Level 1: the circle must pass through `q`.
fn welzl_pin1(ps: &[Point2], q: &Point2) -> Result<Circle2, MinCircleError> {
    let mut disc = Circle2::from_diameter(&ps[0], q);
    for k in 1..ps.len() {
        if disc.side_of(&ps[k]) < 0 {
            disc = welzl_pin2(&ps[..k], &ps[k], q)?;
        }
    }
    Ok(disc)
}

/// Level 2: the circle must pass through `q1` and `q2`.
fn welzl_pin2(ps: &[Point2], q1: &Point2, q2: &Point2) -> Result<Circle2, MinCircleError> {
    let mut disc = Circle2::from_diameter(q1, q2);
    for p in ps {
        if disc.side_of(p) < 0 {
            disc = Circle2::from_three_points(q1, q2, p)?;
        }
    }
    Ok(disc)
}
