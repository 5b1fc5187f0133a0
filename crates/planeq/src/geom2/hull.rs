//! Convex hull construction (Andrew's monotone chain), serial and parallel.
//!
//! Both entry points return the lower and upper chains separately, each in
//! counter-clockwise traversal order and sharing their two endpoint vertices
//! (the xy-minimal and xy-maximal input points). Collinear and duplicate
//! input is handled as normal control flow: interior collinear points are
//! discarded by the strict turn test.
//!
//! References
//! - A.M. Andrew, Another efficient algorithm for convex hulls in two
//!   dimensions, Inform. Process. Lett., 9:216-219 (1979).

use std::num::NonZeroUsize;
use std::thread;

use super::types::Point2;

/// `(chain[n-2], chain[n-1], p)` are not strictly counter-clockwise.
#[inline]
fn not_ccw(chain: &[Point2], p: &Point2) -> bool {
    let n = chain.len();
    n > 1 && chain[n - 2].orientation(&chain[n - 1], p) <= 0
}

/// All-coincident input degenerates a chain to two equal points; keep one.
#[inline]
fn collapse_degenerate(chain: &mut Vec<Point2>) {
    if chain.len() == 2 && chain[0] == chain[1] {
        chain.truncate(1);
    }
}

/// Compute the convex hull of a planar point collection.
///
/// Consumes its input (the points are reordered during construction).
/// Duplicates and collinear runs are allowed. Returns `(lower, upper)`
/// chains, both listed start-to-end in counter-clockwise order; every input
/// point lies on or inside the hull, and every chain vertex is an extreme
/// point of the input. 0 points yield two empty chains, 1 point yields the
/// point in both chains.
pub fn convex_hull(mut points: Vec<Point2>) -> (Vec<Point2>, Vec<Point2>) {
    let n = points.len();
    if n == 0 {
        return (Vec::new(), Vec::new());
    }
    if n == 1 {
        return (points.clone(), points);
    }

    points.sort_unstable_by(|a, b| a.cmp_xy(b));

    // Lower chain: left to right, keep only strict left turns.
    let mut lower: Vec<Point2> = Vec::with_capacity(n);
    for p in &points {
        while not_ccw(&lower, p) {
            lower.pop();
        }
        lower.push(p.clone());
    }

    // Upper chain: right to left, same turn test.
    let mut upper: Vec<Point2> = Vec::with_capacity(n);
    for p in points.iter().rev() {
        while not_ccw(&upper, p) {
            upper.pop();
        }
        upper.push(p.clone());
    }

    collapse_degenerate(&mut lower);
    collapse_degenerate(&mut upper);
    (lower, upper)
}

/// Compute the convex hull with fork-join block parallelism.
///
/// The input is split into `workers` contiguous blocks; each block's serial
/// hull runs on its own scoped thread, and the union of all sub-hull
/// vertices is re-run through [`convex_hull`]. A point extreme in a block
/// need not be extreme globally, but every globally extreme point is extreme
/// in its block, so re-hulling the union recovers the exact hull. The merge
/// is a second full hull computation, not a linear chain merge.
///
/// `workers == 0` selects the available hardware parallelism. Inputs smaller
/// than the worker count fall back to the serial algorithm. All spawned
/// workers run to completion before any result is read (join barrier).
pub fn par_convex_hull(workers: usize, points: Vec<Point2>) -> (Vec<Point2>, Vec<Point2>) {
    let workers = if workers == 0 {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    } else {
        workers
    };
    if workers == 1 || points.len() < workers {
        return convex_hull(points);
    }

    let block_len = (points.len() + workers - 1) / workers;
    let mut combined: Vec<Point2> = Vec::with_capacity(points.len());
    thread::scope(|s| {
        let handles: Vec<_> = points
            .chunks(block_len)
            .map(|block| s.spawn(move || convex_hull(block.to_vec())))
            .collect();
        for handle in handles {
            let (lower, upper) = match handle.join() {
                Ok(chains) => chains,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            combined.extend(lower);
            combined.extend(upper);
        }
    });
    convex_hull(combined)
}
