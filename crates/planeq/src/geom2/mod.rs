//! Exact 2D geometry: points, vectors, hulls, circles.
//!
//! Purpose
//! - House the planar kernel proper: the orientation-driven convex hull
//!   (serial and fork-join parallel), exact circles, and the minimum
//!   enclosing circle built on top of the hull.
//! - All turn and containment decisions go through the exact orientation
//!   sign and rational comparisons; there is no tolerance anywhere.

pub mod circle;
pub mod hull;
pub mod mincircle;
mod types;

pub use circle::{Circle2, CircleError};
pub use hull::{convex_hull, par_convex_hull};
pub use mincircle::{min_enclosing_circle, par_min_enclosing_circle, MinCircleError};
pub use types::{Point2, Vector2};
