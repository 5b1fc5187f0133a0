//! Exact planar computational geometry over arbitrary-precision rationals.
//!
//! Purpose
//! - Provide a small, exact kernel: orientation/determinant predicates,
//!   Andrew's monotone-chain convex hull (serial and fork-join parallel),
//!   and Welzl's minimum enclosing circle, all over `scalar::Q`.
//! - Every derived value is the exact result of +,-,*,/ on the inputs, so
//!   sidedness and turn decisions never misclassify: there is no epsilon
//!   anywhere in this crate.
//!
//! Layout
//! - `scalar`: the rational scalar `Q` and its error type.
//! - `det`: 2x2/3x3/4x4 determinants over `Q`.
//! - `geom2`: points, vectors, hulls, circles, minimum enclosing circle.
//! - `geom3`: 3D point/vector collaborators and planar lifts.

pub mod api;
pub mod det;
pub mod geom2;
pub mod geom3;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::det::{det2x2, det3x3, det4x4};
    pub use crate::geom2::{
        convex_hull, min_enclosing_circle, par_convex_hull, par_min_enclosing_circle, Circle2,
        CircleError, MinCircleError, Point2, Vector2,
    };
    pub use crate::geom3::{Point3, Vector3};
    pub use crate::scalar::{Q, QError};
}
