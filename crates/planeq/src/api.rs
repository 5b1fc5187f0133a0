//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across callers; the
//! module paths remain available for qualified use.

// Exact scalar
pub use crate::scalar::{Q, QError};
// Determinant predicates
pub use crate::det::{det2x2, det3x3, det4x4};
// Planar kernel
pub use crate::geom2::{
    convex_hull, min_enclosing_circle, par_convex_hull, par_min_enclosing_circle, Circle2,
    CircleError, MinCircleError, Point2, Vector2,
};
// 3D collaborators
pub use crate::geom3::{Point3, Vector3};
