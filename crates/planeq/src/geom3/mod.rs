//! Exact 3D point/vector collaborators and planar lifts.

mod types;

pub use types::{Point3, Vector3};
