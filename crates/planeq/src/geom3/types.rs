//! 3D point and vector value types over the rational scalar.
//!
//! Passive collaborators of the planar kernel: exact coordinate access,
//! translation, dot/cross products, and squared norms. The `lift*` methods
//! embed planar points into 3D; `lift2` is the paraboloid lift whose 4x4
//! determinant sign gives lifted predicates such as in-circle.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::geom2::Point2;
use crate::scalar::{Q, QError};

/// A point with rational coordinates in 3D Euclidean space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point3 {
    x: Q,
    y: Q,
    z: Q,
}

impl Point3 {
    pub fn new(x: Q, y: Q, z: Q) -> Point3 {
        Point3 { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> &Q {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Q {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &Q {
        &self.z
    }

    #[inline]
    pub fn cmp_x(&self, other: &Point3) -> Ordering {
        self.x.cmp(&other.x)
    }

    #[inline]
    pub fn cmp_y(&self, other: &Point3) -> Ordering {
        self.y.cmp(&other.y)
    }

    #[inline]
    pub fn cmp_z(&self, other: &Point3) -> Ordering {
        self.z.cmp(&other.z)
    }

    /// Lexicographic comparison, x first.
    pub fn cmp_xyz(&self, other: &Point3) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.z.cmp(&other.z))
    }

    /// Lexicographic comparison, z first.
    pub fn cmp_zyx(&self, other: &Point3) -> Ordering {
        self.z
            .cmp(&other.z)
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.x.cmp(&other.x))
    }

    /// The midpoint of the segment `[self, other]`.
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        let two = Q::two();
        Point3 {
            x: &(&self.x + &other.x) / &two,
            y: &(&self.y + &other.y) / &two,
            z: &(&self.z + &other.z) / &two,
        }
    }

    /// The squared distance to `other`.
    pub fn dist2(&self, other: &Point3) -> Q {
        let dx = &self.x - &other.x;
        let dy = &self.y - &other.y;
        let dz = &self.z - &other.z;
        &(&(&dx * &dx) + &(&dy * &dy)) + &(&dz * &dz)
    }
}

impl Point2 {
    /// Lift to 3D with `z = 0`.
    pub fn lift0(&self) -> Point3 {
        Point3::new(self.x().clone(), self.y().clone(), Q::zero())
    }

    /// Lift to 3D with `z = 1`.
    pub fn lift1(&self) -> Point3 {
        Point3::new(self.x().clone(), self.y().clone(), Q::one())
    }

    /// Paraboloid lift: `z = x² + y²`.
    pub fn lift2(&self) -> Point3 {
        let z = &(self.x() * self.x()) + &(self.y() * self.y());
        Point3::new(self.x().clone(), self.y().clone(), z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Translation by a vector.
impl Add<&Vector3> for &Point3 {
    type Output = Point3;
    fn add(self, u: &Vector3) -> Point3 {
        Point3 {
            x: &self.x + &u.x,
            y: &self.y + &u.y,
            z: &self.z + &u.z,
        }
    }
}

/// Translation by the negated vector.
impl Sub<&Vector3> for &Point3 {
    type Output = Point3;
    fn sub(self, u: &Vector3) -> Point3 {
        Point3 {
            x: &self.x - &u.x,
            y: &self.y - &u.y,
            z: &self.z - &u.z,
        }
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for &Point3 {
    type Output = Vector3;
    fn sub(self, rhs: &Point3) -> Vector3 {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

/// A vector with rational coordinates in 3D Euclidean space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector3 {
    x: Q,
    y: Q,
    z: Q,
}

impl Vector3 {
    pub fn new(x: Q, y: Q, z: Q) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> &Q {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Q {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &Q {
        &self.z
    }

    /// Scale by `a`.
    pub fn mul(&self, a: &Q) -> Vector3 {
        Vector3 {
            x: a * &self.x,
            y: a * &self.y,
            z: a * &self.z,
        }
    }

    /// Scale by `1/a`, or `DivisionByZero` if `a` is zero.
    pub fn try_div(&self, a: &Q) -> Result<Vector3, QError> {
        Ok(Vector3 {
            x: self.x.try_div(a)?,
            y: self.y.try_div(a)?,
            z: self.z.try_div(a)?,
        })
    }

    /// Dot (inner) product.
    pub fn dot(&self, v: &Vector3) -> Q {
        &(&(&self.x * &v.x) + &(&self.y * &v.y)) + &(&self.z * &v.z)
    }

    /// Cross product.
    pub fn cross(&self, v: &Vector3) -> Vector3 {
        Vector3 {
            x: &(&self.y * &v.z) - &(&self.z * &v.y),
            y: &(&self.z * &v.x) - &(&self.x * &v.z),
            z: &(&self.x * &v.y) - &(&self.y * &v.x),
        }
    }

    /// Squared L2 norm: `x² + y² + z²`.
    pub fn abs2(&self) -> Q {
        self.dot(self)
    }

    /// L∞ norm: `max(|x|, |y|, |z|)`.
    pub fn max_abs(&self) -> Q {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// L1 norm: `|x| + |y| + |z|`.
    pub fn sum_abs(&self) -> Q {
        &(&self.x.abs() + &self.y.abs()) + &self.z.abs()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3 {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}

impl Add for &Vector3 {
    type Output = Vector3;
    fn add(self, v: &Vector3) -> Vector3 {
        Vector3 {
            x: &self.x + &v.x,
            y: &self.y + &v.y,
            z: &self.z + &v.z,
        }
    }
}

impl Sub for &Vector3 {
    type Output = Vector3;
    fn sub(self, v: &Vector3) -> Vector3 {
        Vector3 {
            x: &self.x - &v.x,
            y: &self.y - &v.y,
            z: &self.z - &v.z,
        }
    }
}
