//! Planar point and vector value types over the rational scalar.
//!
//! - `Point2`: a location; totally ordered in xy-order (`Ord`), with a
//!   secondary yx-order comparator. Carries the exact orientation predicate.
//! - `Vector2`: a displacement; closed under addition and scalar
//!   multiplication, with dot/cross products and the usual norms squared.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::det::det2x2;
use crate::scalar::{Q, QError};

/// A point with rational coordinates in the Euclidean plane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point2 {
    x: Q,
    y: Q,
}

impl Point2 {
    pub fn new(x: Q, y: Q) -> Point2 {
        Point2 { x, y }
    }

    #[inline]
    pub fn x(&self) -> &Q {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Q {
        &self.y
    }

    /// Compare x-coordinates only.
    #[inline]
    pub fn cmp_x(&self, other: &Point2) -> Ordering {
        self.x.cmp(&other.x)
    }

    /// Compare y-coordinates only.
    #[inline]
    pub fn cmp_y(&self, other: &Point2) -> Ordering {
        self.y.cmp(&other.y)
    }

    /// Lexicographic comparison, x first. This is also the `Ord` impl.
    #[inline]
    pub fn cmp_xy(&self, other: &Point2) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }

    /// Lexicographic comparison, y first.
    #[inline]
    pub fn cmp_yx(&self, other: &Point2) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }

    /// The midpoint of the segment `[self, other]`.
    pub fn midpoint(&self, other: &Point2) -> Point2 {
        let two = Q::two();
        Point2 {
            x: &(&self.x + &other.x) / &two,
            y: &(&self.y + &other.y) / &two,
        }
    }

    /// The squared distance to `other`.
    pub fn dist2(&self, other: &Point2) -> Q {
        let dx = &self.x - &other.x;
        let dy = &self.y - &other.y;
        &(&dx * &dx) + &(&dy * &dy)
    }

    /// Sign of the doubled signed area of the triangle `(self, b, c)`:
    /// −1 clockwise, 0 collinear, +1 counter-clockwise.
    ///
    /// Computed exactly; this is the single source of truth for every turn
    /// decision in the hull and circle algorithms.
    pub fn orientation(&self, b: &Point2, c: &Point2) -> i32 {
        let abx = &b.x - &self.x;
        let aby = &b.y - &self.y;
        let acx = &c.x - &self.x;
        let acy = &c.y - &self.y;
        det2x2(&abx, &aby, &acx, &acy).sign()
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Point2) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2 {
    fn cmp(&self, other: &Point2) -> Ordering {
        self.cmp_xy(other)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Translation by a vector.
impl Add<&Vector2> for &Point2 {
    type Output = Point2;
    fn add(self, u: &Vector2) -> Point2 {
        Point2 {
            x: &self.x + &u.x,
            y: &self.y + &u.y,
        }
    }
}

/// Translation by the negated vector.
impl Sub<&Vector2> for &Point2 {
    type Output = Point2;
    fn sub(self, u: &Vector2) -> Point2 {
        Point2 {
            x: &self.x - &u.x,
            y: &self.y - &u.y,
        }
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for &Point2 {
    type Output = Vector2;
    fn sub(self, rhs: &Point2) -> Vector2 {
        Vector2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

/// A vector with rational coordinates in the Euclidean plane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector2 {
    x: Q,
    y: Q,
}

impl Vector2 {
    pub fn new(x: Q, y: Q) -> Vector2 {
        Vector2 { x, y }
    }

    #[inline]
    pub fn x(&self) -> &Q {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Q {
        &self.y
    }

    /// Scale by `a`.
    pub fn mul(&self, a: &Q) -> Vector2 {
        Vector2 {
            x: a * &self.x,
            y: a * &self.y,
        }
    }

    /// Scale by `1/a`, or `DivisionByZero` if `a` is zero.
    pub fn try_div(&self, a: &Q) -> Result<Vector2, QError> {
        Ok(Vector2 {
            x: self.x.try_div(a)?,
            y: self.y.try_div(a)?,
        })
    }

    /// Dot (inner) product.
    pub fn dot(&self, v: &Vector2) -> Q {
        &(&self.x * &v.x) + &(&self.y * &v.y)
    }

    /// z-component of the wedge product (signed parallelogram area).
    pub fn cross(&self, v: &Vector2) -> Q {
        det2x2(&self.x, &self.y, &v.x, &v.y)
    }

    /// Squared L2 norm: `x² + y²`.
    pub fn abs2(&self) -> Q {
        self.dot(self)
    }

    /// L∞ norm: `max(|x|, |y|)`.
    pub fn max_abs(&self) -> Q {
        self.x.abs().max(self.y.abs())
    }

    /// L1 norm: `|x| + |y|`.
    pub fn sum_abs(&self) -> Q {
        &self.x.abs() + &self.y.abs()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Neg for &Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2 {
            x: -&self.x,
            y: -&self.y,
        }
    }
}

impl Add for &Vector2 {
    type Output = Vector2;
    fn add(self, v: &Vector2) -> Vector2 {
        Vector2 {
            x: &self.x + &v.x,
            y: &self.y + &v.y,
        }
    }
}

impl Sub for &Vector2 {
    type Output = Vector2;
    fn sub(self, v: &Vector2) -> Vector2 {
        Vector2 {
            x: &self.x - &v.x,
            y: &self.y - &v.y,
        }
    }
}
