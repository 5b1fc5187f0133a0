//! Arbitrary-precision rational scalar.
//!
//! Purpose
//! - `Q` wraps `num_rational::BigRational`: always in lowest terms with a
//!   positive denominator, totally ordered by numeric value, immutable.
//! - Fallible operations (`from_float`, `from_fraction`, `try_div`,
//!   `try_inv`) return typed `QError` results; nothing in this module
//!   aborts on invalid input.
//!
//! Division
//! - `try_div`/`try_inv` are the checked surface. `std::ops::Div` is also
//!   implemented for expression-style arithmetic and panics on a zero
//!   divisor (as `BigRational` itself does); callers use it only where the
//!   divisor is known nonzero.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{Signed, Zero};

#[cfg(test)]
mod tests;

/// Errors surfaced by scalar construction and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QError {
    /// Construction from an infinite or NaN floating value.
    NonFiniteInput,
    /// Division or inversion with a zero divisor.
    DivisionByZero,
}

impl fmt::Display for QError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QError::NonFiniteInput => write!(f, "non-finite floating-point input"),
            QError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for QError {}

/// An exact rational number of arbitrary precision.
///
/// Value semantics throughout: every operation allocates a fresh result and
/// never mutates an operand. Ordering and equality follow the numeric value,
/// independent of how the fraction was constructed; `min`/`max` and
/// three-way comparison come with the `Ord` impl.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q(BigRational);

impl Q {
    /// The rational number equal to `n`.
    pub fn from_integer(n: i64) -> Q {
        Q(BigRational::from_integer(BigInt::from(n)))
    }

    /// The exact rational value of `f`, or `NonFiniteInput` for NaN/infinity.
    ///
    /// Every finite `f64` has a finite binary expansion, so the conversion
    /// is exact (e.g. `0.1` maps to `3602879701896397/36028797018963968`).
    pub fn from_float(f: f64) -> Result<Q, QError> {
        BigRational::from_float(f).map(Q).ok_or(QError::NonFiniteInput)
    }

    /// The fraction `num/den` in lowest terms, or `DivisionByZero` if
    /// `den == 0`.
    pub fn from_fraction(num: i64, den: i64) -> Result<Q, QError> {
        if den == 0 {
            return Err(QError::DivisionByZero);
        }
        Ok(Q(BigRational::new(BigInt::from(num), BigInt::from(den))))
    }

    /// Wrap an existing exact rational.
    pub fn from_rational(r: BigRational) -> Q {
        Q(r)
    }

    /// Unwrap into the underlying `BigRational`.
    pub fn into_rational(self) -> BigRational {
        self.0
    }

    /// The constant 0.
    pub fn zero() -> Q {
        Q(BigRational::zero())
    }

    /// The constant 1.
    pub fn one() -> Q {
        Q::from_integer(1)
    }

    /// The constant 2.
    pub fn two() -> Q {
        Q::from_integer(2)
    }

    /// `|self|`.
    pub fn abs(&self) -> Q {
        Q(self.0.abs())
    }

    /// −1, 0, or +1 according to the sign of the value.
    pub fn sign(&self) -> i32 {
        match self.0.numer().sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `1/self`, or `DivisionByZero` if the value is zero.
    pub fn try_inv(&self) -> Result<Q, QError> {
        if self.is_zero() {
            return Err(QError::DivisionByZero);
        }
        Ok(Q(self.0.recip()))
    }

    /// `self/rhs`, or `DivisionByZero` if `rhs` is zero.
    pub fn try_div(&self, rhs: &Q) -> Result<Q, QError> {
        if rhs.is_zero() {
            return Err(QError::DivisionByZero);
        }
        Ok(Q(&self.0 / &rhs.0))
    }
}

impl fmt::Display for Q {
    /// Exact fractional rendering: `"22/7"`, integers without denominator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Q {
    type Output = Q;
    #[inline]
    fn neg(self) -> Q {
        Q(-self.0)
    }
}

impl Neg for &Q {
    type Output = Q;
    #[inline]
    fn neg(self) -> Q {
        Q(-&self.0)
    }
}

impl Add for Q {
    type Output = Q;
    #[inline]
    fn add(self, rhs: Q) -> Q {
        Q(self.0 + rhs.0)
    }
}

impl Add for &Q {
    type Output = Q;
    #[inline]
    fn add(self, rhs: &Q) -> Q {
        Q(&self.0 + &rhs.0)
    }
}

impl Sub for Q {
    type Output = Q;
    #[inline]
    fn sub(self, rhs: Q) -> Q {
        Q(self.0 - rhs.0)
    }
}

impl Sub for &Q {
    type Output = Q;
    #[inline]
    fn sub(self, rhs: &Q) -> Q {
        Q(&self.0 - &rhs.0)
    }
}

impl Mul for Q {
    type Output = Q;
    #[inline]
    fn mul(self, rhs: Q) -> Q {
        Q(self.0 * rhs.0)
    }
}

impl Mul for &Q {
    type Output = Q;
    #[inline]
    fn mul(self, rhs: &Q) -> Q {
        Q(&self.0 * &rhs.0)
    }
}

impl Div for Q {
    type Output = Q;
    /// Panics if `rhs` is zero; use [`Q::try_div`] for the checked form.
    #[inline]
    fn div(self, rhs: Q) -> Q {
        Q(self.0 / rhs.0)
    }
}

impl Div for &Q {
    type Output = Q;
    /// Panics if `rhs` is zero; use [`Q::try_div`] for the checked form.
    #[inline]
    fn div(self, rhs: &Q) -> Q {
        Q(&self.0 / &rhs.0)
    }
}
