//! Small determinants over the rational scalar.
//!
//! These are the exact building blocks for every sidedness decision in the
//! crate: `det2x2` backs the orientation predicate and the circumcenter
//! solve, `det3x3`/`det4x4` back lifted predicates (e.g. in-circle via the
//! paraboloid lift of `geom3`). Arguments are row-major.

use crate::scalar::Q;

/// `| a b |`
/// `| c d |` = `a*d - b*c`.
#[inline]
pub fn det2x2(a: &Q, b: &Q, c: &Q, d: &Q) -> Q {
    &(a * d) - &(b * c)
}

/// 3x3 determinant by cofactor expansion along the first row.
#[allow(clippy::too_many_arguments)]
pub fn det3x3(a: &Q, b: &Q, c: &Q, d: &Q, e: &Q, f: &Q, g: &Q, h: &Q, i: &Q) -> Q {
    let ma = det2x2(e, f, h, i);
    let mb = det2x2(d, f, g, i);
    let mc = det2x2(d, e, g, h);
    &(&(a * &ma) - &(b * &mb)) + &(c * &mc)
}

/// 4x4 determinant by cofactor expansion along the first row.
#[allow(clippy::too_many_arguments)]
pub fn det4x4(
    a: &Q,
    b: &Q,
    c: &Q,
    d: &Q,
    e: &Q,
    f: &Q,
    g: &Q,
    h: &Q,
    i: &Q,
    j: &Q,
    k: &Q,
    l: &Q,
    m: &Q,
    n: &Q,
    o: &Q,
    p: &Q,
) -> Q {
    let ma = det3x3(f, g, h, j, k, l, n, o, p);
    let mb = det3x3(e, g, h, i, k, l, m, o, p);
    let mc = det3x3(e, f, h, i, j, l, m, n, p);
    let md = det3x3(e, f, g, i, j, k, m, n, o);
    let pos = &(a * &ma) + &(c * &mc);
    let neg = &(b * &mb) + &(d * &md);
    &pos - &neg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn det2x2_identity_and_singular() {
        assert_eq!(det2x2(&q(1), &q(0), &q(0), &q(1)), q(1));
        assert_eq!(det2x2(&q(2), &q(4), &q(1), &q(2)), q(0));
        assert_eq!(det2x2(&q(3), &q(7), &q(2), &q(5)), q(1));
    }

    #[test]
    fn det3x3_known_values() {
        // diag(2,3,4) -> 24
        assert_eq!(
            det3x3(&q(2), &q(0), &q(0), &q(0), &q(3), &q(0), &q(0), &q(0), &q(4)),
            q(24)
        );
        // two equal rows -> 0
        assert_eq!(
            det3x3(&q(1), &q(2), &q(3), &q(1), &q(2), &q(3), &q(4), &q(5), &q(6)),
            q(0)
        );
    }

    #[test]
    fn det4x4_known_values() {
        // diag(1,2,3,4) -> 24
        assert_eq!(
            det4x4(
                &q(1),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(2),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(3),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(4),
            ),
            q(24)
        );
        // row swap flips the sign of the diagonal case above
        assert_eq!(
            det4x4(
                &q(0),
                &q(2),
                &q(0),
                &q(0),
                &q(1),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(3),
                &q(0),
                &q(0),
                &q(0),
                &q(0),
                &q(4),
            ),
            q(-24)
        );
    }
}
