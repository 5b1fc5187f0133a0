use super::*;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn frac(n: i64, d: i64) -> Q {
    Q::from_fraction(n, d).unwrap()
}

#[test]
fn construction_and_normalization() {
    // lowest terms, positive denominator, value-based equality
    assert_eq!(frac(2, 4), frac(1, 2));
    assert_eq!(frac(-1, -2), frac(1, 2));
    assert_eq!(frac(1, -2), frac(-1, 2));
    assert_eq!(frac(6, 3), q(2));
    assert_eq!(Q::from_fraction(1, 0), Err(QError::DivisionByZero));
}

#[test]
fn from_float_exact_and_non_finite() {
    assert_eq!(Q::from_float(0.5).unwrap(), frac(1, 2));
    assert_eq!(Q::from_float(-3.0).unwrap(), q(-3));
    // 0.1 is not exactly 1/10 in binary; the conversion is exact, so the
    // resulting rational must differ from 1/10.
    assert_ne!(Q::from_float(0.1).unwrap(), frac(1, 10));
    assert_eq!(Q::from_float(f64::NAN), Err(QError::NonFiniteInput));
    assert_eq!(Q::from_float(f64::INFINITY), Err(QError::NonFiniteInput));
    assert_eq!(Q::from_float(f64::NEG_INFINITY), Err(QError::NonFiniteInput));
}

#[test]
fn arithmetic_is_exact() {
    let third = frac(1, 3);
    let sum = &(&third + &third) + &third;
    assert_eq!(sum, Q::one());
    assert_eq!(&frac(1, 2) * &frac(2, 3), frac(1, 3));
    assert_eq!(&q(7) - &q(10), q(-3));
    assert_eq!(-&frac(3, 4), frac(-3, 4));
    // no drift over many accumulations
    let mut acc = Q::zero();
    for _ in 0..100 {
        acc = &acc + &frac(1, 100);
    }
    assert_eq!(acc, Q::one());
}

#[test]
fn checked_division_and_inversion() {
    assert_eq!(frac(3, 4).try_inv().unwrap(), frac(4, 3));
    assert_eq!(q(1).try_div(&q(3)).unwrap(), frac(1, 3));
    assert_eq!(Q::zero().try_inv(), Err(QError::DivisionByZero));
    assert_eq!(q(5).try_div(&Q::zero()), Err(QError::DivisionByZero));
}

#[test]
fn sign_abs_and_ordering() {
    assert_eq!(q(-7).sign(), -1);
    assert_eq!(Q::zero().sign(), 0);
    assert_eq!(frac(1, 1000000).sign(), 1);
    assert_eq!(q(-7).abs(), q(7));
    assert!(frac(1, 3) < frac(1, 2));
    assert!(q(-1) < Q::zero());
    assert_eq!(frac(2, 3).max(frac(3, 4)), frac(3, 4));
    assert_eq!(frac(2, 3).min(frac(3, 4)), frac(2, 3));
}

#[test]
fn ordering_ignores_representation() {
    // equal values constructed three different ways compare equal
    let a = frac(10, 20);
    let b = Q::from_float(0.5).unwrap();
    let c = q(1).try_div(&q(2)).unwrap();
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert_eq!(b.cmp(&c), std::cmp::Ordering::Equal);
}

#[test]
fn display_renders_exact_fractions() {
    assert_eq!(frac(22, 7).to_string(), "22/7");
    assert_eq!(q(3).to_string(), "3");
    assert_eq!(frac(-1, 2).to_string(), "-1/2");
    assert_eq!(Q::zero().to_string(), "0");
}

#[test]
fn large_magnitudes_stay_exact() {
    let big = q(i64::MAX);
    let prod = &big * &big;
    assert_eq!(prod.try_div(&big).unwrap(), big);
    assert_eq!(&(&prod - &prod) + &Q::one(), Q::one());
}
