//! Hyperbolic and inverse hyperbolic functions

use crate::traits::MathScalar;

#[inline]
pub fn sinh<T: MathScalar>(a: T) -> T {
    a.sinh()
}

#[inline]
pub fn cosh<T: MathScalar>(a: T) -> T {
    a.cosh()
}

#[inline]
pub fn tanh<T: MathScalar>(a: T) -> T {
    a.tanh()
}

#[inline]
pub fn asinh<T: MathScalar>(a: T) -> T {
    a.asinh()
}

/// NaN for `a < 1`
#[inline]
pub fn acosh<T: MathScalar>(a: T) -> T {
    if a < T::one() { T::nan() } else { a.acosh() }
}

/// NaN for `|a| >= 1`; the poles at ±1 are reported as domain errors
/// rather than infinities.
#[inline]
pub fn atanh<T: MathScalar>(a: T) -> T {
    if a.abs() >= T::one() {
        T::nan()
    } else {
        a.atanh()
    }
}
