//! Logarithmic and exponential functions

use crate::traits::MathScalar;

/// ln(a), NaN for `a <= 0`
#[inline]
pub fn natural_log<T: MathScalar>(a: T) -> T {
    if a <= T::zero() { T::nan() } else { a.ln() }
}

/// log10(a), NaN for `a <= 0`
#[inline]
pub fn base10_log<T: MathScalar>(a: T) -> T {
    if a <= T::zero() { T::nan() } else { a.log10() }
}

/// e^a; overflows to +inf for large `a`
#[inline]
pub fn exp<T: MathScalar>(a: T) -> T {
    a.exp()
}
