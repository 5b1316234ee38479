//! Basic and advanced arithmetic

use crate::traits::MathScalar;

#[inline]
pub fn add<T: MathScalar>(a: T, b: T) -> T {
    a + b
}

#[inline]
pub fn sub<T: MathScalar>(a: T, b: T) -> T {
    a - b
}

#[inline]
pub fn mul<T: MathScalar>(a: T, b: T) -> T {
    a * b
}

/// `a / b`, or NaN when `b` is zero (of either sign)
#[inline]
pub fn divide<T: MathScalar>(a: T, b: T) -> T {
    if b == T::zero() { T::nan() } else { a / b }
}

/// `base^exponent` via `powf`; a negative base with a fractional exponent
/// yields NaN.
#[inline]
pub fn power<T: MathScalar>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// Square root, NaN for negative inputs
#[inline]
pub fn root<T: MathScalar>(a: T) -> T {
    if a < T::zero() { T::nan() } else { a.sqrt() }
}

/// Floating-point remainder with the sign of the dividend (C `fmod`).
///
/// A zero divisor yields NaN.
#[inline]
pub fn modulo<T: MathScalar>(a: T, b: T) -> T {
    a % b
}

#[inline]
pub fn power_of_two<T: MathScalar>(a: T) -> T {
    a.powi(2)
}

/// `1 / a`, NaN when `a` is zero
#[inline]
pub fn inverse<T: MathScalar>(a: T) -> T {
    if a == T::zero() {
        T::nan()
    } else {
        T::one() / a
    }
}
