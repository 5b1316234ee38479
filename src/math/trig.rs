//! Trigonometric and inverse trigonometric functions
//!
//! Forward functions read their operand in the given [`AngleMode`]; inverse
//! functions report their angle in it. Tangent poles are not guarded: at odd
//! multiples of 90° the result is whatever `tan` gives for the nearest
//! representable radian value (very large, not infinite).

use crate::angle::AngleMode;
use crate::traits::MathScalar;

#[inline]
pub fn sine<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.to_radians(a).sin()
}

#[inline]
pub fn cosine<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.to_radians(a).cos()
}

#[inline]
pub fn tangent<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.to_radians(a).tan()
}

/// NaN outside [-1, 1]
#[inline]
pub fn arcsin<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.from_radians(a.asin())
}

/// NaN outside [-1, 1]
#[inline]
pub fn arccos<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.from_radians(a.acos())
}

#[inline]
pub fn arctan<T: MathScalar>(a: T, mode: AngleMode) -> T {
    mode.from_radians(a.atan())
}
