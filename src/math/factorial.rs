//! Factorial over non-negative integer-valued floats

use crate::traits::{MathScalar, lit};

/// Largest argument whose factorial is representable as an `f64`
pub const MAX_FACTORIAL_ARG: f64 = 170.0;

/// n! as the iterative product 1·2·…·n.
///
/// NaN when `n` is negative, not an integer, NaN, or above
/// [`MAX_FACTORIAL_ARG`]. For narrower types the product is also checked
/// for overflow, so `factorial(35.0_f32)` is NaN rather than infinity.
pub fn factorial<T: MathScalar>(n: T) -> T {
    if n.is_nan() || n < T::zero() || n.floor() != n || n > lit::<T>(MAX_FACTORIAL_ARG) {
        return T::nan();
    }

    let mut result = T::one();
    let mut i = T::one();
    while i <= n {
        result *= i;
        i += T::one();
    }

    if result.is_infinite() {
        T::nan()
    } else {
        result
    }
}
