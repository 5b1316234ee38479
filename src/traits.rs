use num_traits::{Float, FloatConst, FromPrimitive, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, Rem, SubAssign};

/// Default tolerance for floating-point comparisons
pub const FLOAT_TOLERANCE: f64 = 1e-10;

/// A trait comprising all operations required of a calculator operand.
///
/// This aggregates `num_traits::Float` (providing sin, cos, exp, etc.),
/// `FloatConst` (PI, E), and the compound-assignment operators used by the
/// iterative routines. Both `f32` and `f64` satisfy it.
pub trait MathScalar:
    Float
    + FloatConst
    + FromPrimitive
    + ToPrimitive
    + Debug
    + Display
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + ToPrimitive
        + Debug
        + Display
        + Rem<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + 'static
{
}

/// Convert an `f64` literal into `T`.
///
/// Falls back to NaN for the (unreachable for f32/f64) case where the
/// literal is not representable.
#[inline]
pub(crate) fn lit<T: MathScalar>(v: f64) -> T {
    T::from_f64(v).unwrap_or_else(T::nan)
}

// ===== Float tolerance helpers =====

/// Check if two floats agree within `FLOAT_TOLERANCE`, scaled by magnitude
/// once the operands exceed one.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() < FLOAT_TOLERANCE * scale
}
