//! Scalar math functions
//!
//! Every calculator operation is a pure function of one or two scalars,
//! organized by category. All functions are generic over [`MathScalar`]
//! (`f32` and `f64`).
//!
//! # Domain Validation
//!
//! Undefined results are reported by returning NaN, never by panicking or
//! returning an error. A NaN operand propagates to a NaN result. Key
//! validations include:
//!
//! - **Division / inverse**: a zero divisor is a domain error
//! - **Square root**: negative inputs are domain errors
//! - **Logarithms**: non-positive inputs are domain errors
//! - **Inverse trig**: |x| > 1 is a domain error for asin/acos
//! - **Inverse hyperbolic**: x < 1 for acosh, |x| >= 1 for atanh
//! - **Factorial**: negative, fractional, or n > 170 arguments
//!
//! Functions that are total (tangent near its poles, exp for large inputs)
//! follow the underlying float primitive and may return very large values or
//! infinity.
//!
//! [`MathScalar`]: crate::traits::MathScalar

mod arithmetic;
mod factorial;
mod hyperbolic;
mod logexp;
mod trig;

pub use arithmetic::{add, divide, inverse, modulo, mul, power, power_of_two, root, sub};
pub use factorial::{MAX_FACTORIAL_ARG, factorial};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use logexp::{base10_log, exp, natural_log};
pub use trig::{arccos, arcsin, arctan, cosine, sine, tangent};
