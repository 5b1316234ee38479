//! Scalar Math Library
//!
//! Stateless scalar functions backing a scientific calculator: arithmetic,
//! trigonometric (degrees or radians), hyperbolic, logarithmic/exponential
//! and factorial.
//!
//! # Features
//! - Pure functions, generic over `f32` and `f64`
//! - Domain errors reported as NaN, never as panics
//! - Per-call [`AngleMode`] for trigonometric operands and results
//! - Name-based dispatch by calculator key label (`sin`, `√`, `x²`, `!`)
//!
//! # Usage Examples
//!
//! ## Direct calls
//! ```
//! use calc_math::{AngleMode, factorial, root, sine};
//! assert!((sine(90.0_f64, AngleMode::Degrees) - 1.0).abs() < 1e-12);
//! assert_eq!(factorial(5.0), 120.0);
//! assert!(root(-1.0_f64).is_nan());
//! ```
//!
//! ## By key label
//! ```
//! use calc_math::{AngleMode, CalcError, evaluate_checked};
//! assert_eq!(evaluate_checked("x⁻¹", &[4.0], AngleMode::Degrees), Ok(0.25));
//! assert!(matches!(
//!     evaluate_checked("ln", &[0.0], AngleMode::Degrees),
//!     Err(CalcError::Domain { .. })
//! ));
//! ```

mod angle;
mod error;
pub mod functions;
pub mod math;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use angle::AngleMode;
pub use error::CalcError;
pub use functions::{Category, FunctionDefinition, Registry, constant, evaluate, evaluate_checked};
pub use math::{
    MAX_FACTORIAL_ARG, acosh, add, arccos, arcsin, arctan, asinh, atanh, base10_log, cosh, cosine,
    divide, exp, factorial, inverse, modulo, mul, natural_log, power, power_of_two, root, sine,
    sinh, sub, tangent, tanh,
};
pub use traits::{FLOAT_TOLERANCE, MathScalar, approx_eq};
