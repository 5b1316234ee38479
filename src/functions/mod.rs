//! Name-based access to the function catalog
//!
//! Calculator front-ends identify operations by key label (`sin`, `√`, `x²`)
//! rather than by Rust function. This module resolves those labels through
//! a static [`Registry`] and dispatches to [`crate::math`].

use crate::angle::AngleMode;
use crate::error::CalcError;
use std::sync::OnceLock;

pub(crate) mod definitions;
pub(crate) mod registry;

pub use registry::{Category, FunctionDefinition, Registry};

/// Check if tracing is enabled via environment variable (cached)
fn trace_enabled() -> bool {
    static TRACE: OnceLock<bool> = OnceLock::new();
    *TRACE.get_or_init(|| {
        std::env::var("CALC_MATH_TRACE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// Evaluate a catalog function by canonical name or alias.
///
/// Binary operators take `[left, right]`. The angle mode is ignored by
/// functions that do not use it. A domain error is returned as NaN in
/// `Ok`; use [`evaluate_checked`] to turn it into an error.
///
/// # Example
/// ```
/// use calc_math::{AngleMode, evaluate};
/// let v = evaluate("sin", &[90.0], AngleMode::Degrees).unwrap();
/// assert!((v - 1.0).abs() < 1e-12);
/// ```
pub fn evaluate(name: &str, args: &[f64], mode: AngleMode) -> Result<f64, CalcError> {
    let def = Registry::get(name).ok_or_else(|| CalcError::unknown_function(name))?;

    if !def.validate_arity(args.len()) {
        return Err(CalcError::ArityMismatch {
            name: def.name,
            expected: def.arity,
            got: args.len(),
        });
    }

    let result = (def.eval)(args, mode);
    if trace_enabled() {
        eprintln!("[TRACE] {}{:?} [{}] => {}", def.name, args, mode, result);
    }
    Ok(result)
}

/// Like [`evaluate`], but a NaN result becomes [`CalcError::Domain`].
///
/// NaN operands are reported the same way, since the result is undefined
/// either way.
pub fn evaluate_checked(name: &str, args: &[f64], mode: AngleMode) -> Result<f64, CalcError> {
    let result = evaluate(name, args, mode)?;
    if result.is_nan() {
        // evaluate() already resolved the name, so this lookup cannot miss
        let canonical = Registry::get(name).map_or("?", |def| def.name);
        return Err(CalcError::Domain {
            name: canonical,
            args: args.to_vec(),
        });
    }
    Ok(result)
}

/// Named constants available on calculator keypads (`π`, `e`)
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "π" | "pi" | "PI" => Some(std::f64::consts::PI),
        "e" | "E" => Some(std::f64::consts::E),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_dispatches_by_alias() {
        assert_eq!(evaluate("+", &[2.0, 3.0], AngleMode::Degrees), Ok(5.0));
        assert_eq!(evaluate("x²", &[7.0], AngleMode::Degrees), Ok(49.0));
        assert_eq!(evaluate("!", &[5.0], AngleMode::Radians), Ok(120.0));
        assert_eq!(evaluate("%", &[-7.0, 3.0], AngleMode::Radians), Ok(-1.0));
    }

    #[test]
    fn test_evaluate_respects_angle_mode() {
        let deg = evaluate("asin", &[1.0], AngleMode::Degrees).unwrap();
        let rad = evaluate("asin", &[1.0], AngleMode::Radians).unwrap();
        assert!((deg - 90.0).abs() < 1e-12);
        assert!((rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        // Hyperbolic functions ignore the mode
        assert_eq!(
            evaluate("sinh", &[1.0], AngleMode::Degrees),
            evaluate("sinh", &[1.0], AngleMode::Radians)
        );
    }

    #[test]
    fn test_evaluate_unknown_and_arity() {
        assert_eq!(
            evaluate("cbrt", &[8.0], AngleMode::Degrees),
            Err(CalcError::unknown_function("cbrt"))
        );
        assert_eq!(
            evaluate("/", &[1.0], AngleMode::Degrees),
            Err(CalcError::ArityMismatch {
                name: "divide",
                expected: 2,
                got: 1
            })
        );
        assert!(matches!(
            evaluate("ln", &[], AngleMode::Degrees),
            Err(CalcError::ArityMismatch { got: 0, .. })
        ));
    }

    #[test]
    fn test_evaluate_returns_nan_for_domain_errors() {
        let v = evaluate("√", &[-1.0], AngleMode::Degrees).unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_evaluate_checked() {
        assert_eq!(
            evaluate_checked("x⁻¹", &[4.0], AngleMode::Degrees),
            Ok(0.25)
        );
        assert_eq!(
            evaluate_checked("x⁻¹", &[0.0], AngleMode::Degrees),
            Err(CalcError::Domain {
                name: "inverse",
                args: vec![0.0]
            })
        );
        let err = evaluate_checked("acos", &[2.0], AngleMode::Radians).unwrap_err();
        assert!(err.is_domain_error());
        assert!(matches!(
            evaluate_checked("nope", &[1.0], AngleMode::Radians),
            Err(CalcError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant("π"), Some(std::f64::consts::PI));
        assert_eq!(constant("e"), Some(std::f64::consts::E));
        assert_eq!(constant("tau"), None);
    }
}
