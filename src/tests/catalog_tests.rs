//! End-to-end checks of the calculator catalog through the public API

use crate::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: f64, b: f64) -> bool {
    approx_eq(a, b)
}

#[test]
fn test_divide_then_multiply_recovers_dividend() {
    for (a, b) in [(1.0, 3.0), (-7.5, 0.25), (1e10, -3.3), (0.0, 5.0)] {
        assert!(close(divide(a, b) * b, a), "divide({a}, {b})");
    }
    assert!(divide(42.0_f64, 0.0).is_nan());
}

#[test]
fn test_root_squares_back() {
    for a in [0.0, 2.0, 10.0, 12345.678] {
        assert!(close(power_of_two(root(a)), a), "root({a})");
    }
    assert!(root(-1.0_f64).is_nan());
}

#[test]
fn test_factorial_examples() {
    assert_eq!(factorial(0.0), 1.0);
    assert_eq!(factorial(5.0), 120.0);
    assert!(factorial(-1.0_f64).is_nan());
    assert!(factorial(3.5_f64).is_nan());
    assert!(factorial(171.0_f64).is_nan());
    assert!(factorial(MAX_FACTORIAL_ARG).is_finite());
}

#[test]
fn test_sine_in_both_modes() {
    assert!(close(sine(90.0, AngleMode::Degrees), 1.0));
    assert!(close(sine(FRAC_PI_2, AngleMode::Radians), 1.0));
}

#[test]
fn test_arcsin_outside_unit_interval() {
    assert!(arcsin(2.0_f64, AngleMode::Degrees).is_nan());
    assert!(arcsin(2.0_f64, AngleMode::Radians).is_nan());
}

#[test]
fn test_natural_log_examples() {
    assert!(natural_log(0.0_f64).is_nan());
    assert!(natural_log(-5.0_f64).is_nan());
    assert_eq!(natural_log(1.0), 0.0);
}

#[test]
fn test_inverse_examples() {
    assert!(inverse(0.0_f64).is_nan());
    assert_eq!(inverse(4.0), 0.25);
}

#[test]
fn test_arcsin_undoes_sine_in_radians() {
    let steps = 40;
    for i in 1..steps {
        let x = -FRAC_PI_2 + PI * f64::from(i) / f64::from(steps);
        let back = arcsin(sine(x, AngleMode::Radians), AngleMode::Radians);
        assert!((back - x).abs() < 1e-9, "x = {x}, got {back}");
    }
}

#[test]
fn test_degree_round_trip_through_inverse_trig() {
    for deg in [-80.0_f64, -45.0, 0.0, 30.0, 60.0, 89.0] {
        let back = arcsin(sine(deg, AngleMode::Degrees), AngleMode::Degrees);
        assert!((back - deg).abs() < 1e-9, "deg = {deg}, got {back}");
        let back = arctan(tangent(deg, AngleMode::Degrees), AngleMode::Degrees);
        assert!((back - deg).abs() < 1e-9, "deg = {deg}, got {back}");
    }
}

#[test]
fn test_every_domain_guard() {
    let nan_cases = [
        ("divide", divide(1.0_f64, 0.0)),
        ("root", root(-4.0)),
        ("modulo", modulo(3.0, 0.0)),
        ("inverse", inverse(0.0)),
        ("power", power(-2.0, 0.5)),
        ("arcsin", arcsin(1.5, AngleMode::Radians)),
        ("arccos", arccos(-1.5, AngleMode::Degrees)),
        ("acosh", acosh(0.5)),
        ("atanh", atanh(1.0)),
        ("natural_log", natural_log(0.0)),
        ("base10_log", base10_log(-1.0)),
        ("factorial", factorial(2.5)),
    ];
    for (name, value) in nan_cases {
        assert!(value.is_nan(), "{name} should be NaN, got {value}");
    }
}

#[test]
fn test_total_functions_stay_defined() {
    assert!(!add(f64::MAX, f64::MAX).is_nan());
    assert!(!sub(-3.0_f64, 4.0).is_nan());
    assert!(!mul(1e200_f64, 1e200).is_nan());
    assert!(!power_of_two(-1e10_f64).is_nan());
    assert!(!arctan(-1e300_f64, AngleMode::Degrees).is_nan());
    assert!(!sinh(3.0_f64).is_nan());
    assert!(!cosh(-3.0_f64).is_nan());
    assert!(!tanh(1e3_f64).is_nan());
    assert!(!asinh(-1e6_f64).is_nan());
    assert!(!exp(1e3_f64).is_nan());
    assert_eq!(exp(1e3), f64::INFINITY);
}

#[test]
fn test_f32_catalog() {
    assert!((sine(90.0_f32, AngleMode::Degrees) - 1.0).abs() < 1e-6);
    assert!((arccos(0.0_f32, AngleMode::Degrees) - 90.0).abs() < 1e-4);
    assert_eq!(factorial(4.0_f32), 24.0);
    assert!(natural_log(0.0_f32).is_nan());
}
