//! Catalog entries for the function registry
//!
//! One [`FunctionDefinition`] per calculator operation, in the order a
//! scientific calculator lists them. Aliases are the key labels a front-end
//! sends (`√`, `x²`, `!`, ...) plus common short names.

use super::registry::{Category, FunctionDefinition};
use crate::math;

/// Return all function definitions for populating the registry
pub(crate) fn all_definitions() -> Vec<FunctionDefinition> {
    vec![
        // Basic & advanced
        FunctionDefinition {
            name: "add",
            aliases: &["+"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::add(args[0], args[1]),
        },
        FunctionDefinition {
            name: "sub",
            aliases: &["-", "−"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::sub(args[0], args[1]),
        },
        FunctionDefinition {
            name: "mul",
            aliases: &["x", "*", "×"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::mul(args[0], args[1]),
        },
        FunctionDefinition {
            name: "divide",
            aliases: &["/", "÷"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::divide(args[0], args[1]),
        },
        FunctionDefinition {
            name: "power",
            aliases: &["^", "xʸ", "pow"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::power(args[0], args[1]),
        },
        FunctionDefinition {
            name: "root",
            aliases: &["√", "sqrt"],
            arity: 1,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::root(args[0]),
        },
        FunctionDefinition {
            name: "modulo",
            aliases: &["%", "mod"],
            arity: 2,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::modulo(args[0], args[1]),
        },
        FunctionDefinition {
            name: "power_of_two",
            aliases: &["x²", "sqr"],
            arity: 1,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::power_of_two(args[0]),
        },
        FunctionDefinition {
            name: "inverse",
            aliases: &["x⁻¹", "inv"],
            arity: 1,
            category: Category::Arithmetic,
            uses_angle_mode: false,
            eval: |args, _| math::inverse(args[0]),
        },
        // Trigonometric
        FunctionDefinition {
            name: "sine",
            aliases: &["sin"],
            arity: 1,
            category: Category::Trigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::sine(args[0], mode),
        },
        FunctionDefinition {
            name: "cosine",
            aliases: &["cos"],
            arity: 1,
            category: Category::Trigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::cosine(args[0], mode),
        },
        FunctionDefinition {
            name: "tangent",
            aliases: &["tan"],
            arity: 1,
            category: Category::Trigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::tangent(args[0], mode),
        },
        // Inverse trigonometric
        FunctionDefinition {
            name: "arcsin",
            aliases: &["asin"],
            arity: 1,
            category: Category::InverseTrigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::arcsin(args[0], mode),
        },
        FunctionDefinition {
            name: "arccos",
            aliases: &["acos"],
            arity: 1,
            category: Category::InverseTrigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::arccos(args[0], mode),
        },
        FunctionDefinition {
            name: "arctan",
            aliases: &["atan"],
            arity: 1,
            category: Category::InverseTrigonometric,
            uses_angle_mode: true,
            eval: |args, mode| math::arctan(args[0], mode),
        },
        // Hyperbolic
        FunctionDefinition {
            name: "sinh",
            aliases: &[],
            arity: 1,
            category: Category::Hyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::sinh(args[0]),
        },
        FunctionDefinition {
            name: "cosh",
            aliases: &[],
            arity: 1,
            category: Category::Hyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::cosh(args[0]),
        },
        FunctionDefinition {
            name: "tanh",
            aliases: &[],
            arity: 1,
            category: Category::Hyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::tanh(args[0]),
        },
        // Inverse hyperbolic
        FunctionDefinition {
            name: "asinh",
            aliases: &[],
            arity: 1,
            category: Category::InverseHyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::asinh(args[0]),
        },
        FunctionDefinition {
            name: "acosh",
            aliases: &[],
            arity: 1,
            category: Category::InverseHyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::acosh(args[0]),
        },
        FunctionDefinition {
            name: "atanh",
            aliases: &[],
            arity: 1,
            category: Category::InverseHyperbolic,
            uses_angle_mode: false,
            eval: |args, _| math::atanh(args[0]),
        },
        // Logarithmic & exponential
        FunctionDefinition {
            name: "natural_log",
            aliases: &["ln"],
            arity: 1,
            category: Category::Logarithmic,
            uses_angle_mode: false,
            eval: |args, _| math::natural_log(args[0]),
        },
        FunctionDefinition {
            name: "base10_log",
            aliases: &["log", "log10"],
            arity: 1,
            category: Category::Logarithmic,
            uses_angle_mode: false,
            eval: |args, _| math::base10_log(args[0]),
        },
        FunctionDefinition {
            name: "exp",
            aliases: &["eˣ"],
            arity: 1,
            category: Category::Logarithmic,
            uses_angle_mode: false,
            eval: |args, _| math::exp(args[0]),
        },
        // Factorial
        FunctionDefinition {
            name: "factorial",
            aliases: &["!"],
            arity: 1,
            category: Category::Factorial,
            uses_angle_mode: false,
            eval: |args, _| math::factorial(args[0]),
        },
    ]
}
