use std::fmt;

/// Errors reported by the name-based dispatch layer.
///
/// The catalog functions in [`crate::math`] never return this type: they
/// signal a domain error by returning NaN. `CalcError` only appears when a
/// caller looks functions up by name or asks for a checked evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    // Lookup errors
    UnknownFunction {
        name: String,
    },
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    // Evaluation errors
    Domain {
        name: &'static str,
        args: Vec<f64>,
    },

    // Configuration errors
    InvalidAngleMode {
        value: String,
    },
}

impl CalcError {
    /// Create UnknownFunction from any string-like name
    pub fn unknown_function(name: impl Into<String>) -> Self {
        CalcError::UnknownFunction { name: name.into() }
    }

    /// True for errors caused by the operands rather than the call shape
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::Domain { .. })
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnknownFunction { name } => write!(f, "Unknown function: '{}'", name),
            CalcError::ArityMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Function '{}' takes {} argument{}, but {} {} given",
                    name,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    got,
                    if *got == 1 { "was" } else { "were" }
                )
            }
            CalcError::Domain { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(
                    f,
                    "Math error: '{}' is undefined for ({})",
                    name,
                    rendered.join(", ")
                )
            }
            CalcError::InvalidAngleMode { value } => {
                write!(
                    f,
                    "Invalid angle mode '{}': expected 'rad' or 'deg'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for CalcError {}
