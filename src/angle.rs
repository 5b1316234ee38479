//! Angle units for the trigonometric functions
//!
//! The mode is never stored by the math functions; callers pass it with each
//! trigonometric call. Forward functions convert their *input* with
//! [`AngleMode::to_radians`], inverse functions convert their *output* with
//! [`AngleMode::from_radians`].

use crate::error::CalcError;
use crate::traits::{MathScalar, lit};
use std::fmt;
use std::str::FromStr;

/// Unit in which angle operands and results are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    Radians,
    /// Calculators start in degree mode
    #[default]
    Degrees,
}

impl AngleMode {
    /// Map the integer-style `is_rad` flag used by C-like calculator cores
    #[inline]
    pub fn from_radians_flag(is_rad: bool) -> Self {
        if is_rad {
            AngleMode::Radians
        } else {
            AngleMode::Degrees
        }
    }

    #[inline]
    pub fn is_radians(self) -> bool {
        self == AngleMode::Radians
    }

    /// The other mode (the DEG/RAD indicator toggle)
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }

    /// Convert an angle expressed in this mode into radians
    #[inline]
    pub fn to_radians<T: MathScalar>(self, angle: T) -> T {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * T::PI() / lit::<T>(180.0),
        }
    }

    /// Convert an angle in radians into this mode
    #[inline]
    pub fn from_radians<T: MathScalar>(self, angle: T) -> T {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * lit::<T>(180.0) / T::PI(),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Radians => write!(f, "RAD"),
            AngleMode::Degrees => write!(f, "DEG"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleMode::Radians),
            "deg" | "degree" | "degrees" => Ok(AngleMode::Degrees),
            _ => Err(CalcError::InvalidAngleMode {
                value: s.to_string(),
            }),
        }
    }
}
