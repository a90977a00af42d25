//! Celsius / Fahrenheit conversion.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub fn symbol(self) -> char {
        match self {
            Scale::Celsius => 'C',
            Scale::Fahrenheit => 'F',
        }
    }

    pub fn other(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }
}

/// The scale name was neither `C` nor `F`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScale(pub String);

impl fmt::Display for UnknownScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scale '{}', use C or F", self.0)
    }
}

impl std::error::Error for UnknownScale {}

impl FromStr for Scale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Scale::Celsius),
            "F" => Ok(Scale::Fahrenheit),
            _ => Err(UnknownScale(s.trim().to_string())),
        }
    }
}

/// Convert `value` given in `from` into the other scale.
pub fn convert(value: f64, from: Scale) -> f64 {
    match from {
        Scale::Celsius => value * 9.0 / 5.0 + 32.0,
        Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}
