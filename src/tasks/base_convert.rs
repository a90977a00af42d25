//! Conversion between number bases 2 to 36.

use std::fmt;

pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseError {
    UnsupportedBase(u32),
    InvalidNumber { number: String, base: u32 },
}

impl fmt::Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseError::UnsupportedBase(b) => write!(f, "base {} is not between 2 and 36", b),
            BaseError::InvalidNumber { number, base } => {
                write!(f, "'{}' is not a valid base {} number", number, base)
            }
        }
    }
}

impl std::error::Error for BaseError {}

fn check_base(base: u32) -> Result<u32, BaseError> {
    if (2..=36).contains(&base) {
        Ok(base)
    } else {
        Err(BaseError::UnsupportedBase(base))
    }
}

/// Convert `number`, written in base `from`, to base `to`.
///
/// Input digits are case-insensitive and may carry a leading `-`; output digits
/// are uppercase.
pub fn convert_base(number: &str, from: u32, to: u32) -> Result<String, BaseError> {
    let from = check_base(from)?;
    let to = check_base(to)?;
    let invalid = || BaseError::InvalidNumber {
        number: number.to_string(),
        base: from,
    };

    let trimmed = number.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    // `from_str_radix` would also accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let value = u128::from_str_radix(digits, from).map_err(|_| invalid())?;

    let mut out = Vec::new();
    let mut n = value;
    loop {
        out.push(DIGITS[(n % u128::from(to)) as usize]);
        n /= u128::from(to);
        if n == 0 {
            break;
        }
    }
    if negative && value != 0 {
        out.push(b'-');
    }
    out.reverse();
    Ok(out.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(convert_base("255", 10, 16).unwrap(), "FF");
        assert_eq!(convert_base("1010", 2, 10).unwrap(), "10");
        assert_eq!(convert_base("10", 10, 2).unwrap(), "1010");
        assert_eq!(convert_base("ff", 16, 10).unwrap(), "255");
        assert_eq!(convert_base("0", 10, 2).unwrap(), "0");
        assert_eq!(convert_base("Z", 36, 10).unwrap(), "35");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(convert_base("-255", 10, 16).unwrap(), "-FF");
        assert_eq!(convert_base("-0", 10, 2).unwrap(), "0");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            convert_base("XYZ", 10, 2),
            Err(BaseError::InvalidNumber {
                number: "XYZ".to_string(),
                base: 10
            })
        );
        assert!(convert_base("12", 2, 10).is_err());
        assert!(convert_base("", 10, 2).is_err());
        assert!(convert_base("--1", 10, 2).is_err());
        assert!(convert_base("-+1", 10, 2).is_err());
        assert_eq!(convert_base("1", 1, 10), Err(BaseError::UnsupportedBase(1)));
        assert_eq!(convert_base("1", 10, 37), Err(BaseError::UnsupportedBase(37)));
    }
}
