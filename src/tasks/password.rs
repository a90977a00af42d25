//! Password strength rules.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_LENGTH: usize = 8;

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("valid digit pattern"));
static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}").expect("valid uppercase pattern"));

/// First rule a password breaks, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weakness {
    TooShort,
    NoDigit,
    NoUppercase,
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weakness::TooShort => {
                write!(f, "password must be at least {} characters long", MIN_LENGTH)
            }
            Weakness::NoDigit => write!(f, "password must contain at least one digit"),
            Weakness::NoUppercase => {
                write!(f, "password must contain at least one uppercase letter")
            }
        }
    }
}

impl std::error::Error for Weakness {}

/// Length is counted in characters; digits and uppercase letters are Unicode-aware.
pub fn check_password(password: &str) -> Result<(), Weakness> {
    if password.chars().count() < MIN_LENGTH {
        Err(Weakness::TooShort)
    } else if !DIGIT.is_match(password) {
        Err(Weakness::NoDigit)
    } else if !UPPERCASE.is_match(password) {
        Err(Weakness::NoUppercase)
    } else {
        Ok(())
    }
}
