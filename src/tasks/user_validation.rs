//! User record validation.

use std::fmt;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<f64> = 0.0..=120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyName,
    AgeOutOfRange,
    EmailWithoutAt,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyName => write!(f, "name must not be empty"),
            ValidationIssue::AgeOutOfRange => write!(
                f,
                "age must be between {} and {}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
            ValidationIssue::EmailWithoutAt => write!(f, "email must contain @"),
        }
    }
}

/// Every rule the record breaks, in a fixed order. Empty means valid.
pub fn validate_user(name: &str, age: f64, email: &str) -> Vec<ValidationIssue> {
    let checks = [
        (name.trim().is_empty(), ValidationIssue::EmptyName),
        (!AGE_RANGE.contains(&age), ValidationIssue::AgeOutOfRange),
        (!email.contains('@'), ValidationIssue::EmailWithoutAt),
    ];
    checks
        .into_iter()
        .filter_map(|(failed, issue)| failed.then_some(issue))
        .collect()
}
