//! Fibonacci sequence starting at `0, 1`.

use std::fmt;

/// Longest sequence whose terms all fit in a `u128`.
pub const MAX_TERMS: usize = 187;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibonacciError {
    NotPositive,
    TooLong(usize),
}

impl fmt::Display for FibonacciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibonacciError::NotPositive => write!(f, "count must be positive"),
            FibonacciError::TooLong(n) => {
                write!(f, "count {} is too large, at most {} terms fit", n, MAX_TERMS)
            }
        }
    }
}

impl std::error::Error for FibonacciError {}

/// The first `count` terms.
pub fn fibonacci(count: usize) -> Result<Vec<u128>, FibonacciError> {
    if count == 0 {
        return Err(FibonacciError::NotPositive);
    }
    let mut terms: Vec<u128> = Vec::with_capacity(count.min(MAX_TERMS));
    for i in 0..count {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => terms[i - 1]
                .checked_add(terms[i - 2])
                .ok_or(FibonacciError::TooLong(count))?,
        };
        terms.push(next);
    }
    Ok(terms)
}
