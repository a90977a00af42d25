//! Arithmetic and geometric progressions.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// `first + i * step`
    Arithmetic,
    /// `first * step^i`
    Geometric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProgression(pub String);

impl fmt::Display for UnknownProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sequence type: {} (expected arithmetic or geometric)",
            self.0
        )
    }
}

impl std::error::Error for UnknownProgression {}

impl FromStr for Progression {
    type Err = UnknownProgression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arithmetic" | "арифметическая" => Ok(Progression::Arithmetic),
            "geometric" | "геометрическая" => Ok(Progression::Geometric),
            _ => Err(UnknownProgression(s.trim().to_string())),
        }
    }
}

/// Longest progression [`generate_sequence`] builds.
pub const MAX_TERMS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyTerms(pub usize);

impl fmt::Display for TooManyTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count {} is too large, at most {} terms are generated",
            self.0, MAX_TERMS
        )
    }
}

impl std::error::Error for TooManyTerms {}

/// The first `count` elements of the progression.
///
/// The first element is always present, so a count of 0 yields `[first]`.
pub fn generate_sequence(
    kind: Progression,
    first: f64,
    step: f64,
    count: usize,
) -> Result<Vec<f64>, TooManyTerms> {
    if count > MAX_TERMS {
        return Err(TooManyTerms(count));
    }
    let count = count.max(1);
    let values = match kind {
        Progression::Arithmetic => (0..count).map(|i| first + i as f64 * step).collect(),
        Progression::Geometric => std::iter::successors(Some(first), |x| Some(x * step))
            .take(count)
            .collect(),
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            generate_sequence(Progression::Arithmetic, 2.0, 3.0, 5),
            Ok(vec![2.0, 5.0, 8.0, 11.0, 14.0])
        );
    }

    #[test]
    fn test_geometric() {
        assert_eq!(
            generate_sequence(Progression::Geometric, 2.0, 3.0, 5),
            Ok(vec![2.0, 6.0, 18.0, 54.0, 162.0])
        );
    }

    #[test]
    fn test_zero_count_keeps_first_element() {
        assert_eq!(
            generate_sequence(Progression::Geometric, 1.0, 2.0, 0),
            Ok(vec![1.0])
        );
        assert_eq!(
            generate_sequence(Progression::Arithmetic, 5.0, 2.0, 1),
            Ok(vec![5.0])
        );
    }

    #[test]
    fn test_count_is_bounded() {
        let longest = generate_sequence(Progression::Arithmetic, 0.0, 1.0, MAX_TERMS).unwrap();
        assert_eq!(longest.len(), MAX_TERMS);
        assert_eq!(
            generate_sequence(Progression::Geometric, 1.0, 1.0, usize::MAX),
            Err(TooManyTerms(usize::MAX))
        );
        assert_eq!(
            TooManyTerms(10_001).to_string(),
            "count 10001 is too large, at most 10000 terms are generated"
        );
    }

    #[test]
    fn test_geometric_past_overflow_is_infinite() {
        let values = generate_sequence(Progression::Geometric, 1.0, 1e200, 4).unwrap();
        assert_eq!(values[1], 1e200);
        assert!(values[3].is_infinite());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Arithmetic".parse(), Ok(Progression::Arithmetic));
        assert_eq!("геометрическая".parse(), Ok(Progression::Geometric));
        assert_eq!(
            "неправильная".parse::<Progression>(),
            Err(UnknownProgression("неправильная".to_string()))
        );
    }
}
