//! Number guessing game state.

use rand::Rng;
use std::ops::RangeInclusive;

/// Answer to one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The secret is greater than the guess.
    Higher,
    /// The secret is smaller than the guess.
    Lower,
    Correct,
}

#[derive(Debug, Clone)]
pub struct GuessingGame {
    secret: i64,
    range: RangeInclusive<i64>,
    attempts: u32,
    max_attempts: Option<u32>,
}

impl GuessingGame {
    /// Panics if `secret` lies outside `range`.
    pub fn new(secret: i64, range: RangeInclusive<i64>, max_attempts: Option<u32>) -> Self {
        assert!(range.contains(&secret), "secret outside of range");
        Self {
            secret,
            range,
            attempts: 0,
            max_attempts,
        }
    }

    /// Draw the secret uniformly from a non-empty `range`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        range: RangeInclusive<i64>,
        max_attempts: Option<u32>,
    ) -> Self {
        let secret = rng.gen_range(range.clone());
        Self::new(secret, range, max_attempts)
    }

    pub fn guess(&mut self, n: i64) -> Hint {
        self.attempts += 1;
        match n.cmp(&self.secret) {
            std::cmp::Ordering::Less => Hint::Higher,
            std::cmp::Ordering::Greater => Hint::Lower,
            std::cmp::Ordering::Equal => Hint::Correct,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts left, `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.max_attempts
            .map(|max| max.saturating_sub(self.attempts))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }
}
