//! The exercises themselves, as pure functions.
//!
//! Nothing in here reads input or prints; see the interpreter commands for that.

pub mod base_convert;
pub mod caesar;
pub mod calculator;
pub mod clock;
pub mod discount;
pub mod fibonacci;
pub mod guess;
pub mod number_stats;
pub mod password;
pub mod primes;
pub mod products;
pub mod sequence;
pub mod temperature;
pub mod test_data;
pub mod text_analyzer;
pub mod text_stats;
pub mod triangle;
pub mod user_validation;
