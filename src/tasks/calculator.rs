//! Four-function calculator with a short operation history.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Number of operations kept in [`History`].
pub const HISTORY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    UnknownOperator(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::UnknownOperator(op) => write!(f, "unknown operation '{}'", op),
        }
    }
}

impl std::error::Error for CalcError {}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" | "x" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

pub fn calculate(a: f64, op: Operator, b: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Div => Ok(a / b),
    }
}

/// The last [`HISTORY_LEN`] successful operations, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn record(&mut self, a: f64, op: Operator, b: f64, result: f64) {
        self.entries
            .push_front(format!("{} {} {} = {}", a, op.symbol(), b, result));
        self.entries.truncate(HISTORY_LEN);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations() {
        assert_eq!(calculate(5.0, Operator::Add, 3.0), Ok(8.0));
        assert_eq!(calculate(8.0, Operator::Sub, 2.0), Ok(6.0));
        assert_eq!(calculate(7.0, Operator::Mul, 4.0), Ok(28.0));
        assert_eq!(calculate(10.0, Operator::Div, 4.0), Ok(2.5));
        assert_eq!(
            calculate(1.0, Operator::Div, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse_operator() {
        assert_eq!("*".parse(), Ok(Operator::Mul));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn test_history_keeps_newest_three() {
        let mut history = History::default();
        history.record(5.0, Operator::Add, 3.0, 8.0);
        history.record(10.0, Operator::Div, 2.0, 5.0);
        history.record(7.0, Operator::Mul, 4.0, 28.0);
        history.record(8.0, Operator::Sub, 2.0, 6.0);

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["8 - 2 = 6", "7 * 4 = 28", "10 / 2 = 5"]);
    }
}
