//! Summary statistics over a list of integers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: i128,
    pub mean: f64,
    pub max: i64,
    pub min: i64,
}

/// `None` for an empty list.
pub fn summarize(numbers: &[i64]) -> Option<Summary> {
    let max = *numbers.iter().max()?;
    let min = *numbers.iter().min()?;
    let sum: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    Some(Summary {
        count: numbers.len(),
        sum,
        mean: sum as f64 / numbers.len() as f64,
        max,
        min,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let s = summarize(&[4, -2, 7, 1]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.sum, 10);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.max, 7);
        assert_eq!(s.min, -2);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let s = summarize(&[i64::MAX, i64::MAX]).unwrap();
        assert_eq!(s.sum, 2 * i128::from(i64::MAX));
    }

    #[test]
    fn test_empty() {
        assert_eq!(summarize(&[]), None);
    }
}
