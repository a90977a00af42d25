//! Random test-data generation.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Share of generated numbers that are integers; the rest are floats.
pub const INTEGER_SHARE: f64 = 0.7;

/// Most values one call to [`generate`] produces.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Number,
    Text,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDataKind(pub String);

impl fmt::Display for UnknownDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown data type: {} (expected number, string or boolean)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDataKind {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyValues(pub usize);

impl fmt::Display for TooManyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count {} is too large, at most {} values are generated",
            self.0, MAX_COUNT
        )
    }
}

impl std::error::Error for TooManyValues {}

impl FromStr for DataKind {
    type Err = UnknownDataKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "number" => Ok(DataKind::Number),
            "string" => Ok(DataKind::Text),
            "boolean" | "bool" => Ok(DataKind::Boolean),
            _ => Err(UnknownDataKind(s.trim().to_string())),
        }
    }
}

/// One generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Int(n) => write!(f, "{}", n),
            Datum::Float(x) => write!(f, "{:.2}", x),
            Datum::Text(s) => write!(f, "'{}'", s),
            Datum::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Render values the way a list literal looks: `[1, 'abc', true]`.
pub fn format_list(data: &[Datum]) -> String {
    let items: Vec<String> = data.iter().map(Datum::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub fn generate<R: Rng + ?Sized>(
    kind: DataKind,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Datum>, TooManyValues> {
    if count > MAX_COUNT {
        return Err(TooManyValues(count));
    }
    Ok((0..count).map(|_| generate_one(kind, rng)).collect())
}

fn generate_one<R: Rng + ?Sized>(kind: DataKind, rng: &mut R) -> Datum {
    match kind {
        DataKind::Number => {
            if rng.gen_bool(INTEGER_SHARE) {
                Datum::Int(rng.gen_range(-100..=100))
            } else {
                let x: f64 = rng.gen_range(-100.0..100.0);
                Datum::Float((x * 100.0).round() / 100.0)
            }
        }
        DataKind::Text => {
            let len = rng.gen_range(3..=7);
            let word = (0..len)
                .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                .collect();
            Datum::Text(word)
        }
        DataKind::Boolean => Datum::Bool(rng.gen_bool(0.5)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_kind() {
        assert_eq!("Number".parse::<DataKind>(), Ok(DataKind::Number));
        assert_eq!("string".parse::<DataKind>(), Ok(DataKind::Text));
        assert_eq!("bool".parse::<DataKind>(), Ok(DataKind::Boolean));
        let err = "unknown".parse::<DataKind>().unwrap_err();
        assert!(err.to_string().starts_with("unknown data type: unknown"));
    }

    #[test]
    fn test_numbers_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = generate(DataKind::Number, 500, &mut rng).unwrap();
        assert_eq!(data.len(), 500);
        let mut ints = 0;
        for d in &data {
            match d {
                Datum::Int(n) => {
                    ints += 1;
                    assert!((-100..=100).contains(n));
                }
                Datum::Float(x) => {
                    assert!((-100.0..=100.0).contains(x));
                    assert!(((x * 100.0).round() - x * 100.0).abs() < 1e-6);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
        // roughly 70% integers
        assert!((250..450).contains(&ints), "{} integers", ints);
    }

    #[test]
    fn test_strings_are_short_lowercase_words() {
        let mut rng = StdRng::seed_from_u64(5);
        for d in generate(DataKind::Text, 100, &mut rng).unwrap() {
            let Datum::Text(s) = d else {
                panic!("expected text");
            };
            assert!((3..=7).contains(&s.len()), "{}", s);
            assert!(s.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_booleans_hit_both_values() {
        let mut rng = StdRng::seed_from_u64(9);
        let data = generate(DataKind::Boolean, 50, &mut rng).unwrap();
        assert!(data.contains(&Datum::Bool(true)));
        assert!(data.contains(&Datum::Bool(false)));
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = generate(DataKind::Number, 10, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = generate(DataKind::Number, 10, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_is_bounded() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(generate(DataKind::Boolean, MAX_COUNT, &mut rng).unwrap().len(), MAX_COUNT);
        assert_eq!(
            generate(DataKind::Text, usize::MAX, &mut rng),
            Err(TooManyValues(usize::MAX))
        );
    }

    #[test]
    fn test_format_list() {
        let data = vec![
            Datum::Int(-3),
            Datum::Float(12.5),
            Datum::Text("abc".to_string()),
            Datum::Bool(true),
        ];
        assert_eq!(format_list(&data), "[-3, 12.50, 'abc', true]");
        assert_eq!(format_list(&[]), "[]");
    }
}
