//! Prime listing by trial division.

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..)
        .take_while(|d: &u64| d.saturating_mul(*d) <= n)
        .all(|d| n % d != 0)
}

/// All primes in `2..=n`, ascending.
pub fn primes_up_to(n: u64) -> Vec<u64> {
    (2..=n).filter(|&k| is_prime(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ranges() {
        assert!(primes_up_to(0).is_empty());
        assert!(primes_up_to(1).is_empty());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert_eq!(primes_up_to(13).last(), Some(&13));
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(1));
        assert!(!is_prime(49));
        assert!(is_prime(97));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_297)); // 641 * 6700417
    }
}
