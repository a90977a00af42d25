//! Purchase discount tiers.

/// Extra percentage points granted to regular customers.
pub const LOYALTY_BONUS: u32 = 3;

/// Result of applying the discount rules to a purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Discount in percent, `0` when none applies.
    pub percent: u32,
    pub total: f64,
}

/// Base discount for a purchase amount.
pub fn base_percent(amount: f64) -> u32 {
    if amount >= 10_000.0 {
        15
    } else if amount >= 5_000.0 {
        10
    } else if amount >= 1_000.0 {
        5
    } else {
        0
    }
}

pub fn quote(amount: f64, regular_customer: bool) -> Quote {
    let bonus = if regular_customer { LOYALTY_BONUS } else { 0 };
    let percent = base_percent(amount) + bonus;
    Quote {
        percent,
        total: amount * (1.0 - f64::from(percent) / 100.0),
    }
}
