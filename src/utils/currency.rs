//! Money helpers. Sums of prices are accumulated in whole cents so that
//! adding many decimal amounts does not drift.

/// Convert a decimal amount to cents, rounding to the nearest cent.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert cents back to a decimal amount.
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Exact sum of decimal amounts.
pub fn sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    from_cents(amounts.into_iter().map(to_cents).sum())
}

/// Format an amount as a dollar string with 2 decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", from_cents(to_cents(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(100.0), 10000);
        assert_eq!(to_cents(0.50), 50);
        assert_eq!(to_cents(29.99), 2999);
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(from_cents(10000), 100.0);
        assert_eq!(from_cents(2999), 29.99);
    }

    #[test]
    fn test_sum_does_not_drift() {
        let naive: f64 = [0.1, 0.2].iter().sum();
        assert_ne!(naive, 0.3);
        assert_eq!(sum([0.1, 0.2]), 0.3);
        assert_eq!(sum(std::iter::repeat(0.01).take(1000)), 10.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }
}
