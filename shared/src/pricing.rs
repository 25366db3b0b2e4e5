//! Price derivation helpers
//!
//! Membership tiers store an original price, a discounted price, and the
//! savings between them; forms edit the discount as a percentage. Prices are
//! whole currency units (i64), percentages f64.

use thiserror::Error;

/// Derivation error for the inverse price computation.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// Discount percent at or above 100 makes the inverse denominator
    /// non-positive; the derivation must fail instead of producing a
    /// non-finite value.
    #[error("discount percent {0} is out of range (expected 0 to less than 100)")]
    PercentOutOfRange(f64),
}

/// Discounted price after applying a percentage discount (rounded).
///
/// # Examples
///
/// ```
/// use shared::pricing::discount_price;
///
/// assert_eq!(discount_price(100, 20.0), 80);
/// assert_eq!(discount_price(999, 10.0), 899);
/// ```
pub fn discount_price(original: i64, percent: f64) -> i64 {
    (original as f64 - original as f64 * percent / 100.0).round() as i64
}

/// Amount saved relative to the original price.
pub fn savings(original: i64, percent: f64) -> i64 {
    original - discount_price(original, percent)
}

/// Infer the original price from a target price and the discount percent
/// that produced it.
///
/// `percent == 0` means no discount was applied and the price is already the
/// original. A percent at or above 100 (or below 0) is rejected explicitly:
/// the denominator `1 - percent/100` reaches zero and the result would be
/// infinite.
///
/// # Examples
///
/// ```
/// use shared::pricing::infer_original_price;
///
/// assert_eq!(infer_original_price(80, 20.0), Ok(100));
/// assert_eq!(infer_original_price(80, 0.0), Ok(80));
/// assert!(infer_original_price(80, 100.0).is_err());
/// ```
pub fn infer_original_price(price: i64, percent: f64) -> Result<i64, PriceError> {
    if !(0.0..100.0).contains(&percent) {
        return Err(PriceError::PercentOutOfRange(percent));
    }
    if percent == 0.0 {
        return Ok(price);
    }
    Ok((price as f64 / (1.0 - percent / 100.0)).round() as i64)
}

/// Discount percent implied by an original/discounted price pair (rounded).
///
/// Used to prefill the tier editor from a stored plan. A non-positive
/// original price yields 0.
pub fn discount_percent_of(original: i64, discounted: i64) -> i64 {
    if original <= 0 {
        return 0;
    }
    (((original - discounted) as f64 / original as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_price() {
        assert_eq!(discount_price(100, 20.0), 80);
        assert_eq!(discount_price(100, 0.0), 100);
        assert_eq!(discount_price(100, 100.0), 0);
        assert_eq!(discount_price(333, 33.0), 223);
    }

    #[test]
    fn test_savings() {
        assert_eq!(savings(100, 20.0), 20);
        assert_eq!(savings(100, 0.0), 0);
        assert_eq!(savings(999, 10.0), 100);
    }

    #[test]
    fn test_infer_original_price() {
        assert_eq!(infer_original_price(80, 20.0), Ok(100));
        assert_eq!(infer_original_price(450, 10.0), Ok(500));
        assert_eq!(infer_original_price(80, 0.0), Ok(80));
    }

    #[test]
    fn test_infer_rejects_boundary_percent() {
        assert_eq!(
            infer_original_price(80, 100.0),
            Err(PriceError::PercentOutOfRange(100.0))
        );
        assert!(infer_original_price(80, 120.0).is_err());
        assert!(infer_original_price(80, -5.0).is_err());
    }

    #[test]
    fn test_discount_percent_of() {
        assert_eq!(discount_percent_of(100, 80), 20);
        assert_eq!(discount_percent_of(100, 100), 0);
        assert_eq!(discount_percent_of(0, 0), 0);
        assert_eq!(discount_percent_of(-10, 5), 0);
        // Round trip with the forward derivation.
        let original = 1499;
        let percent = 35.0;
        let discounted = discount_price(original, percent);
        assert_eq!(discount_percent_of(original, discounted), 35);
    }
}
