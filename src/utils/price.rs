use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-supplied price. Accepts "2.5", "2,50" and a leading
/// currency-free sign; rejects negatives and anything that is not an exact
/// decimal (exponents included).
pub fn parse_price(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', ".");
    let price = Decimal::from_str(&normalized).ok()?;
    if price.is_sign_negative() && !price.is_zero() {
        return None;
    }
    Some(price)
}
