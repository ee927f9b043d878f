//! Price arithmetic for cash-on-delivery orders.
//!
//! All amounts are [`Decimal`]; totals are rounded to two places, half away from zero.
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, half away from zero.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `price * quantity`, or `None` on overflow.
pub fn line_total(price: Decimal, quantity: i64) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// Amount collected on delivery: `round2(price * quantity + delivery_charge)`.
pub fn cod_amount(price: Decimal, quantity: i64, delivery_charge: Decimal) -> Option<Decimal> {
    line_total(price, quantity)?
        .checked_add(delivery_charge)
        .map(round2)
}

/// Discount for the whole line; `None` when the product has no (or a zero) discount.
pub fn discount_total(discount: Option<Decimal>, quantity: i64) -> Option<Decimal> {
    let discount = discount.filter(|discount| !discount.is_zero())?;
    line_total(discount, quantity).map(round2)
}

/// Two-decimal rendering, e.g. `1577.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut amount = round2(amount);
    amount.rescale(2);
    amount.to_string()
}

/// Shortest rendering without trailing zeros, e.g. `80`.
pub fn format_plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}
