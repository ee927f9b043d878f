//! Lenient deserializers for the numeric fields of the catalog API.
//!
//! The API is not consistent about numbers: prices arrive as JSON numbers on some
//! products and as numeric strings on others, and an empty string stands in for
//! "no discount".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

fn parse_decimal(text: &str) -> Result<Decimal, String> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| format!("invalid amount {text:?}: {e}"))
}

impl RawAmount {
    fn into_decimal(self) -> Result<Option<Decimal>, String> {
        match self {
            RawAmount::Number(number) => parse_decimal(&number.to_string()).map(Some),
            RawAmount::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    parse_decimal(text).map(Some)
                }
            }
        }
    }
}

/// A required, non-negative amount.
pub fn non_negative<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = RawAmount::deserialize(deserializer)?
        .into_decimal()
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("amount is empty"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(D::Error::custom(format!("amount must not be negative: {amount}")));
    }
    Ok(amount)
}

/// An amount that may be absent, `null` or an empty string.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawAmount>::deserialize(deserializer)? {
        Some(raw) => raw.into_decimal().map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// A non-negative whole count, given as a number or a numeric string.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = non_negative(deserializer)?;
    if !amount.fract().is_zero() {
        return Err(D::Error::custom(format!("count must be a whole number: {amount}")));
    }
    amount
        .to_u32()
        .ok_or_else(|| D::Error::custom(format!("count out of range: {amount}")))
}
