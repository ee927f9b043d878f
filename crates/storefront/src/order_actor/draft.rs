//! The order being filled in for the selected product.
use crate::config::StorefrontConfig;
use crate::model::{OrderPayload, Product};
use crate::pricing;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

/// Quantity as typed by the customer. Anything but an integer is kept as `NotANumber`
/// so that validation can happen at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Value(i64),
    NotANumber,
}

impl Default for Quantity {
    fn default() -> Self {
        Self::Value(1)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl Quantity {
    /// Parses field text the way a number input reports it: leading whitespace and an
    /// optional sign, then the leading run of digits. `"3 pcs"` is 3, `"abc"` and `""`
    /// are not a number.
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let sign_len = usize::from(matches!(text.as_bytes().first(), Some(b'-' | b'+')));
        let digits = text[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Self::NotANumber;
        }
        match text[..sign_len + digits].parse::<i64>() {
            Ok(value) => Self::Value(value),
            Err(_) => Self::NotANumber,
        }
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotANumber => None,
        }
    }

    pub fn is_positive(self) -> bool {
        self.value().is_some_and(|value| value > 0)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Values of the order that do not come from the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSettings {
    pub delivery_charge: Decimal,
    pub customer_name: String,
    pub courier: String,
    pub notice_duration: Duration,
}

impl From<&StorefrontConfig> for OrderSettings {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            delivery_charge: config.delivery_charge,
            customer_name: config.customer_name.clone(),
            courier: config.courier.clone(),
            notice_duration: config.notice_duration,
        }
    }
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self::from(&StorefrontConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product: Arc<Product>,
    pub quantity: Quantity,
    pub phone: String,
    pub address: String,
}

impl OrderDraft {
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: Quantity::default(),
            phone: String::new(),
            address: String::new(),
        }
    }

    /// Back to quantity 1 and empty contact fields, same product.
    pub fn reset(&mut self) {
        *self = Self::new(self.product.clone());
    }

    pub fn is_complete(&self) -> bool {
        !self.phone.is_empty() && !self.address.is_empty() && self.quantity.is_positive()
    }

    /// `round2(price * quantity + delivery_charge)`; `None` while the quantity is not a number.
    pub fn compute_total(&self, delivery_charge: Decimal) -> Option<Decimal> {
        pricing::cod_amount(self.product.price, self.quantity.value()?, delivery_charge)
    }

    /// Builds the request body, or `None` when the draft does not pass validation.
    pub fn to_payload(&self, settings: &OrderSettings) -> Option<OrderPayload> {
        if !self.is_complete() {
            return None;
        }
        let quantity = self.quantity.value()?;
        let cod_amount = self.compute_total(settings.delivery_charge)?;
        Some(OrderPayload {
            product_ids: self.product.id.to_string(),
            s_product_qty: quantity.to_string(),
            c_phone: self.phone.clone(),
            c_name: settings.customer_name.clone(),
            courier: settings.courier.clone(),
            address: self.address.clone(),
            advance: None,
            cod_amount: pricing::format_amount(cod_amount),
            discount_amount: pricing::discount_total(self.product.discount_amount, quantity)
                .map(pricing::format_amount),
            delivery_charge: pricing::format_plain(settings.delivery_charge),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft(price: &str) -> OrderDraft {
        OrderDraft::new(Arc::new(Product::new(7, "Panjabi", Decimal::from_str(price).unwrap(), 4)))
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(Quantity::parse("3"), Quantity::Value(3));
        assert_eq!(Quantity::parse("  12abc"), Quantity::Value(12));
        assert_eq!(Quantity::parse("-4"), Quantity::Value(-4));
        assert_eq!(Quantity::parse("+2"), Quantity::Value(2));
        assert_eq!(Quantity::parse("0"), Quantity::Value(0));
        assert_eq!(Quantity::parse(""), Quantity::NotANumber);
        assert_eq!(Quantity::parse("abc"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("-"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("99999999999999999999999"), Quantity::NotANumber);
        assert_eq!(Quantity::parse("-9223372036854775808"), Quantity::Value(i64::MIN));
        assert_eq!(Quantity::parse("9223372036854775808"), Quantity::NotANumber);
    }

    #[test]
    fn test_total_follows_quantity() {
        let mut draft = draft("499.00");
        assert_eq!(draft.compute_total(Decimal::from(80)), Some(Decimal::from(579)));
        draft.quantity = Quantity::Value(3);
        assert_eq!(draft.compute_total(Decimal::from(80)), Some(Decimal::from(1577)));
        draft.quantity = Quantity::NotANumber;
        assert_eq!(draft.compute_total(Decimal::from(80)), None);
    }

    #[test]
    fn test_payload_fields() {
        let mut draft = draft("499.00");
        draft.quantity = Quantity::Value(3);
        draft.phone = "01700000000".into();
        draft.address = "House 1, Dhaka".into();

        let payload = draft.to_payload(&OrderSettings::default()).unwrap();
        assert_eq!(payload.product_ids, "7");
        assert_eq!(payload.s_product_qty, "3");
        assert_eq!(payload.c_name, "Guest");
        assert_eq!(payload.courier, "steadfast");
        assert_eq!(payload.cod_amount, "1577.00");
        assert_eq!(payload.discount_amount, None);
        assert_eq!(payload.delivery_charge, "80");
    }

    #[test]
    fn test_payload_discount_scales_with_quantity() {
        let mut draft = OrderDraft::new(Arc::new(
            Product::new(1, "Saree", Decimal::from(1200), 10).with_discount(Decimal::new(505, 1)),
        ));
        draft.quantity = Quantity::Value(2);
        draft.phone = "017".into();
        draft.address = "Chattogram".into();

        let payload = draft.to_payload(&OrderSettings::default()).unwrap();
        assert_eq!(payload.discount_amount.as_deref(), Some("101.00"));
    }

    #[test]
    fn test_incomplete_drafts_have_no_payload() {
        let settings = OrderSettings::default();
        let mut draft = draft("10");
        draft.phone = "017".into();
        assert!(draft.to_payload(&settings).is_none());

        draft.address = "Dhaka".into();
        draft.quantity = Quantity::Value(0);
        assert!(draft.to_payload(&settings).is_none());

        draft.quantity = Quantity::NotANumber;
        assert!(draft.to_payload(&settings).is_none());

        draft.quantity = Quantity::Value(1);
        assert!(draft.to_payload(&settings).is_some());
    }

    #[test]
    fn test_reset_keeps_product() {
        let mut draft = draft("10");
        draft.quantity = Quantity::Value(5);
        draft.phone = "017".into();
        draft.reset();
        assert_eq!(draft.quantity, Quantity::Value(1));
        assert!(draft.phone.is_empty());
        assert_eq!(draft.product.name, "Panjabi");
    }
}
