//! Order wire types and the outcome of one submission attempt.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST <order_url>`.
///
/// Every numeric field travels as a string; `advance` is always `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    pub product_ids: String,
    pub s_product_qty: String,
    pub c_phone: String,
    pub c_name: String,
    pub courier: String,
    pub address: String,
    pub advance: Option<String>,
    pub cod_amount: String,
    pub discount_amount: Option<String>,
    pub delivery_charge: String,
}

/// JSON answer of the order endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub status: Value,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

fn lenient_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl OrderResponse {
    /// `false`, `null`, `0` and `""` are falsy; everything else is truthy.
    pub fn is_accepted(&self) -> bool {
        match &self.status {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}

/// What the transport hands back for a completed order request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub http_status: u16,
    pub body: OrderResponse,
}

/// Outcome of one submission attempt. Only the latest one is kept by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderResult {
    Success { message: String },
    Failure { message: String },
}

impl OrderResult {
    pub const VALIDATION_MESSAGE: &'static str =
        "Please enter your phone number, address, and a valid quantity.";
    pub const TRANSPORT_MESSAGE: &'static str = "An error occurred while placing the order.";
    pub const REJECTED_MESSAGE: &'static str = "Failed to place order.";

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn validation_failure() -> Self {
        Self::failure(Self::VALIDATION_MESSAGE)
    }

    pub fn transport_failure() -> Self {
        Self::failure(Self::TRANSPORT_MESSAGE)
    }

    /// Interprets a response: a 2xx status with a truthy `status` field is a success,
    /// anything else a failure carrying the server message when there is one.
    pub fn from_receipt(receipt: &OrderReceipt) -> Self {
        let ok = (200..300).contains(&receipt.http_status);
        if ok && receipt.body.is_accepted() {
            Self::Success {
                message: receipt.body.message.clone().unwrap_or_default(),
            }
        } else {
            Self::failure(receipt.body.message().unwrap_or(Self::REJECTED_MESSAGE))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt(http_status: u16, body: Value) -> OrderReceipt {
        OrderReceipt {
            http_status,
            body: serde_json::from_value(body).unwrap(),
        }
    }

    #[test]
    fn test_truthiness_of_status() {
        for falsy in [json!(false), json!(null), json!(0), json!("")] {
            let response = OrderResponse {
                status: falsy.clone(),
                message: None,
            };
            assert!(!response.is_accepted(), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("ok"), json!({}), json!([])] {
            let response = OrderResponse {
                status: truthy.clone(),
                message: None,
            };
            assert!(response.is_accepted(), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_accepted_order_is_success_with_server_message() {
        let result = OrderResult::from_receipt(&receipt(200, json!({ "status": true, "message": "OK" })));
        assert_eq!(result, OrderResult::Success { message: "OK".into() });
    }

    #[test]
    fn test_rejected_order_uses_server_message_or_fallback() {
        let result = OrderResult::from_receipt(&receipt(
            200,
            json!({ "status": false, "message": "Out of stock" }),
        ));
        assert_eq!(result, OrderResult::failure("Out of stock"));

        let result = OrderResult::from_receipt(&receipt(200, json!({ "status": 0 })));
        assert_eq!(result, OrderResult::failure(OrderResult::REJECTED_MESSAGE));

        let result = OrderResult::from_receipt(&receipt(422, json!({ "status": true, "message": "" })));
        assert_eq!(result, OrderResult::failure(OrderResult::REJECTED_MESSAGE));
    }

    #[test]
    fn test_payload_serializes_nulls() {
        let payload = OrderPayload {
            product_ids: "7".into(),
            s_product_qty: "3".into(),
            c_phone: "017".into(),
            c_name: "Guest".into(),
            courier: "steadfast".into(),
            address: "Dhaka".into(),
            advance: None,
            cod_amount: "1577.00".into(),
            discount_amount: None,
            delivery_charge: "80".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["advance"], Value::Null);
        assert_eq!(value["discount_amount"], Value::Null);
        assert_eq!(value["cod_amount"], "1577.00");
    }
}
