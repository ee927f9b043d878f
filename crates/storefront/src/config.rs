//! # Storefront configuration
//!
//! Endpoints, the delivery charge and the other constants of the ordering flow are
//! injected rather than hard-coded. [`StorefrontConfig::default`] carries the values of
//! the production shop; a JSON file or CLI flags can override any of them.
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PRODUCTS_URL: &str = "https://admin.refabry.com/api/all/product/get";
pub const DEFAULT_ORDER_URL: &str = "https://admin.refabry.com/api/public/order/create";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://admin.refabry.com/storage/product";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {field} URL {value:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Delivery charge must not be negative: {0}")]
    NegativeDeliveryCharge(Decimal),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub products_url: String,
    pub order_url: String,
    pub image_base_url: String,
    pub delivery_charge: Decimal,
    pub customer_name: String,
    pub courier: String,
    /// How long the success notice stays up, in seconds.
    #[serde(deserialize_with = "seconds")]
    pub notice_duration: Duration,
    pub low_stock_threshold: u32,
    /// Per-request HTTP timeout, in seconds.
    #[serde(deserialize_with = "seconds")]
    pub request_timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            order_url: DEFAULT_ORDER_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            delivery_charge: Decimal::from(80),
            customer_name: "Guest".to_string(),
            courier: "steadfast".to_string(),
            notice_duration: Duration::from_secs(5),
            low_stock_threshold: 5,
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

impl StorefrontConfig {
    /// Loads a config file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("products", &self.products_url),
            ("order", &self.order_url),
            ("image base", &self.image_base_url),
        ] {
            reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
                field,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if self.delivery_charge.is_sign_negative() && !self.delivery_charge.is_zero() {
            return Err(ConfigError::NegativeDeliveryCharge(self.delivery_charge));
        }
        Ok(())
    }
}
