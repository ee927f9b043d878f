//! Catalog products as served by the products endpoint.
//!
//! Products are read-only for the whole session. Numeric fields go through the lenient
//! helpers in [`amount`](super::amount) so that both `499` and `"499.00"` are accepted,
//! while negative prices and stock counts are rejected at parse time.
use super::amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// The API sends ids as integers or strings; both are kept in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Self(number.to_string()),
            RawId::Text(text) => Self(text),
        })
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "amount::non_negative")]
    pub price: Decimal,
    #[serde(deserialize_with = "amount::count")]
    pub stock: u32,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default, deserialize_with = "amount::optional")]
    pub discount_amount: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product with only the fields the order workflow needs.
    ///
    /// # Arguments
    /// * `id` - Identifier as assigned by the catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `stock` - Units available
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            category: None,
            description: None,
            short_desc: None,
            additional_info: None,
            discount_amount: None,
            image: None,
        }
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount_amount = Some(discount);
        self
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(Category { name: name.into() });
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }

    /// Display URL of the product image: `<base>/<image>` with a single slash at the join.
    pub fn image_url(&self, base: &str) -> Option<String> {
        let image = self.image.as_deref().filter(|image| !image.is_empty())?;
        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            image.trim_start_matches('/')
        ))
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }
}
