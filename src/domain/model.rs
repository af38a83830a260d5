use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type ProductId = u64;

/// Read-only view of the cart handed to consumers. A new `Arc` is installed on
/// every commit, so `Arc::ptr_eq` tells whether anything changed.
pub type Cart = Arc<Vec<CartItem>>;

/// Catalog record. Only the id is interpreted; every other field is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            details: serde_json::Map::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "amount", alias = "quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// Builds a fresh line item. A quantity field the catalog might have sent
    /// along is dropped so it cannot shadow ours when serialized.
    pub fn new(mut product: Product, quantity: u32) -> Self {
        product.details.remove("amount");
        product.details.remove("quantity");
        Self { product, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }
}
