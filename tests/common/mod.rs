#![allow(dead_code)]

use async_trait::async_trait;
use shop_cart::domain::ports::{Catalog, Storage};
use shop_cart::{
    CartError, MemoryNotifier, Notification, Product, ProductId, Result, Severity, Stock,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const KEY: &str = "@RocketShoes:cart";

/// Catalog whose stock levels can be changed while a store holds it.
#[derive(Clone, Default)]
pub struct StubCatalog {
    stock: Arc<Mutex<HashMap<ProductId, i64>>>,
    offline: Arc<Mutex<bool>>,
    products_offline: Arc<Mutex<bool>>,
    pub stock_calls: Arc<Mutex<usize>>,
    pub product_calls: Arc<Mutex<usize>>,
}

impl StubCatalog {
    pub fn with_stock(levels: &[(ProductId, i64)]) -> Self {
        let catalog = Self::default();
        for (id, amount) in levels {
            catalog.set_stock(*id, *amount);
        }
        catalog
    }

    pub fn set_stock(&self, product_id: ProductId, amount: i64) {
        self.stock.lock().unwrap().insert(product_id, amount);
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    /// Fails product lookups only; stock keeps answering.
    pub fn set_products_offline(&self, offline: bool) {
        *self.products_offline.lock().unwrap() = offline;
    }

    pub fn stock_calls(&self) -> usize {
        *self.stock_calls.lock().unwrap()
    }

    pub fn product_calls(&self) -> usize {
        *self.product_calls.lock().unwrap()
    }

    fn check_online(&self, path: String) -> Result<()> {
        if *self.offline.lock().unwrap() {
            return Err(CartError::UnexpectedStatus { url: path, status: 503 });
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock> {
        *self.stock_calls.lock().unwrap() += 1;
        self.check_online(format!("/stock/{}", product_id))?;
        let amount = self.stock.lock().unwrap().get(&product_id).copied();
        amount
            .map(|amount| Stock {
                id: Some(product_id),
                amount,
            })
            .ok_or(CartError::NotFound {
                resource: format!("/stock/{}", product_id),
            })
    }

    async fn product(&self, product_id: ProductId) -> Result<Product> {
        *self.product_calls.lock().unwrap() += 1;
        self.check_online(format!("/products/{}", product_id))?;
        if *self.products_offline.lock().unwrap() {
            return Err(CartError::UnexpectedStatus {
                url: format!("/products/{}", product_id),
                status: 502,
            });
        }
        Ok(Product::new(product_id)
            .with_detail("title", format!("Sneaker {}", product_id))
            .with_detail("price", 179.9)
            .with_detail("image", format!("https://cdn.example.com/{}.jpg", product_id)))
    }
}

pub fn error(message: &str) -> Notification {
    Notification::new(Severity::Error, message)
}

pub fn success(message: &str) -> Notification {
    Notification::new(Severity::Success, message)
}

/// Slot storage that counts writes and can be told to refuse them.
#[derive(Clone, Default)]
pub struct CountingStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<Mutex<bool>>,
    writes: Arc<Mutex<usize>>,
}

impl CountingStorage {
    pub fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.slots.lock().unwrap().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock().unwrap() = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }
}

impl Storage for CountingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.read_only.lock().unwrap() {
            return Err(CartError::StorageError {
                message: "quota exceeded".to_string(),
            });
        }
        *self.writes.lock().unwrap() += 1;
        self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
