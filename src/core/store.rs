use crate::config::StoreSettings;
use crate::core::cart;
use crate::domain::model::{Cart, CartItem, ProductId, UpdateProductAmount};
use crate::domain::ports::{Catalog, Notifier, Storage};
use crate::utils::error::{CartError, ErrorKind, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// What an operation did to the cart. Failures are reported to the user
/// through the notifier; this only says whether the cart changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Ignored,
    Rejected,
}

/// Owns the cart for one session.
///
/// The sequence is hydrated from the storage slot on construction and
/// written back after every successful mutation. Mutations take `&mut self`:
/// one operation runs at a time, and each either commits a complete new
/// sequence or leaves both the in-memory cart and the snapshot untouched.
pub struct CartStore<C: Catalog, S: Storage, N: Notifier> {
    catalog: C,
    storage: S,
    notifier: N,
    settings: StoreSettings,
    changes: watch::Sender<Cart>,
}

impl<C: Catalog, S: Storage, N: Notifier> CartStore<C, S, N> {
    pub fn new(catalog: C, storage: S, notifier: N, settings: StoreSettings) -> Self {
        let items = hydrate(&storage, &settings.storage_key);
        let (changes, _) = watch::channel(Arc::new(items));
        Self {
            catalog,
            storage,
            notifier,
            settings,
            changes,
        }
    }

    pub fn cart(&self) -> Cart {
        self.changes.borrow().clone()
    }

    /// Receivers are woken on every commit and on `reload`.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.changes.subscribe()
    }

    pub fn get(&self, product_id: ProductId) -> Option<CartItem> {
        let items = self.cart();
        cart::position(&items, product_id).map(|index| items[index].clone())
    }

    pub fn len(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        cart::total_quantity(&self.changes.borrow())
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Re-reads the snapshot, as a page reload would.
    pub fn reload(&mut self) {
        let items = hydrate(&self.storage, &self.settings.storage_key);
        self.changes.send_replace(Arc::new(items));
    }

    pub async fn add(&mut self, product_id: ProductId) -> Outcome {
        match self.try_add(product_id).await {
            Ok(appended) => {
                if appended {
                    self.notifier.success(&self.settings.messages.product_added);
                }
                Outcome::Committed
            }
            Err(e) => self.reject("add", e, &self.settings.messages.add_failed),
        }
    }

    pub fn remove(&mut self, product_id: ProductId) -> Outcome {
        let result = cart::without(&self.cart(), product_id).and_then(|next| self.commit(next));
        match result {
            Ok(()) => {
                tracing::info!("Removed product {} from cart", product_id);
                Outcome::Committed
            }
            Err(e) => self.reject("remove", e, &self.settings.messages.remove_failed),
        }
    }

    pub async fn update_quantity(&mut self, request: UpdateProductAmount) -> Outcome {
        if request.amount <= 0 {
            tracing::debug!(
                "Ignoring non-positive amount {} for product {}",
                request.amount,
                request.product_id
            );
            return Outcome::Ignored;
        }

        match self.try_update(request).await {
            Ok(()) => Outcome::Committed,
            Err(e) => self.reject("update", e, &self.settings.messages.update_failed),
        }
    }

    /// Returns whether a new line was appended.
    async fn try_add(&mut self, product_id: ProductId) -> Result<bool> {
        let current = self.cart();
        let desired = cart::next_quantity(&current, product_id)?;

        tracing::debug!("Looking up stock for product {}", product_id);
        let stock = self.catalog.stock(product_id).await?;
        cart::ensure_in_stock(product_id, i64::from(desired), &stock)?;

        let (next, appended) = match cart::position(&current, product_id) {
            Some(_) => (cart::with_quantity(&current, product_id, desired)?, false),
            None => {
                tracing::debug!("Fetching product {}", product_id);
                let product = self.catalog.product(product_id).await?;
                if product.id != product_id {
                    return Err(CartError::NotFound {
                        resource: format!("product {} (catalog answered with {})", product_id, product.id),
                    });
                }
                (cart::with_appended(&current, CartItem::new(product, 1))?, true)
            }
        };

        self.commit(next)?;
        tracing::info!("Product {} now at quantity {}", product_id, desired);
        Ok(appended)
    }

    async fn try_update(&mut self, request: UpdateProductAmount) -> Result<()> {
        let UpdateProductAmount { product_id, amount } = request;

        tracing::debug!("Looking up stock for product {}", product_id);
        let stock = self.catalog.stock(product_id).await?;
        cart::ensure_in_stock(product_id, amount, &stock)?;
        let quantity = u32::try_from(amount).map_err(|_| CartError::StockExceeded {
            product_id,
            requested: amount,
            available: i64::from(u32::MAX),
        })?;

        let next = cart::with_quantity(&self.cart(), product_id, quantity)?;
        self.commit(next)?;
        tracing::info!("Product {} set to quantity {}", product_id, quantity);
        Ok(())
    }

    /// Snapshot first, then swap: a failed write leaves memory untouched.
    fn commit(&self, next: Vec<CartItem>) -> Result<()> {
        let snapshot = serde_json::to_string(&next)?;
        self.storage.set_item(&self.settings.storage_key, &snapshot)?;
        tracing::debug!("Persisted cart snapshot with {} items", next.len());
        self.changes.send_replace(Arc::new(next));
        Ok(())
    }

    fn reject(&self, operation: &str, error: CartError, failure_message: &str) -> Outcome {
        match error.kind() {
            ErrorKind::StockExceeded => {
                tracing::warn!("{} rejected: {}", operation, error);
                self.notifier.error(&self.settings.messages.out_of_stock);
            }
            kind => {
                tracing::warn!("{} failed ({:?}): {}", operation, kind, error);
                self.notifier.error(failure_message);
            }
        }
        Outcome::Rejected
    }
}

fn hydrate<S: Storage>(storage: &S, key: &str) -> Vec<CartItem> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No cart snapshot under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Could not read cart snapshot '{}': {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<CartItem>>(&raw) {
        Ok(items) => {
            let items = cart::sanitize(items);
            tracing::info!("Restored {} cart items from '{}'", items.len(), key);
            items
        }
        Err(e) => {
            tracing::warn!("Ignoring unparseable cart snapshot '{}': {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messages::Messages;
    use crate::domain::model::{Product, Severity, Stock};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const KEY: &str = "@RocketShoes:cart";

    struct MockCatalog {
        stock: HashMap<ProductId, i64>,
    }

    #[async_trait]
    impl Catalog for MockCatalog {
        async fn stock(&self, product_id: ProductId) -> Result<Stock> {
            self.stock
                .get(&product_id)
                .map(|amount| Stock {
                    id: Some(product_id),
                    amount: *amount,
                })
                .ok_or(CartError::NotFound {
                    resource: format!("/stock/{}", product_id),
                })
        }

        async fn product(&self, product_id: ProductId) -> Result<Product> {
            Ok(Product::new(product_id).with_detail("title", format!("Product {}", product_id)))
        }
    }

    #[derive(Default)]
    struct MockStorage {
        slots: Mutex<HashMap<String, String>>,
        writes: Mutex<usize>,
    }

    impl Storage for MockStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.slots.lock().unwrap().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            *self.writes.lock().unwrap() += 1;
            self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        seen: Mutex<Vec<(Severity, String)>>,
    }

    impl Notifier for MockNotifier {
        fn notify(&self, severity: Severity, message: &str) {
            self.seen.lock().unwrap().push((severity, message.to_string()));
        }
    }

    fn store(stock: &[(ProductId, i64)]) -> CartStore<MockCatalog, MockStorage, MockNotifier> {
        CartStore::new(
            MockCatalog {
                stock: stock.iter().copied().collect(),
            },
            MockStorage::default(),
            MockNotifier::default(),
            StoreSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_add_then_increment() {
        let mut store = store(&[(7, 3)]);

        assert_eq!(store.add(7).await, Outcome::Committed);
        assert_eq!(store.add(7).await, Outcome::Committed);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(7).unwrap().quantity, 2);
        // Only the first add announces itself.
        let seen = store.notifier.seen.lock().unwrap().clone();
        assert_eq!(seen, vec![(Severity::Success, Messages::default().product_added)]);
    }

    #[tokio::test]
    async fn test_add_over_stock_skips_write() {
        let mut store = store(&[(7, 0)]);

        assert_eq!(store.add(7).await, Outcome::Rejected);
        assert!(store.is_empty());
        assert_eq!(*store.storage.writes.lock().unwrap(), 0);
        let seen = store.notifier.seen.lock().unwrap().clone();
        assert_eq!(seen, vec![(Severity::Error, Messages::default().out_of_stock)]);
    }

    #[tokio::test]
    async fn test_update_ignores_non_positive_amounts() {
        let mut store = store(&[(7, 10)]);
        store.add(7).await;
        let before = store.cart();

        for amount in [0, -1, i64::MIN] {
            let outcome = store
                .update_quantity(UpdateProductAmount { product_id: 7, amount })
                .await;
            assert_eq!(outcome, Outcome::Ignored);
        }

        assert!(Arc::ptr_eq(&before, &store.cart()));
        assert_eq!(store.notifier.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_written_under_configured_key() {
        let mut store = store(&[(7, 10)]);
        store.add(7).await;

        let raw = store.storage.get_item(KEY).unwrap().unwrap();
        let items: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
        assert_eq!(items.as_slice(), store.cart().as_slice());
    }

    #[tokio::test]
    async fn test_remove_missing_product_reports_generic_failure() {
        let mut store = store(&[(7, 10)]);
        store.add(7).await;

        assert_eq!(store.remove(8), Outcome::Rejected);
        assert_eq!(store.len(), 1);
        let last = store.notifier.seen.lock().unwrap().last().cloned();
        assert_eq!(last, Some((Severity::Error, Messages::default().remove_failed)));
    }
}
