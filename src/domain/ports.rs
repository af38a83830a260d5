use crate::domain::model::{Product, ProductId, Severity, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote catalog/stock service. Stock is never cached by callers.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock>;
    async fn product(&self, product_id: ProductId) -> Result<Product>;
}

/// Named string slots that outlive the process (the browser's localStorage,
/// a directory of files, ...).
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Toast-style sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
}
