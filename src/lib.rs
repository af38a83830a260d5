pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};

pub use adapters::{
    ConsoleNotifier, HttpCatalog, LocalStorage, MemoryNotifier, MemoryStorage, TracingNotifier,
};
pub use config::{StoreSettings, TomlConfig};
pub use core::messages::Messages;
pub use core::store::{CartStore, Outcome};
pub use domain::model::{Cart, CartItem, Notification, Product, ProductId, Severity, Stock, UpdateProductAmount};
pub use utils::error::{CartError, ErrorKind, Result};
