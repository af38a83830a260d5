pub mod cart;
pub mod messages;
pub mod store;

pub use crate::domain::model::{Cart, CartItem, Product, ProductId, Stock, UpdateProductAmount};
pub use crate::domain::ports::{Catalog, ConfigProvider, Notifier, Storage};
pub use crate::utils::error::Result;
