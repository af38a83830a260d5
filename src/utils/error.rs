use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Requested quantity {requested} of product {product_id} exceeds stock of {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification the store maps to user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StockExceeded,
    NotInCart,
    Lookup,
    Persistence,
    Config,
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::StockExceeded { .. } => ErrorKind::StockExceeded,
            CartError::NotInCart { .. } => ErrorKind::NotInCart,
            CartError::NotFound { .. }
            | CartError::ApiError(_)
            | CartError::UnexpectedStatus { .. } => ErrorKind::Lookup,
            CartError::SerializationError(_)
            | CartError::IoError(_)
            | CartError::StorageError { .. } => ErrorKind::Persistence,
            CartError::ConfigError { .. } | CartError::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
