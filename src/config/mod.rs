#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CartCommand, CliConfig};
pub use toml_config::TomlConfig;

use crate::core::messages::Messages;
use crate::domain::ports::ConfigProvider;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.shop-cart";
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// The part of the configuration the store itself needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub storage_key: String,
    pub messages: Messages,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            messages: Messages::default(),
        }
    }
}

impl StoreSettings {
    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            storage_key: config.storage_key().to_string(),
            messages: Messages::default(),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
