use crate::config::{DEFAULT_API_ENDPOINT, DEFAULT_STORAGE_KEY, DEFAULT_STORAGE_PATH};
use crate::domain::model::ProductId;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_endpoint, validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "shop-cart")]
#[command(about = "Storefront cart kept in a local slot and checked against a stock API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: String,

    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    #[arg(long, help = "Give up on catalog requests after this many seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML settings file; replaces the connection flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Drop a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Print the cart
    List,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("api_endpoint", &self.api_endpoint)?;
        validate_path("storage_path", &self.storage_path)?;
        validate_non_empty_string("storage_key", &self.storage_key)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 3600)?;
        }
        Ok(())
    }
}
