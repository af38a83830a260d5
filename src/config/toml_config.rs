use crate::config::{StoreSettings, DEFAULT_STORAGE_KEY, DEFAULT_STORAGE_PATH};
use crate::core::messages::Messages;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_endpoint, validate_non_empty_string, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub messages: Messages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORAGE_PATH.to_string(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| CartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn settings(&self) -> StoreSettings {
        StoreSettings::from_provider(self).with_messages(self.messages.clone())
    }
}

/// Replaces `${VAR}` with the variable's value; unknown variables are left
/// as written so validation can point at them.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
        message: format!("env substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let name = &caps[1];
        std::env::var(name).unwrap_or_else(|_| format!("${{{}}}", name))
    });

    Ok(result.into_owned())
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn storage_key(&self) -> &str {
        &self.storage.key
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.catalog.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("catalog.endpoint", &self.catalog.endpoint)?;
        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_range("catalog.timeout_seconds", timeout, 1, 3600)?;
        }
        validate_path("storage.path", &self.storage.path)?;
        validate_non_empty_string("storage.key", &self.storage.key)?;
        Ok(())
    }
}
