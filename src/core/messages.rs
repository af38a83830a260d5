use serde::{Deserialize, Serialize};

/// User-facing notification texts. Every field can be overridden from the
/// `[messages]` table of the TOML config; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub out_of_stock: String,
    pub product_added: String,
    pub add_failed: String,
    pub remove_failed: String,
    pub update_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            out_of_stock: "Requested quantity is out of stock".to_string(),
            product_added: "Product added to cart".to_string(),
            add_failed: "Failed to add product".to_string(),
            remove_failed: "Failed to remove product".to_string(),
            update_failed: "Failed to change product quantity".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let messages: Messages = toml::from_str(
            r#"
out_of_stock = "Quantidade solicitada fora de estoque"
"#,
        )
        .unwrap();

        assert_eq!(messages.out_of_stock, "Quantidade solicitada fora de estoque");
        assert_eq!(messages.add_failed, Messages::default().add_failed);
    }
}
