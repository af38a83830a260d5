use crate::utils::error::{CartError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> CartError {
    CartError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Catalog endpoints must be absolute http(s) URLs; a trailing slash is fine.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(invalid(field, endpoint, "URL cannot be empty"));
    }

    let url = Url::parse(endpoint).map_err(|e| invalid(field, endpoint, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(field, endpoint, format!("Unsupported URL scheme: {}", scheme))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(field, endpoint, "Endpoint must not carry a query or fragment"));
    }
    Ok(())
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(field, value, format!("Value must be between {} and {}", min, max)));
    }
    Ok(())
}
