//! Pure cart arithmetic. Every function takes the current sequence by
//! reference and returns a complete new one, so a failed step never leaves a
//! half-edited cart behind.

use crate::domain::model::{CartItem, ProductId, Stock};
use crate::utils::error::{CartError, Result};
use std::collections::HashSet;

pub fn position(items: &[CartItem], product_id: ProductId) -> Option<usize> {
    items.iter().position(|item| item.id() == product_id)
}

pub fn find(items: &[CartItem], product_id: ProductId) -> Result<usize> {
    position(items, product_id).ok_or(CartError::NotInCart { product_id })
}

/// Quantity `add` would ask for: one more than what is already in the cart.
/// A line already at the largest representable quantity cannot grow.
pub fn next_quantity(items: &[CartItem], product_id: ProductId) -> Result<u32> {
    let current = position(items, product_id)
        .map(|index| items[index].quantity)
        .unwrap_or(0);
    current.checked_add(1).ok_or(CartError::StockExceeded {
        product_id,
        requested: i64::from(current) + 1,
        available: i64::from(u32::MAX),
    })
}

pub fn ensure_in_stock(product_id: ProductId, requested: i64, stock: &Stock) -> Result<()> {
    if requested > stock.amount {
        return Err(CartError::StockExceeded {
            product_id,
            requested,
            available: stock.amount,
        });
    }
    Ok(())
}

pub fn with_appended(items: &[CartItem], item: CartItem) -> Result<Vec<CartItem>> {
    if position(items, item.id()).is_some() {
        // An id already present is updated in place, never duplicated.
        return with_quantity(items, item.id(), item.quantity);
    }
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    Ok(next)
}

pub fn with_quantity(items: &[CartItem], product_id: ProductId, quantity: u32) -> Result<Vec<CartItem>> {
    let index = find(items, product_id)?;
    let mut next = items.to_vec();
    next[index].quantity = quantity;
    Ok(next)
}

pub fn without(items: &[CartItem], product_id: ProductId) -> Result<Vec<CartItem>> {
    let index = find(items, product_id)?;
    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

/// Restores the cart invariants on a snapshot read from storage: positive
/// quantities and one line per product, first occurrence wins.
pub fn sanitize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            if item.quantity == 0 {
                tracing::warn!("Dropping product {} with zero quantity from snapshot", item.id());
                return false;
            }
            if !seen.insert(item.id()) {
                tracing::warn!("Dropping duplicate product {} from snapshot", item.id());
                return false;
            }
            true
        })
        .collect()
}

pub fn total_quantity(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}
