//! # Shopping Cart
//!
//! The in-memory, ephemeral cart a sale is composed from.
//!
//! ## Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Cart Lifecycle                              │
//! │                                                                     │
//! │  Sales screen reads Product ──► cart.add_item(&product, qty)        │
//! │                                      │                              │
//! │                    stock check (against the snapshot read)          │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                          cart.line_items() / cart.total()           │
//! │                                      │                              │
//! │                                      ▼                              │
//! │              SaleRepository::create_sale(&cart, ...) (pharma-db)    │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                               cart.clear()                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines freeze product name and sale price at add time; later
//!   product edits do not affect the cart or the persisted sale.
//! - Lines are kept in insertion order; adding the same product twice
//!   appends a second line (lines are not merged).
//! - The stock check happens only here. Completion does not re-check,
//!   so stock can go negative if it changed in between.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Product, SaleLineItem};
use crate::validation::validate_cart_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// One prospective sale line.
///
/// `name`, `price` and `total` are snapshots taken when the line was
/// added; `total` is *not* recomputed at completion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product row the line refers to.
    pub product_id: i64,

    /// Product name at add time (frozen).
    pub name: String,

    /// Unit sale price at add time (frozen).
    pub price: f64,

    /// Quantity requested.
    pub quantity: i64,

    /// Line total (price × quantity, computed at add time).
    pub total: f64,
}

impl CartItem {
    /// Creates a cart line from a product snapshot and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price
    /// changes in the store afterwards, this line keeps the original.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        let price = product.price();
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            price,
            quantity,
            total: price * quantity as f64,
        }
    }

    /// Converts the line into the persisted wire form.
    pub fn to_line_item(&self) -> SaleLineItem {
        SaleLineItem {
            product_id: self.product_id,
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            total: self.total,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of prospective sale lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product line to the cart.
    ///
    /// ## Behavior
    /// - Rejects a non-positive or oversized quantity.
    /// - Rejects the line when the requested quantity exceeds the
    ///   product's stock as last read (`InsufficientStock`).
    /// - Appends a new line; the same product can appear on several
    ///   lines.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CoreError> {
        validate_cart_quantity(quantity)?;

        if product.stock() < quantity {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock(),
                requested: quantity,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes a line by index, keeping the remaining order.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of the frozen line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart as persistable line items, in order.
    pub fn line_items(&self) -> Vec<SaleLineItem> {
        self.items.iter().map(CartItem::to_line_item).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
