//! # Validation Module
//!
//! Input validation utilities for Pharma POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: GUI screens (out of tree)                                 │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: SQLite                                                    │
//! │  ├── NOT NULL constraints (product/customer name)                   │
//! │  └── UNIQUE constraints (invoice number)                            │
//! │                                                                     │
//! │  Defense in depth: multiple layers catch different errors           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharma_core::validation::{validate_name, validate_cart_quantity};
//!
//! validate_name("Paracetamol 500mg").unwrap();
//! validate_cart_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::{NewCustomer, NewProduct};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product or customer name.
///
/// ## Rules
/// - Must not be empty (the store enforces NOT NULL, but an empty
///   string would satisfy that and still be useless)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use pharma_core::validation::validate_name;
///
/// assert!(validate_name("Amoxicillin 250mg").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_cart_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price value.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free/sample items)
/// - Must be finite
pub fn validate_price(field: &str, price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates the caller-supplied product attributes before insert or
/// update.
///
/// Only `name` is required; every other field accepts absent values.
pub fn validate_product(product: &NewProduct) -> ValidationResult<()> {
    validate_name(&product.name)?;

    if let Some(price) = product.purchase_price {
        validate_price("purchase_price", price)?;
    }
    if let Some(price) = product.sale_price {
        validate_price("sale_price", price)?;
    }

    Ok(())
}

/// Validates the caller-supplied customer attributes.
pub fn validate_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_name(&customer.name)?;

    if let Some(age) = customer.age {
        if !(0..=150).contains(&age) {
            return Err(ValidationError::OutOfRange {
                field: "age".to_string(),
                min: 0,
                max: 150,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Paracetamol 500mg").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_cart_quantity() {
        assert!(validate_cart_quantity(1).is_ok());
        assert!(validate_cart_quantity(999).is_ok());
        assert!(validate_cart_quantity(0).is_err());
        assert!(validate_cart_quantity(-5).is_err());
        assert!(validate_cart_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("sale_price", 0.0).is_ok());
        assert!(validate_price("sale_price", 12.5).is_ok());
        assert!(validate_price("sale_price", -0.01).is_err());
        assert!(validate_price("sale_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_product_requires_name_only() {
        let product = NewProduct {
            name: "Ibuprofen 400mg".to_string(),
            ..Default::default()
        };
        assert!(validate_product(&product).is_ok());

        let nameless = NewProduct::default();
        assert!(validate_product(&nameless).is_err());
    }

    #[test]
    fn test_validate_customer_age_range() {
        let mut customer = NewCustomer {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        assert!(validate_customer(&customer).is_ok());

        customer.age = Some(42);
        assert!(validate_customer(&customer).is_ok());

        customer.age = Some(-1);
        assert!(validate_customer(&customer).is_err());

        customer.age = Some(200);
        assert!(validate_customer(&customer).is_err());
    }
}
