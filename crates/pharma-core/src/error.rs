//! # Error Types
//!
//! Domain-specific error types for pharma-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  pharma-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  pharma-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → GUI layer            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be
/// caught by the GUI layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds the stock level as last read.
    ///
    /// ## When This Occurs
    /// - Adding a line to the cart when the product's `quantity`
    ///   snapshot cannot cover the request
    ///
    /// Note this is an add-to-cart check only. Sale completion does not
    /// re-validate stock, so a concurrent edit between adding and
    /// completing can still drive stock negative.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A sale cannot be composed from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Paracetamol 500mg".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Paracetamol 500mg: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
