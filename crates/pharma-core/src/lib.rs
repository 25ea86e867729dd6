//! # pharma-core: Pure Business Logic for Pharma POS
//!
//! This crate is the **heart** of Pharma POS. It contains all business
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Pharma POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 GUI Screens (out of tree)                     │ │
//! │  │   Dashboard ──► Inventory ──► Customers ──► Sales             │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │              ★ pharma-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐               │ │
//! │  │   │   types   │  │   cart    │  │ validation │               │ │
//! │  │   │  Product  │  │   Cart    │  │   rules    │               │ │
//! │  │   │  Customer │  │  CartItem │  │   checks   │               │ │
//! │  │   │   Sale    │  └───────────┘  └────────────┘               │ │
//! │  │   └───────────┘                                               │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                 pharma-db (Database Layer)                    │ │
//! │  │            SQLite queries, migrations, repositories           │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Product, Customer, Sale, SaleLineItem)
//! - [`cart`] - In-memory shopping cart with frozen price snapshots
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Snapshot Pricing**: Cart lines freeze name/price at add time
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default minimum-stock threshold for new products.
///
/// Matches the `min_stock INTEGER DEFAULT 10` column default, so a
/// product built in memory agrees with one round-tripped through the
/// store.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// Default look-ahead window (in days) for the expiring-soon report.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 90;

/// Maximum quantity of a single item in the cart.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
