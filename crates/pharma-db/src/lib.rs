//! # pharma-db: Database Layer for Pharma POS
//!
//! This crate provides database access for the Pharma POS system.
//! It uses SQLite for local single-writer storage with sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Pharma POS Data Flow                           │
//! │                                                                     │
//! │  GUI screen (inventory, sales, dashboard)                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   pharma-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │  ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │ │
//! │  │  │   Database   │   │  Repositories  │   │   Migrations   │  │ │
//! │  │  │  (pool.rs)   │   │ (product.rs,   │   │   (embedded)   │  │ │
//! │  │  │              │◄──│  customer.rs,  │   │                │  │ │
//! │  │  │  SqlitePool  │   │  sale.rs)      │   │  001_init.sql  │  │ │
//! │  │  └──────────────┘   └────────────────┘   └────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file: pharmacy.db (path chosen by the host application)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and the [`Database`] handle
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Per-entity repositories and the sale transaction
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pharma_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("pharmacy.db")).await?;
//!
//! let id = db.products().insert(&new_product).await?;
//! let all = db.products().list_all().await?;
//!
//! let invoice = db.sales().create_sale(&cart, None, Some("cash")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
