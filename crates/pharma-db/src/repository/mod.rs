//! # Repository Module
//!
//! Database repository implementations for Pharma POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Repository Pattern Explained                      │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a          │
//! │  typed API.                                                         │
//! │                                                                     │
//! │  GUI screen                                                         │
//! │       │                                                             │
//! │       │  db.products().list_all()                                   │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── insert(&self, new) -> i64                                      │
//! │  ├── get_by_id(&self, id) -> Option<Product>                        │
//! │  ├── update(&self, id, new)                                         │
//! │  └── delete(&self, id)                                              │
//! │       │                                                             │
//! │       │  SQL query, typed row mapping (FromRow)                     │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Rows come back as typed records, not key-value maps              │
//! │  • Easy to test against an in-memory database                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and stock reports
//! - [`customer::CustomerRepository`] - Customer CRUD
//! - [`sale::SaleRepository`] - Sale composition and sales aggregates

pub mod customer;
pub mod product;
pub mod sale;
