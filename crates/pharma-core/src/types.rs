//! # Entity Types
//!
//! Core entity types used throughout Pharma POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Entity Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    Customer    │   │      Sale      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (rowid)    │   │  id (rowid)    │   │  id (rowid)    │      │
//! │  │  barcode       │   │  name          │   │  invoice_number│      │
//! │  │  name          │   │  age           │   │  date          │      │
//! │  │  sale_price    │   │  phone         │   │  total_amount  │      │
//! │  │  quantity      │   │  diagnosis     │   │  items (JSON)  │      │
//! │  │  expiry_date   │   │  last_visit    │   │                │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  SaleLineItem: one frozen entry of a Sale's `items` blob            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity's `id` is assigned by the store (SQLite rowid,
//! monotonic) and is immutable once assigned. A Sale additionally
//! carries a human-readable `invoice_number` business identifier.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A pharmacy product as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier (immutable once assigned).
    pub id: i64,

    /// Barcode (EAN-13, UPC-A, etc.), if known.
    pub barcode: Option<String>,

    /// Display name. The only required attribute (NOT NULL in store).
    pub name: String,

    /// Dispensing unit (box, strip, bottle, ...).
    pub unit: Option<String>,

    /// Product category (tablet, syrup, injection, ...).
    /// The column is called `type`, which is reserved in Rust.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Manufacturer name.
    pub manufacturer: Option<String>,

    /// Purchase (cost) price.
    pub purchase_price: Option<f64>,

    /// Sale price charged to the customer.
    pub sale_price: Option<f64>,

    /// Quantity on hand. Decremented by sale completion; may go
    /// negative when oversold (no floor is enforced).
    pub quantity: Option<i64>,

    /// Minimum stock threshold for the low-stock report.
    pub min_stock: Option<i64>,

    /// Expiry date. Products without one are excluded from the
    /// expiring-soon report.
    pub expiry_date: Option<NaiveDate>,

    /// When the row was created (store-assigned).
    pub created_at: Option<NaiveDateTime>,
}

impl Product {
    /// Stock level as last read, treating NULL as zero.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Sale price as last read, treating NULL as zero.
    #[inline]
    pub fn price(&self) -> f64 {
        self.sale_price.unwrap_or(0.0)
    }

    /// Whether stock has fallen to or below the minimum threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock() <= self.min_stock.unwrap_or(crate::DEFAULT_MIN_STOCK)
    }
}

/// The ten caller-supplied product attributes.
///
/// Used for both insert and full-replace update; the store assigns
/// `id` and `created_at` itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub barcode: Option<String>,
    pub name: String,
    pub unit: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub manufacturer: Option<String>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub quantity: Option<i64>,
    pub min_stock: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer (patient) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: i64,

    /// Customer name. Required (NOT NULL in store).
    pub name: String,

    pub age: Option<i64>,

    pub phone: Option<String>,

    /// Diagnosis / free-form notes.
    pub diagnosis: Option<String>,

    /// Date of the customer's last visit.
    pub last_visit: Option<NaiveDate>,

    pub created_at: Option<NaiveDateTime>,
}

/// Caller-supplied customer attributes for insert and full-replace
/// update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub age: Option<i64>,
    pub phone: Option<String>,
    pub diagnosis: Option<String>,
    pub last_visit: Option<NaiveDate>,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale transaction.
///
/// Sales are immutable once created: there is no update operation, and
/// `items` snapshots product names and prices at sale time, decoupled
/// from later product edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Store-assigned identifier.
    pub id: i64,

    /// System-generated unique invoice number (`INV-YYYYMMDDHHMMSS`).
    pub invoice_number: String,

    /// Calendar date of the sale (local clock).
    pub date: NaiveDate,

    /// Patient the sale was made to, if recorded.
    pub patient_name: Option<String>,

    /// Sum of line totals.
    pub total_amount: f64,

    /// Payment method (cash, card, ...), if recorded.
    pub payment_method: Option<String>,

    /// Line items serialized as one JSON text blob.
    pub items: String,

    pub created_at: Option<NaiveDateTime>,
}

impl Sale {
    /// Deserializes the `items` blob back into line items.
    pub fn line_items(&self) -> Result<Vec<SaleLineItem>, serde_json::Error> {
        serde_json::from_str(&self.items)
    }
}

// =============================================================================
// Sale Line Item
// =============================================================================

/// One entry of a Sale's serialized item list.
///
/// Uses the snapshot pattern: product name and unit price are frozen
/// at sale time so the sale history survives later product edits.
///
/// Field names are the wire format of the `items` blob; renaming one
/// breaks reading of previously stored sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    /// Informational reference to the product row (not a foreign key).
    pub product_id: i64,

    /// Product name at sale time (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit sale price at sale time (frozen).
    pub price: f64,

    /// Line total (price × quantity, computed at cart-add time).
    pub total: f64,
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Aggregate figures shown on the dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total number of products on file.
    pub total_products: i64,

    /// Total number of customers on file.
    pub total_customers: i64,

    /// Sum of today's sale totals (0.0 when there are none).
    pub today_sales: f64,

    /// Number of products expiring within the report window.
    pub expiring_soon: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_stock_defaults() {
        let product = Product {
            id: 1,
            barcode: None,
            name: "Aspirin 100mg".to_string(),
            unit: None,
            kind: None,
            manufacturer: None,
            purchase_price: None,
            sale_price: None,
            quantity: None,
            min_stock: None,
            expiry_date: None,
            created_at: None,
        };

        assert_eq!(product.stock(), 0);
        assert_eq!(product.price(), 0.0);
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_line_item_wire_format() {
        let item = SaleLineItem {
            product_id: 7,
            name: "Ibuprofen 400mg".to_string(),
            quantity: 2,
            price: 3.5,
            total: 7.0,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"product_id\":7"));
        assert!(json.contains("\"price\":3.5"));
        assert!(json.contains("\"total\":7.0"));
    }

    #[test]
    fn test_sale_line_items_round_trip() {
        let items = vec![
            SaleLineItem {
                product_id: 1,
                name: "Paracetamol 500mg".to_string(),
                quantity: 3,
                price: 10.0,
                total: 30.0,
            },
            SaleLineItem {
                product_id: 2,
                name: "Vitamin C".to_string(),
                quantity: 2,
                price: 5.0,
                total: 10.0,
            },
        ];

        let sale = Sale {
            id: 1,
            invoice_number: "INV-20260827101500".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
            patient_name: None,
            total_amount: 40.0,
            payment_method: None,
            items: serde_json::to_string(&items).unwrap(),
            created_at: None,
        };

        assert_eq!(sale.line_items().unwrap(), items);
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let product = NewProduct {
            name: "Cough Syrup".to_string(),
            kind: Some("syrup".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"type\":\"syrup\""));
    }
}
