//! # Sale Repository
//!
//! Sale composition and sales aggregates. This is the only multi-step,
//! multi-table operation in the system.
//!
//! ## Sale Completion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      create_sale(&cart, ...)                        │
//! │                                                                     │
//! │  1. Refuse an empty cart                                            │
//! │  2. total = Σ frozen line totals (NOT re-fetched from products)     │
//! │  3. invoice = "INV-" + local time %Y%m%d%H%M%S                      │
//! │  4. items = JSON blob of the cart's line items                      │
//! │                                                                     │
//! │  ┌── ONE TRANSACTION ─────────────────────────────────────────────┐ │
//! │  │  5. INSERT INTO sales (invoice, date, total, items, ...)       │ │
//! │  │  6. For each line:                                             │ │
//! │  │       UPDATE products SET quantity = quantity - line.quantity  │ │
//! │  │  7. COMMIT (rollback entirely on any failure)                  │ │
//! │  └────────────────────────────────────────────────────────────────┘ │
//! │                                                                     │
//! │  8. Return the invoice number                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A Sale is immutable once created: no update or delete operation
//!   exists for sales.
//! - Stock is decremented unconditionally; there is no floor at zero.
//!   The only stock check is the one at cart-add time.
//! - Invoice numbers have second precision. Two sales completed within
//!   the same second collide on the UNIQUE constraint and the whole
//!   transaction rolls back with `UniqueViolation`.

use chrono::Local;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use pharma_core::{Cart, Sale};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Completes a sale from the given cart.
    ///
    /// Inserts the sale row and decrements each product's stock inside
    /// one transaction; on any failure nothing is persisted.
    ///
    /// ## Arguments
    /// * `cart` - the lines to sell; totals were frozen at add time
    /// * `patient_name` - optional patient the sale is recorded for
    /// * `payment_method` - optional payment method label
    ///
    /// ## Returns
    /// The generated invoice number.
    ///
    /// ## Errors
    /// * [`DbError::EmptySale`] - the cart has no lines
    /// * [`DbError::UniqueViolation`] - same-second invoice collision
    pub async fn create_sale(
        &self,
        cart: &Cart,
        patient_name: Option<&str>,
        payment_method: Option<&str>,
    ) -> DbResult<String> {
        if cart.is_empty() {
            return Err(DbError::EmptySale);
        }

        let now = Local::now();
        let invoice_number = generate_invoice_number();
        let date = now.date_naive();
        let total_amount = cart.total();
        let items_json = serde_json::to_string(&cart.line_items())?;

        debug!(
            invoice = %invoice_number,
            total = %total_amount,
            lines = cart.item_count(),
            "Creating sale"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO sales
                (invoice_number, date, patient_name, total_amount, payment_method, items)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&invoice_number)
        .bind(date)
        .bind(patient_name)
        .bind(total_amount)
        .bind(payment_method)
        .bind(&items_json)
        .execute(&mut *tx)
        .await?;

        // No floor at zero: stock goes negative when oversold
        for item in &cart.items {
            sqlx::query(
                r#"
                UPDATE products
                SET quantity = COALESCE(quantity, 0) - ?2
                WHERE id = ?1
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(invoice = %invoice_number, total = %total_amount, "Sale completed");

        Ok(invoice_number)
    }

    /// Gets a sale by id; `Ok(None)` when the id does not exist.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, invoice_number, date, patient_name, total_amount,
                   payment_method, items, created_at
            FROM sales
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Gets a sale by its invoice number.
    pub async fn get_by_invoice(&self, invoice_number: &str) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, invoice_number, date, patient_name, total_amount,
                   payment_method, items, created_at
            FROM sales
            WHERE invoice_number = ?1
            "#,
        )
        .bind(invoice_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists all sales, newest first (sales history screen).
    pub async fn list_all(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, invoice_number, date, patient_name, total_amount,
                   payment_method, items, created_at
            FROM sales
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Sums today's sale totals (local calendar date).
    ///
    /// Returns `0.0` when no sale was made today, never NULL.
    pub async fn today_total(&self) -> DbResult<f64> {
        let today = Local::now().date_naive();

        let total: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0.0) FROM sales WHERE date = ?1",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Counts all sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Generates an invoice number: `INV-` + local time to second
/// precision (`%Y%m%d%H%M%S`).
///
/// Precision is a deliberate limitation carried over from the source
/// system: two sales inside the same second collide on the store's
/// UNIQUE constraint and the second one fails.
fn generate_invoice_number() -> String {
    format!("INV-{}", Local::now().format("%Y%m%d%H%M%S"))
}

// =============================================================================
// Unit Tests
// =============================================================================
