//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with store-assigned ids
//! - Stock decrements during sale completion (see [`super::sale`])
//! - Expiring-soon report for the dashboard
//!
//! ## Update Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Full-Replace Update                            │
//! │                                                                     │
//! │  update(id, new) overwrites ALL ten caller-supplied attributes,     │
//! │  not just the ones that changed. A field left at None in `new`      │
//! │  becomes NULL in the row. There is no partial patch.                │
//! │                                                                     │
//! │  update/delete of a missing id is a silent no-op, matching the      │
//! │  edit screens: they re-read the list afterwards anyway.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, Local};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pharma_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert(&new_product).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns the store-assigned id.
    ///
    /// ## Constraints
    /// `name` is NOT NULL at the store level; a missing name surfaces
    /// as [`crate::DbError::NotNullViolation`]. Every other field
    /// accepts absent values.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products
                (barcode, name, unit, type, manufacturer, purchase_price,
                 sale_price, quantity, min_stock, expiry_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&product.barcode)
        .bind(&product.name)
        .bind(&product.unit)
        .bind(&product.kind)
        .bind(&product.manufacturer)
        .bind(product.purchase_price)
        .bind(product.sale_price)
        .bind(product.quantity)
        .bind(product.min_stock.unwrap_or(pharma_core::DEFAULT_MIN_STOCK))
        .bind(product.expiry_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists every product, ordered by name ascending.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, barcode, name, unit, type, manufacturer,
                   purchase_price, sale_price, quantity, min_stock,
                   expiry_date, created_at
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - no such id (not an error)
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, barcode, name, unit, type, manufacturer,
                   purchase_price, sale_price, quantity, min_stock,
                   expiry_date, created_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Looks a product up by barcode (scanner input on the sales
    /// screen).
    pub async fn get_by_barcode(&self, barcode: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, barcode, name, unit, type, manufacturer,
                   purchase_price, sale_price, quantity, min_stock,
                   expiry_date, created_at
            FROM products
            WHERE barcode = ?1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites all ten attributes of the product with the given id.
    ///
    /// Full replace, not a partial patch. A missing id is a silent
    /// no-op.
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        debug!(id = %id, name = %product.name, "Updating product");

        sqlx::query(
            r#"
            UPDATE products SET
                barcode = ?2, name = ?3, unit = ?4, type = ?5,
                manufacturer = ?6, purchase_price = ?7, sale_price = ?8,
                quantity = ?9, min_stock = ?10, expiry_date = ?11
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.barcode)
        .bind(&product.name)
        .bind(&product.unit)
        .bind(&product.kind)
        .bind(&product.manufacturer)
        .bind(product.purchase_price)
        .bind(product.sale_price)
        .bind(product.quantity)
        .bind(product.min_stock.unwrap_or(pharma_core::DEFAULT_MIN_STOCK))
        .bind(product.expiry_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Hard-deletes a product by id. A missing id is a silent no-op.
    ///
    /// Past sales keep their own name/price snapshots, so deleting a
    /// product does not damage sale history.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts all products (dashboard figure).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts products whose expiry date falls within
    /// `[today, today + days]` inclusive (local calendar).
    ///
    /// Products with no expiry date are excluded. Dates are stored as
    /// ISO-8601 text, so range comparison is safe.
    pub async fn expiring_soon_count(&self, days: i64) -> DbResult<i64> {
        let today = Local::now().date_naive();
        let limit = today + Duration::days(days);

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products
            WHERE expiry_date IS NOT NULL
              AND expiry_date >= ?1
              AND expiry_date <= ?2
            "#,
        )
        .bind(today)
        .bind(limit)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    fn sample_product(name: &str) -> NewProduct {
        NewProduct {
            barcode: Some("6291041500213".to_string()),
            name: name.to_string(),
            unit: Some("box".to_string()),
            kind: Some("tablet".to_string()),
            manufacturer: Some("Acme Pharma".to_string()),
            purchase_price: Some(5.25),
            sale_price: Some(8.75),
            quantity: Some(40),
            min_stock: Some(12),
            expiry_date: chrono::NaiveDate::from_ymd_opt(2027, 3, 1),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let new = sample_product("Paracetamol 500mg");
        let id = repo.insert(&new).await.unwrap();
        assert!(id > 0);

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.barcode, new.barcode);
        assert_eq!(product.name, new.name);
        assert_eq!(product.unit, new.unit);
        assert_eq!(product.kind, new.kind);
        assert_eq!(product.manufacturer, new.manufacturer);
        assert_eq!(product.purchase_price, new.purchase_price);
        assert_eq!(product.sale_price, new.sale_price);
        assert_eq!(product.quantity, new.quantity);
        assert_eq!(product.min_stock, new.min_stock);
        assert_eq!(product.expiry_date, new.expiry_date);
        assert!(product.created_at.is_some());

        // Identifier is stable across subsequent gets
        let again = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(again.id, id);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let first = repo.insert(&sample_product("A")).await.unwrap();
        let second = repo.insert(&sample_product("B")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_minimal_product_defaults_min_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let minimal = NewProduct {
            name: "Saline Solution".to_string(),
            ..Default::default()
        };
        let id = repo.insert(&minimal).await.unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.min_stock, Some(pharma_core::DEFAULT_MIN_STOCK));
        assert_eq!(product.barcode, None);
        assert_eq!(product.expiry_date, None);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&sample_product("Zinc Tablets")).await.unwrap();
        repo.insert(&sample_product("Aspirin 100mg")).await.unwrap();
        repo.insert(&sample_product("Melatonin")).await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Aspirin 100mg", "Melatonin", "Zinc Tablets"]);
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let id = repo.insert(&sample_product("Ibuprofen 400mg")).await.unwrap();

        // Fields omitted from the update get overwritten, not preserved
        let replacement = NewProduct {
            name: "Ibuprofen 600mg".to_string(),
            sale_price: Some(11.0),
            ..Default::default()
        };
        repo.update(id, &replacement).await.unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.name, "Ibuprofen 600mg");
        assert_eq!(product.sale_price, Some(11.0));
        assert_eq!(product.barcode, None);
        assert_eq!(product.manufacturer, None);
        assert_eq!(product.quantity, None);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.update(9999, &sample_product("Ghost")).await.unwrap();
        assert!(repo.get_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let id = repo.insert(&sample_product("Cough Syrup")).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());

        // Deleting again is a no-op, not an error
        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_without_name_violates_constraint() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Bypass the typed API to hit the store-level NOT NULL
        let err: DbError = sqlx::query("INSERT INTO products (barcode) VALUES ('123')")
            .execute(db.pool())
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, DbError::NotNullViolation { .. }));
    }

    #[tokio::test]
    async fn test_expiring_soon_window_is_inclusive() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let today = Local::now().date_naive();

        let mut at_limit = sample_product("At Limit");
        at_limit.expiry_date = Some(today + Duration::days(90));
        repo.insert(&at_limit).await.unwrap();

        let mut past_limit = sample_product("Past Limit");
        past_limit.expiry_date = Some(today + Duration::days(91));
        repo.insert(&past_limit).await.unwrap();

        let mut no_expiry = sample_product("No Expiry");
        no_expiry.expiry_date = None;
        repo.insert(&no_expiry).await.unwrap();

        let mut already_expired = sample_product("Already Expired");
        already_expired.expiry_date = Some(today - Duration::days(1));
        repo.insert(&already_expired).await.unwrap();

        // today+90 is in, today+91 is out, NULL and past dates excluded
        assert_eq!(repo.expiring_soon_count(90).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_barcode() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let id = repo.insert(&sample_product("Scanned Item")).await.unwrap();

        let found = repo.get_by_barcode("6291041500213").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(repo.get_by_barcode("0000000000000").await.unwrap().is_none());
    }
}
